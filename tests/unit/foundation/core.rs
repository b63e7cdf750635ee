use super::*;

#[test]
fn pick_wraps_around() {
    let items = [10, 20, 30];
    assert_eq!(BitIndex(0).pick(&items), Some(&10));
    assert_eq!(BitIndex(2).pick(&items), Some(&30));
    assert_eq!(BitIndex(3).pick(&items), Some(&10));
    assert_eq!(BitIndex(7).pick(&items), Some(&20));
}

#[test]
fn pick_on_empty_is_none() {
    let items: [u8; 0] = [];
    assert_eq!(BitIndex(3).pick(&items), None);
}

#[test]
fn group_ids_are_unique() {
    let a = GroupId::next();
    let b = GroupId::next();
    assert_ne!(a, b);
}
