use super::*;

#[test]
fn group_radius_default_is_growing_delta() {
    let group = GroupDefaults::declare();
    assert_eq!(group.get(BitProp::Radius), Some(&Value::delta(5.0, 50.0)));
    assert_eq!(group.get(BitProp::IsSwirl), Some(&Value::Bool(true)));
    assert_eq!(group.get(BitProp::RadiusX), None);
}

#[test]
fn child_defaults_overlay_bit_only_flags() {
    let group = GroupDefaults::declare();
    let child = ChildDefaults::from_group(&group);

    assert_eq!(child.get(BitProp::IsSwirl), Some(&Value::Bool(false)));
    assert_eq!(child.get(BitProp::Radius), Some(&Value::delta(5.0, 50.0)));
    assert_eq!(child.get(BitProp::Fill), Some(&Value::from("deeppink")));
    for prop in BitProp::TWEEN {
        assert_eq!(child.get(prop), None, "{prop:?} should default to null");
    }
}

#[test]
fn child_defaults_do_not_touch_group_defaults() {
    let group = GroupDefaults::declare();
    let before = group.clone();
    let _child = ChildDefaults::from_group(&group);
    assert_eq!(group, before);
}

#[test]
fn undeclared_defaults_are_empty() {
    assert!(ChildDefaults::default().is_empty());
    assert!(!ChildDefaults::from_group(&GroupDefaults::declare()).is_empty());
}
