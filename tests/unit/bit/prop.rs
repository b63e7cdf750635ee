use super::*;

#[test]
fn names_match_serde_keys() {
    for prop in BitProp::ALL {
        let json = serde_json::to_value(prop).unwrap();
        assert_eq!(json, serde_json::Value::String(prop.name().to_string()));
        let back: BitProp = serde_json::from_value(json).unwrap();
        assert_eq!(back, prop);
    }
}

#[test]
fn all_is_sorted_and_unique() {
    assert!(BitProp::ALL.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn intersection_membership() {
    for prop in [
        BitProp::Radius,
        BitProp::RadiusX,
        BitProp::RadiusY,
        BitProp::Angle,
        BitProp::Scale,
        BitProp::Opacity,
    ] {
        assert!(prop.is_intersection(), "{prop:?}");
    }
    assert!(!BitProp::Fill.is_intersection());
    assert!(!BitProp::DegreeShift.is_intersection());
    assert!(BitProp::Duration.is_tween_option());
    assert!(!BitProp::Fill.is_tween_option());
}

#[test]
fn unknown_keys_do_not_parse() {
    assert!(serde_json::from_str::<BitProp>(r#""isSwirly""#).is_err());
}
