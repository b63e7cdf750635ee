use super::*;
use crate::bit::prop::BitProp;
use crate::value::model::{OptionValue, Value};

#[test]
fn json_defaults_match_declared_defaults() {
    let cfg = GroupConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, GroupConfig::default());
    assert_eq!(cfg.count, 5);
    assert_eq!(cfg.degree, 360.0);
    assert_eq!(cfg.size(), 2.0);
}

#[test]
fn json_splits_group_keys_from_options() {
    let cfg = GroupConfig::from_json_str(
        r#"{
            "count": 4,
            "degree": 180,
            "radius": {"5": 50},
            "fill": "white",
            "childOptions": {
                "fill": ["cyan", "yellow"],
                "duration": "stagger(200, 100)"
            },
            "timeline": {"delay": 100}
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.count, 4);
    assert_eq!(cfg.degree, 180.0);
    assert_eq!(
        cfg.options.get(&BitProp::Radius),
        Some(&OptionValue::from(Value::delta(5.0, 50.0)))
    );
    assert_eq!(cfg.options.get(&BitProp::Fill), Some(&OptionValue::from("white")));
    assert_eq!(
        cfg.child_options.get(&BitProp::Fill),
        Some(&OptionValue::per_bit(["cyan", "yellow"]))
    );
    assert_eq!(cfg.timeline.as_ref().and_then(|t| t.delay), Some(100.0));
    assert!(cfg.validate().is_ok());
}

#[test]
fn unknown_option_keys_are_rejected() {
    let err = GroupConfig::from_json_str(r#"{"fil": "white"}"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn validation_rejects_out_of_range_values() {
    let zero = GroupConfig {
        count: 0,
        ..GroupConfig::default()
    };
    assert!(zero.validate().is_err());

    for degree in [0.0, -10.0, 361.0, f64::NAN] {
        let cfg = GroupConfig {
            degree,
            ..GroupConfig::default()
        };
        assert!(cfg.validate().is_err(), "degree {degree}");
    }

    let cfg = GroupConfig {
        size: Some(-1.0),
        ..GroupConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn merge_is_shallow_and_later_keys_win() {
    let mut base = GroupConfig::default();
    base.options.insert(BitProp::Fill, OptionValue::from("white"));
    base.options.insert(BitProp::Stroke, OptionValue::from("black"));
    base.child_options.insert(BitProp::Fill, OptionValue::from("cyan"));

    let patch = GroupPatch::new()
        .degree(90.0)
        .option(BitProp::Fill, "red")
        .child_options(
            [(BitProp::StrokeWidth, OptionValue::from(3.0))]
                .into_iter()
                .collect(),
        );
    let next = base.merged(&patch).unwrap();

    assert_eq!(next.degree, 90.0);
    assert_eq!(next.options.get(&BitProp::Fill), Some(&OptionValue::from("red")));
    assert_eq!(next.options.get(&BitProp::Stroke), Some(&OptionValue::from("black")));
    assert_eq!(next.child_options.get(&BitProp::Fill), None);
    assert_eq!(next.child_options.len(), 1);
    // source untouched
    assert_eq!(base.degree, 360.0);
}

#[test]
fn merge_rejects_count_changes() {
    let base = GroupConfig::default();
    let err = base.merged(&GroupPatch::new().count(6)).unwrap_err();
    assert!(matches!(
        err,
        BurstError::CountChange {
            current: 5,
            requested: 6
        }
    ));
    assert!(base.merged(&GroupPatch::new().count(5)).is_ok());
}

#[test]
fn merge_validates_result() {
    let base = GroupConfig::default();
    assert!(base.merged(&GroupPatch::new().degree(0.0)).is_err());
}

#[test]
fn patch_parses_from_json() {
    let patch = GroupPatch::from_json_str(r#"{"degree": 180, "opacity": 0.5}"#).unwrap();
    assert_eq!(patch.degree, Some(180.0));
    assert_eq!(patch.options.get(&BitProp::Opacity), Some(&OptionValue::from(0.5)));
    assert_eq!(patch.count, None);
}

#[test]
fn validation_rejects_non_finite_options() {
    let mut cfg = GroupConfig::default();
    cfg.options.insert(BitProp::Radius, OptionValue::from(f64::NAN));
    assert!(matches!(cfg.validate(), Err(BurstError::Validation(_))));

    let mut cfg = GroupConfig::default();
    cfg.child_options.insert(
        BitProp::Angle,
        OptionValue::per_bit([Value::from(0.0), Value::delta(0.0, f64::INFINITY)]),
    );
    assert!(cfg.validate().is_err());

    let mut cfg = GroupConfig::default();
    cfg.child_options
        .insert(BitProp::Fill, OptionValue::per_bit(["cyan", "NaN"]));
    assert!(cfg.validate().is_ok());
}

#[test]
fn merge_accumulates_timeline_options() {
    let mut base = GroupConfig::default();
    base.timeline = Some(TimelineOptions {
        delay: Some(100.0),
        ..TimelineOptions::default()
    });
    let next = base
        .merged(&GroupPatch::new().timeline(TimelineOptions {
            speed: Some(2.0),
            ..TimelineOptions::default()
        }))
        .unwrap();
    assert_eq!(
        next.timeline,
        Some(TimelineOptions {
            delay: Some(100.0),
            speed: Some(2.0),
            ..TimelineOptions::default()
        })
    );
}
