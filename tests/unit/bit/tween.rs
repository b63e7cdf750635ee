use super::*;
use crate::foundation::core::{BitIndex, GroupId};
use crate::value::model::Value;

fn config(entries: &[(BitProp, Value)]) -> ResolvedBitConfig {
    let mut cfg = ResolvedBitConfig::new(BitIndex(0), GroupId(1));
    for (prop, value) in entries {
        cfg.set(*prop, Some(value.clone()));
    }
    cfg
}

#[test]
fn null_timing_uses_defaults() {
    let tween = Tween::from_config(&config(&[]));
    assert_eq!(tween, Tween::default());
    assert_eq!(tween.span(), 350.0);
}

#[test]
fn timing_reads_resolved_options() {
    let tween = Tween::from_config(&config(&[
        (BitProp::Duration, Value::Number(400.0)),
        (BitProp::Delay, Value::from("100")),
        (BitProp::Repeat, Value::Number(1.0)),
        (BitProp::Speed, Value::Number(2.0)),
        (BitProp::IsYoyo, Value::Bool(true)),
        (BitProp::Easing, Value::from("cubic.out")),
    ]));
    assert_eq!(tween.duration, 400.0);
    assert_eq!(tween.delay, 100.0);
    assert_eq!(tween.repeat, 1);
    assert!(tween.is_yoyo);
    assert_eq!(tween.easing.as_deref(), Some("cubic.out"));
    // (400 + 100) * 2 / 2
    assert_eq!(tween.span(), 500.0);
}

#[test]
fn reset_drops_stale_values() {
    let mut tween = Tween::from_config(&config(&[
        (BitProp::Duration, Value::Number(900.0)),
        (BitProp::Easing, Value::from("linear.none")),
    ]));
    tween.reset(&config(&[(BitProp::Delay, Value::Number(50.0))]));
    assert_eq!(tween.duration, 350.0);
    assert_eq!(tween.delay, 50.0);
    assert_eq!(tween.easing, None);
}

#[test]
fn invalid_speed_falls_back() {
    let tween = Tween::from_config(&config(&[(BitProp::Speed, Value::Number(0.0))]));
    assert_eq!(tween.speed, 1.0);
}
