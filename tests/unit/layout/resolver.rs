use super::*;
use crate::bit::defaults::{ChildDefaults, GroupDefaults};
use crate::value::model::OptionValue;

fn table(entries: &[(BitProp, OptionValue)]) -> PropTable {
    entries.iter().cloned().collect()
}

#[test]
fn per_bit_lists_use_modulus_addressing() {
    let child = table(&[(
        BitProp::Fill,
        OptionValue::per_bit(["cyan", "yellow", "magenta"]),
    )]);
    for i in 0..10 {
        let got = resolve(BitProp::Fill, BitIndex(i), &[Some(&child)], 0);
        let expected = ["cyan", "yellow", "magenta"][i % 3];
        assert_eq!(got, Some(Value::from(expected)), "bit {i}");
    }
}

#[test]
fn first_layer_with_a_value_wins() {
    let child = table(&[(BitProp::StrokeWidth, OptionValue::from(4.0))]);
    let group = table(&[
        (BitProp::StrokeWidth, OptionValue::from(8.0)),
        (BitProp::Fill, OptionValue::from("white")),
    ]);
    let defaults = ChildDefaults::from_group(&GroupDefaults::declare());
    let sources: [Option<&dyn PropSource>; 3] = [Some(&child), Some(&group), Some(&defaults)];

    assert_eq!(
        resolve(BitProp::StrokeWidth, BitIndex(0), &sources, 0),
        Some(Value::Number(4.0))
    );
    assert_eq!(
        resolve(BitProp::Fill, BitIndex(0), &sources, 0),
        Some(Value::from("white"))
    );
    assert_eq!(
        resolve(BitProp::Shape, BitIndex(0), &sources, 0),
        Some(Value::from("circle"))
    );
}

#[test]
fn skipped_layers_are_not_consulted() {
    let group = table(&[(BitProp::Opacity, OptionValue::from(0.25))]);
    let defaults = ChildDefaults::from_group(&GroupDefaults::declare());
    let skipped: Option<&dyn PropSource> = None;
    let sources: [Option<&dyn PropSource>; 3] = [None, skipped, Some(&defaults)];
    assert!(group.contains_key(&BitProp::Opacity));
    assert_eq!(
        resolve(BitProp::Opacity, BitIndex(0), &sources, 0),
        Some(Value::Number(1.0))
    );
}

#[test]
fn unresolved_props_are_null() {
    let defaults = ChildDefaults::from_group(&GroupDefaults::declare());
    let sources: [Option<&dyn PropSource>; 1] = [Some(&defaults)];
    assert_eq!(resolve(BitProp::Duration, BitIndex(2), &sources, 0), None);
}

#[test]
fn string_options_are_evaluated_per_index() {
    let child = table(&[(BitProp::Delay, OptionValue::from("stagger(100)"))]);
    let sources: [Option<&dyn PropSource>; 1] = [Some(&child)];
    assert_eq!(
        resolve(BitProp::Delay, BitIndex(3), &sources, 0),
        Some(Value::Number(300.0))
    );
}

#[test]
fn per_bit_entries_are_evaluated_after_selection() {
    let child = table(&[(
        BitProp::Duration,
        OptionValue::per_bit(["stagger(10)", "500"]),
    )]);
    let sources: [Option<&dyn PropSource>; 1] = [Some(&child)];
    assert_eq!(
        resolve(BitProp::Duration, BitIndex(2), &sources, 0),
        Some(Value::Number(20.0))
    );
    assert_eq!(
        resolve(BitProp::Duration, BitIndex(3), &sources, 0),
        Some(Value::from("500"))
    );
}

#[test]
fn malformed_string_options_pass_through() {
    let child = table(&[(BitProp::Fill, OptionValue::from("stagger(oops)"))]);
    let sources: [Option<&dyn PropSource>; 1] = [Some(&child)];
    assert_eq!(
        resolve(BitProp::Fill, BitIndex(0), &sources, 0),
        Some(Value::from("stagger(oops)"))
    );
}

#[test]
fn deltas_are_returned_unchanged() {
    let child = table(&[(BitProp::Scale, OptionValue::from(Value::delta(1.0, 0.0)))]);
    let sources: [Option<&dyn PropSource>; 1] = [Some(&child)];
    assert_eq!(
        resolve(BitProp::Scale, BitIndex(1), &sources, 0),
        Some(Value::delta(1.0, 0.0))
    );
}

#[test]
fn option_seeds_differ_by_index_and_salt() {
    assert_ne!(option_seed(1, BitIndex(0), "fill"), option_seed(1, BitIndex(1), "fill"));
    assert_ne!(option_seed(1, BitIndex(0), "fill"), option_seed(1, BitIndex(0), "stroke"));
    assert_eq!(option_seed(1, BitIndex(0), "fill"), option_seed(1, BitIndex(0), "fill"));
}
