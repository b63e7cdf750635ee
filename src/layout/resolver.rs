//! Per-bit option lookup across layered sources.

use crate::bit::prop::{BitProp, PropTable};
use crate::foundation::core::BitIndex;
use crate::foundation::math::Fnv1a64;
use crate::value::model::{Scalar, Value};
use crate::value::string_option::eval_string_option;

/// A layer of options a bit's value can come from.
pub trait PropSource {
    /// Value of `prop` for the bit at `index`, with per-bit alternatives already selected.
    fn lookup(&self, prop: BitProp, index: BitIndex) -> Option<&Value>;
}

impl PropSource for PropTable {
    fn lookup(&self, prop: BitProp, index: BitIndex) -> Option<&Value> {
        self.get(&prop).and_then(|v| v.at(index))
    }
}

/// Seed for the `rand(...)` draws of one option of one bit.
pub fn option_seed(seed: u64, index: BitIndex, salt: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(seed);
    h.write_u64(index.0 as u64);
    h.write_str(salt);
    h.finish()
}

/// Resolve `prop` for bit `index` from `sources`, highest priority first.
///
/// Skipped layers are passed as `None`. The first layer with a value wins; string options in the
/// winning value are evaluated for `index`. Returns `None` when no layer has the property.
pub fn resolve(
    prop: BitProp,
    index: BitIndex,
    sources: &[Option<&dyn PropSource>],
    seed: u64,
) -> Option<Value> {
    let raw = sources
        .iter()
        .flatten()
        .find_map(|src| src.lookup(prop, index))?;
    Some(parse_value(raw, index, option_seed(seed, index, prop.name()), prop.name()))
}

/// Evaluate a text value as a string option, leaving every other value untouched.
///
/// Malformed options are logged and kept verbatim.
pub(crate) fn parse_value(raw: &Value, index: BitIndex, seed: u64, what: &str) -> Value {
    match raw {
        Value::Text(text) => match eval_string_option(text, index, seed) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(option = what, index = index.0, %err, "string option kept verbatim");
                raw.clone()
            }
        },
        other => other.clone(),
    }
}

/// Numeric reading of one delta end, evaluating string options for `index`.
pub(crate) fn scalar_f64(scalar: &Scalar, index: BitIndex, seed: u64, what: &str) -> Option<f64> {
    match scalar {
        Scalar::Number(v) => Some(*v),
        Scalar::Text(text) => parse_value(&Value::Text(text.clone()), index, seed, what).as_f64(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/resolver.rs"]
mod tests;
