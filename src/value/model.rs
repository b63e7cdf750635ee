use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{BitIndex, Side};
use crate::foundation::math::parse_float_prefix;

/// One end of a [`Delta`]: a number or a unit/color/expression string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Plain number.
    Number(f64),
    /// String such as `"50%"`, `"cyan"` or `"stagger(0, 10)"`.
    Text(String),
}

impl Scalar {
    /// Numeric reading of this scalar, parsing the leading number of text values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => parse_float_prefix(s),
        }
    }

    fn from_key(key: &str) -> Self {
        match key.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Number(v),
            _ => Self::Text(key.to_string()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Animated start -> end pair.
///
/// In JSON this is a single-entry object whose key is the start
/// value: `{"5": 50}`, optionally with an `"easing"` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Delta {
    /// Value at the start of the animation.
    pub start: Scalar,
    /// Value at the end of the animation.
    pub end: Scalar,
    /// Optional easing override for this property only.
    pub easing: Option<String>,
}

impl Delta {
    /// Create a delta without an easing override.
    pub fn new(start: impl Into<Scalar>, end: impl Into<Scalar>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            easing: None,
        }
    }

    /// Attach an easing override.
    pub fn with_easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    /// The end of the delta that belongs to `side`.
    pub fn side(&self, side: Side) -> &Scalar {
        match side {
            Side::Start => &self.start,
            Side::End => &self.end,
        }
    }
}

/// A single resolved option value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Boolean flag.
    Bool(bool),
    /// Plain number.
    Number(f64),
    /// String value (units, colors, names, unevaluated expressions).
    Text(String),
    /// Animated start -> end value.
    Delta(Delta),
}

impl Value {
    /// Shorthand for `Value::Delta(Delta::new(start, end))`.
    pub fn delta(start: impl Into<Scalar>, end: impl Into<Scalar>) -> Self {
        Self::Delta(Delta::new(start, end))
    }

    /// Numeric reading of a non-delta value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => parse_float_prefix(s),
            Self::Bool(_) | Self::Delta(_) => None,
        }
    }

    /// Value as seen from one side of the animation; non-delta values read the same on both.
    pub fn side_f64(&self, side: Side) -> Option<f64> {
        match self {
            Self::Delta(d) => d.side(side).as_f64(),
            other => other.as_f64(),
        }
    }

    /// Return the delta payload, if any.
    pub fn as_delta(&self) -> Option<&Delta> {
        match self {
            Self::Delta(d) => Some(d),
            _ => None,
        }
    }

    /// Return the boolean payload, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Return the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Delta> for Value {
    fn from(v: Delta) -> Self {
        Self::Delta(v)
    }
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        match v {
            Scalar::Number(n) => Self::Number(n),
            Scalar::Text(s) => Self::Text(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(v) => serializer.serialize_f64(*v),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Delta(d) => {
                let len = if d.easing.is_some() { 2 } else { 1 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry(&d.start.to_string(), &d.end)?;
                if let Some(easing) = &d.easing {
                    map.serialize_entry("easing", easing)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bool(bool),
            Number(f64),
            Text(String),
            Map(BTreeMap<String, serde_json::Value>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bool(b) => Ok(Self::Bool(b)),
            Repr::Number(v) => Ok(Self::Number(v)),
            Repr::Text(s) => Ok(Self::Text(s)),
            Repr::Map(map) => delta_from_map(map)
                .map(Self::Delta)
                .map_err(serde::de::Error::custom),
        }
    }
}

fn delta_from_map(mut map: BTreeMap<String, serde_json::Value>) -> Result<Delta, String> {
    let easing = match map.remove("easing") {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => return Err(format!("delta easing must be a string, got {other}")),
    };
    if map.len() != 1 {
        return Err(format!(
            "delta must have exactly one start -> end entry, got {}",
            map.len()
        ));
    }
    let Some((key, end)) = map.into_iter().next() else {
        return Err("delta is empty".to_string());
    };
    let end = match end {
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(Scalar::Number)
            .ok_or_else(|| format!("delta end '{n}' is not representable as f64"))?,
        serde_json::Value::String(s) => Scalar::Text(s),
        other => return Err(format!("delta end must be a number or string, got {other}")),
    };
    Ok(Delta {
        start: Scalar::from_key(&key),
        end,
        easing,
    })
}

/// A configuration entry: one value for every bit, or per-bit alternatives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Per-bit alternatives, addressed by `index mod len`. A `None` entry leaves that bit unset.
    PerBit(Vec<Option<Value>>),
    /// Same value for every bit.
    One(Value),
    /// Explicit `null`: the layer has no value and lookup falls through.
    Unset,
}

impl OptionValue {
    /// Build per-bit alternatives from anything convertible into values.
    pub fn per_bit<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::PerBit(values.into_iter().map(|v| Some(v.into())).collect())
    }

    /// Select the value that applies to `index` (modulus addressing for per-bit lists).
    ///
    /// `None` for [`OptionValue::Unset`] and for null list entries.
    pub fn at(&self, index: BitIndex) -> Option<&Value> {
        match self {
            Self::One(v) => Some(v),
            Self::PerBit(values) => index.pick(values).and_then(Option::as_ref),
            Self::Unset => None,
        }
    }

    /// Every value this option can select, skipping null entries.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        let (list, one): (&[Option<Value>], Option<&Value>) = match self {
            Self::PerBit(values) => (values, None),
            Self::One(v) => (&[], Some(v)),
            Self::Unset => (&[], None),
        };
        list.iter().flatten().chain(one)
    }
}

impl From<Value> for OptionValue {
    fn from(v: Value) -> Self {
        Self::One(v)
    }
}

macro_rules! option_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(v: $ty) -> Self {
                    Self::One(Value::from(v))
                }
            }
        )*
    };
}

option_value_from!(f64, bool, &str, String, Delta);

impl<V: Into<Value>> From<Vec<V>> for OptionValue {
    fn from(values: Vec<V>) -> Self {
        Self::per_bit(values)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/model.rs"]
mod tests;
