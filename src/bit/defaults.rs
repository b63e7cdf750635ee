use std::collections::BTreeMap;

use crate::bit::prop::BitProp;
use crate::foundation::core::BitIndex;
use crate::layout::resolver::PropSource;
use crate::value::model::Value;

/// Default radius of a burst: grows from 5 to 50.
pub const DEFAULT_RADIUS: (f64, f64) = (5.0, 50.0);

/// The group's own default option set.
///
/// Shape and swirl defaults plus the burst-specific `radius`. `count` and `degree` defaults live on
/// [`GroupConfig`](crate::GroupConfig) since they are not bit properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupDefaults {
    values: BTreeMap<BitProp, Value>,
}

impl GroupDefaults {
    /// Declare the group defaults.
    pub fn declare() -> Self {
        let mut values = BTreeMap::new();
        for prop in BitProp::ALL {
            if let Some(v) = shape_default(prop) {
                values.insert(prop, v);
            }
        }
        values.insert(
            BitProp::Radius,
            Value::delta(DEFAULT_RADIUS.0, DEFAULT_RADIUS.1),
        );
        Self { values }
    }

    /// Default for `prop`, `None` when the property has no default.
    pub fn get(&self, prop: BitProp) -> Option<&Value> {
        self.values.get(&prop)
    }
}

/// Immutable per-bit defaults, derived once from [`GroupDefaults`].
///
/// Bits never swirl unless asked to, and tween options default to null so the bit primitive's
/// own timing defaults apply.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChildDefaults {
    values: BTreeMap<BitProp, Value>,
}

impl ChildDefaults {
    /// Derive child defaults from the group's default set.
    pub fn from_group(group: &GroupDefaults) -> Self {
        let mut values = group.values.clone();
        values.insert(BitProp::IsSwirl, Value::Bool(false));
        for prop in BitProp::TWEEN {
            values.remove(&prop);
        }
        Self { values }
    }

    /// Default for `prop`, `None` for null defaults.
    pub fn get(&self, prop: BitProp) -> Option<&Value> {
        self.values.get(&prop)
    }

    /// Number of non-null defaults.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Return `true` before defaults have been declared.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PropSource for GroupDefaults {
    fn lookup(&self, prop: BitProp, _index: BitIndex) -> Option<&Value> {
        self.get(prop)
    }
}

impl PropSource for ChildDefaults {
    fn lookup(&self, prop: BitProp, _index: BitIndex) -> Option<&Value> {
        self.get(prop)
    }
}

fn shape_default(prop: BitProp) -> Option<Value> {
    let v = match prop {
        BitProp::Shape => Value::from("circle"),
        BitProp::Stroke => Value::from("transparent"),
        BitProp::StrokeOpacity => Value::Number(1.0),
        BitProp::StrokeLinecap => Value::from(""),
        BitProp::StrokeWidth => Value::Number(2.0),
        BitProp::StrokeDasharray => Value::Number(0.0),
        BitProp::StrokeDashoffset => Value::Number(0.0),
        BitProp::Fill => Value::from("deeppink"),
        BitProp::FillOpacity => Value::Number(1.0),
        BitProp::Points => Value::Number(3.0),
        BitProp::Radius => Value::Number(50.0),
        BitProp::Angle => Value::Number(0.0),
        BitProp::Scale => Value::Number(1.0),
        BitProp::Opacity => Value::Number(1.0),
        BitProp::Origin => Value::from("50% 50%"),
        BitProp::Rx => Value::Number(0.0),
        BitProp::Ry => Value::Number(0.0),
        BitProp::X => Value::Number(0.0),
        BitProp::Y => Value::Number(0.0),
        BitProp::Left => Value::from("50%"),
        BitProp::Top => Value::from("50%"),
        BitProp::IsShowStart => Value::Bool(false),
        BitProp::IsShowEnd => Value::Bool(true),
        BitProp::IsSoftHide => Value::Bool(true),
        BitProp::IsForce3d => Value::Bool(false),
        BitProp::IsRefreshState => Value::Bool(true),
        BitProp::IsSwirl => Value::Bool(true),
        BitProp::SwirlSize => Value::Number(10.0),
        BitProp::SwirlFrequency => Value::Number(3.0),
        BitProp::PathScale => Value::Number(1.0),
        BitProp::DegreeShift => Value::Number(0.0),
        BitProp::Direction => Value::Number(1.0),
        BitProp::Duration => Value::Number(350.0),
        BitProp::Delay => Value::Number(0.0),
        BitProp::Repeat => Value::Number(0.0),
        BitProp::Speed => Value::Number(1.0),
        BitProp::IsYoyo => Value::Bool(false),
        BitProp::Easing => Value::from("sin.out"),
        BitProp::RadiusX
        | BitProp::RadiusY
        | BitProp::ScaleX
        | BitProp::ScaleY
        | BitProp::BackwardEasing => return None,
    };
    Some(v)
}

#[cfg(test)]
#[path = "../../tests/unit/bit/defaults.rs"]
mod tests;
