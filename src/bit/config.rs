use std::collections::BTreeMap;

use crate::bit::prop::BitProp;
use crate::foundation::core::{BitIndex, GroupId};
use crate::value::model::Value;

/// Fully resolved options for one bit, for one generation of the group.
///
/// Properties that resolved to null are absent; the bit primitive applies its own default for
/// them.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBitConfig {
    /// Position of the bit in the burst.
    pub index: BitIndex,
    /// Group element that owns the bit.
    pub parent: GroupId,
    /// Bits are sequenced by the group's timeline, never on their own.
    pub is_timeline_less: bool,
    #[serde(flatten)]
    props: BTreeMap<BitProp, Value>,
}

impl ResolvedBitConfig {
    pub(crate) fn new(index: BitIndex, parent: GroupId) -> Self {
        Self {
            index,
            parent,
            is_timeline_less: true,
            props: BTreeMap::new(),
        }
    }

    pub(crate) fn set(&mut self, prop: BitProp, value: Option<Value>) {
        match value {
            Some(v) => {
                self.props.insert(prop, v);
            }
            None => {
                self.props.remove(&prop);
            }
        }
    }

    /// Resolved value of `prop`, `None` when it resolved to null.
    pub fn get(&self, prop: BitProp) -> Option<&Value> {
        self.props.get(&prop)
    }

    /// Numeric reading of a non-delta `prop`.
    pub fn f64(&self, prop: BitProp) -> Option<f64> {
        self.get(prop).and_then(Value::as_f64)
    }

    /// Iterate resolved (non-null) properties in [`BitProp`] order.
    pub fn iter(&self) -> impl Iterator<Item = (BitProp, &Value)> {
        self.props.iter().map(|(k, v)| (*k, v))
    }
}
