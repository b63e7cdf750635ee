use crate::bit::config::ResolvedBitConfig;
use crate::bit::defaults::{ChildDefaults, GroupDefaults};
use crate::bit::prop::BitProp;
use crate::burst::config::GroupConfig;
use crate::foundation::core::{BitIndex, GroupId, Point, Side};
use crate::layout::radial::{RadialGeometry, SideRadius, delta_from_points};
use crate::layout::resolver::{PropSource, option_seed, parse_value, resolve, scalar_f64};
use crate::value::model::Value;

/// Anchor every bit is positioned from; placement is carried by `x`/`y`.
pub const BIT_ANCHOR: &str = "50%";

/// Builds the resolved configuration of each bit of one group generation.
///
/// Lookup order per property: `childOptions`, then the group's own options (skipped for
/// [`BitProp::INTERSECTION`] members), then [`ChildDefaults`]. Geometry-derived `x`, `y` and
/// `angle` are layered on top.
pub struct BitConfigBuilder<'a> {
    config: &'a GroupConfig,
    group_defaults: &'a GroupDefaults,
    child_defaults: &'a ChildDefaults,
    geometry: RadialGeometry,
    parent: GroupId,
}

impl<'a> BitConfigBuilder<'a> {
    /// Create a builder for `config`, placing bits around `center`.
    pub fn new(
        config: &'a GroupConfig,
        group_defaults: &'a GroupDefaults,
        child_defaults: &'a ChildDefaults,
        center: Point,
        parent: GroupId,
    ) -> Self {
        Self {
            config,
            group_defaults,
            child_defaults,
            geometry: RadialGeometry::new(config.count, config.degree, center),
            parent,
        }
    }

    /// Placement geometry of this generation.
    pub fn geometry(&self) -> &RadialGeometry {
        &self.geometry
    }

    /// Resolve every recognized property for bit `index`.
    pub fn build(&self, index: BitIndex) -> ResolvedBitConfig {
        let seed = self.config.seed;
        let mut out = ResolvedBitConfig::new(index, self.parent);

        for prop in BitProp::ALL {
            let group: Option<&dyn PropSource> = if prop.is_intersection() {
                None
            } else {
                Some(&self.config.options)
            };
            let sources = [
                Some(&self.config.child_options as &dyn PropSource),
                group,
                Some(self.child_defaults as &dyn PropSource),
            ];
            out.set(prop, resolve(prop, index, &sources, seed));
        }

        let start = self.side_point(Side::Start, index);
        let end = self.side_point(Side::End, index);
        out.set(BitProp::X, Some(delta_from_points(start.x, end.x)));
        out.set(BitProp::Y, Some(delta_from_points(start.y, end.y)));

        let angle = self
            .geometry
            .bit_angle(out.get(BitProp::Angle), index, seed);
        out.set(BitProp::Angle, Some(angle));

        out.set(BitProp::Left, Some(Value::from(BIT_ANCHOR)));
        out.set(BitProp::Top, Some(Value::from(BIT_ANCHOR)));
        out
    }

    /// Build every bit of the group, in index order.
    pub fn build_all(&self) -> Vec<ResolvedBitConfig> {
        (0..self.config.count)
            .map(|i| self.build(BitIndex(i)))
            .collect()
    }

    /// Group radius `key` (`radius`, `radiusX`, `radiusY`) on `side` for bit `index`.
    ///
    /// A delta yields its side's end, a plain value is used on both sides. `None` when the group
    /// has no such radius.
    pub fn radius_by_key(&self, key: BitProp, side: Side, index: BitIndex) -> Option<f64> {
        self.group_side_value(key, side, index)
    }

    fn side_point(&self, side: Side, index: BitIndex) -> Point {
        let radius = SideRadius {
            radius: self.radius_by_key(BitProp::Radius, side, index),
            radius_x: self.radius_by_key(BitProp::RadiusX, side, index),
            radius_y: self.radius_by_key(BitProp::RadiusY, side, index),
        };
        let shift = self
            .group_side_value(BitProp::DegreeShift, side, index)
            .unwrap_or(0.0);
        self.geometry.side_point(index, radius, shift)
    }

    fn group_side_value(&self, key: BitProp, side: Side, index: BitIndex) -> Option<f64> {
        let value = self
            .config
            .options
            .lookup(key, index)
            .or_else(|| self.group_defaults.get(key))?;
        let seed = self.config.seed;
        match value {
            Value::Delta(d) => {
                let salt = match side {
                    Side::Start => "start",
                    Side::End => "end",
                };
                let seed = option_seed(seed, index, &format!("group.{}.{salt}", key.name()));
                scalar_f64(d.side(side), index, seed, key.name())
            }
            other => {
                let seed = option_seed(seed, index, &format!("group.{}", key.name()));
                parse_value(other, index, seed, key.name()).as_f64()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/builder.rs"]
mod tests;
