//! Circular placement of bits.

use crate::foundation::core::{BitIndex, Point, Side};
use crate::layout::resolver::{option_seed, scalar_f64};
use crate::value::model::{Delta, Value};

/// Angle between the group's "right" and a bit's "up"; puts bit 0 at the top of the circle.
pub const BIT_ANGLE_OFFSET: f64 = 90.0;

/// Angular distance between neighbouring bits.
///
/// A closed ring (`degree` a multiple of 360) has `count` gaps; an open arc has `count - 1`,
/// with a single gap spanning the whole arc for a one-bit group.
pub fn angular_step(count: usize, degree: f64) -> f64 {
    let gaps = if degree % 360.0 == 0.0 {
        count
    } else {
        count.saturating_sub(1)
    };
    degree / gaps.max(1) as f64
}

/// Radii of one side of the animation. `radius_x`/`radius_y` fall back to `radius`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SideRadius {
    /// Uniform radius.
    pub radius: Option<f64>,
    /// Horizontal radius override.
    pub radius_x: Option<f64>,
    /// Vertical radius override.
    pub radius_y: Option<f64>,
}

/// Point on the ellipse around `center` at `angle_deg`, with 0° pointing up.
///
/// A missing radius places the point on the center along that axis.
pub fn radial_point(center: Point, radius: SideRadius, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    let rx = radius.radius_x.or(radius.radius).unwrap_or(0.0);
    let ry = radius.radius_y.or(radius.radius).unwrap_or(0.0);
    Point::new(center.x + rad.cos() * rx, center.y + rad.sin() * ry)
}

/// Scalar when both sides agree, start -> end delta otherwise.
pub fn delta_from_points(start: f64, end: f64) -> Value {
    if start == end {
        Value::Number(start)
    } else {
        Value::delta(start, end)
    }
}

/// Placement of `count` bits over a `degree` arc around `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGeometry {
    count: usize,
    degree: f64,
    center: Point,
    step: f64,
}

impl RadialGeometry {
    /// Geometry for `count` bits spread over `degree`.
    pub fn new(count: usize, degree: f64, center: Point) -> Self {
        Self {
            count,
            degree,
            center,
            step: angular_step(count, degree),
        }
    }

    /// Angular distance between neighbouring bits.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of bits laid out.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total arc span in degrees.
    pub fn degree(&self) -> f64 {
        self.degree
    }

    /// Angle of bit `index` on the circle, before any side shift.
    pub fn placement_angle(&self, index: BitIndex) -> f64 {
        index.as_f64() * self.step
    }

    /// Position of bit `index` on one side of the animation.
    ///
    /// `shift` is the group's degree shift for that side.
    pub fn side_point(&self, index: BitIndex, radius: SideRadius, shift: f64) -> Point {
        radial_point(self.center, radius, self.placement_angle(index) + shift)
    }

    /// Orient a bit's own angle so it follows the circle.
    ///
    /// The placement angle plus [`BIT_ANGLE_OFFSET`] is added to `base`. Both ends of a delta
    /// base are evaluated for `index` first so an animated angle stays animated.
    pub fn bit_angle(&self, base: Option<&Value>, index: BitIndex, seed: u64) -> Value {
        let angle = self.placement_angle(index) + BIT_ANGLE_OFFSET;
        match base {
            None => Value::Number(angle),
            Some(Value::Delta(d)) => {
                let end_of = |side: Side, salt: &str| {
                    scalar_f64(d.side(side), index, option_seed(seed, index, salt), salt)
                        .unwrap_or_else(|| {
                            tracing::warn!(index = index.0, side = ?side, "non-numeric angle delta end treated as 0");
                            0.0
                        })
                };
                let start = end_of(Side::Start, "angle.start");
                let end = end_of(Side::End, "angle.end");
                Value::Delta(Delta {
                    start: (start + angle).into(),
                    end: (end + angle).into(),
                    easing: d.easing.clone(),
                })
            }
            Some(other) => match other.as_f64() {
                Some(v) => Value::Number(v + angle),
                None => {
                    tracing::warn!(index = index.0, value = ?other, "non-numeric base angle ignored");
                    Value::Number(angle)
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/radial.rs"]
mod tests;
