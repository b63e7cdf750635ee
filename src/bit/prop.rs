use std::collections::BTreeMap;

use crate::value::model::OptionValue;

/// Option table keyed by bit property (group options, `childOptions`).
pub type PropTable = BTreeMap<BitProp, OptionValue>;

/// Every option a bit understands.
///
/// Serialized names are the camelCase option keys used in JSON configs.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum BitProp {
    /// Shape name (`circle`, `rect`, `polygon`, `line`, ...).
    Shape,
    /// Stroke color.
    Stroke,
    /// Stroke opacity in `[0, 1]`.
    StrokeOpacity,
    /// Stroke line cap.
    StrokeLinecap,
    /// Stroke width.
    StrokeWidth,
    /// Stroke dash array.
    StrokeDasharray,
    /// Stroke dash offset.
    StrokeDashoffset,
    /// Fill color.
    Fill,
    /// Fill opacity in `[0, 1]`.
    FillOpacity,
    /// Number of points for polygon-like shapes.
    Points,
    /// Shape radius.
    Radius,
    /// Horizontal radius override.
    RadiusX,
    /// Vertical radius override.
    RadiusY,
    /// Rotation in degrees.
    Angle,
    /// Uniform scale.
    Scale,
    /// Horizontal scale override.
    ScaleX,
    /// Vertical scale override.
    ScaleY,
    /// Element opacity in `[0, 1]`.
    Opacity,
    /// Transform origin.
    Origin,
    /// Corner radius x.
    Rx,
    /// Corner radius y.
    Ry,
    /// Horizontal offset.
    X,
    /// Vertical offset.
    Y,
    /// Anchor left.
    Left,
    /// Anchor top.
    Top,
    /// Show the shape before the animation starts.
    IsShowStart,
    /// Keep the shape visible after the animation ends.
    IsShowEnd,
    /// Hide with scale/opacity instead of display.
    IsSoftHide,
    /// Force 3d transforms.
    IsForce3d,
    /// Refresh state on replay.
    IsRefreshState,
    /// Follow a sinusoidal path.
    IsSwirl,
    /// Swirl amplitude.
    SwirlSize,
    /// Swirl frequency.
    SwirlFrequency,
    /// Scale of the swirl path.
    PathScale,
    /// Angular shift of the swirl path.
    DegreeShift,
    /// Swirl direction (`1` or `-1`).
    Direction,
    /// Tween duration in ms.
    Duration,
    /// Tween delay in ms.
    Delay,
    /// Tween repeat count.
    Repeat,
    /// Tween playback speed.
    Speed,
    /// Play every odd repeat backwards.
    IsYoyo,
    /// Tween easing name.
    Easing,
    /// Easing used when playing backwards.
    BackwardEasing,
}

impl BitProp {
    /// All recognized properties, in declaration order.
    pub const ALL: [Self; 43] = [
        Self::Shape,
        Self::Stroke,
        Self::StrokeOpacity,
        Self::StrokeLinecap,
        Self::StrokeWidth,
        Self::StrokeDasharray,
        Self::StrokeDashoffset,
        Self::Fill,
        Self::FillOpacity,
        Self::Points,
        Self::Radius,
        Self::RadiusX,
        Self::RadiusY,
        Self::Angle,
        Self::Scale,
        Self::ScaleX,
        Self::ScaleY,
        Self::Opacity,
        Self::Origin,
        Self::Rx,
        Self::Ry,
        Self::X,
        Self::Y,
        Self::Left,
        Self::Top,
        Self::IsShowStart,
        Self::IsShowEnd,
        Self::IsSoftHide,
        Self::IsForce3d,
        Self::IsRefreshState,
        Self::IsSwirl,
        Self::SwirlSize,
        Self::SwirlFrequency,
        Self::PathScale,
        Self::DegreeShift,
        Self::Direction,
        Self::Duration,
        Self::Delay,
        Self::Repeat,
        Self::Speed,
        Self::IsYoyo,
        Self::Easing,
        Self::BackwardEasing,
    ];

    /// Properties that exist on both the group and its bits.
    ///
    /// A group-level value for one of these never falls through to the bits.
    pub const INTERSECTION: [Self; 6] = [
        Self::Radius,
        Self::RadiusX,
        Self::RadiusY,
        Self::Angle,
        Self::Scale,
        Self::Opacity,
    ];

    /// Tween timing options; bits default these to null.
    pub const TWEEN: [Self; 7] = [
        Self::Duration,
        Self::Delay,
        Self::Repeat,
        Self::Speed,
        Self::IsYoyo,
        Self::Easing,
        Self::BackwardEasing,
    ];

    /// Return `true` for members of [`BitProp::INTERSECTION`].
    pub fn is_intersection(self) -> bool {
        Self::INTERSECTION.contains(&self)
    }

    /// Return `true` for members of [`BitProp::TWEEN`].
    pub fn is_tween_option(self) -> bool {
        Self::TWEEN.contains(&self)
    }

    /// Option key as written in configs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::Stroke => "stroke",
            Self::StrokeOpacity => "strokeOpacity",
            Self::StrokeLinecap => "strokeLinecap",
            Self::StrokeWidth => "strokeWidth",
            Self::StrokeDasharray => "strokeDasharray",
            Self::StrokeDashoffset => "strokeDashoffset",
            Self::Fill => "fill",
            Self::FillOpacity => "fillOpacity",
            Self::Points => "points",
            Self::Radius => "radius",
            Self::RadiusX => "radiusX",
            Self::RadiusY => "radiusY",
            Self::Angle => "angle",
            Self::Scale => "scale",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::Opacity => "opacity",
            Self::Origin => "origin",
            Self::Rx => "rx",
            Self::Ry => "ry",
            Self::X => "x",
            Self::Y => "y",
            Self::Left => "left",
            Self::Top => "top",
            Self::IsShowStart => "isShowStart",
            Self::IsShowEnd => "isShowEnd",
            Self::IsSoftHide => "isSoftHide",
            Self::IsForce3d => "isForce3d",
            Self::IsRefreshState => "isRefreshState",
            Self::IsSwirl => "isSwirl",
            Self::SwirlSize => "swirlSize",
            Self::SwirlFrequency => "swirlFrequency",
            Self::PathScale => "pathScale",
            Self::DegreeShift => "degreeShift",
            Self::Direction => "direction",
            Self::Duration => "duration",
            Self::Delay => "delay",
            Self::Repeat => "repeat",
            Self::Speed => "speed",
            Self::IsYoyo => "isYoyo",
            Self::Easing => "easing",
            Self::BackwardEasing => "backwardEasing",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bit/prop.rs"]
mod tests;
