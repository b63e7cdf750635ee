use crate::bit::defaults::GroupDefaults;
use crate::bit::prop::BitProp;
use crate::burst::config::GroupConfig;
use crate::foundation::core::{BitIndex, Point};
use crate::layout::resolver::{PropSource, option_seed, parse_value};
use crate::value::model::Value;

/// Lifecycle hooks of a group module, in the order the group drives them.
///
/// Construction runs `declare_defaults`, `extend_defaults` (which calls `calc_size`),
/// `create_children` and `draw`. Every configuration change runs `extend_defaults`, `draw` and
/// `tune_sub_modules`.
pub trait GroupModule {
    /// Declare the group defaults and derive the child defaults from them.
    fn declare_defaults(&mut self);

    /// Fold user options over the defaults.
    fn extend_defaults(&mut self);

    /// Compute the group element size and center.
    fn calc_size(&mut self);

    /// Build the children from freshly resolved configurations.
    fn create_children(&mut self);

    /// Refresh the group element's own state.
    fn draw(&mut self);

    /// Push freshly resolved configurations into existing children.
    fn tune_sub_modules(&mut self);
}

/// State of the group element itself.
///
/// Intersection properties set at group level land here rather than on the bits.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct GroupFrame {
    /// Element size.
    pub size: f64,
    /// Circle center, `size / 2` on both axes.
    pub center: Point,
    /// Group rotation.
    pub angle: Option<Value>,
    /// Group scale.
    pub scale: Option<Value>,
    /// Group opacity.
    pub opacity: Option<Value>,
}

impl GroupFrame {
    pub(crate) fn sized(size: f64) -> Self {
        Self {
            size,
            center: Point::new(size / 2.0, size / 2.0),
            ..Self::default()
        }
    }

    pub(crate) fn with_props(mut self, config: &GroupConfig, defaults: &GroupDefaults) -> Self {
        let prop = |p: BitProp| {
            let raw = config
                .options
                .lookup(p, BitIndex(0))
                .or_else(|| defaults.get(p))?;
            let seed = option_seed(config.seed, BitIndex(0), &format!("group.{}", p.name()));
            Some(parse_value(raw, BitIndex(0), seed, p.name()))
        };
        self.angle = prop(BitProp::Angle);
        self.scale = prop(BitProp::Scale);
        self.opacity = prop(BitProp::Opacity);
        self
    }
}
