//! Radial burst layout engine.
//!
//! A burst places `count` shape animations ("bits") around a circle or arc and drives them from
//! one shared timeline. The crate covers the layout side of that:
//!
//! - Resolve every bit option from per-bit overrides, group options and defaults
//!   ([`resolve`], [`BitConfigBuilder`])
//! - Evaluate `stagger(...)` / `rand(...)` string options deterministically ([`StringOption`])
//! - Compute radial placement and bit angles ([`RadialGeometry`])
//! - Build and re-tune a live group ([`Burst`])
//!
//! ```
//! use wavyte_burst::{BitProp, Burst, BurstBuilder, GroupPatch};
//!
//! let config = BurstBuilder::new(5).radius(0.0, 100.0).build().unwrap();
//! let mut burst = Burst::headless(config).unwrap();
//! burst.retune(GroupPatch::new().degree(180.0)).unwrap();
//! assert_eq!(burst.bit_configs().len(), 5);
//! assert!(burst.bit_configs()[0].get(BitProp::X).is_some());
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod bit;
pub(crate) mod burst;
pub(crate) mod layout;
pub(crate) mod timeline;
pub(crate) mod value;

pub use crate::foundation::core::{BitIndex, GroupId, Point, Side, Vec2};
pub use crate::foundation::error::{BurstError, BurstResult};

pub use crate::bit::config::ResolvedBitConfig;
pub use crate::bit::defaults::{ChildDefaults, DEFAULT_RADIUS, GroupDefaults};
pub use crate::bit::prop::{BitProp, PropTable};
pub use crate::bit::shape::{BitShape, HeadlessBit};
pub use crate::bit::tween::Tween;
pub use crate::burst::config::{
    DEFAULT_COUNT, DEFAULT_DEGREE, DEFAULT_SIZE, GroupConfig, GroupPatch,
};
pub use crate::burst::controller::{Burst, BurstState};
pub use crate::burst::dsl::BurstBuilder;
pub use crate::burst::group::{GroupFrame, GroupModule};
pub use crate::layout::builder::{BIT_ANCHOR, BitConfigBuilder};
pub use crate::layout::radial::{
    BIT_ANGLE_OFFSET, RadialGeometry, SideRadius, angular_step, delta_from_points, radial_point,
};
pub use crate::layout::resolver::{PropSource, option_seed, resolve};
pub use crate::timeline::shared::{ParallelTimeline, Timeline, TimelineOptions};
pub use crate::value::model::{Delta, OptionValue, Scalar, Value};
pub use crate::value::string_option::{
    Amount, Operand, RandRange, StringOption, eval_string_option,
};
