pub(crate) mod config;
pub(crate) mod defaults;
pub(crate) mod prop;
pub(crate) mod shape;
pub(crate) mod tween;
