pub(crate) mod builder;
pub(crate) mod radial;
pub(crate) mod resolver;
