pub(crate) mod shared;
