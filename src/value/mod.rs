pub(crate) mod model;
pub(crate) mod string_option;
