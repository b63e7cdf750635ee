/// Convenience result type used across the burst engine.
pub type BurstResult<T> = Result<T, BurstError>;

/// Top-level error taxonomy used by burst APIs.
#[derive(thiserror::Error, Debug)]
pub enum BurstError {
    /// Invalid user-provided group or bit configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A re-tune tried to change the number of bits of a live group.
    #[error("configuration error: count can not be changed on a live burst ({current} -> {requested})")]
    CountChange {
        /// Bit count the group was built with.
        current: usize,
        /// Bit count carried by the rejected patch.
        requested: usize,
    },

    /// Malformed `stagger(...)` / `rand(...)` string option.
    #[error("expression error: {0}")]
    Expression(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BurstError {
    /// Build a [`BurstError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BurstError::Expression`] value.
    pub fn expression(msg: impl Into<String>) -> Self {
        Self::Expression(msg.into())
    }

    /// Build a [`BurstError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
