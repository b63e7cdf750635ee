use crate::bit::prop::{BitProp, PropTable};
use crate::burst::config::GroupConfig;
use crate::foundation::error::{BurstError, BurstResult};
use crate::timeline::shared::TimelineOptions;
use crate::value::model::{OptionValue, Value};

/// Chainable constructor for a [`GroupConfig`].
///
/// ```
/// use wavyte_burst::{BitProp, BurstBuilder};
///
/// let config = BurstBuilder::new(3)
///     .degree(180.0)
///     .radius(0.0, 100.0)
///     .child(BitProp::Fill, vec!["cyan", "yellow"])
///     .build()
///     .unwrap();
/// assert_eq!(config.count, 3);
/// ```
pub struct BurstBuilder {
    config: GroupConfig,
}

impl BurstBuilder {
    /// Start a burst of `count` bits with default options.
    pub fn new(count: usize) -> Self {
        Self {
            config: GroupConfig {
                count,
                ..GroupConfig::default()
            },
        }
    }

    /// Arc span in degrees.
    pub fn degree(mut self, degree: f64) -> Self {
        self.config.degree = degree;
        self
    }

    /// Group element size.
    pub fn size(mut self, size: f64) -> Self {
        self.config.size = Some(size);
        self
    }

    /// Seed for `rand(...)` options.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Group-level option.
    pub fn option(mut self, prop: BitProp, value: impl Into<OptionValue>) -> Self {
        self.config.options.insert(prop, value.into());
        self
    }

    /// Radius growing from `start` to `end`.
    pub fn radius(self, start: f64, end: f64) -> Self {
        self.option(BitProp::Radius, Value::delta(start, end))
    }

    /// Per-bit override; a `Vec` value cycles by bit index.
    pub fn child(mut self, prop: BitProp, value: impl Into<OptionValue>) -> Self {
        self.config.child_options.insert(prop, value.into());
        self
    }

    /// Merge a table of per-bit overrides. Keys already set are rejected.
    pub fn child_options(mut self, table: PropTable) -> BurstResult<Self> {
        if let Some(prop) = table.keys().find(|p| self.config.child_options.contains_key(p)) {
            return Err(BurstError::validation(format!(
                "duplicate child option '{}'",
                prop.name()
            )));
        }
        self.config.child_options.extend(table);
        Ok(self)
    }

    /// Options for the shared timeline.
    pub fn timeline(mut self, options: TimelineOptions) -> Self {
        self.config.timeline = Some(options);
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> BurstResult<GroupConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/burst/dsl.rs"]
mod tests;
