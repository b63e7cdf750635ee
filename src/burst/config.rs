use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::bit::prop::{BitProp, PropTable};
use crate::foundation::error::{BurstError, BurstResult};
use crate::timeline::shared::TimelineOptions;
use crate::value::model::{OptionValue, Scalar, Value};

/// Default number of bits.
pub const DEFAULT_COUNT: usize = 5;
/// Default arc span in degrees.
pub const DEFAULT_DEGREE: f64 = 360.0;
/// Default group element size; the circle is centered at `size / 2`.
pub const DEFAULT_SIZE: f64 = 2.0;

/// User configuration of a burst.
///
/// JSON form: flat option keys (`radius`, `fill`, ...) next to `count`, `degree`, `size`,
/// `seed`, a nested `childOptions` table of per-bit overrides, and an optional `timeline` table.
/// Arrays anywhere in `childOptions` or the flat options are per-bit alternatives.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfig {
    /// Number of bits, `> 0`. Fixed once the burst is built.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Arc span in degrees, `(0, 360]`.
    #[serde(default = "default_degree")]
    pub degree: f64,
    /// Group element size, [`DEFAULT_SIZE`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Seed for `rand(...)` string options.
    #[serde(default)]
    pub seed: u64,
    /// Per-bit overrides.
    #[serde(default)]
    pub child_options: PropTable,
    /// Options for the shared timeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelineOptions>,
    /// Group-level options. Values for non-intersection properties also act as bit fallbacks.
    #[serde(flatten)]
    pub options: PropTable,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_degree() -> f64 {
    DEFAULT_DEGREE
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            degree: DEFAULT_DEGREE,
            size: None,
            seed: 0,
            child_options: PropTable::new(),
            timeline: None,
            options: PropTable::new(),
        }
    }
}

impl GroupConfig {
    /// Parse a burst configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BurstResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| BurstError::serde(format!("parse burst config JSON: {e}")))
    }

    /// Parse a burst configuration from a JSON string.
    pub fn from_json_str(s: &str) -> BurstResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| BurstError::serde(format!("parse burst config JSON: {e}")))
    }

    /// Parse a burst configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BurstResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BurstError::validation(format!("open burst config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check count, degree and size ranges, and that every numeric option is finite.
    pub fn validate(&self) -> BurstResult<()> {
        if self.count == 0 {
            return Err(BurstError::validation("count must be > 0"));
        }
        if !self.degree.is_finite() || self.degree <= 0.0 || self.degree > 360.0 {
            return Err(BurstError::validation(format!(
                "degree must be in (0, 360], got {}",
                self.degree
            )));
        }
        if let Some(size) = self.size
            && (!size.is_finite() || size < 0.0)
        {
            return Err(BurstError::validation(format!(
                "size must be a finite number >= 0, got {size}"
            )));
        }
        for (table, what) in [(&self.options, "option"), (&self.child_options, "child option")] {
            for (prop, option) in table {
                if option.values().any(|v| !is_finite_value(v)) {
                    return Err(BurstError::validation(format!(
                        "{what} '{}' must not hold non-finite numbers",
                        prop.name()
                    )));
                }
            }
        }
        if let Some(tl) = &self.timeline
            && let Some(speed) = tl.speed
            && (!speed.is_finite() || speed <= 0.0)
        {
            return Err(BurstError::validation(format!(
                "timeline speed must be > 0, got {speed}"
            )));
        }
        Ok(())
    }

    /// Group element size.
    pub fn size(&self) -> f64 {
        self.size.unwrap_or(DEFAULT_SIZE)
    }

    /// Shallow-merge `patch` into a copy of this configuration and validate the result.
    ///
    /// Flat options and `timeline` merge key by key; `childOptions` is replaced as a whole when
    /// present. A patch that changes `count` is rejected.
    pub fn merged(&self, patch: &GroupPatch) -> BurstResult<Self> {
        if let Some(requested) = patch.count
            && requested != self.count
        {
            return Err(BurstError::CountChange {
                current: self.count,
                requested,
            });
        }
        let mut next = self.clone();
        if let Some(degree) = patch.degree {
            next.degree = degree;
        }
        if let Some(size) = patch.size {
            next.size = Some(size);
        }
        if let Some(seed) = patch.seed {
            next.seed = seed;
        }
        if let Some(child_options) = &patch.child_options {
            next.child_options = child_options.clone();
        }
        if let Some(timeline) = &patch.timeline {
            next.timeline
                .get_or_insert_with(TimelineOptions::default)
                .merge(timeline);
        }
        for (prop, value) in &patch.options {
            next.options.insert(*prop, value.clone());
        }
        next.validate()?;
        Ok(next)
    }
}

fn is_finite_value(value: &Value) -> bool {
    let finite = |s: &Scalar| !matches!(s, Scalar::Number(n) if !n.is_finite());
    match value {
        Value::Number(n) => n.is_finite(),
        Value::Delta(d) => finite(&d.start) && finite(&d.end),
        Value::Bool(_) | Value::Text(_) => true,
    }
}

/// Partial configuration applied by [`Burst::retune`](crate::Burst::retune).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPatch {
    /// Must equal the live count when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// New arc span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<f64>,
    /// New group size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// New seed for `rand(...)` options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Replacement per-bit overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_options: Option<PropTable>,
    /// Timeline options to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelineOptions>,
    /// Group-level options to set.
    #[serde(flatten)]
    pub options: PropTable,
}

impl GroupPatch {
    /// Empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a patch from a JSON string.
    pub fn from_json_str(s: &str) -> BurstResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| BurstError::serde(format!("parse burst patch JSON: {e}")))
    }

    /// Request a count; rejected by re-tune unless it equals the live count.
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the arc span.
    pub fn degree(mut self, degree: f64) -> Self {
        self.degree = Some(degree);
        self
    }

    /// Set the group size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set a group-level option.
    pub fn option(mut self, prop: BitProp, value: impl Into<OptionValue>) -> Self {
        self.options.insert(prop, value.into());
        self
    }

    /// Replace the per-bit overrides.
    pub fn child_options(mut self, table: PropTable) -> Self {
        self.child_options = Some(table);
        self
    }

    /// Apply timeline options.
    pub fn timeline(mut self, options: TimelineOptions) -> Self {
        self.timeline = Some(options);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/burst/config.rs"]
mod tests;
