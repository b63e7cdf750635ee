use crate::bit::tween::Tween;
use crate::foundation::core::BitIndex;

/// Timeline-level options (`timeline` table of a burst config).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimelineOptions {
    /// Delay before the timeline starts, in ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Extra play-throughs of the whole timeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<u32>,
    /// Playback speed multiplier, `> 0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Play every odd repeat backwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_yoyo: Option<bool>,
}

impl TimelineOptions {
    /// Overlay the options set in `other` onto `self`.
    pub fn merge(&mut self, other: &Self) {
        if other.delay.is_some() {
            self.delay = other.delay;
        }
        if other.repeat.is_some() {
            self.repeat = other.repeat;
        }
        if other.speed.is_some() {
            self.speed = other.speed;
        }
        if other.is_yoyo.is_some() {
            self.is_yoyo = other.is_yoyo;
        }
    }
}

/// Shared sequencing object that owns the timing of every bit of a burst.
pub trait Timeline {
    /// Attach the bits' tweens, in index order. Called once, while the burst is building.
    fn add_all(&mut self, tweens: Vec<Tween>);

    /// Apply timeline-level options.
    fn set_prop(&mut self, options: &TimelineOptions);

    /// Replace the timing of the bit at `index` after a re-tune.
    fn sync_child(&mut self, index: BitIndex, tween: &Tween);

    /// Recompute the aggregate duration. Idempotent.
    fn recalc_total_duration(&mut self);

    /// Last computed aggregate duration in ms.
    fn total_duration(&self) -> f64;
}

/// Timeline that plays all children in parallel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParallelTimeline {
    children: Vec<Tween>,
    options: TimelineOptions,
    total: f64,
}

impl ParallelTimeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current child timings, in bit order.
    pub fn children(&self) -> &[Tween] {
        &self.children
    }

    /// Accumulated timeline-level options.
    pub fn options(&self) -> &TimelineOptions {
        &self.options
    }
}

impl Timeline for ParallelTimeline {
    fn add_all(&mut self, tweens: Vec<Tween>) {
        self.children.extend(tweens);
    }

    fn set_prop(&mut self, options: &TimelineOptions) {
        self.options.merge(options);
    }

    fn sync_child(&mut self, index: BitIndex, tween: &Tween) {
        match self.children.get_mut(index.0) {
            Some(slot) => *slot = tween.clone(),
            None => tracing::warn!(index = index.0, "sync for unknown timeline child ignored"),
        }
    }

    fn recalc_total_duration(&mut self) {
        let longest = self.children.iter().map(Tween::span).fold(0.0, f64::max);
        let delay = self.options.delay.filter(|d| *d >= 0.0).unwrap_or(0.0);
        let repeat = f64::from(self.options.repeat.unwrap_or(0));
        let speed = self.options.speed.filter(|s| *s > 0.0).unwrap_or(1.0);
        self.total = (longest + delay) * (repeat + 1.0) / speed;
    }

    fn total_duration(&self) -> f64 {
        self.total
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/shared.rs"]
mod tests;
