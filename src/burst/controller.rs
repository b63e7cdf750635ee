use std::sync::Arc;

use crate::bit::config::ResolvedBitConfig;
use crate::bit::defaults::{ChildDefaults, GroupDefaults};
use crate::bit::shape::{BitShape, HeadlessBit};
use crate::burst::config::{GroupConfig, GroupPatch};
use crate::burst::group::{GroupFrame, GroupModule};
use crate::foundation::core::GroupId;
use crate::foundation::error::BurstResult;
use crate::layout::builder::BitConfigBuilder;
use crate::timeline::shared::{ParallelTimeline, Timeline, TimelineOptions};

/// Lifecycle state of a [`Burst`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstState {
    /// Bits are being created and attached to the timeline.
    Building,
    /// Steady state; re-entered after every re-tune.
    Tuned,
}

/// A group of bits laid out on a circle and sequenced by one shared timeline.
///
/// The burst owns its configuration, its bits and the timeline. It creates no tweens of its own;
/// each bit carries one and the timeline sequences them. Bits are created once and only ever
/// re-tuned in place, so `count` is fixed for the burst's lifetime.
///
/// Tweens are reset only as part of a re-tune, from the configuration that re-tune produced.
#[derive(Debug)]
pub struct Burst<B: BitShape = HeadlessBit, T: Timeline = ParallelTimeline> {
    id: GroupId,
    config: GroupConfig,
    defaults: GroupDefaults,
    child_defaults: Arc<ChildDefaults>,
    frame: GroupFrame,
    bits: Vec<B>,
    configs: Vec<ResolvedBitConfig>,
    timeline: T,
    pending_timeline: Option<TimelineOptions>,
    state: BurstState,
    generation: u64,
}

impl Burst<HeadlessBit, ParallelTimeline> {
    /// Build a burst of [`HeadlessBit`]s on a [`ParallelTimeline`].
    pub fn headless(config: GroupConfig) -> BurstResult<Self> {
        Self::new(config, ParallelTimeline::new())
    }
}

impl<B: BitShape, T: Timeline> Burst<B, T> {
    /// Validate `config`, build every bit and attach them all to `timeline`.
    #[tracing::instrument(skip(config, timeline), fields(count = config.count, degree = config.degree))]
    pub fn new(config: GroupConfig, timeline: T) -> BurstResult<Self> {
        config.validate()?;
        let pending_timeline = config.timeline.clone();
        let mut burst = Self {
            id: GroupId::next(),
            config,
            defaults: GroupDefaults::default(),
            child_defaults: Arc::new(ChildDefaults::default()),
            frame: GroupFrame::default(),
            bits: Vec::new(),
            configs: Vec::new(),
            timeline,
            pending_timeline,
            state: BurstState::Building,
            generation: 0,
        };
        burst.declare_defaults();
        burst.extend_defaults();
        burst.create_children();
        burst.draw();
        burst.make_timeline();
        burst.state = BurstState::Tuned;
        tracing::debug!(id = burst.id.0, bits = burst.bits.len(), "burst built");
        Ok(burst)
    }

    /// Merge `patch` into the configuration and propagate it to every bit and the timeline.
    ///
    /// The patch is validated before anything changes: a rejected patch (including any attempt
    /// to change `count`) leaves the burst exactly as it was. On success every bit is re-tuned,
    /// its tween reset, and the timeline duration recomputed once, after the last bit.
    #[tracing::instrument(skip(self, patch), fields(id = self.id.0))]
    pub fn retune(&mut self, patch: GroupPatch) -> BurstResult<()> {
        let next = match self.config.merged(&patch) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(%err, "re-tune rejected");
                return Err(err);
            }
        };
        self.config = next;
        self.pending_timeline = patch.timeline;
        self.extend_defaults();
        self.draw();
        self.tune_sub_modules();
        Ok(())
    }

    /// Identity of the group element.
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Current configuration.
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Number of bits.
    pub fn count(&self) -> usize {
        self.bits.len()
    }

    /// Lifecycle state.
    pub fn state(&self) -> BurstState {
        self.state
    }

    /// Number of completed re-tunes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bits, in index order.
    pub fn bits(&self) -> &[B] {
        &self.bits
    }

    /// Configurations of the current generation, in index order.
    pub fn bit_configs(&self) -> &[ResolvedBitConfig] {
        &self.configs
    }

    /// Shared timeline.
    pub fn timeline(&self) -> &T {
        &self.timeline
    }

    /// Group element state.
    pub fn frame(&self) -> &GroupFrame {
        &self.frame
    }

    /// Defaults every bit falls back to.
    pub fn child_defaults(&self) -> &Arc<ChildDefaults> {
        &self.child_defaults
    }

    fn resolve_all(&self) -> Vec<ResolvedBitConfig> {
        BitConfigBuilder::new(
            &self.config,
            &self.defaults,
            &self.child_defaults,
            self.frame.center,
            self.id,
        )
        .build_all()
    }

    fn make_timeline(&mut self) {
        let tweens = self.bits.iter().map(|b| b.tween().clone()).collect();
        self.timeline.add_all(tweens);
        if let Some(opts) = self.pending_timeline.take() {
            self.timeline.set_prop(&opts);
        }
        self.timeline.recalc_total_duration();
    }
}

impl<B: BitShape, T: Timeline> GroupModule for Burst<B, T> {
    fn declare_defaults(&mut self) {
        self.defaults = GroupDefaults::declare();
        self.child_defaults = Arc::new(ChildDefaults::from_group(&self.defaults));
    }

    fn extend_defaults(&mut self) {
        self.calc_size();
    }

    fn calc_size(&mut self) {
        self.frame = GroupFrame::sized(self.config.size());
    }

    fn create_children(&mut self) {
        if self.state != BurstState::Building {
            tracing::debug!(id = self.id.0, "children already created");
            return;
        }
        let configs = self.resolve_all();
        self.bits = configs.iter().map(B::new).collect();
        self.configs = configs;
    }

    fn draw(&mut self) {
        self.frame = std::mem::take(&mut self.frame).with_props(&self.config, &self.defaults);
    }

    fn tune_sub_modules(&mut self) {
        let configs = self.resolve_all();
        for (bit, cfg) in self.bits.iter_mut().zip(&configs) {
            bit.tune(cfg);
            bit.tween_mut().reset(cfg);
            self.timeline.sync_child(cfg.index, bit.tween());
        }
        if let Some(opts) = self.pending_timeline.take() {
            self.timeline.set_prop(&opts);
        }
        self.timeline.recalc_total_duration();
        self.configs = configs;
        self.generation += 1;
        self.state = BurstState::Tuned;
        tracing::debug!(
            id = self.id.0,
            generation = self.generation,
            total = self.timeline.total_duration(),
            "burst re-tuned"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/burst/controller.rs"]
mod tests;
