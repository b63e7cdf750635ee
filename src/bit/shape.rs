use crate::bit::config::ResolvedBitConfig;
use crate::bit::tween::Tween;

/// The single-shape animation primitive a burst places around its circle.
///
/// A bit is built once per index and re-tuned in place afterwards; the burst never destroys and
/// recreates bits.
pub trait BitShape {
    /// Build a bit from its first resolved configuration.
    fn new(config: &ResolvedBitConfig) -> Self
    where
        Self: Sized;

    /// Apply a new resolved configuration in place.
    fn tune(&mut self, config: &ResolvedBitConfig);

    /// The bit's tween.
    fn tween(&self) -> &Tween;

    /// Mutable handle used to reset the tween after a re-tune.
    fn tween_mut(&mut self) -> &mut Tween;
}

/// Bit that only records what it was told. Useful for layout inspection and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessBit {
    config: ResolvedBitConfig,
    tween: Tween,
    tunes: u64,
}

impl HeadlessBit {
    /// Most recently applied configuration.
    pub fn config(&self) -> &ResolvedBitConfig {
        &self.config
    }

    /// Number of in-place re-tunes since construction.
    pub fn tunes(&self) -> u64 {
        self.tunes
    }
}

impl BitShape for HeadlessBit {
    fn new(config: &ResolvedBitConfig) -> Self {
        Self {
            config: config.clone(),
            tween: Tween::from_config(config),
            tunes: 0,
        }
    }

    fn tune(&mut self, config: &ResolvedBitConfig) {
        self.config = config.clone();
        self.tunes += 1;
    }

    fn tween(&self) -> &Tween {
        &self.tween
    }

    fn tween_mut(&mut self) -> &mut Tween {
        &mut self.tween
    }
}
