use crate::bit::config::ResolvedBitConfig;
use crate::bit::prop::BitProp;

/// Timing of one bit's tween, derived from its resolved options.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tween {
    /// Duration of one play-through in ms.
    pub duration: f64,
    /// Delay before each play-through in ms.
    pub delay: f64,
    /// Extra play-throughs after the first.
    pub repeat: u32,
    /// Playback speed multiplier, `> 0`.
    pub speed: f64,
    /// Play every odd repeat backwards.
    pub is_yoyo: bool,
    /// Forward easing name, `None` for the primitive's default.
    pub easing: Option<String>,
    /// Backward easing name.
    pub backward_easing: Option<String>,
}

impl Default for Tween {
    fn default() -> Self {
        Self {
            duration: 350.0,
            delay: 0.0,
            repeat: 0,
            speed: 1.0,
            is_yoyo: false,
            easing: None,
            backward_easing: None,
        }
    }
}

impl Tween {
    /// Derive tween timing from resolved options.
    pub fn from_config(config: &ResolvedBitConfig) -> Self {
        let mut tween = Self::default();
        tween.reset(config);
        tween
    }

    /// Replace all timing values with the ones carried by `config`.
    ///
    /// Null or out-of-range options fall back to the tween defaults.
    pub fn reset(&mut self, config: &ResolvedBitConfig) {
        let defaults = Self::default();
        self.duration = config
            .f64(BitProp::Duration)
            .filter(|d| d.is_finite() && *d >= 0.0)
            .unwrap_or(defaults.duration);
        self.delay = config
            .f64(BitProp::Delay)
            .filter(|d| d.is_finite() && *d >= 0.0)
            .unwrap_or(defaults.delay);
        self.repeat = config
            .f64(BitProp::Repeat)
            .filter(|r| r.is_finite() && *r >= 0.0)
            .map_or(defaults.repeat, |r| r.round().min(f64::from(u32::MAX)) as u32);
        self.speed = config
            .f64(BitProp::Speed)
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(defaults.speed);
        self.is_yoyo = config
            .get(BitProp::IsYoyo)
            .and_then(|v| v.as_bool())
            .unwrap_or(defaults.is_yoyo);
        self.easing = config
            .get(BitProp::Easing)
            .and_then(|v| v.as_str())
            .map(str::to_string);
        self.backward_easing = config
            .get(BitProp::BackwardEasing)
            .and_then(|v| v.as_str())
            .map(str::to_string);
    }

    /// Wall-clock length of the tween including delays and repeats.
    pub fn span(&self) -> f64 {
        (self.duration + self.delay) * (f64::from(self.repeat) + 1.0) / self.speed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bit/tween.rs"]
mod tests;
