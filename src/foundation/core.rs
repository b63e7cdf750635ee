use std::sync::atomic::{AtomicU64, Ordering};

pub use kurbo::{Point, Vec2};

/// Stable 0-based position of a bit inside its burst, `[0, count)`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BitIndex(pub usize);

impl BitIndex {
    /// Select `index mod len` from a slice of alternatives.
    ///
    /// Returns `None` for an empty slice.
    pub fn pick<T>(self, items: &[T]) -> Option<&T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.0 % items.len())
    }

    /// Index as a floating-point factor for step arithmetic.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Identity of the group element that owns a set of bits.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GroupId(pub u64);

impl GroupId {
    /// Allocate a process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Which end of an animated property a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Value at the beginning of the animation.
    Start,
    /// Value at the end of the animation.
    End,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
