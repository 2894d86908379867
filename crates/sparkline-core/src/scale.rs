// File: crates/sparkline-core/src/scale.rs
// Summary: Index (X) and value (Y) scales plus bounds derivation for sparkline series.

use crate::types::{Bounds, FALLBACK_BOUNDS};

/// Derive bounds from the finite subset of `samples`.
///
/// Falls back to `FALLBACK_BOUNDS` when nothing is finite, and widens a flat
/// range by one unit on each side so the result always has a non-zero span.
pub fn autoscale(samples: &[f64]) -> Bounds {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in samples.iter().filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return FALLBACK_BOUNDS;
    }
    Bounds::new(min, max).widened_if_flat()
}

/// Horizontal scale spreading `count` samples evenly over `[0, width]`.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub width: f64,
    step: f64,
}

impl IndexScale {
    /// `count` must be at least 2 for the step to be finite.
    pub fn new(width: f64, count: usize) -> Self {
        let step = width / (count.saturating_sub(1)) as f64;
        Self { width, step }
    }
    #[inline]
    pub fn step(&self) -> f64 { self.step }
    #[inline]
    pub fn to_x(&self, index: usize) -> f64 {
        index as f64 * self.step
    }
}

/// Vertical scale mapping `bounds` onto `[height, 0]` (larger values sit higher).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub bounds: Bounds,
    pub height: f64,
}

impl ValueScale {
    pub fn new(bounds: Bounds, height: f64) -> Self {
        Self { bounds, height }
    }

    /// Non-finite values are pinned to the bottom edge; finite values are clamped first.
    #[inline]
    pub fn to_y(&self, v: f64) -> f64 {
        if !v.is_finite() {
            return self.height;
        }
        let clamped = self.bounds.clamp(v);
        self.height - ((clamped - self.bounds.min) / self.bounds.span()) * self.height
    }
}
