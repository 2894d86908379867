// File: crates/sparkline-core/src/types.rs
// Summary: Shared types and constants (logical width, default height, value bounds).

/// Logical horizontal extent of every polyline, in abstract units.
pub const POLYLINE_WIDTH: f64 = 100.0;
/// Default vertical extent used by `PolylineOptions::default()`.
pub const DEFAULT_HEIGHT: f64 = 40.0;
/// Bounds used when a series has no finite sample to derive them from.
pub const FALLBACK_BOUNDS: Bounds = Bounds::new(0.0, 100.0);

/// Inclusive value range mapped onto the vertical axis.
/// Contract: derived bounds always satisfy `max > min`; caller-supplied bounds are taken as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max - min`; zero or negative for degenerate caller bounds.
    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    /// Both ends finite and strictly ordered.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }

    /// Clamp `v` into `[min, max]`. Applies `min(max, v)` first, so inverted
    /// bounds resolve to `min`.
    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        self.min.max(self.max.min(v))
    }

    /// Widen a flat range to `[min - 1, max + 1]`; other ranges are returned unchanged.
    pub fn widened_if_flat(self) -> Self {
        if self.min == self.max {
            Self::new(self.min - 1.0, self.max + 1.0)
        } else {
            self
        }
    }
}
