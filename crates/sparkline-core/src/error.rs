// File: crates/sparkline-core/src/error.rs
// Summary: Typed errors for the strict polyline builder.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PolylineError {
    #[error("polyline width must be finite and positive, got {0}")]
    InvalidWidth(f64),
    #[error("polyline height must be finite and non-negative, got {0}")]
    InvalidHeight(f64),
    #[error("explicit bounds must be finite with max > min, got [{min}, {max}]")]
    InvalidBounds { min: f64, max: f64 },
}
