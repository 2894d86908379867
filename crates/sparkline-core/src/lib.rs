// File: crates/sparkline-core/src/lib.rs
// Summary: Core library entry point; exports the sparkline point-generation API.

pub mod types;
pub mod scale;
pub mod format;
pub mod error;
pub mod polyline;

pub use types::{Bounds, POLYLINE_WIDTH, DEFAULT_HEIGHT, FALLBACK_BOUNDS};
pub use scale::{autoscale, IndexScale, ValueScale};
pub use format::{format_number, write_number};
pub use error::PolylineError;
pub use polyline::{generate, Polyline, PolylineOptions, PolylinePoint};
