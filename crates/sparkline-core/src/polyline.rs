// File: crates/sparkline-core/src/polyline.rs
// Summary: Sparkline point generation and the "x,y x,y ..." point-string rendering.

use std::fmt;

use crate::error::PolylineError;
use crate::format::write_number;
use crate::scale::{autoscale, IndexScale, ValueScale};
use crate::types::{Bounds, DEFAULT_HEIGHT, POLYLINE_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolylinePoint {
    pub x: f64,
    pub y: f64,
}

/// Geometry knobs for a polyline; `bounds: None` means derive them from the samples.
#[derive(Clone, Copy, Debug)]
pub struct PolylineOptions {
    pub width: f64,
    pub height: f64,
    pub bounds: Option<Bounds>,
}

impl Default for PolylineOptions {
    fn default() -> Self {
        Self { width: POLYLINE_WIDTH, height: DEFAULT_HEIGHT, bounds: None }
    }
}

impl PolylineOptions {
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some(Bounds::new(min, max));
        self
    }

    fn validate(&self) -> Result<(), PolylineError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PolylineError::InvalidWidth(self.width));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(PolylineError::InvalidHeight(self.height));
        }
        if let Some(b) = self.bounds {
            if !b.is_valid() {
                return Err(PolylineError::InvalidBounds { min: b.min, max: b.max });
            }
        }
        Ok(())
    }
}

/// One point per input sample, in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    points: Vec<PolylinePoint>,
}

impl Polyline {
    /// Permissive construction: never fails. Fewer than two samples yields an empty polyline,
    /// and caller bounds are used unchecked (a zero span produces NaN ordinates).
    pub fn from_samples(samples: &[f64], opts: &PolylineOptions) -> Self {
        if samples.len() < 2 {
            return Self::default();
        }
        let bounds = opts.bounds.unwrap_or_else(|| autoscale(samples));
        let xs = IndexScale::new(opts.width, samples.len());
        let ys = ValueScale::new(bounds, opts.height);
        let points = samples
            .iter()
            .enumerate()
            .map(|(i, &v)| PolylinePoint { x: xs.to_x(i), y: ys.to_y(v) })
            .collect();
        Self { points }
    }

    /// Strict construction: rejects non-finite or non-positive width, non-finite or negative
    /// height, and explicit bounds that are not finite with `max > min`.
    pub fn try_from_samples(samples: &[f64], opts: &PolylineOptions) -> Result<Self, PolylineError> {
        opts.validate()?;
        Ok(Self::from_samples(samples, opts))
    }

    pub fn points(&self) -> &[PolylinePoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn to_points_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write_number(f, p.x)?;
            f.write_str(",")?;
            write_number(f, p.y)?;
        }
        Ok(())
    }
}

/// Build the point string for `samples` on a `POLYLINE_WIDTH` x `height` canvas.
///
/// Returns `""` for absent or single-sample input. Bounds are taken verbatim only
/// when both `min_val` and `max_val` are given; otherwise they are derived from the
/// finite samples.
pub fn generate(samples: Option<&[f64]>, height: f64, min_val: Option<f64>, max_val: Option<f64>) -> String {
    let Some(samples) = samples else { return String::new() };
    let opts = PolylineOptions {
        width: POLYLINE_WIDTH,
        height,
        bounds: min_val.zip(max_val).map(|(min, max)| Bounds::new(min, max)),
    };
    Polyline::from_samples(samples, &opts).to_points_string()
}
