// File: crates/sparkline-core/tests/bounds.rs
// Purpose: Validate autoscale and the index/value scales.

use sparkline_core::{autoscale, Bounds, IndexScale, ValueScale, FALLBACK_BOUNDS};

#[test]
fn autoscale_ignores_non_finite() {
    let b = autoscale(&[f64::NAN, 3.0, -2.0, f64::INFINITY, 7.0, f64::NEG_INFINITY]);
    assert_eq!(b, Bounds::new(-2.0, 7.0));
}

#[test]
fn autoscale_falls_back_without_finite_samples() {
    assert_eq!(autoscale(&[]), FALLBACK_BOUNDS);
    assert_eq!(autoscale(&[f64::NAN, f64::NAN]), Bounds::new(0.0, 100.0));
}

#[test]
fn autoscale_widens_flat_range() {
    assert_eq!(autoscale(&[5.0, 5.0, f64::NAN]), Bounds::new(4.0, 6.0));
    assert_eq!(autoscale(&[2.0]), Bounds::new(1.0, 3.0));
    assert!(autoscale(&[0.0, 0.0]).span() > 0.0);
}

#[test]
fn bounds_validity_and_clamp() {
    assert!(Bounds::new(0.0, 1.0).is_valid());
    assert!(!Bounds::new(1.0, 1.0).is_valid());
    assert!(!Bounds::new(2.0, 1.0).is_valid());
    assert!(!Bounds::new(f64::NAN, 1.0).is_valid());

    let b = Bounds::new(-1.0, 1.0);
    assert_eq!(b.clamp(5.0), 1.0);
    assert_eq!(b.clamp(-5.0), -1.0);
    assert_eq!(b.clamp(0.25), 0.25);
}

#[test]
fn index_scale_spans_width() {
    let xs = IndexScale::new(100.0, 5);
    assert_eq!(xs.step(), 25.0);
    assert_eq!(xs.to_x(0), 0.0);
    assert_eq!(xs.to_x(4), 100.0);
}

#[test]
fn value_scale_inverts_axis() {
    let ys = ValueScale::new(Bounds::new(0.0, 10.0), 20.0);
    assert_eq!(ys.to_y(0.0), 20.0);
    assert_eq!(ys.to_y(10.0), 0.0);
    assert_eq!(ys.to_y(5.0), 10.0);
    assert_eq!(ys.to_y(f64::NAN), 20.0);
    assert_eq!(ys.to_y(f64::NEG_INFINITY), 20.0);
    assert_eq!(ys.to_y(42.0), 0.0);
}
