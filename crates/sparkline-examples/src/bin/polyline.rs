// File: crates/sparkline-examples/src/bin/polyline.rs
// Summary: Minimal example that prints the point string for a synthetic series.

use sparkline_core::{generate, DEFAULT_HEIGHT};

fn main() {
    // Damped wave with a single dropout sample
    let mut data: Vec<f64> = (0..25)
        .map(|i| {
            let t = i as f64 * 0.5;
            (t.sin() * (-t * 0.15).exp() * 50.0 + 50.0).round()
        })
        .collect();
    data[12] = f64::NAN;

    let points = generate(Some(&data), DEFAULT_HEIGHT, None, None);
    println!("{points}");
}
