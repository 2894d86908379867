// File: crates/demo/src/main.rs
// Summary: Demo loads one numeric column from a CSV file and prints its sparkline point string.

use anyhow::{Context, Result};
use sparkline_core::{autoscale, Polyline, PolylineOptions, DEFAULT_HEIGHT};
use std::path::{Path, PathBuf};

const DEFAULT_INPUT: &str = "crates/demo/data/telemetry_sample.csv";
const DEFAULT_COLUMN: &str = "altitude";

fn main() -> Result<()> {
    // Usage: sparkline-demo [path] [column] [height]
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let column = args.next().unwrap_or_else(|| DEFAULT_COLUMN.to_string());
    let height = match args.next() {
        Some(h) => h.trim().parse::<f64>().with_context(|| format!("invalid height '{h}'"))?,
        None => DEFAULT_HEIGHT,
    };

    let (path, used_alt) = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());
    if used_alt {
        println!("  (extension swapped between .csv/.cvs)");
    }

    let samples = load_column(&path, &column)
        .with_context(|| format!("failed to load column '{}' from '{}'", column, path.display()))?;
    println!("Loaded {} samples from column '{}'", samples.len(), column);

    let skipped = samples.iter().filter(|v| !v.is_finite()).count();
    if skipped > 0 {
        eprintln!("Warning: {skipped} non-numeric cells will be pinned to the baseline.");
    }
    if samples.len() < 2 {
        eprintln!("Warning: fewer than two samples; the point string is empty.");
    }

    let bounds = autoscale(&samples);
    println!("Value range: [{:.4}, {:.4}]", bounds.min, bounds.max);

    let opts = PolylineOptions::default().with_height(height);
    let polyline = Polyline::try_from_samples(&samples, &opts)?;
    println!("{polyline}");

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Read the named column (case-insensitive); unparsable cells become NaN so row count is preserved.
fn load_column(path: &Path, column: &str) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let want = column.trim().to_lowercase();
    let Some(ix) = headers.iter().position(|h| *h == want) else {
        anyhow::bail!("column '{}' not found; available: {}", column, headers.join(", "));
    };

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let v = rec
            .get(ix)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN);
        out.push(v);
    }
    Ok(out)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
