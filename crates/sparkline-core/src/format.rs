// File: crates/sparkline-core/src/format.rs
// Summary: Coordinate-to-text formatting with shortest round-trip digits.

use std::fmt::{self, Write};

/// Write `v` the way point-list attributes expect it:
/// integral values without a fraction, `-0` as `0`, `NaN`/`Infinity` spelled out,
/// and exponent form (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`.
pub fn write_number<W: Write>(out: &mut W, v: f64) -> fmt::Result {
    if v.is_nan() {
        return out.write_str("NaN");
    }
    if v.is_infinite() {
        return out.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if v == 0.0 {
        return out.write_str("0");
    }
    let abs = v.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{v:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => write!(out, "{mantissa}e+{power}"),
            _ => out.write_str(&exp),
        };
    }
    write!(out, "{v}")
}

pub fn format_number(v: f64) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = write_number(&mut s, v);
    s
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn integral_values_drop_fraction() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn shortest_round_trip_digits() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(123456.789), "123456.789");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn non_finite_spelled_out() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn exponent_form_at_extremes() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }
}
