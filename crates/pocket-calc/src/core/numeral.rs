//! Numeral parsing and display formatting
//!
//! Both directions are total: parsing never fails (bad text reads as `0`)
//! and formatting never produces anything but a decimal numeral.

/// Magnitudes above this render in scientific notation
pub const SCIENTIFIC_ABOVE: f64 = 1e15;

/// Non-zero magnitudes below this render in scientific notation
pub const SCIENTIFIC_BELOW: f64 = 1e-6;

/// Mantissa decimals in scientific notation
pub const MANTISSA_DIGITS: usize = 6;

/// Maximum fractional digits in plain notation
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Parses a display numeral, reading anything unparseable or non-finite as `0`
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Formats a computed value for the display.
///
/// - non-finite values render as `"0"`
/// - magnitudes above 1e15, or non-zero magnitudes below 1e-6, render as
///   `1.234567e+20`
/// - everything else renders as a plain decimal with at most 8 fractional
///   digits and no trailing zeros
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude > SCIENTIFIC_ABOVE || (magnitude < SCIENTIFIC_BELOW && value != 0.0) {
        return format_scientific(value);
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Scientific notation with a signed exponent (`5.000000e-7`, `1.000000e+16`)
fn format_scientific(value: f64) -> String {
    let raw = format!("{:.*e}", MANTISSA_DIGITS, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) if exp < 0 => format!("{mantissa}e-{}", exp.unsigned_abs()),
            Ok(exp) => format!("{mantissa}e+{exp}"),
            Err(_) => raw,
        },
        None => raw,
    }
}
