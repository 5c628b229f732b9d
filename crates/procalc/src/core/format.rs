//! Display formatting for calculator results.

/// Magnitudes above this render in scientific notation.
const EXPONENT_THRESHOLD: f64 = 999_999_999_999.0;

/// Scale used to round results to nine decimal places.
const ROUND_SCALE: f64 = 1e9;

/// Formats a numeric result for the calculator display.
///
/// Non-finite values render as the literal `"Error"`. Magnitudes beyond
/// twelve integer digits switch to scientific notation with six fractional
/// digits. Everything else is rounded to nine decimal places to swallow
/// float noise and rendered with the shortest round-trip conversion, so
/// trailing zeros and bare decimal points never appear.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "Error".to_string();
    }
    if value.abs() > EXPONENT_THRESHOLD {
        return format!("{value:.6e}");
    }
    let rounded = (value * ROUND_SCALE).round() / ROUND_SCALE;
    if rounded == 0.0 {
        // Also collapses -0.
        return "0".to_string();
    }
    format!("{rounded}")
}
