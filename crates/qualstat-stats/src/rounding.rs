//! Decimal rounding used for every reported figure.

/// Decimal places for values shown in frequency tables and ungrouped summaries.
pub const SUMMARY_PLACES: i32 = 2;

/// Decimal places for frequency ratios, class bounds and grouped statistics.
pub const FINE_PLACES: i32 = 4;

/// Rounds `value` to `places` decimal digits, ties away from zero.
///
/// The value is scaled by `10^places`, rounded to the nearest integer and
/// scaled back, so the usual binary floating point artifacts of that
/// multiply/divide pair are kept as-is.
///
/// Returns `f64::NAN` for non-finite input.
///
/// # Examples
///
/// ```
/// use qualstat_stats::rounding::round_to;
///
/// assert_eq!(round_to(0.125, 2), 0.13);
/// assert_eq!(round_to(-0.125, 2), -0.13);
/// assert!(round_to(f64::INFINITY, 2).is_nan());
/// ```
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return f64::NAN;
    }
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
