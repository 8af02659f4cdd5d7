/// Computes the `p`-quantile of sorted data by linear interpolation.
///
/// The quantile sits at fractional position `h = (n - 1) * p` of the sorted
/// values and is interpolated between the two neighbouring order statistics
/// (Hyndman & Fan definition 7, the default of most spreadsheets).
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `p` - The probability, clamped to `0.0..=1.0`
///
/// # Returns
///
/// The interpolated value, or `f64::NAN` if the input is empty.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use qualstat_stats::quantile::quantile;
///
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(quantile(&values, 0.25), 4.0);
/// assert_eq!(quantile(&values, 0.5), 4.5);
/// assert_eq!(quantile(&values, 0.75), 5.5);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn quantile(sorted_values: &[f64], p: f64) -> f64 {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let Some(&last) = sorted_values.last() else {
        return f64::NAN;
    };
    let h = (sorted_values.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lower = h.floor() as usize;
    if lower + 1 >= sorted_values.len() {
        return last;
    }
    let fraction = h - h.floor();
    sorted_values[lower] + fraction * (sorted_values[lower + 1] - sorted_values[lower])
}

/// Median of sorted data; the mean of the two middle values for even counts.
#[must_use]
pub fn median(sorted_values: &[f64]) -> f64 {
    quantile(sorted_values, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_nan() {
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn test_single_value() {
        assert_eq!(quantile(&[7.0], 0.25), 7.0);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn test_endpoints() {
        let values = [1.0, 2.0, 3.0, 10.0];
        assert_eq!(quantile(&values, 0.0), 1.0);
        assert_eq!(quantile(&values, 1.0), 10.0);
    }

    #[test]
    fn test_interpolates_between_neighbours() {
        // h = 3 * 0.25 = 0.75
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.25), 1.75);
        assert_eq!(median(&values), 2.5);
        assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_unsorted_panics() {
        let _ = quantile(&[3.0, 1.0], 0.5);
    }
}
