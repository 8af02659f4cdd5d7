use serde::{Deserialize, Serialize};

use crate::rounding::{FINE_PLACES, SUMMARY_PLACES, round_to};

/// One distinct value of an ungrouped frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// The value, rounded to 2 decimals.
    pub value: f64,
    /// Number of occurrences (at least 1).
    pub absolute_frequency: usize,
    /// `absolute_frequency / n`, rounded to 4 decimals.
    pub relative_frequency: f64,
    /// Running total of `absolute_frequency` up to this row.
    pub cumulative_absolute: usize,
    /// Running total of the unrounded relative frequencies, rounded to 4 decimals.
    pub cumulative_relative: f64,
}

/// Counts the distinct values of sorted data.
///
/// Equal values are merged into runs, so the result is ordered by ascending
/// value with one `(value, count)` pair per distinct value.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
#[must_use]
pub fn value_counts(sorted_values: &[f64]) -> Vec<(f64, usize)> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    sorted_values
        .chunk_by(|a, b| a == b)
        .map(|run| (run[0], run.len()))
        .collect()
}

/// Builds the frequency table of sorted data.
///
/// # Examples
///
/// ```
/// use qualstat_stats::frequency::frequency_table;
///
/// let table = frequency_table(&[1.0, 2.0, 2.0, 5.0]);
/// assert_eq!(table.len(), 3);
/// assert_eq!(table[1].absolute_frequency, 2);
/// assert_eq!(table[1].relative_frequency, 0.5);
/// assert_eq!(table[2].cumulative_absolute, 4);
/// assert_eq!(table[2].cumulative_relative, 1.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn frequency_table(sorted_values: &[f64]) -> Vec<FrequencyRow> {
    let n = sorted_values.len() as f64;
    let mut cumulative_absolute = 0;
    let mut cumulative_relative = 0.0;
    let rows = value_counts(sorted_values)
        .into_iter()
        .map(|(value, count)| {
            let relative = count as f64 / n;
            cumulative_absolute += count;
            cumulative_relative += relative;
            FrequencyRow {
                value: round_to(value, SUMMARY_PLACES),
                absolute_frequency: count,
                relative_frequency: round_to(relative, FINE_PLACES),
                cumulative_absolute,
                cumulative_relative: round_to(cumulative_relative, FINE_PLACES),
            }
        })
        .collect::<Vec<_>>();
    log::trace!("frequency table: {} distinct values", rows.len());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(value_counts(&[]).is_empty());
        assert!(frequency_table(&[]).is_empty());
    }

    #[test]
    fn test_counts_distinct_values() {
        let counts = value_counts(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(
            counts,
            vec![(2.0, 1), (4.0, 3), (5.0, 2), (7.0, 1), (9.0, 1)]
        );
    }

    #[test]
    fn test_table_invariants() {
        let values = [0.1, 0.2, 0.2, 0.3, 0.3, 0.3, 1.7];
        let table = frequency_table(&values);

        let total = table.iter().map(|r| r.absolute_frequency).sum::<usize>();
        assert_eq!(total, values.len());
        assert!(table.windows(2).all(|w| w[0].value < w[1].value));
        assert!(
            table
                .windows(2)
                .all(|w| w[0].cumulative_absolute <= w[1].cumulative_absolute
                    && w[0].cumulative_relative <= w[1].cumulative_relative)
        );
        let last = table.last().unwrap();
        assert_eq!(last.cumulative_absolute, values.len());
        assert!((last.cumulative_relative - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_relative_frequency_rounding() {
        let table = frequency_table(&[1.0, 2.0, 3.0]);
        assert_eq!(table[0].relative_frequency, 0.3333);
        assert_eq!(table[1].cumulative_relative, 0.6667);
        assert_eq!(table[2].cumulative_relative, 1.0);
    }

    #[test]
    fn test_values_rounded_to_two_places() {
        let table = frequency_table(&[1.234_56, 1.234_56]);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].value, 1.23);
    }
}
