use serde::{Deserialize, Serialize};

use crate::{
    error::StatsError,
    frequency::{FrequencyRow, frequency_table, value_counts},
    quantile::{median, quantile},
    rounding::{SUMMARY_PLACES, round_to},
    sample::Sample,
    shape::{self, Kurtosis, Skewness},
    value::{Mode, Stat},
};

/// Descriptive statistics of an ungrouped sample.
///
/// Summary figures are rounded to 2 decimals. Dispersion, quartiles and shape
/// are [`Stat::Unavailable`] for samples with fewer than two values, and
/// individually whenever the underlying formula is undefined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Number of values in the sample.
    pub count: usize,
    pub min: Stat,
    pub max: Stat,
    /// The arithmetic mean.
    pub mean: Stat,
    pub median: Stat,
    /// Every value tied at the highest frequency.
    pub mode: Mode,
    /// Standard deviation dividing by `n`.
    pub population_std_dev: Stat,
    /// Standard deviation dividing by `n - 1`.
    pub sample_std_dev: Stat,
    pub population_variance: Stat,
    pub sample_variance: Stat,
    /// `max - min` of the rounded extremes.
    pub range: Stat,
    /// First quartile (linear interpolation).
    pub q1: Stat,
    /// Third quartile (linear interpolation).
    pub q3: Stat,
    /// `q3 - q1` of the rounded quartiles.
    pub iqr: Stat,
    /// Adjusted Fisher-Pearson skewness (needs 3 values).
    pub skewness: Stat,
    /// Sample excess kurtosis (needs 4 values).
    pub kurtosis: Stat,
    pub skewness_shape: Option<Skewness>,
    pub kurtosis_shape: Option<Kurtosis>,
    /// One row per distinct value, ascending.
    pub frequency_table: Vec<FrequencyRow>,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from raw values.
    ///
    /// Non-finite values are discarded first.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InputEmpty`] if no finite value remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use qualstat_stats::{descriptive::DescriptiveStats, value::{Mode, Stat}};
    ///
    /// let stats = DescriptiveStats::from_values([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(stats.mean, Stat::Value(5.0));
    /// assert_eq!(stats.median, Stat::Value(4.5));
    /// assert_eq!(stats.mode, Mode::Single(4.0));
    /// assert_eq!(stats.population_std_dev, Stat::Value(2.0));
    /// assert_eq!(stats.sample_std_dev, Stat::Value(2.14));
    /// ```
    pub fn from_values<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        Ok(Self::new(&Sample::new(values)?))
    }

    /// Computes descriptive statistics of a validated sample.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(sample: &Sample) -> Self {
        let sorted = sample.sorted();
        let count = sorted.len();
        log::debug!("computing descriptive statistics for {count} values");

        let summary = |value: f64| Stat::rounded(value, SUMMARY_PLACES);
        let min = round_to(sorted[0], SUMMARY_PLACES);
        let max = round_to(sorted[count - 1], SUMMARY_PLACES);

        let mut stats = Self {
            count,
            min: Stat::new(min),
            max: Stat::new(max),
            mean: summary(sample.mean()),
            median: summary(median(&sorted)),
            mode: modes(&sorted),
            frequency_table: frequency_table(&sorted),
            ..Self::default()
        };
        if count < 2 {
            return stats;
        }

        let n = count as f64;
        let squared = sample.central_sum(2);
        let population_variance = squared / n;
        let sample_variance = squared / (n - 1.0);
        let q1 = round_to(quantile(&sorted, 0.25), SUMMARY_PLACES);
        let q3 = round_to(quantile(&sorted, 0.75), SUMMARY_PLACES);

        stats.population_variance = summary(population_variance);
        stats.sample_variance = summary(sample_variance);
        stats.population_std_dev = summary(population_variance.sqrt());
        stats.sample_std_dev = summary(sample_variance.sqrt());
        stats.range = summary(max - min);
        stats.q1 = Stat::new(q1);
        stats.q3 = Stat::new(q3);
        stats.iqr = summary(q3 - q1);
        stats.skewness = shape::sample_skewness(sample)
            .value()
            .map_or(Stat::Unavailable, summary);
        stats.kurtosis = shape::excess_kurtosis(sample)
            .value()
            .map_or(Stat::Unavailable, summary);
        stats.skewness_shape = Skewness::classify(stats.skewness);
        stats.kurtosis_shape = Kurtosis::classify(stats.kurtosis);
        stats
    }
}

/// All values sharing the highest frequency, rounded like the summary.
fn modes(sorted_values: &[f64]) -> Mode {
    let counts = value_counts(sorted_values);
    let Some(top) = counts.iter().map(|(_, count)| *count).max() else {
        return Mode::Unavailable;
    };
    Mode::from_values(
        counts
            .into_iter()
            .filter(|(_, count)| *count == top)
            .map(|(value, _)| round_to(value, SUMMARY_PLACES))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sample() {
        let stats = DescriptiveStats::from_values([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.count, 8);
        assert_eq!(stats.min, Stat::Value(2.0));
        assert_eq!(stats.max, Stat::Value(9.0));
        assert_eq!(stats.mean, Stat::Value(5.0));
        assert_eq!(stats.median, Stat::Value(4.5));
        assert_eq!(stats.mode, Mode::Single(4.0));
        assert_eq!(stats.population_variance, Stat::Value(4.0));
        assert_eq!(stats.sample_variance, Stat::Value(4.57));
        assert_eq!(stats.population_std_dev, Stat::Value(2.0));
        assert_eq!(stats.sample_std_dev, Stat::Value(2.14));
        assert_eq!(stats.range, Stat::Value(7.0));
        assert_eq!(stats.q1, Stat::Value(4.0));
        assert_eq!(stats.q3, Stat::Value(5.5));
        assert_eq!(stats.iqr, Stat::Value(1.5));
        assert_eq!(stats.skewness, Stat::Value(0.82));
        assert_eq!(stats.kurtosis, Stat::Value(0.94));
        assert_eq!(stats.skewness_shape, Some(Skewness::Positive));
        assert_eq!(stats.kurtosis_shape, Some(Kurtosis::Leptokurtic));
        assert_eq!(stats.frequency_table.len(), 5);
    }

    #[test]
    fn test_single_value_guard() {
        let stats = DescriptiveStats::from_values([3.25]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, Stat::Value(3.25));
        assert_eq!(stats.max, Stat::Value(3.25));
        assert_eq!(stats.mean, Stat::Value(3.25));
        assert_eq!(stats.median, Stat::Value(3.25));
        assert_eq!(stats.mode, Mode::Single(3.25));
        for unavailable in [
            stats.population_std_dev,
            stats.sample_std_dev,
            stats.population_variance,
            stats.sample_variance,
            stats.range,
            stats.q1,
            stats.q3,
            stats.iqr,
            stats.skewness,
            stats.kurtosis,
        ] {
            assert!(unavailable.is_unavailable());
        }
        assert_eq!(stats.skewness_shape, None);
        assert_eq!(stats.frequency_table.len(), 1);
    }

    #[test]
    fn test_multiple_modes() {
        let stats = DescriptiveStats::from_values([1.0, 1.0, 2.0, 3.0, 3.0]).unwrap();
        assert_eq!(stats.mode, Mode::Multiple(vec![1.0, 3.0]));
        assert_eq!(stats.mode.to_string(), "1, 3");
    }

    #[test]
    fn test_constant_sample_has_no_shape() {
        let stats = DescriptiveStats::from_values([5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_eq!(stats.sample_std_dev, Stat::Value(0.0));
        assert!(stats.skewness.is_unavailable());
        assert!(stats.kurtosis.is_unavailable());
        assert_eq!(stats.kurtosis_shape, None);
    }

    #[test]
    fn test_fractional_constant_has_no_shape() {
        let stats = DescriptiveStats::from_values([0.7; 6]).unwrap();
        assert_eq!(stats.mean, Stat::Value(0.7));
        assert_eq!(stats.sample_std_dev, Stat::Value(0.0));
        assert!(stats.skewness.is_unavailable());
        assert!(stats.kurtosis.is_unavailable());
        assert_eq!(stats.skewness_shape, None);
        assert_eq!(stats.kurtosis_shape, None);
    }

    #[test]
    fn test_three_values_have_skewness_but_no_kurtosis() {
        let stats = DescriptiveStats::from_values([1.0, 2.0, 6.0]).unwrap();
        assert!(stats.skewness.is_value());
        assert!(stats.kurtosis.is_unavailable());
    }

    #[test]
    fn test_empty_input() {
        let err = DescriptiveStats::from_values([f64::NAN]).unwrap_err();
        assert!(err.is_input_empty());
    }

    #[test]
    fn test_idempotent() {
        let values = [3.1, 7.4, 2.2, 9.9, 3.1, 5.0];
        let first = DescriptiveStats::from_values(values).unwrap();
        let second = DescriptiveStats::from_values(values).unwrap();
        assert_eq!(first, second);
    }
}
