//! Statistics over a grouped frequency distribution.
//!
//! Central tendency and dispersion are estimated from the classes generated
//! by [`ClassScheme`]: every value is represented by its class mark, the
//! median and mode are interpolated inside their class. Skewness and kurtosis
//! are taken from the raw sample instead, since the binned approximation loses
//! the information they measure. Figures are rounded to 4 decimals.

use serde::{Deserialize, Serialize};

use crate::{
    classes::{Class, ClassScheme},
    error::StatsError,
    rounding::{FINE_PLACES, SUMMARY_PLACES, round_to},
    sample::Sample,
    shape::{self, Kurtosis, Skewness},
    value::{Mode, Stat},
};

/// One class of a grouped frequency distribution table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedFrequencyRow {
    pub id: usize,
    /// `"[lower - upper)"`, or `"[lower - upper]"` for the closed last class.
    pub label: String,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub class_mark: f64,
    pub absolute_frequency: usize,
    pub relative_frequency: f64,
    pub cumulative_absolute: usize,
    pub cumulative_relative: f64,
}

/// Grouped-data statistics of a sample.
///
/// Quartiles and IQR are always [`Stat::Unavailable`] for grouped data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedStats {
    /// Total frequency, equal to the sample size.
    pub count: usize,
    pub min: Stat,
    pub max: Stat,
    pub range: Stat,
    pub class_count: usize,
    pub class_width: Stat,
    /// `Σ(mark * f) / n`.
    pub mean: Stat,
    /// Interpolated inside the first class reaching half the total frequency.
    pub median: Stat,
    /// Interpolated inside the modal class, or the midpoints of tied classes.
    pub mode: Mode,
    pub population_std_dev: Stat,
    pub sample_std_dev: Stat,
    pub population_variance: Stat,
    pub sample_variance: Stat,
    pub q1: Stat,
    pub q3: Stat,
    pub iqr: Stat,
    /// Skewness of the raw sample.
    pub skewness: Stat,
    /// Excess kurtosis of the raw sample.
    pub kurtosis: Stat,
    pub skewness_shape: Option<Skewness>,
    pub kurtosis_shape: Option<Kurtosis>,
    pub distribution_table: Vec<GroupedFrequencyRow>,
}

impl GroupedStats {
    /// Groups raw values into classes and computes grouped statistics.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InputEmpty`] if no finite value remains, and
    /// propagates errors from [`GroupedStats::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use qualstat_stats::{grouped::GroupedStats, value::Stat};
    ///
    /// let stats = GroupedStats::from_values([0.0, 2.0, 4.0, 6.0], Some(3)).unwrap();
    /// assert_eq!(stats.class_count, 3);
    /// assert_eq!(stats.mean, Stat::Value(3.5));
    /// assert_eq!(stats.distribution_table[0].label, "[0 - 2)");
    /// assert_eq!(stats.distribution_table[2].label, "[4 - 6]");
    /// ```
    pub fn from_values<I>(values: I, desired_class_count: Option<usize>) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::new(&Sample::new(values)?, desired_class_count)
    }

    /// Computes grouped statistics, generating classes from the sample.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidClassConfiguration`] if no usable classes
    /// can be generated.
    pub fn new(sample: &Sample, desired_class_count: Option<usize>) -> Result<Self, StatsError> {
        let scheme = ClassScheme::generate(sample, desired_class_count)?;
        Self::from_scheme(sample, &scheme)
    }

    /// Computes grouped statistics over an already generated scheme.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InsufficientData`] if the classes hold no values.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_scheme(sample: &Sample, scheme: &ClassScheme) -> Result<Self, StatsError> {
        let classes = &scheme.classes;
        let total = classes.iter().map(|c| c.frequency).sum::<usize>();
        if total == 0 {
            return Err(StatsError::InsufficientData {
                reason: "the classes hold no values",
            });
        }
        let n = total as f64;
        log::debug!(
            "computing grouped statistics over {} classes (n = {total})",
            classes.len()
        );

        let distribution_table = distribution_table(classes, &scheme.class_marks, total);

        let weighted_sum = classes
            .iter()
            .zip(&scheme.class_marks)
            .map(|(class, mark)| mark * class.frequency as f64)
            .sum::<f64>();
        let mean = round_to(weighted_sum / n, FINE_PLACES);

        let (median, mode) = if scheme.is_single_value() {
            // Deliberately not interpolated: on the unit class `[v, v + 1]` the
            // median and mode formulas would give `v + 0.5`, but every value is `v`.
            let mark = scheme.class_marks[0];
            (Stat::new(mark), Mode::Single(mark))
        } else {
            (
                grouped_median(&distribution_table, classes, scheme.class_width, n),
                grouped_mode(classes, scheme.class_width),
            )
        };

        let squared = classes
            .iter()
            .zip(&scheme.class_marks)
            .map(|(class, mark)| (mark - mean).powi(2) * class.frequency as f64)
            .sum::<f64>();
        let sample_variance = if total > 1 {
            squared / (n - 1.0)
        } else {
            f64::NAN
        };
        let population_variance = squared / n;

        let fine = |value: f64| Stat::rounded(value, FINE_PLACES);
        let skewness = shape::sample_skewness(sample)
            .value()
            .map_or(Stat::Unavailable, fine);
        let kurtosis = shape::excess_kurtosis(sample)
            .value()
            .map_or(Stat::Unavailable, fine);

        Ok(Self {
            count: total,
            min: Stat::new(scheme.min),
            max: Stat::new(scheme.max),
            range: Stat::new(scheme.range),
            class_count: scheme.class_count,
            class_width: Stat::new(scheme.class_width),
            mean: Stat::new(mean),
            median,
            mode,
            population_std_dev: fine(population_variance.sqrt()),
            sample_std_dev: fine(sample_variance.sqrt()),
            population_variance: fine(population_variance),
            sample_variance: fine(sample_variance),
            q1: Stat::Unavailable,
            q3: Stat::Unavailable,
            iqr: Stat::Unavailable,
            skewness,
            kurtosis,
            skewness_shape: Skewness::classify(skewness),
            kurtosis_shape: Kurtosis::classify(kurtosis),
            distribution_table,
        })
    }
}

#[expect(clippy::cast_precision_loss)]
fn distribution_table(classes: &[Class], marks: &[f64], total: usize) -> Vec<GroupedFrequencyRow> {
    let n = total as f64;
    let last = classes.len().saturating_sub(1);
    let mut cumulative = 0;
    classes
        .iter()
        .zip(marks)
        .enumerate()
        .map(|(i, (class, &mark))| {
            cumulative += class.frequency;
            GroupedFrequencyRow {
                id: class.id,
                label: class_label(class, i == last),
                lower_bound: class.lower_bound,
                upper_bound: class.upper_bound,
                class_mark: round_to(mark, FINE_PLACES),
                absolute_frequency: class.frequency,
                relative_frequency: round_to(class.frequency as f64 / n, FINE_PLACES),
                cumulative_absolute: cumulative,
                cumulative_relative: round_to(cumulative as f64 / n, FINE_PLACES),
            }
        })
        .collect()
}

fn class_label(class: &Class, is_last: bool) -> String {
    let lower = round_to(class.lower_bound, SUMMARY_PLACES);
    let upper = round_to(class.upper_bound, SUMMARY_PLACES);
    let close = if is_last { ']' } else { ')' };
    format!("[{lower} - {upper}{close}")
}

/// `lower + ((n/2 - F_before) / f) * width` for the first class whose
/// cumulative frequency reaches `n/2`.
#[expect(clippy::cast_precision_loss)]
fn grouped_median(
    table: &[GroupedFrequencyRow],
    classes: &[Class],
    width: f64,
    n: f64,
) -> Stat {
    let position = n / 2.0;
    let Some(index) = table
        .iter()
        .position(|row| row.cumulative_absolute as f64 >= position)
    else {
        return Stat::Unavailable;
    };
    let class = &classes[index];
    if class.frequency == 0 {
        return Stat::Unavailable;
    }
    let before = index
        .checked_sub(1)
        .map_or(0, |prev| table[prev].cumulative_absolute) as f64;
    let median = class.lower_bound + ((position - before) / class.frequency as f64) * width;
    Stat::rounded(median, FINE_PLACES)
}

/// Interpolated mode of the single modal class, or the midpoints of all
/// classes tied at the highest frequency.
///
/// When the modal class is not higher than both neighbours combined
/// (`d1 + d2 == 0`), the class midpoint is reported instead. This fallback
/// is a heuristic rather than a textbook formula.
#[expect(clippy::cast_precision_loss)]
fn grouped_mode(classes: &[Class], width: f64) -> Mode {
    let Some(top) = classes.iter().map(|c| c.frequency).max().filter(|&f| f > 0) else {
        return Mode::Unavailable;
    };
    let modal = classes
        .iter()
        .enumerate()
        .filter(|(_, c)| c.frequency == top)
        .collect::<Vec<_>>();
    let [(index, class)] = modal.as_slice() else {
        return Mode::from_values(modal.iter().map(|(_, c)| c.midpoint()).collect());
    };

    let frequency_at = |i: Option<usize>| {
        i.and_then(|i| classes.get(i))
            .map_or(0.0, |c| c.frequency as f64)
    };
    let top = top as f64;
    let d1 = top - frequency_at(index.checked_sub(1));
    let d2 = top - frequency_at(Some(index + 1));
    let mode = if d1 + d2 == 0.0 {
        class.midpoint()
    } else {
        round_to(class.lower_bound + (d1 / (d1 + d2)) * width, FINE_PLACES)
    };
    Mode::from_values(vec![mode])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(id: usize, lower_bound: f64, upper_bound: f64, frequency: usize) -> Class {
        Class {
            id,
            lower_bound,
            upper_bound,
            frequency,
        }
    }

    #[test]
    fn test_identical_values() {
        let stats = GroupedStats::from_values([5.0, 5.0, 5.0, 5.0], None).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.class_count, 1);
        assert_eq!(stats.class_width, Stat::Value(1.0));
        assert_eq!(stats.mean, Stat::Value(5.0));
        assert_eq!(stats.median, Stat::Value(5.0));
        assert_eq!(stats.mode, Mode::Single(5.0));
        assert_eq!(stats.population_variance, Stat::Value(0.0));
        assert!(stats.skewness.is_unavailable());
        assert!(stats.kurtosis.is_unavailable());
        assert_eq!(stats.distribution_table.len(), 1);
        assert_eq!(stats.distribution_table[0].label, "[5 - 6]");
        assert_eq!(stats.distribution_table[0].absolute_frequency, 4);
    }

    #[test]
    fn test_fractional_identical_values() {
        let stats = GroupedStats::from_values([0.7; 6], None).unwrap();
        assert_eq!(stats.mean, Stat::Value(0.7));
        assert_eq!(stats.mode, Mode::Single(0.7));
        assert!(stats.skewness.is_unavailable());
        assert!(stats.kurtosis.is_unavailable());
        assert_eq!(stats.skewness_shape, None);

        let stats = GroupedStats::from_values([0.1; 3], None).unwrap();
        assert!(stats.skewness.is_unavailable());
    }

    #[test]
    fn test_even_spread() {
        // classes [0, 2) [2, 4) [4, 6] with frequencies 1, 1, 2
        let stats = GroupedStats::from_values([0.0, 2.0, 4.0, 6.0], Some(3)).unwrap();
        // (1 + 3 + 5 * 2) / 4
        assert_eq!(stats.mean, Stat::Value(3.5));
        // n/2 = 2 reached by class 1: 2 + ((2 - 1) / 1) * 2
        assert_eq!(stats.median, Stat::Value(4.0));
        // single modal class 2: d1 = 1, d2 = 2 -> 4 + (1 / 3) * 2
        assert_eq!(stats.mode, Mode::Single(4.6667));
        // Σ(m - 3.5)^2 f = 6.25 + 0.25 + 2 * 2.25 = 11
        assert_eq!(stats.population_variance, Stat::Value(2.75));
        assert_eq!(stats.sample_variance, Stat::Value(3.6667));
        assert_eq!(stats.q1, Stat::Unavailable);
        assert_eq!(stats.iqr, Stat::Unavailable);
    }

    #[test]
    fn test_distribution_table() {
        let stats = GroupedStats::from_values([0.0, 2.0, 4.0, 6.0], Some(3)).unwrap();
        let table = &stats.distribution_table;
        assert_eq!(table.len(), 3);
        assert_eq!(table[1].label, "[2 - 4)");
        assert_eq!(table[1].class_mark, 3.0);
        assert_eq!(table[1].relative_frequency, 0.25);
        assert_eq!(table[1].cumulative_absolute, 2);
        assert_eq!(table[2].cumulative_relative, 1.0);
        let total = table.iter().map(|r| r.absolute_frequency).sum::<usize>();
        assert_eq!(total, stats.count);
    }

    #[test]
    fn test_shape_uses_raw_sample() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = GroupedStats::from_values(values, None).unwrap();
        let raw = Sample::new(values).unwrap();
        let expected = round_to(shape::sample_skewness(&raw).value().unwrap(), 4);
        assert_eq!(stats.skewness, Stat::Value(expected));
        assert_eq!(stats.skewness, Stat::Value(0.8185));
        assert_eq!(stats.kurtosis, Stat::Value(0.9406));
    }

    #[test]
    fn test_tied_modal_classes() {
        let classes = [
            class(0, 0.0, 2.0, 3),
            class(1, 2.0, 4.0, 1),
            class(2, 4.0, 6.0, 3),
        ];
        assert_eq!(grouped_mode(&classes, 2.0), Mode::Multiple(vec![1.0, 5.0]));
    }

    #[test]
    fn test_lone_class_and_empty_classes() {
        // a lone class has d1 = d2 = f, which lands on its midpoint
        let lone = [class(0, 10.0, 14.0, 6)];
        assert_eq!(grouped_mode(&lone, 4.0), Mode::Single(12.0));

        let classes = [class(0, 0.0, 1.0, 0), class(1, 1.0, 2.0, 0)];
        assert_eq!(grouped_mode(&classes, 1.0), Mode::Unavailable);
    }

    #[test]
    fn test_mode_at_first_class() {
        // d1 = 5 - 0, d2 = 5 - 1 -> 0 + (5 / 9) * 3
        let classes = [class(0, 0.0, 3.0, 5), class(1, 3.0, 6.0, 1)];
        assert_eq!(grouped_mode(&classes, 3.0), Mode::Single(1.6667));
    }

    #[test]
    fn test_median_skips_empty_classes() {
        let classes = [
            class(0, 0.0, 1.0, 2),
            class(1, 1.0, 2.0, 0),
            class(2, 2.0, 3.0, 2),
        ];
        let marks = classes.iter().map(Class::midpoint).collect::<Vec<_>>();
        let table = distribution_table(&classes, &marks, 4);
        // cumulative 2 reaches n/2 = 2 at class 0: 0 + (2 / 2) * 1
        assert_eq!(grouped_median(&table, &classes, 1.0, 4.0), Stat::Value(1.0));
    }

    #[test]
    fn test_zero_total_is_insufficient() {
        let sample = Sample::new([1.0, 2.0]).unwrap();
        let scheme = ClassScheme {
            classes: vec![class(0, 1.0, 2.0, 0)],
            min: 1.0,
            max: 2.0,
            range: 1.0,
            class_count: 1,
            class_width: 1.0,
            class_marks: vec![1.5],
        };
        let err = GroupedStats::from_scheme(&sample, &scheme).unwrap_err();
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn test_single_value_has_no_sample_variance() {
        let stats = GroupedStats::from_values([3.0], None).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, Stat::Value(3.0));
        assert!(stats.sample_variance.is_unavailable());
        assert!(stats.sample_std_dev.is_unavailable());
        assert_eq!(stats.population_variance, Stat::Value(0.0));
    }
}
