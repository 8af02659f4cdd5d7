//! Distribution shape: skewness, kurtosis and their qualitative reading.
//!
//! Both coefficients use the bias-corrected sample formulas that spreadsheets
//! report (`SKEW` and `KURT`), always over the raw ungrouped values.

use serde::{Deserialize, Serialize};

use crate::{sample::Sample, value::Stat};

/// Coefficients with an absolute value up to this threshold read as "normal-like".
pub const SHAPE_THRESHOLD: f64 = 0.5;

/// Adjusted Fisher-Pearson sample skewness.
///
/// `n * Σ(x - mean)^3 / ((n - 1) * (n - 2) * s^3)` where `s` is the sample
/// standard deviation. Unavailable for fewer than 3 values or zero variance.
///
/// # Examples
///
/// ```
/// use qualstat_stats::{sample::Sample, shape::sample_skewness};
///
/// let sample = Sample::new([1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(sample_skewness(&sample).value(), Some(0.0));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_skewness(sample: &Sample) -> Stat {
    let count = sample.count();
    if count < 3 || sample.is_constant() {
        return Stat::Unavailable;
    }
    let n = count as f64;
    let sample_variance = sample.central_sum(2) / (n - 1.0);
    let cubed_std_dev = sample_variance.sqrt().powi(3);
    Stat::new(n * sample.central_sum(3) / ((n - 1.0) * (n - 2.0) * cubed_std_dev))
}

/// Sample excess kurtosis.
///
/// `n(n+1) / ((n-1)(n-2)(n-3)) * Σ(x - mean)^4 / s^4 - 3(n-1)^2 / ((n-2)(n-3))`
/// where `s^2` is the sample variance. Unavailable for fewer than 4 values or
/// zero variance.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn excess_kurtosis(sample: &Sample) -> Stat {
    let count = sample.count();
    if count < 4 || sample.is_constant() {
        return Stat::Unavailable;
    }
    let n = count as f64;
    let sample_variance = sample.central_sum(2) / (n - 1.0);
    let scale = (n * (n + 1.0)) / ((n - 1.0) * (n - 2.0) * (n - 3.0));
    let correction = 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0));
    Stat::new(scale * (sample.central_sum(4) / sample_variance.powi(2)) - correction)
}

/// Qualitative direction of a skewness coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Skewness {
    /// The right tail is longer; values stretch towards higher numbers.
    #[display("positively skewed")]
    Positive,
    /// The left tail is longer; values stretch towards lower numbers.
    #[display("negatively skewed")]
    Negative,
    #[display("approximately symmetric")]
    Symmetric,
}

impl Skewness {
    /// Classifies a coefficient; `None` when it is unavailable.
    #[must_use]
    pub fn classify(coefficient: Stat) -> Option<Self> {
        let value = coefficient.value()?;
        Some(if value > SHAPE_THRESHOLD {
            Self::Positive
        } else if value < -SHAPE_THRESHOLD {
            Self::Negative
        } else {
            Self::Symmetric
        })
    }
}

/// Qualitative peakedness of an excess kurtosis coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Kurtosis {
    /// Sharper peak and heavier tails than a normal distribution.
    #[display("leptokurtic")]
    Leptokurtic,
    /// Flatter peak and lighter tails than a normal distribution.
    #[display("platykurtic")]
    Platykurtic,
    #[display("mesokurtic")]
    Mesokurtic,
}

impl Kurtosis {
    /// Classifies an excess kurtosis coefficient; `None` when it is unavailable.
    #[must_use]
    pub fn classify(coefficient: Stat) -> Option<Self> {
        let value = coefficient.value()?;
        Some(if value > SHAPE_THRESHOLD {
            Self::Leptokurtic
        } else if value < -SHAPE_THRESHOLD {
            Self::Platykurtic
        } else {
            Self::Mesokurtic
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(actual: Stat, expected: f64) -> bool {
        actual.value().is_some_and(|v| (v - expected).abs() < 1e-4)
    }

    #[test]
    fn test_reference_values() {
        let sample = Sample::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!(approx_eq(sample_skewness(&sample), 0.818_5));
        assert!(approx_eq(excess_kurtosis(&sample), 0.940_6));
    }

    #[test]
    fn test_small_samples_are_unavailable() {
        let two = Sample::new([1.0, 2.0]).unwrap();
        assert!(sample_skewness(&two).is_unavailable());
        let three = Sample::new([1.0, 2.0, 4.0]).unwrap();
        assert!(sample_skewness(&three).is_value());
        assert!(excess_kurtosis(&three).is_unavailable());
    }

    #[test]
    fn test_zero_variance_is_unavailable() {
        let flat = Sample::new([5.0; 6]).unwrap();
        assert!(sample_skewness(&flat).is_unavailable());
        assert!(excess_kurtosis(&flat).is_unavailable());
    }

    #[test]
    fn test_fractional_constant_is_unavailable() {
        // the mean of these is not exactly 0.7, so the deviations are tiny but nonzero
        for values in [vec![0.7; 3], vec![0.7; 6], vec![0.1; 5]] {
            let flat = Sample::new(values).unwrap();
            assert!(sample_skewness(&flat).is_unavailable());
            assert!(excess_kurtosis(&flat).is_unavailable());
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(Skewness::classify(Stat::Value(0.82)), Some(Skewness::Positive));
        assert_eq!(Skewness::classify(Stat::Value(-0.51)), Some(Skewness::Negative));
        assert_eq!(Skewness::classify(Stat::Value(0.5)), Some(Skewness::Symmetric));
        assert_eq!(Skewness::classify(Stat::Unavailable), None);
        assert_eq!(Kurtosis::classify(Stat::Value(0.94)), Some(Kurtosis::Leptokurtic));
        assert_eq!(Kurtosis::classify(Stat::Value(-1.2)), Some(Kurtosis::Platykurtic));
        assert_eq!(Kurtosis::classify(Stat::Value(0.0)), Some(Kurtosis::Mesokurtic));
    }
}
