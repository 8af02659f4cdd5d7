use crate::error::StatsError;

/// A non-empty sequence of finite numbers, in input order.
///
/// This is the entry point of every descriptive and grouped computation:
/// non-finite entries are discarded on construction, so downstream code can
/// rely on `len() >= 1` and on every element being finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Collects `values`, dropping NaN and infinities.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InputEmpty`] if no finite value remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use qualstat_stats::sample::Sample;
    ///
    /// let sample = Sample::new([1.0, f64::NAN, 3.0]).unwrap();
    /// assert_eq!(sample.values(), &[1.0, 3.0]);
    /// assert!(Sample::new([f64::NAN]).is_err());
    /// ```
    pub fn new<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        if values.is_empty() {
            return Err(StatsError::InputEmpty { input: "sample" });
        }
        Ok(Self { values })
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values; always at least one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A copy of the values sorted in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Whether every value is the same, so the sample has no spread.
    ///
    /// Compared exactly rather than through the variance, which can come out
    /// a few ulps above zero for fractional constants.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.max() - self.min() == 0.0
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Sum of `(x - mean)^power` over all values.
    #[must_use]
    pub fn central_sum(&self, power: i32) -> f64 {
        let mean = self.mean();
        self.values.iter().map(|x| (x - mean).powi(power)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        let err = Sample::new(Vec::new()).unwrap_err();
        assert!(err.is_input_empty());
        let err = Sample::new([f64::INFINITY, f64::NAN]).unwrap_err();
        assert!(err.is_input_empty());
    }

    #[test]
    fn test_basic_aggregates() {
        let sample = Sample::new([4.0, 2.0, 9.0, 5.0]).unwrap();
        assert_eq!(sample.count(), 4);
        assert_eq!(sample.min(), 2.0);
        assert_eq!(sample.max(), 9.0);
        assert_eq!(sample.mean(), 5.0);
        assert_eq!(sample.sorted(), vec![2.0, 4.0, 5.0, 9.0]);
        // deviations: -1, -3, 4, 0
        assert_eq!(sample.central_sum(2), 26.0);
        assert_eq!(sample.central_sum(3), 36.0);
    }

    #[test]
    fn test_constant_detection() {
        assert!(Sample::new([0.7; 6]).unwrap().is_constant());
        assert!(Sample::new([3.0]).unwrap().is_constant());
        assert!(!Sample::new([0.7, 0.700_000_1]).unwrap().is_constant());
    }

    #[test]
    fn test_keeps_input_order() {
        let sample = Sample::new([3.0, 1.0, 2.0]).unwrap();
        assert_eq!(sample.values(), &[3.0, 1.0, 2.0]);
    }
}
