//! Request records for the three computations.
//!
//! Requests deserialize from JSON, so they can be read from a file or a
//! message body and evaluated with [`DescriptiveRequest::compute`] and friends.

use serde::{Deserialize, Serialize};

use crate::{
    control_chart::XBarRChart, descriptive::DescriptiveStats, error::StatsError,
    grouped::GroupedStats, response::Response,
};

/// Descriptive statistics of a list of numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveRequest {
    pub numbers: Vec<f64>,
}

impl DescriptiveRequest {
    /// # Errors
    ///
    /// See [`DescriptiveStats::from_values`].
    pub fn compute(&self) -> Result<DescriptiveStats, StatsError> {
        DescriptiveStats::from_values(self.numbers.iter().copied())
    }

    #[must_use]
    pub fn respond(&self) -> Response<DescriptiveStats> {
        Response(self.compute())
    }
}

/// Grouped statistics of a list of numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedRequest {
    pub numbers: Vec<f64>,
    /// Overrides the Sturges class count when set.
    #[serde(default)]
    pub desired_class_count: Option<usize>,
}

impl GroupedRequest {
    /// # Errors
    ///
    /// See [`GroupedStats::from_values`].
    pub fn compute(&self) -> Result<GroupedStats, StatsError> {
        GroupedStats::from_values(self.numbers.iter().copied(), self.desired_class_count)
    }

    #[must_use]
    pub fn respond(&self) -> Response<GroupedStats> {
        Response(self.compute())
    }
}

/// An X-bar/R chart over subgroups of equal size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlChartRequest {
    pub subgroups: Vec<Vec<f64>>,
    pub subgroup_size: usize,
}

impl ControlChartRequest {
    /// # Errors
    ///
    /// See [`XBarRChart::new`].
    pub fn compute(&self) -> Result<XBarRChart, StatsError> {
        XBarRChart::new(&self.subgroups, self.subgroup_size)
    }

    #[must_use]
    pub fn respond(&self) -> Response<XBarRChart> {
        Response(self.compute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Stat;

    #[test]
    fn test_descriptive_request() {
        let request: DescriptiveRequest =
            serde_json::from_str(r#"{"numbers": [2, 4, 4, 4, 5, 5, 7, 9]}"#).unwrap();
        let stats = request.compute().unwrap();
        assert_eq!(stats.mean, Stat::Value(5.0));
        assert_eq!(stats.median, Stat::Value(4.5));
    }

    #[test]
    fn test_grouped_request_defaults_class_count() {
        let request: GroupedRequest =
            serde_json::from_str(r#"{"numbers": [5, 5, 5, 5]}"#).unwrap();
        assert_eq!(request.desired_class_count, None);
        let stats = request.compute().unwrap();
        assert_eq!(stats.class_count, 1);
        assert_eq!(stats.mean, Stat::Value(5.0));
    }

    #[test]
    fn test_oversized_class_count_is_rejected() {
        let request = GroupedRequest {
            numbers: vec![1.0, 2.0, 3.0],
            desired_class_count: Some(usize::MAX),
        };
        let err = request.compute().unwrap_err();
        assert!(err.is_invalid_class_configuration());
    }

    #[test]
    fn test_control_chart_request() {
        let request = ControlChartRequest {
            subgroups: vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]],
            subgroup_size: 3,
        };
        let err = request.compute().unwrap_err();
        assert!(err.is_subgroup_size_mismatch());
        assert!(!request.respond().is_ok());
    }

    #[test]
    fn test_compute_is_repeatable() {
        let request = GroupedRequest {
            numbers: vec![3.5, 1.25, 8.0, 2.0, 2.0, 6.75, 4.0],
            desired_class_count: Some(4),
        };
        assert_eq!(request.compute(), request.compute());
    }
}
