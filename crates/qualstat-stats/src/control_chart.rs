//! X-bar/R control charts for subgrouped process data.
//!
//! Each subgroup contributes one point to the X-bar chart (its mean) and one
//! point to the R chart (its range). Limits come from the grand mean, the mean
//! range and the [`ControlFactors`] of the subgroup size:
//!
//! ```text
//! X-bar: UCL = X̿ + A2 * R̄, CL = X̿, LCL = X̿ - A2 * R̄
//! R:     UCL = D4 * R̄,     CL = R̄, LCL = D3 * R̄
//! ```
//!
//! Values are not rounded.

use serde::{Deserialize, Serialize};

use crate::{error::StatsError, factors::ControlFactors};

/// Center line and control limits of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    pub center: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ControlLimits {
    fn is_finite(&self) -> bool {
        self.center.is_finite() && self.lower.is_finite() && self.upper.is_finite()
    }

    /// Returns `true` if `value` lies within `[lower, upper]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

/// One plotted subgroup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubgroupPoint {
    /// `"Sample {i}"`, 1-based.
    pub label: String,
    pub mean: f64,
    pub range: f64,
    pub x_bar_limits: ControlLimits,
    pub range_limits: ControlLimits,
}

/// A computed X-bar/R chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XBarRChart {
    pub subgroup_size: usize,
    pub factors: ControlFactors,
    pub subgroups: Vec<SubgroupPoint>,
    /// Mean of the subgroup means (X̿).
    pub grand_mean: f64,
    /// Mean of the subgroup ranges (R̄).
    pub grand_range_mean: f64,
    pub x_bar_limits: ControlLimits,
    pub range_limits: ControlLimits,
}

impl XBarRChart {
    /// Builds the chart from subgroups of `subgroup_size` measurements.
    ///
    /// Non-finite measurements are dropped from each subgroup before its
    /// length is checked.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// - [`StatsError::InputEmpty`] if there are no subgroups.
    /// - [`StatsError::UnsupportedSubgroupSize`] if `subgroup_size` is outside 2 to 20.
    /// - [`StatsError::SubgroupSizeMismatch`] for the first subgroup whose valid
    ///   measurement count differs from `subgroup_size`.
    /// - [`StatsError::InsufficientData`] if an aggregate is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use qualstat_stats::control_chart::XBarRChart;
    ///
    /// let chart = XBarRChart::new([[1.0, 2.0, 3.0, 4.0], [2.0, 3.0, 4.0, 5.0]], 4).unwrap();
    /// assert_eq!(chart.grand_mean, 3.0);
    /// assert_eq!(chart.grand_range_mean, 3.0);
    /// assert_eq!(chart.range_limits.lower, 0.0);
    /// assert_eq!(chart.subgroups[1].label, "Sample 2");
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn new<I, S>(subgroups: I, subgroup_size: usize) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[f64]>,
    {
        let subgroups = subgroups
            .into_iter()
            .map(|subgroup| {
                subgroup
                    .as_ref()
                    .iter()
                    .copied()
                    .filter(|x| x.is_finite())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        if subgroups.is_empty() {
            return Err(StatsError::InputEmpty { input: "subgroups" });
        }

        let factors = ControlFactors::for_subgroup_size(subgroup_size).ok_or(
            StatsError::UnsupportedSubgroupSize {
                size: subgroup_size,
            },
        )?;
        log::debug!(
            "x-bar/r chart: {} subgroups of {subgroup_size}, factors {factors:?}",
            subgroups.len()
        );

        if let Some((index, subgroup)) = subgroups
            .iter()
            .enumerate()
            .find(|(_, subgroup)| subgroup.len() != subgroup_size)
        {
            return Err(StatsError::SubgroupSizeMismatch {
                sample: index + 1,
                expected: subgroup_size,
                actual: subgroup.len(),
            });
        }

        let n = subgroup_size as f64;
        let points = subgroups
            .iter()
            .map(|subgroup| (subgroup.iter().sum::<f64>() / n, subgroup_range(subgroup)))
            .collect::<Vec<_>>();

        let k = points.len() as f64;
        let grand_mean = points.iter().map(|(mean, _)| mean).sum::<f64>() / k;
        let grand_range_mean = points.iter().map(|(_, range)| range).sum::<f64>() / k;

        let x_bar_limits = ControlLimits {
            center: grand_mean,
            lower: grand_mean - factors.a2 * grand_range_mean,
            upper: grand_mean + factors.a2 * grand_range_mean,
        };
        let range_limits = ControlLimits {
            center: grand_range_mean,
            lower: factors.d3 * grand_range_mean,
            upper: factors.d4 * grand_range_mean,
        };
        if !x_bar_limits.is_finite() || !range_limits.is_finite() {
            return Err(StatsError::InsufficientData {
                reason: "control limits are not finite",
            });
        }

        let subgroups = points
            .into_iter()
            .enumerate()
            .map(|(index, (mean, range))| SubgroupPoint {
                label: format!("Sample {}", index + 1),
                mean,
                range,
                x_bar_limits,
                range_limits,
            })
            .collect();

        Ok(Self {
            subgroup_size,
            factors,
            subgroups,
            grand_mean,
            grand_range_mean,
            x_bar_limits,
            range_limits,
        })
    }

    /// Labels of subgroups whose mean or range falls outside its limits.
    #[must_use]
    pub fn out_of_control(&self) -> Vec<&str> {
        self.subgroups
            .iter()
            .filter(|point| {
                !point.x_bar_limits.contains(point.mean) || !point.range_limits.contains(point.range)
            })
            .map(|point| point.label.as_str())
            .collect()
    }
}

/// `max - min` of a non-empty subgroup.
fn subgroup_range(subgroup: &[f64]) -> f64 {
    let max = subgroup.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = subgroup.iter().copied().fold(f64::INFINITY, f64::min);
    max - min
}
