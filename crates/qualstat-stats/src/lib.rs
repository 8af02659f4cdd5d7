//! Descriptive statistics and statistical process control for quality data.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: central tendency, dispersion, quartiles, shape and a frequency table
//! - **Class generation**: equal-width classes sized with Sturges' rule
//! - **Grouped statistics**: estimates computed from a grouped frequency distribution
//! - **Control charts**: X-bar/R limits from the standard SPC factor table
//!
//! Every computation is a pure function of its input. Non-finite values are
//! discarded before computing, and statistics that are undefined for the input
//! are reported as [`value::Stat::Unavailable`] rather than NaN.
//!
//! # Modules
//!
//! - [`descriptive`]: Statistics of an ungrouped sample
//! - [`classes`]: Class boundaries and class frequencies
//! - [`grouped`]: Statistics of grouped data
//! - [`control_chart`]: X-bar/R control charts
//! - [`factors`]: The A2/D3/D4 factor table
//! - [`request`] / [`response`]: Serializable inputs and outputs
//!
//! # Examples
//!
//! ## Describing a sample
//!
//! ```
//! use qualstat_stats::{descriptive::DescriptiveStats, value::Stat};
//!
//! let stats = DescriptiveStats::from_values([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
//! assert_eq!(stats.mean, Stat::Value(5.0));
//! assert_eq!(stats.q3, Stat::Value(5.5));
//! ```
//!
//! ## Grouping a sample
//!
//! ```
//! use qualstat_stats::grouped::GroupedStats;
//!
//! let values = [1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 24.0, 24.0];
//! let stats = GroupedStats::from_values(values, None).unwrap();
//! assert_eq!(stats.class_count, 4);
//! let total = stats.distribution_table.iter().map(|row| row.absolute_frequency).sum::<usize>();
//! assert_eq!(total, values.len());
//! ```
//!
//! ## Building a control chart
//!
//! ```
//! use qualstat_stats::control_chart::XBarRChart;
//!
//! let subgroups = [[10.0, 12.0, 11.0], [11.0, 13.0, 12.0], [9.0, 11.0, 10.0]];
//! let chart = XBarRChart::new(subgroups, 3).unwrap();
//! assert_eq!(chart.grand_mean, 11.0);
//! assert_eq!(chart.grand_range_mean, 2.0);
//! assert!((chart.x_bar_limits.upper - 13.046).abs() < 1e-9);
//! ```
//!
//! ## Serializing a failed request
//!
//! ```
//! use qualstat_stats::request::ControlChartRequest;
//!
//! let request = ControlChartRequest { subgroups: vec![vec![1.0; 25]], subgroup_size: 25 };
//! let json = serde_json::to_value(request.respond()).unwrap();
//! assert_eq!(json["kind"], "unsupported_subgroup_size");
//! assert_eq!(json["x_bar_limits"], serde_json::json!({}));
//! ```

pub mod classes;
pub mod control_chart;
pub mod descriptive;
pub mod error;
pub mod factors;
pub mod frequency;
pub mod grouped;
pub mod quantile;
pub mod request;
pub mod response;
pub mod rounding;
pub mod sample;
pub mod shape;
pub mod value;

pub use self::error::{ErrorKind, StatsError};
