//! Result values that carry an explicit "unavailable" marker.
//!
//! Statistics that are undefined for a sample (variance of a single value,
//! kurtosis of three values, a division by zero) are reported as
//! [`Stat::Unavailable`] instead of leaking NaN or infinities to callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rounding::round_to;

/// A single reported statistic.
///
/// Serializes as a JSON number, or `null` when unavailable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(untagged)]
pub enum Stat {
    #[display("{_0}")]
    Value(f64),
    #[default]
    #[display("N/A")]
    Unavailable,
}

impl Stat {
    /// Wraps `value`, mapping NaN and infinities to [`Stat::Unavailable`].
    ///
    /// # Examples
    ///
    /// ```
    /// use qualstat_stats::value::Stat;
    ///
    /// assert_eq!(Stat::new(1.5), Stat::Value(1.5));
    /// assert_eq!(Stat::new(0.0 / 0.0), Stat::Unavailable);
    /// ```
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self::Value(value)
        } else {
            Self::Unavailable
        }
    }

    /// Rounds `value` to `places` decimals and wraps it.
    #[must_use]
    pub fn rounded(value: f64, places: i32) -> Self {
        Self::new(round_to(value, places))
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unavailable => None,
        }
    }
}

impl From<Option<f64>> for Stat {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unavailable, Self::new)
    }
}

/// The most frequent value(s) of a dataset.
///
/// Serializes as a number for a single mode, an array when several values tie,
/// and `null` when unavailable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(untagged)]
pub enum Mode {
    Single(f64),
    Multiple(Vec<f64>),
    #[default]
    Unavailable,
}

impl Mode {
    /// Builds a mode from the tied values, dropping non-finite entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use qualstat_stats::value::Mode;
    ///
    /// assert_eq!(Mode::from_values(vec![4.0]), Mode::Single(4.0));
    /// assert_eq!(Mode::from_values(vec![1.0, 2.0]).to_string(), "1, 2");
    /// assert_eq!(Mode::from_values(vec![]), Mode::Unavailable);
    /// ```
    #[must_use]
    pub fn from_values(mut values: Vec<f64>) -> Self {
        values.retain(|v| v.is_finite());
        match values.as_slice() {
            [] => Self::Unavailable,
            [single] => Self::Single(*single),
            _ => Self::Multiple(values),
        }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
            Self::Unavailable => &[],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unavailable() {
            return f.write_str("N/A");
        }
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
