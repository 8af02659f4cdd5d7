//! Control chart factors for X-bar/R charts.
//!
//! Standard SPC constants for subgroup sizes 2 to 20:
//!
//! - `A2`: X-bar chart limits, `X-double-bar ± A2 * R-bar`
//! - `D3`: R chart lower limit, `D3 * R-bar`
//! - `D4`: R chart upper limit, `D4 * R-bar`

use serde::{Deserialize, Serialize};

/// Smallest subgroup size with tabulated factors.
pub const MIN_SUBGROUP_SIZE: usize = 2;

/// Largest subgroup size with tabulated factors.
pub const MAX_SUBGROUP_SIZE: usize = 20;

/// The X-bar/R factors for one subgroup size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlFactors {
    pub a2: f64,
    pub d3: f64,
    pub d4: f64,
}

const fn factors(a2: f64, d3: f64, d4: f64) -> ControlFactors {
    ControlFactors { a2, d3, d4 }
}

/// Indexed by `n - MIN_SUBGROUP_SIZE`.
const FACTOR_TABLE: [ControlFactors; MAX_SUBGROUP_SIZE - MIN_SUBGROUP_SIZE + 1] = [
    factors(1.880, 0.0, 3.268),
    factors(1.023, 0.0, 2.574),
    factors(0.729, 0.0, 2.282),
    factors(0.577, 0.0, 2.114),
    factors(0.483, 0.0, 2.004),
    factors(0.419, 0.076, 1.924),
    factors(0.373, 0.136, 1.864),
    factors(0.337, 0.184, 1.816),
    factors(0.308, 0.223, 1.777),
    factors(0.285, 0.256, 1.744),
    factors(0.266, 0.283, 1.717),
    factors(0.249, 0.307, 1.693),
    factors(0.235, 0.328, 1.672),
    factors(0.223, 0.347, 1.653),
    factors(0.212, 0.363, 1.637),
    factors(0.203, 0.378, 1.622),
    factors(0.194, 0.391, 1.608),
    factors(0.187, 0.403, 1.597),
    factors(0.180, 0.415, 1.585),
];

impl ControlFactors {
    /// Looks up the factors for subgroups of `size` measurements.
    ///
    /// Returns `None` outside `2..=20`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qualstat_stats::factors::ControlFactors;
    ///
    /// let f = ControlFactors::for_subgroup_size(4).unwrap();
    /// assert_eq!((f.a2, f.d3, f.d4), (0.729, 0.0, 2.282));
    /// assert!(ControlFactors::for_subgroup_size(25).is_none());
    /// ```
    #[must_use]
    pub fn for_subgroup_size(size: usize) -> Option<Self> {
        let index = size.checked_sub(MIN_SUBGROUP_SIZE)?;
        FACTOR_TABLE.get(index).copied()
    }
}
