//! Automatic class (bin) generation for grouped frequency distributions.
//!
//! # Algorithm
//!
//! 1. `range = round(max - min, 4)`
//! 2. Class count `k`: the requested count, or Sturges' rule
//!    `round(1 + 3.3 * log10(n))` with a floor of [`MIN_CLASS_COUNT`]
//! 3. Class width `w = round(range / k, 4)`
//! 4. Bounds `min + i * w`, rounded to 4 decimals; the last upper bound is
//!    snapped to the true maximum when the nominal one misses it
//! 5. Values are counted into `[lower, upper)` classes, with the last class
//!    closed on both ends, using [`BOUNDARY_TOLERANCE`]
//! 6. Any count drift caused by rounded bounds is folded into the last class
//!
//! Classification within [`BOUNDARY_TOLERANCE`] of a bound is approximate by
//! nature: a value sitting exactly on an interior bound belongs to the upper
//! class, but one that is a rounding step away from it may not.
//!
//! # Examples
//!
//! ```
//! use qualstat_stats::{classes::ClassScheme, sample::Sample};
//!
//! let sample = Sample::new([1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
//! let scheme = ClassScheme::generate(&sample, None).unwrap();
//!
//! // Sturges: round(1 + 3.3 * log10(8)) = 4
//! assert_eq!(scheme.class_count, 4);
//! assert_eq!(scheme.class_width, 1.5);
//! let total: usize = scheme.classes.iter().map(|c| c.frequency).sum();
//! assert_eq!(total, 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::StatsError,
    rounding::{FINE_PLACES, round_to},
    sample::Sample,
};

/// Tolerance used when comparing values against class bounds.
pub const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Width used when the computed width rounds to zero for a non-zero range.
pub const MIN_CLASS_WIDTH: f64 = 1e-4;

/// Lower bound on the class count chosen by Sturges' rule.
pub const MIN_CLASS_COUNT: usize = 3;

/// Largest class count accepted from a caller.
pub const MAX_CLASS_COUNT: usize = 1_000;

/// A contiguous numeric interval of a grouped distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Sequential, 0-based position of the class.
    pub id: usize,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Number of sample values counted in this class.
    pub frequency: usize,
}

impl Class {
    /// Midpoint of the bounds, rounded to 4 decimals.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        round_to((self.lower_bound + self.upper_bound) / 2.0, FINE_PLACES)
    }

    /// Whether `value` falls in this class.
    ///
    /// Classes are half-open `[lower, upper)` except the last one of a
    /// scheme, which is closed `[lower, upper]`.
    #[must_use]
    pub fn contains(&self, value: f64, is_last: bool) -> bool {
        let above_lower = value >= self.lower_bound - BOUNDARY_TOLERANCE;
        if is_last {
            above_lower && value <= self.upper_bound + BOUNDARY_TOLERANCE
        } else {
            above_lower && value < self.upper_bound - BOUNDARY_TOLERANCE
        }
    }
}

/// A binning scheme derived from a sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScheme {
    /// Classes ordered by id, frequencies summing to the sample size.
    pub classes: Vec<Class>,
    /// Sample minimum, rounded to 4 decimals.
    pub min: f64,
    /// Sample maximum, rounded to 4 decimals.
    pub max: f64,
    /// `max - min`, rounded to 4 decimals.
    pub range: f64,
    pub class_count: usize,
    pub class_width: f64,
    /// Representative value of each class, in class order.
    pub class_marks: Vec<f64>,
}

impl ClassScheme {
    /// Generates classes for `sample`.
    ///
    /// `desired_class_count` overrides Sturges' rule when it is `Some` and
    /// positive.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidClassConfiguration`] if more than
    /// [`MAX_CLASS_COUNT`] classes are requested, if the computed
    /// bounds are not finite or not strictly increasing, or if reconciling the
    /// counts would leave a class with a negative frequency.
    pub fn generate(
        sample: &Sample,
        desired_class_count: Option<usize>,
    ) -> Result<Self, StatsError> {
        let n = sample.count();
        let min = sample.min();
        let max = sample.max();
        let range = round_to(max - min, FINE_PLACES);

        let class_count = desired_class_count
            .filter(|&k| k > 0)
            .unwrap_or_else(|| sturges_class_count(n));
        if class_count > MAX_CLASS_COUNT {
            return Err(invalid(format!(
                "{class_count} classes requested, at most {MAX_CLASS_COUNT} are supported"
            )));
        }
        #[expect(clippy::cast_precision_loss)]
        let mut class_width = round_to(range / class_count as f64, FINE_PLACES);

        if class_width == 0.0 && range == 0.0 {
            return Self::single_value(min, max, n);
        }
        if class_width == 0.0 {
            class_width = if range > 0.0 { range } else { MIN_CLASS_WIDTH };
        }
        if !class_width.is_finite() {
            return Err(invalid(format!("class width {class_width} is not finite")));
        }
        log::debug!(
            "generating {class_count} classes of width {class_width} over [{min}, {max}] (n = {n})"
        );

        let mut classes = (0..class_count)
            .map(|id| {
                #[expect(clippy::cast_precision_loss)]
                let (i, next) = (id as f64, (id + 1) as f64);
                Class {
                    id,
                    lower_bound: round_to(min + i * class_width, FINE_PLACES),
                    upper_bound: round_to(min + next * class_width, FINE_PLACES),
                    frequency: 0,
                }
            })
            .collect::<Vec<_>>();
        snap_last_upper_bound(&mut classes, max);
        validate_bounds(&classes)?;

        let last = class_count - 1;
        for (i, class) in classes.iter_mut().enumerate() {
            class.frequency = sample
                .values()
                .iter()
                .filter(|&&value| class.contains(value, i == last))
                .count();
        }
        reconcile_frequencies(&mut classes, n)?;

        let class_marks = classes.iter().map(Class::midpoint).collect();
        Ok(Self {
            classes,
            min: round_to(min, FINE_PLACES),
            max: round_to(max, FINE_PLACES),
            range,
            class_count,
            class_width,
            class_marks,
        })
    }

    /// Whether this scheme is the single unit-width class produced for a
    /// sample whose values are all identical.
    #[must_use]
    pub fn is_single_value(&self) -> bool {
        self.range == 0.0 && self.class_count == 1
    }

    /// All values are identical: one class `[min, min + 1)` holding them all.
    ///
    /// The class mark is the common value itself, so grouped statistics
    /// reproduce it exactly instead of the nominal midpoint `min + 0.5`.
    fn single_value(min: f64, max: f64, n: usize) -> Result<Self, StatsError> {
        let lower_bound = round_to(min, FINE_PLACES);
        let upper_bound = round_to(min + 1.0, FINE_PLACES);
        let class_width = round_to(upper_bound - lower_bound, FINE_PLACES);
        if class_width <= 0.0 || !class_width.is_finite() {
            return Err(invalid(format!(
                "cannot build a unit-width class at {min}"
            )));
        }
        log::debug!("all {n} values equal {min}; using a single class");
        Ok(Self {
            classes: vec![Class {
                id: 0,
                lower_bound,
                upper_bound,
                frequency: n,
            }],
            min: lower_bound,
            max: round_to(max, FINE_PLACES),
            range: 0.0,
            class_count: 1,
            class_width,
            class_marks: vec![lower_bound],
        })
    }
}

/// Sturges' rule, `round(1 + 3.3 * log10(n))`, floored at [`MIN_CLASS_COUNT`].
///
/// # Examples
///
/// ```
/// use qualstat_stats::classes::sturges_class_count;
///
/// assert_eq!(sturges_class_count(1), 3);
/// assert_eq!(sturges_class_count(30), 6);
/// assert_eq!(sturges_class_count(100), 8);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn sturges_class_count(n: usize) -> usize {
    let k = (1.0 + 3.3 * (n as f64).log10()).round();
    (k.max(0.0) as usize).max(MIN_CLASS_COUNT)
}

/// Moves the last upper bound onto the true maximum when the nominal bound
/// falls short of it, or overshoots it while the maximum still lies inside
/// the last class.
fn snap_last_upper_bound(classes: &mut [Class], max: f64) {
    let Some(last) = classes.last_mut() else {
        return;
    };
    let falls_short = max > last.upper_bound + BOUNDARY_TOLERANCE;
    let overshoots = max < last.upper_bound - BOUNDARY_TOLERANCE
        && max >= last.lower_bound - BOUNDARY_TOLERANCE;
    if falls_short || overshoots {
        let snapped = round_to(max, FINE_PLACES);
        log::trace!(
            "snapping last upper bound {} to maximum {snapped}",
            last.upper_bound
        );
        last.upper_bound = snapped;
    }
}

fn validate_bounds(classes: &[Class]) -> Result<(), StatsError> {
    for class in classes {
        if !class.lower_bound.is_finite() || !class.upper_bound.is_finite() {
            return Err(invalid(format!("class {} has non-finite bounds", class.id)));
        }
        if class.lower_bound >= class.upper_bound {
            return Err(invalid(format!(
                "class {} has empty interval [{}, {}]",
                class.id, class.lower_bound, class.upper_bound
            )));
        }
    }
    Ok(())
}

/// Folds the difference between `n` and the counted total into the last class.
fn reconcile_frequencies(classes: &mut [Class], n: usize) -> Result<(), StatsError> {
    let counted = classes.iter().map(|c| c.frequency).sum::<usize>();
    if counted == n {
        return Ok(());
    }
    let Some(last) = classes.last_mut() else {
        return Err(invalid("no classes to hold the values".to_owned()));
    };
    log::debug!("reconciling class frequencies: counted {counted}, expected {n}");
    last.frequency = if counted < n {
        last.frequency + (n - counted)
    } else {
        let excess = counted - n;
        last.frequency
            .checked_sub(excess)
            .ok_or_else(|| invalid(format!("{excess} values counted more than once")))?
    };
    Ok(())
}

fn invalid(reason: String) -> StatsError {
    StatsError::InvalidClassConfiguration { reason }
}
