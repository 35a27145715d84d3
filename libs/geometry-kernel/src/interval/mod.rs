//! # Interval
//!
//! Real intervals with explicit bound inclusion, and the even sampling used to
//! space discretized rays.
//!
//! ## Sampling
//!
//! [`Interval::generate_array_with_size`] returns `n` evenly spaced values that
//! respect the bound inclusion: a closed interval includes both bounds, an
//! open interval neither, and the half-open variants exactly one.
//!
//! ```rust
//! use geometry_kernel::Interval;
//!
//! let turns = Interval::half_open_right(0.0, 360.0).generate_array_with_size(4).unwrap();
//! assert_eq!(turns, vec![0.0, 90.0, 180.0, 270.0]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ensure_defined, GeometryError, GeometryResult};

/// Bound inclusion of an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalType {
    /// `[lower, upper]`
    Closed,
    /// `(lower, upper)`
    Open,
    /// `(lower, upper]`
    HalfOpenLeft,
    /// `[lower, upper)`
    HalfOpenRight,
}

/// A real interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interval {
    lower: f64,
    upper: f64,
    kind: IntervalType,
}

impl Interval {
    /// Creates an interval. `lower` must not exceed `upper`.
    pub fn new(lower: f64, upper: f64, kind: IntervalType) -> GeometryResult<Self> {
        if lower.is_finite() && upper.is_finite() && lower > upper {
            return Err(GeometryError::invalid_argument(format!(
                "lower bound [{lower}] greater than upper bound [{upper}]"
            )));
        }
        Ok(Self { lower, upper, kind })
    }

    /// The undefined interval.
    pub fn undefined() -> Self {
        Self {
            lower: f64::NAN,
            upper: f64::NAN,
            kind: IntervalType::Closed,
        }
    }

    /// `[lower, upper]`, swapping bounds if given in reverse.
    pub fn closed(lower: f64, upper: f64) -> Self {
        Self::ordered(lower, upper, IntervalType::Closed)
    }

    /// `(lower, upper)`, swapping bounds if given in reverse.
    pub fn open(lower: f64, upper: f64) -> Self {
        Self::ordered(lower, upper, IntervalType::Open)
    }

    /// `(lower, upper]`, swapping bounds if given in reverse.
    pub fn half_open_left(lower: f64, upper: f64) -> Self {
        Self::ordered(lower, upper, IntervalType::HalfOpenLeft)
    }

    /// `[lower, upper)`, swapping bounds if given in reverse.
    pub fn half_open_right(lower: f64, upper: f64) -> Self {
        Self::ordered(lower, upper, IntervalType::HalfOpenRight)
    }

    fn ordered(a: f64, b: f64, kind: IntervalType) -> Self {
        Self {
            lower: a.min(b),
            upper: a.max(b),
            kind,
        }
    }

    /// True when both bounds are finite.
    pub fn is_defined(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    /// Lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Bound inclusion.
    pub fn kind(&self) -> IntervalType {
        self.kind
    }

    fn includes_lower(&self) -> bool {
        matches!(self.kind, IntervalType::Closed | IntervalType::HalfOpenRight)
    }

    fn includes_upper(&self) -> bool {
        matches!(self.kind, IntervalType::Closed | IntervalType::HalfOpenLeft)
    }

    /// True when `value` lies in the interval.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::Interval;
    /// assert!(Interval::closed(0.0, 1.0).contains_value(1.0).unwrap());
    /// assert!(!Interval::open(0.0, 1.0).contains_value(1.0).unwrap());
    /// ```
    pub fn contains_value(&self, value: f64) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Interval")?;
        ensure_defined(value.is_finite(), "Value")?;
        let above = if self.includes_lower() {
            value >= self.lower
        } else {
            value > self.lower
        };
        let below = if self.includes_upper() {
            value <= self.upper
        } else {
            value < self.upper
        };
        Ok(above && below)
    }

    /// True when every value of `other` lies in this interval.
    pub fn contains_interval(&self, other: &Interval) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Interval")?;
        ensure_defined(other.is_defined(), "Interval")?;
        let lower_ok = other.lower > self.lower
            || (other.lower == self.lower && (self.includes_lower() || !other.includes_lower()));
        let upper_ok = other.upper < self.upper
            || (other.upper == self.upper && (self.includes_upper() || !other.includes_upper()));
        Ok(lower_ok && upper_ok)
    }

    /// True when the two intervals share at least one value.
    pub fn intersects(&self, other: &Interval) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Interval")?;
        ensure_defined(other.is_defined(), "Interval")?;
        let separated_above = self.upper < other.lower
            || (self.upper == other.lower && !(self.includes_upper() && other.includes_lower()));
        let separated_below = other.upper < self.lower
            || (other.upper == self.lower && !(other.includes_upper() && self.includes_lower()));
        Ok(!(separated_above || separated_below))
    }

    /// `size` evenly spaced values honoring the bound inclusion.
    ///
    /// A closed interval needs at least two samples, one for each bound.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::Interval;
    /// let values = Interval::closed(0.0, 1.0).generate_array_with_size(3).unwrap();
    /// assert_eq!(values, vec![0.0, 0.5, 1.0]);
    /// ```
    pub fn generate_array_with_size(&self, size: usize) -> GeometryResult<Vec<f64>> {
        ensure_defined(self.is_defined(), "Interval")?;
        if size == 0 {
            return Err(GeometryError::invalid_argument("array size must be positive"));
        }

        let span = self.upper - self.lower;
        let n = size as f64;
        let (start, step) = match self.kind {
            IntervalType::Closed => {
                if size < 2 {
                    return Err(GeometryError::invalid_argument(
                        "closed interval sampling requires at least 2 values",
                    ));
                }
                (self.lower, span / (n - 1.0))
            }
            IntervalType::Open => {
                let step = span / (n + 1.0);
                (self.lower + step, step)
            }
            IntervalType::HalfOpenLeft => {
                let step = span / n;
                (self.lower + step, step)
            }
            IntervalType::HalfOpenRight => (self.lower, span / n),
        };

        let mut values: Vec<f64> = (0..size).map(|i| start + step * i as f64).collect();
        if self.kind == IntervalType::Closed || self.kind == IntervalType::HalfOpenLeft {
            // pin the last sample to the bound to avoid accumulated drift
            if let Some(last) = values.last_mut() {
                *last = self.upper;
            }
        }
        Ok(values)
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.lower == other.lower
            && self.upper == other.upper
            && self.kind == other.kind
    }
}
