//! # Angle
//!
//! Plane angle value type. Stored in radians; constructors and accessors
//! convert from and to the other common units.
//!
//! ## Example
//!
//! ```rust
//! use geometry_kernel::Angle;
//!
//! let right = Angle::degrees(90.0);
//! assert!((right.in_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! assert_eq!((right * 2.0).in_degrees(), 180.0);
//! ```

use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::core::vec3::{self, Vec3};
use crate::error::{ensure_defined, GeometryError, GeometryResult};

/// Units an [`Angle`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleUnit {
    /// Radians.
    Radian,
    /// Degrees (1/360 revolution).
    Degree,
    /// Arcminutes (1/60 degree).
    Arcminute,
    /// Arcseconds (1/60 arcminute).
    Arcsecond,
    /// Full turns.
    Revolution,
}

impl AngleUnit {
    fn radians_per_unit(self) -> f64 {
        match self {
            Self::Radian => 1.0,
            Self::Degree => PI / 180.0,
            Self::Arcminute => PI / (180.0 * 60.0),
            Self::Arcsecond => PI / (180.0 * 3600.0),
            Self::Revolution => TAU,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Radian => "rad",
            Self::Degree => "deg",
            Self::Arcminute => "amin",
            Self::Arcsecond => "asec",
            Self::Revolution => "rev",
        }
    }
}

/// A plane angle.
///
/// Undefined angles (NaN) never compare equal, not even to themselves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// Creates an angle from a value in the given unit.
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        Self {
            radians: value * unit.radians_per_unit(),
        }
    }

    /// The undefined angle.
    pub fn undefined() -> Self {
        Self { radians: f64::NAN }
    }

    /// Zero angle.
    pub fn zero() -> Self {
        Self { radians: 0.0 }
    }

    /// π/2.
    pub fn half_pi() -> Self {
        Self { radians: FRAC_PI_2 }
    }

    /// π.
    pub fn pi() -> Self {
        Self { radians: PI }
    }

    /// 2π.
    pub fn two_pi() -> Self {
        Self { radians: TAU }
    }

    /// Angle of `value` radians.
    pub fn radians(value: f64) -> Self {
        Self { radians: value }
    }

    /// Angle of `value` degrees.
    pub fn degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::Degree)
    }

    /// Angle of `value` arcminutes.
    pub fn arcminutes(value: f64) -> Self {
        Self::new(value, AngleUnit::Arcminute)
    }

    /// Angle of `value` arcseconds.
    pub fn arcseconds(value: f64) -> Self {
        Self::new(value, AngleUnit::Arcsecond)
    }

    /// Angle of `value` full turns.
    pub fn revolutions(value: f64) -> Self {
        Self::new(value, AngleUnit::Revolution)
    }

    /// Unsigned angle between two non-zero vectors, within `[0, π]`.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::{Angle, Vec3};
    /// let angle = Angle::between(Vec3::X, Vec3::new(1.0, 1.0, 0.0)).unwrap();
    /// assert!((angle.in_degrees() - 45.0).abs() < 1e-12);
    /// ```
    pub fn between(first: Vec3, second: Vec3) -> GeometryResult<Self> {
        ensure_defined(vec3::is_defined(first), "First vector")?;
        ensure_defined(vec3::is_defined(second), "Second vector")?;
        if first.length_squared() == 0.0 || second.length_squared() == 0.0 {
            return Err(GeometryError::invalid_argument(
                "cannot measure the angle of a zero vector",
            ));
        }
        Ok(Self::radians(vec3::angle_between(first, second)))
    }

    /// True unless NaN or infinite.
    pub fn is_defined(&self) -> bool {
        self.radians.is_finite()
    }

    /// True for an exact zero angle.
    pub fn is_zero(&self) -> bool {
        self.radians == 0.0
    }

    /// True for a strictly negative angle.
    pub fn is_negative(&self) -> bool {
        self.radians < 0.0
    }

    /// Value in radians.
    pub fn in_radians(&self) -> f64 {
        self.radians
    }

    /// Value in degrees.
    pub fn in_degrees(&self) -> f64 {
        self.in_unit(AngleUnit::Degree)
    }

    /// Value in the requested unit.
    pub fn in_unit(&self, unit: AngleUnit) -> f64 {
        self.radians / unit.radians_per_unit()
    }

    /// Value in radians wrapped into `[lower, lower + 2π)`.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::Angle;
    /// let wrapped = Angle::degrees(370.0).in_radians_from(0.0);
    /// assert!((wrapped - 10f64.to_radians()).abs() < 1e-12);
    /// ```
    pub fn in_radians_from(&self, lower: f64) -> f64 {
        lower + (self.radians - lower).rem_euclid(std::f64::consts::TAU)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            radians: self.radians.abs(),
        }
    }

    /// Formats the angle in the given unit, e.g. `45 [deg]`.
    pub fn to_string_in(&self, unit: AngleUnit) -> String {
        if self.is_defined() {
            format!("{} [{}]", self.in_unit(unit), unit.symbol())
        } else {
            "Undefined".to_string()
        }
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.radians == other.radians
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.is_defined() || !other.is_defined() {
            return None;
        }
        self.radians.partial_cmp(&other.radians)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::radians(-self.radians)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians - rhs.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle::radians(self.radians * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, rhs: f64) -> Angle {
        Angle::radians(self.radians / rhs)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_in(AngleUnit::Degree))
    }
}
