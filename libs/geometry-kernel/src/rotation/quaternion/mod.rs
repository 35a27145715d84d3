//! # Quaternion
//!
//! Rotation quaternion stored as `(x, y, z, s)`, vector part first.
//!
//! ## Product
//!
//! The `*` operator composes rotations in natural order: the vector part of
//! `l * r` is `rs·lv + ls·rv − lv×rv` and the scalar part is `ls·rs − lv·rv`.
//! With this product, `q * v` (see [`Quaternion::rotate_vector`]) agrees with
//! [`RotationMatrix::from_quaternion`](crate::RotationMatrix::from_quaternion).
//!
//! ## Example
//!
//! ```rust
//! use geometry_kernel::{Angle, Quaternion, RotationVector, Vec3};
//!
//! let quarter = Quaternion::from_rotation_vector(
//!     &RotationVector::new(Vec3::Z, Angle::degrees(90.0)).unwrap(),
//! )
//! .unwrap();
//! let half = quarter * quarter;
//! let rotated = (half * Vec3::X).unwrap();
//! assert!(rotated.distance(-Vec3::X) < 1e-12);
//! ```

use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::config::EPSILON;
use crate::core::vec3::{self, Vec3};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::rotation::{RotationMatrix, RotationVector};

/// Component order used when reading or printing a quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuaternionFormat {
    /// `[x, y, z, s]`
    XYZS,
    /// `[s, x, y, z]`
    SXYZ,
}

/// A quaternion `x·i + y·j + z·k + s`.
///
/// Equality treats `q` and `−q` as the same rotation. Undefined quaternions
/// never compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quaternion {
    x: f64,
    y: f64,
    z: f64,
    s: f64,
}

impl Quaternion {
    /// Creates a quaternion from four components given in `format` order.
    pub fn new(first: f64, second: f64, third: f64, fourth: f64, format: QuaternionFormat) -> Self {
        match format {
            QuaternionFormat::XYZS => Self {
                x: first,
                y: second,
                z: third,
                s: fourth,
            },
            QuaternionFormat::SXYZ => Self {
                x: second,
                y: third,
                z: fourth,
                s: first,
            },
        }
    }

    /// Creates a quaternion from its components, vector part first.
    pub fn xyzs(x: f64, y: f64, z: f64, s: f64) -> Self {
        Self { x, y, z, s }
    }

    /// Creates a quaternion from a vector part and a scalar part.
    pub fn from_parts(vector_part: Vec3, scalar_part: f64) -> Self {
        Self::xyzs(vector_part.x, vector_part.y, vector_part.z, scalar_part)
    }

    /// The undefined quaternion.
    pub fn undefined() -> Self {
        Self::xyzs(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    /// The identity rotation `(0, 0, 0, 1)`.
    pub fn unit() -> Self {
        Self::xyzs(0.0, 0.0, 0.0, 1.0)
    }

    /// Quaternion of a rotation vector: `(sin(θ/2)·axis, cos(θ/2))`, normalized.
    pub fn from_rotation_vector(rotation_vector: &RotationVector) -> GeometryResult<Self> {
        ensure_defined(rotation_vector.is_defined(), "Rotation vector")?;
        let half_angle = rotation_vector.angle().in_radians() / 2.0;
        Self::from_parts(rotation_vector.axis() * half_angle.sin(), half_angle.cos()).normalized()
    }

    /// Quaternion of a rotation matrix.
    ///
    /// Picks the largest of the trace and the three diagonal entries and uses
    /// the matching closed form, which stays well conditioned near 180°.
    pub fn from_rotation_matrix(rotation_matrix: &RotationMatrix) -> GeometryResult<Self> {
        ensure_defined(rotation_matrix.is_defined(), "Rotation matrix")?;
        let m = |row: usize, col: usize| rotation_matrix.matrix().col(col)[row];

        let trace = m(0, 0) + m(1, 1) + m(2, 2);
        let (m00, m11, m22) = (m(0, 0), m(1, 1), m(2, 2));

        let q = if trace >= m00 && trace >= m11 && trace >= m22 {
            Self::xyzs(
                m(1, 2) - m(2, 1),
                m(2, 0) - m(0, 2),
                m(0, 1) - m(1, 0),
                1.0 + trace,
            )
        } else if m00 >= m11 && m00 >= m22 {
            Self::xyzs(
                1.0 + 2.0 * m00 - trace,
                m(0, 1) + m(1, 0),
                m(0, 2) + m(2, 0),
                m(1, 2) - m(2, 1),
            )
        } else if m11 >= m22 {
            Self::xyzs(
                m(1, 0) + m(0, 1),
                1.0 + 2.0 * m11 - trace,
                m(1, 2) + m(2, 1),
                m(2, 0) - m(0, 2),
            )
        } else {
            Self::xyzs(
                m(2, 0) + m(0, 2),
                m(2, 1) + m(1, 2),
                1.0 + 2.0 * m22 - trace,
                m(0, 1) - m(1, 0),
            )
        };

        q.normalized()
    }

    /// Shortest rotation taking the direction of `first` onto `second`.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::{Quaternion, Vec3};
    /// let q = Quaternion::shortest_rotation(Vec3::X, Vec3::Y).unwrap();
    /// let mapped = (q * Vec3::X).unwrap();
    /// assert!(mapped.distance(Vec3::Y) < 1e-12);
    /// ```
    pub fn shortest_rotation(first: Vec3, second: Vec3) -> GeometryResult<Self> {
        ensure_defined(vec3::is_defined(first), "First vector")?;
        ensure_defined(vec3::is_defined(second), "Second vector")?;
        let first = first.try_normalize().ok_or_else(|| {
            GeometryError::invalid_argument("cannot rotate from a zero vector")
        })?;
        let second = second.try_normalize().ok_or_else(|| {
            GeometryError::invalid_argument("cannot rotate onto a zero vector")
        })?;
        Self::from_parts(second.cross(first), 1.0 + first.dot(second)).normalized()
    }

    /// Parses `"[a, b, c, d]"` with components in `format` order.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::{Quaternion, QuaternionFormat};
    /// let q = Quaternion::parse("[1.0, 0.0, 0.0, 0.0]", QuaternionFormat::SXYZ).unwrap();
    /// assert_eq!(q.s().unwrap(), 1.0);
    /// ```
    pub fn parse(text: &str, format: QuaternionFormat) -> GeometryResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GeometryError::undefined("String"));
        }
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| {
                GeometryError::invalid_argument(format!("cannot parse quaternion from [{text}]"))
            })?;

        let components = inner
            .split(',')
            .map(|token| {
                token.trim().parse::<f64>().map_err(|_| {
                    GeometryError::invalid_argument(format!("cannot parse component [{token}]"))
                })
            })
            .collect::<GeometryResult<Vec<f64>>>()?;

        match components.as_slice() {
            [a, b, c, d] => Ok(Self::new(*a, *b, *c, *d, format)),
            _ => Err(GeometryError::invalid_argument(format!(
                "expected 4 components, found {}",
                components.len()
            ))),
        }
    }

    // =========================================================================
    // INTERPOLATION
    // =========================================================================

    /// Linear interpolation `q1·(1−r) + q2·r`, for `r ∈ [0, 1]`.
    pub fn lerp(first: &Self, second: &Self, ratio: f64) -> GeometryResult<Self> {
        ensure_defined(first.is_defined(), "First quaternion")?;
        ensure_defined(second.is_defined(), "Second quaternion")?;
        check_ratio(ratio)?;
        Ok(*first * (1.0 - ratio) + *second * ratio)
    }

    /// Normalized linear interpolation.
    pub fn nlerp(first: &Self, second: &Self, ratio: f64) -> GeometryResult<Self> {
        Self::lerp(first, second, ratio)?.normalized()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::{Angle, Quaternion, RotationVector, Vec3};
    /// let q1 = Quaternion::unit();
    /// let q2 = Quaternion::from_rotation_vector(
    ///     &RotationVector::new(Vec3::X, Angle::degrees(90.0)).unwrap(),
    /// ).unwrap();
    /// let mid = Quaternion::slerp(&q1, &q2, 0.5).unwrap();
    /// let half = q1.angular_difference_with(&mid).unwrap();
    /// assert!((half.in_degrees() - 45.0).abs() < 1e-9);
    /// ```
    pub fn slerp(first: &Self, second: &Self, ratio: f64) -> GeometryResult<Self> {
        ensure_defined(first.is_defined(), "First quaternion")?;
        ensure_defined(second.is_defined(), "Second quaternion")?;
        check_ratio(ratio)?;

        let target = if first.dot_product(second)? < 0.0 {
            -*second
        } else {
            *second
        };

        let delta = first.inverse()? * target;
        (*first * delta.pow(ratio)?).normalized()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// True when all four components are finite.
    pub fn is_defined(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.s.is_finite()
    }

    /// True when `|‖q‖² − 1| ≤ ε`.
    pub fn is_unitary(&self) -> bool {
        self.is_defined() && (self.norm_squared() - 1.0).abs() <= EPSILON
    }

    /// True when the rotation angle between both quaternions is within
    /// `tolerance`.
    pub fn is_near(&self, other: &Self, tolerance: Angle) -> GeometryResult<bool> {
        ensure_defined(tolerance.is_defined(), "Angular tolerance")?;
        let difference = self.angular_difference_with(other)?;
        Ok(difference.in_radians_from(0.0) <= tolerance.in_radians_from(0.0))
    }

    /// First vector component.
    pub fn x(&self) -> GeometryResult<f64> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        Ok(self.x)
    }

    /// Second vector component.
    pub fn y(&self) -> GeometryResult<f64> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        Ok(self.y)
    }

    /// Third vector component.
    pub fn z(&self) -> GeometryResult<f64> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        Ok(self.z)
    }

    /// Scalar component.
    pub fn s(&self) -> GeometryResult<f64> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        Ok(self.s)
    }

    /// Vector part `(x, y, z)`.
    pub fn vector_part(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Scalar part `s`.
    pub fn scalar_part(&self) -> f64 {
        self.s
    }

    /// Components in `format` order.
    pub fn to_array(&self, format: QuaternionFormat) -> GeometryResult<[f64; 4]> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        Ok(match format {
            QuaternionFormat::XYZS => [self.x, self.y, self.z, self.s],
            QuaternionFormat::SXYZ => [self.s, self.x, self.y, self.z],
        })
    }

    /// Formats the components as `[a, b, c, d]` in `format` order.
    pub fn to_string_in(&self, format: QuaternionFormat) -> String {
        match self.to_array(format) {
            Ok([a, b, c, d]) => format!("[{a}, {b}, {c}, {d}]"),
            Err(_) => "Undefined".to_string(),
        }
    }

    // =========================================================================
    // ALGEBRA
    // =========================================================================

    /// Euclidean norm of the four components.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.s * self.s
    }

    /// Scales to unit norm in place.
    pub fn normalize(&mut self) -> GeometryResult<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Copy scaled to unit norm.
    pub fn normalized(&self) -> GeometryResult<Self> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        let norm = self.norm();
        if norm < EPSILON {
            return Err(GeometryError::invalid_argument("quaternion norm is zero"));
        }
        Ok(*self * (1.0 / norm))
    }

    /// `(−x, −y, −z, s)`.
    pub fn conjugate(&self) -> Self {
        Self::xyzs(-self.x, -self.y, -self.z, self.s)
    }

    /// Multiplicative inverse `q* / ‖q‖²`.
    pub fn inverse(&self) -> GeometryResult<Self> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        let norm_squared = self.norm_squared();
        if norm_squared.sqrt() < EPSILON {
            return Err(GeometryError::invalid_argument(
                "cannot invert a quaternion with zero norm",
            ));
        }
        Ok(self.conjugate() * (1.0 / norm_squared))
    }

    /// Same rotation with a non-negative scalar part.
    pub fn rectified(&self) -> Self {
        if self.s < 0.0 {
            -*self
        } else {
            *self
        }
    }

    /// Flips the sign in place when the scalar part is negative.
    pub fn rectify(&mut self) {
        *self = self.rectified();
    }

    /// Exponential map.
    pub fn exp(&self) -> GeometryResult<Self> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        let v = self.vector_part();
        let v_norm = v.length();
        let scale = self.s.exp();
        if v_norm <= EPSILON {
            return Ok(Self::unit() * scale);
        }
        Ok(Self::from_parts(v * (v_norm.sin() / v_norm), v_norm.cos()) * scale)
    }

    /// Logarithm map.
    pub fn log(&self) -> GeometryResult<Self> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        let v = self.vector_part();
        let v_norm = v.length();
        let log_norm = self.norm().ln();
        if v_norm <= EPSILON {
            return Ok(Self::from_parts(Vec3::ZERO, log_norm));
        }
        let theta = v_norm.atan2(self.s);
        Ok(Self::from_parts(v * (theta / v_norm), log_norm))
    }

    /// Real power `exp(k·log(q))`.
    pub fn pow(&self, exponent: f64) -> GeometryResult<Self> {
        ensure_defined(exponent.is_finite(), "Exponent")?;
        (self.log()? * exponent).exp()
    }

    /// Four-dimensional dot product.
    pub fn dot_product(&self, other: &Self) -> GeometryResult<f64> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        ensure_defined(other.is_defined(), "Quaternion")?;
        Ok(self.x * other.x + self.y * other.y + self.z * other.z + self.s * other.s)
    }

    /// Natural-order product, the same as `*`.
    pub fn cross_multiply(&self, other: &Self) -> GeometryResult<Self> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        ensure_defined(other.is_defined(), "Quaternion")?;
        Ok(self.product(other, -1.0))
    }

    /// Classical Hamilton product (`+lv×rv` in the vector part).
    pub fn dot_multiply(&self, other: &Self) -> GeometryResult<Self> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        ensure_defined(other.is_defined(), "Quaternion")?;
        Ok(self.product(other, 1.0))
    }

    fn product(&self, other: &Self, cross_sign: f64) -> Self {
        let (lv, ls) = (self.vector_part(), self.s);
        let (rv, rs) = (other.vector_part(), other.s);
        Self::from_parts(
            lv * rs + rv * ls + lv.cross(rv) * cross_sign,
            ls * rs - lv.dot(rv),
        )
    }

    /// Rotates `vector` by `q ⊗ (v, 0) ⊗ q*`.
    ///
    /// Fails with `NotUnitary` unless `‖q‖ = 1` within tolerance.
    pub fn rotate_vector(&self, vector: Vec3) -> GeometryResult<Vec3> {
        ensure_defined(vec3::is_defined(vector), "Vector")?;
        ensure_defined(self.is_defined(), "Quaternion")?;
        if !self.is_unitary() {
            return Err(GeometryError::not_unitary(self.to_string_in(
                QuaternionFormat::XYZS,
            )));
        }
        let rotated = self.product(&Self::from_parts(vector, 0.0), -1.0);
        Ok(rotated.product(&self.conjugate(), -1.0).vector_part())
    }

    /// Rotation angle taking `other` onto `self`, within `[0, π]`.
    pub fn angular_difference_with(&self, other: &Self) -> GeometryResult<Angle> {
        if !self.is_unitary() || !other.is_unitary() {
            return Err(GeometryError::not_unitary("angular difference operands"));
        }
        let delta = (*self / *other)?.normalized()?;
        Ok(Angle::radians(2.0 * delta.s.abs().min(1.0).acos()))
    }
}

fn check_ratio(ratio: f64) -> GeometryResult<()> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(GeometryError::invalid_argument(format!(
            "interpolation ratio [{ratio}] not in [0, 1]"
        )));
    }
    Ok(())
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() {
            return false;
        }
        let same = self.x == other.x && self.y == other.y && self.z == other.z && self.s == other.s;
        let opposite =
            self.x == -other.x && self.y == -other.y && self.z == -other.z && self.s == -other.s;
        same || opposite
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion::xyzs(-self.x, -self.y, -self.z, -self.s)
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::xyzs(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.s + rhs.s)
    }
}

/// Rotation composition. Undefined components propagate to the result.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.product(&rhs, -1.0)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: f64) -> Quaternion {
        Quaternion::xyzs(self.x * rhs, self.y * rhs, self.z * rhs, self.s * rhs)
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = GeometryResult<Vec3>;

    fn mul(self, rhs: Vec3) -> GeometryResult<Vec3> {
        self.rotate_vector(rhs)
    }
}

/// Right division `q ⊗ r⁻¹`; fails on a zero-norm divisor.
impl std::ops::Div for Quaternion {
    type Output = GeometryResult<Quaternion>;

    fn div(self, rhs: Quaternion) -> GeometryResult<Quaternion> {
        ensure_defined(self.is_defined(), "Quaternion")?;
        ensure_defined(rhs.is_defined(), "Quaternion")?;
        if rhs.norm() < EPSILON {
            return Err(GeometryError::invalid_argument(
                "cannot divide by quaternion with zero norm",
            ));
        }
        Ok(self * rhs.inverse()?)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_in(QuaternionFormat::XYZS))
    }
}

#[cfg(test)]
mod tests;
