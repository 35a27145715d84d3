//! Axis-angle rotation vector.

use std::f64::consts::{PI, TAU};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::config::EPSILON;
use crate::core::vec3::{self, Vec3};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::rotation::{Quaternion, RotationMatrix};

/// A rotation of `angle` about a unit `axis`.
///
/// Equality holds modulo full turns and under the `(axis, θ) ≡ (−axis, −θ)`
/// flip; any two zero rotations are equal.
///
/// # Examples
/// ```
/// use geometry_kernel::{Angle, RotationVector, Vec3};
/// let a = RotationVector::new(Vec3::Z, Angle::degrees(90.0)).unwrap();
/// let b = RotationVector::new(-Vec3::Z, Angle::degrees(-90.0)).unwrap();
/// assert_eq!(a, b);
/// assert!(RotationVector::new(Vec3::new(0.0, 0.0, 2.0), Angle::zero()).is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RotationVector {
    axis: Vec3,
    angle: Angle,
}

impl RotationVector {
    /// Creates a rotation vector. Fails with `InvalidAxis` unless `axis` is
    /// unit length within tolerance.
    pub fn new(axis: Vec3, angle: Angle) -> GeometryResult<Self> {
        if !vec3::is_defined(axis) {
            return Ok(Self {
                axis: vec3::undefined(),
                angle,
            });
        }
        let norm = axis.length();
        if (norm - 1.0).abs() > EPSILON {
            return Err(GeometryError::invalid_axis(format!(
                "axis with norm [{norm}] is not unitary"
            )));
        }
        Ok(Self {
            axis: axis / norm,
            angle,
        })
    }

    /// The undefined rotation vector.
    pub fn undefined() -> Self {
        Self {
            axis: vec3::undefined(),
            angle: Angle::undefined(),
        }
    }

    /// Zero rotation about Z.
    pub fn unit() -> Self {
        Self {
            axis: Vec3::Z,
            angle: Angle::zero(),
        }
    }

    /// Rotation about X.
    pub fn x(angle: Angle) -> GeometryResult<Self> {
        ensure_defined(angle.is_defined(), "Angle")?;
        Self::new(Vec3::X, angle)
    }

    /// Rotation about Y.
    pub fn y(angle: Angle) -> GeometryResult<Self> {
        ensure_defined(angle.is_defined(), "Angle")?;
        Self::new(Vec3::Y, angle)
    }

    /// Rotation about Z.
    pub fn z(angle: Angle) -> GeometryResult<Self> {
        ensure_defined(angle.is_defined(), "Angle")?;
        Self::new(Vec3::Z, angle)
    }

    /// Rotation vector of a unitary quaternion.
    ///
    /// The angle is `2·atan2(‖v‖, s)`, which stays accurate for small
    /// rotations where `acos(s)` does not.
    pub fn from_quaternion(quaternion: &Quaternion) -> GeometryResult<Self> {
        ensure_defined(quaternion.is_defined(), "Quaternion")?;
        if !quaternion.is_unitary() {
            return Err(GeometryError::not_unitary(quaternion.to_string()));
        }

        let v = quaternion.vector_part();
        let v_norm = v.length();
        if v_norm == 0.0 {
            return Ok(Self::unit());
        }

        let s = quaternion.scalar_part();
        Ok(Self {
            axis: v / v_norm,
            angle: Angle::radians(2.0 * v_norm.atan2(s)),
        })
    }

    /// Rotation vector of a rotation matrix.
    pub fn from_rotation_matrix(rotation_matrix: &RotationMatrix) -> GeometryResult<Self> {
        ensure_defined(rotation_matrix.is_defined(), "Rotation matrix")?;
        let m = rotation_matrix.matrix();
        let at = |row: usize, col: usize| m.col(col)[row];

        let cosine = ((at(0, 0) + at(1, 1) + at(2, 2) - 1.0) / 2.0).clamp(-1.0, 1.0);
        let angle = Angle::radians(cosine.acos());
        if angle.in_radians().abs() < EPSILON {
            return Ok(Self {
                axis: Vec3::X,
                angle,
            });
        }

        let axis = Vec3::new(
            at(1, 2) - at(2, 1),
            at(2, 0) - at(0, 2),
            at(0, 1) - at(1, 0),
        );
        match axis.try_normalize() {
            Some(axis) => Ok(Self { axis, angle }),
            // half turn: the antisymmetric part vanishes, recover through the quaternion
            None => Self::from_quaternion(&Quaternion::from_rotation_matrix(rotation_matrix)?),
        }
    }

    /// True when the axis and the angle are defined.
    pub fn is_defined(&self) -> bool {
        vec3::is_defined(self.axis) && self.angle.is_defined()
    }

    /// Unit rotation axis.
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Rotation angle.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Equivalent rotation vector with an angle in `[0, π]`.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::{Angle, RotationVector, Vec3};
    /// let rv = RotationVector::new(Vec3::X, Angle::degrees(270.0)).unwrap().rectified();
    /// assert_eq!(rv.axis(), -Vec3::X);
    /// assert!((rv.angle().in_degrees() - 90.0).abs() < 1e-12);
    /// ```
    pub fn rectified(&self) -> Self {
        if !self.is_defined() {
            return *self;
        }
        let wrapped = self.angle.in_radians_from(0.0);
        if wrapped > PI {
            Self {
                axis: -self.axis,
                angle: Angle::radians(TAU - wrapped),
            }
        } else {
            Self {
                axis: self.axis,
                angle: Angle::radians(wrapped),
            }
        }
    }

    /// Rectifies in place.
    pub fn rectify(&mut self) {
        *self = self.rectified();
    }

    /// True when both describe the same rotation within `tolerance`.
    pub fn is_near(&self, other: &Self, tolerance: Angle) -> GeometryResult<bool> {
        let first = Quaternion::from_rotation_vector(self)?;
        let second = Quaternion::from_rotation_vector(other)?;
        first.is_near(&second, tolerance)
    }
}

impl PartialEq for RotationVector {
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() {
            return false;
        }
        let lhs = self.angle.in_radians_from(0.0);
        if lhs == 0.0 && other.angle.in_radians_from(0.0) == 0.0 {
            return true;
        }
        (self.axis == other.axis && lhs == other.angle.in_radians_from(0.0))
            || (self.axis == -other.axis && lhs == (-other.angle).in_radians_from(0.0))
    }
}

impl fmt::Display for RotationVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(f, "{} : {}", vec3::display(self.axis), self.angle)
    }
}
