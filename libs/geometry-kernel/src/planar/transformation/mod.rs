//! 2D homogeneous transformation (3×3), sharing the 3D type lattice.
//!
//! Unlike the 3D rotation factories, [`Transformation::rotation`] turns points
//! counter-clockwise by the given angle.

use std::fmt;
use std::ops::Mul;

use glam::{DMat2, DMat3};
use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::core::vec2::{self, Vec2};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::transformation::TransformationType;

/// A planar homogeneous transformation.
///
/// # Examples
/// ```
/// use geometry_kernel::planar::Transformation;
/// use geometry_kernel::core::vec2::Vec2;
/// use geometry_kernel::Angle;
///
/// let t = Transformation::rotation_around(Vec2::new(1.0, 1.0), Angle::degrees(180.0)).unwrap();
/// let moved = t.apply_to_point(Vec2::ZERO).unwrap();
/// assert!(moved.distance(Vec2::new(2.0, 2.0)) < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transformation {
    kind: TransformationType,
    matrix: DMat3,
}

impl Transformation {
    /// Wraps a raw matrix. Only the identity is recognized.
    pub fn from_matrix(matrix: DMat3) -> GeometryResult<Self> {
        if !matrix.is_finite() {
            return Ok(Self::undefined());
        }
        if matrix != DMat3::IDENTITY {
            return Err(GeometryError::invalid_argument(
                "cannot identify transformation type",
            ));
        }
        Ok(Self::identity())
    }

    /// The undefined transformation.
    pub fn undefined() -> Self {
        Self {
            kind: TransformationType::Undefined,
            matrix: DMat3::NAN,
        }
    }

    /// The identity.
    pub fn identity() -> Self {
        Self {
            kind: TransformationType::Identity,
            matrix: DMat3::IDENTITY,
        }
    }

    /// Translation by `translation`.
    pub fn translation(translation: Vec2) -> GeometryResult<Self> {
        ensure_defined(vec2::is_defined(translation), "Translation vector")?;
        Ok(Self {
            kind: TransformationType::Translation,
            matrix: DMat3::from_translation(translation),
        })
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotation(angle: Angle) -> GeometryResult<Self> {
        ensure_defined(angle.is_defined(), "Rotation angle")?;
        Ok(Self {
            kind: TransformationType::Rotation,
            matrix: DMat3::from_angle(angle.in_radians()),
        })
    }

    /// Counter-clockwise rotation about `point`.
    pub fn rotation_around(point: Vec2, angle: Angle) -> GeometryResult<Self> {
        ensure_defined(vec2::is_defined(point), "Point")?;
        let turn = (Self::translation(point)? * Self::rotation(angle)?)?;
        turn * Self::translation(-point)?
    }

    /// General linear map about the origin.
    pub(crate) fn linear(linear: DMat2) -> GeometryResult<Self> {
        ensure_defined(linear.is_finite(), "Linear map")?;
        if linear == DMat2::IDENTITY {
            return Ok(Self::identity());
        }
        Ok(Self {
            kind: TransformationType::Affine,
            matrix: DMat3::from_mat2(linear),
        })
    }

    /// True unless undefined.
    pub fn is_defined(&self) -> bool {
        self.kind != TransformationType::Undefined
    }

    /// True for the identity.
    pub fn is_identity(&self) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Transformation")?;
        Ok(self.kind == TransformationType::Identity)
    }

    /// Rigidity follows the type: identity, translation, rotation and
    /// reflection are rigid.
    pub fn is_rigid(&self) -> bool {
        matches!(
            self.kind,
            TransformationType::Identity
                | TransformationType::Translation
                | TransformationType::Rotation
                | TransformationType::Reflection
        )
    }

    /// Symbolic type.
    pub fn kind(&self) -> TransformationType {
        self.kind
    }

    /// Homogeneous matrix.
    pub fn matrix(&self) -> GeometryResult<DMat3> {
        ensure_defined(self.is_defined(), "Transformation")?;
        Ok(self.matrix)
    }

    /// Inverse, keeping the type.
    pub fn inverse(&self) -> GeometryResult<Self> {
        ensure_defined(self.is_defined(), "Transformation")?;
        let determinant = self.matrix.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(GeometryError::numeric_failure(
                "transformation matrix is singular",
            ));
        }
        Ok(Self {
            kind: self.kind,
            matrix: self.matrix.inverse(),
        })
    }

    /// Applies to a position (w = 1).
    pub fn apply_to_point(&self, point: Vec2) -> GeometryResult<Vec2> {
        ensure_defined(vec2::is_defined(point), "Point")?;
        ensure_defined(self.is_defined(), "Transformation")?;
        Ok(self.matrix.transform_point2(point))
    }

    /// Applies to a free vector (w = 0).
    pub fn apply_to_vector(&self, vector: Vec2) -> GeometryResult<Vec2> {
        ensure_defined(vec2::is_defined(vector), "Vector")?;
        ensure_defined(self.is_defined(), "Transformation")?;
        Ok(self.matrix.transform_vector2(vector))
    }
}

impl PartialEq for Transformation {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.matrix == other.matrix
    }
}

impl Mul for Transformation {
    type Output = GeometryResult<Transformation>;

    fn mul(self, rhs: Transformation) -> GeometryResult<Transformation> {
        ensure_defined(self.is_defined(), "Transformation")?;
        ensure_defined(rhs.is_defined(), "Transformation")?;
        Ok(Transformation {
            kind: TransformationType::compose(self.kind, rhs.kind),
            matrix: self.matrix * rhs.matrix,
        })
    }
}

impl Mul<Vec2> for Transformation {
    type Output = GeometryResult<Vec2>;

    fn mul(self, rhs: Vec2) -> GeometryResult<Vec2> {
        self.apply_to_vector(rhs)
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "2D {} Transformation", self.kind)
    }
}

#[cfg(test)]
mod tests;
