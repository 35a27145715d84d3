//! # Transformation
//!
//! Homogeneous 4×4 transformations tagged with a [`TransformationType`] and a
//! rigidity flag.
//!
//! ## Type lattice
//!
//! Composition looks the result type up in a fixed table:
//!
//! - `Identity` is the unit;
//! - each simple family (translation, rotation, scaling, reflection, shear)
//!   is closed under self-composition;
//! - two different simple families give `Affine`, which absorbs everything
//!   defined;
//! - `Undefined` annihilates.
//!
//! The type is only inferred from a raw matrix when that matrix is the
//! identity. Every other type comes from a named factory.
//!
//! ```rust
//! use geometry_kernel::{Transformation, TransformationType, Vec3};
//!
//! let t = (Transformation::translation(Vec3::X).unwrap()
//!     * Transformation::translation(Vec3::Y).unwrap())
//! .unwrap();
//! assert_eq!(t.kind(), TransformationType::Translation);
//! assert_eq!(t.apply_to_point(Vec3::ZERO).unwrap(), Vec3::new(1.0, 1.0, 0.0));
//! ```

use std::fmt;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::config::EPSILON;
use crate::core::vec3::{self, Mat3, Mat4, Vec3, Vec4};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::rotation::{RotationMatrix, RotationVector};

// =============================================================================
// TYPE LATTICE
// =============================================================================

/// Symbolic kind of a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformationType {
    /// No transformation.
    Undefined,
    /// The identity.
    Identity,
    /// Pure translation.
    Translation,
    /// Pure rotation.
    Rotation,
    /// Axis-aligned scaling.
    Scaling,
    /// Reflection across a plane.
    Reflection,
    /// Shear.
    Shear,
    /// Any other affine map.
    Affine,
}

impl TransformationType {
    /// Every defined type, in lattice order.
    pub const DEFINED: [TransformationType; 7] = [
        Self::Identity,
        Self::Translation,
        Self::Rotation,
        Self::Scaling,
        Self::Reflection,
        Self::Shear,
        Self::Affine,
    ];

    /// Type of `left * right`.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::TransformationType as T;
    /// assert_eq!(T::compose(T::Identity, T::Shear), T::Shear);
    /// assert_eq!(T::compose(T::Rotation, T::Rotation), T::Rotation);
    /// assert_eq!(T::compose(T::Rotation, T::Translation), T::Affine);
    /// assert_eq!(T::compose(T::Undefined, T::Identity), T::Undefined);
    /// ```
    pub fn compose(left: Self, right: Self) -> Self {
        use TransformationType::*;
        match (left, right) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (Identity, other) | (other, Identity) => other,
            (Affine, _) | (_, Affine) => Affine,
            (a, b) if a == b => a,
            _ => Affine,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Identity => "Identity",
            Self::Translation => "Translation",
            Self::Rotation => "Rotation",
            Self::Scaling => "Scaling",
            Self::Reflection => "Reflection",
            Self::Shear => "Shear",
            Self::Affine => "Affine",
        }
    }
}

impl fmt::Display for TransformationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TRANSFORMATION
// =============================================================================

/// A 3D homogeneous transformation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transformation {
    kind: TransformationType,
    matrix: Mat4,
    is_rigid: bool,
}

impl Transformation {
    /// Wraps a raw matrix. Only the identity can be recognized; any other
    /// matrix fails with `InvalidArgument`.
    pub fn from_matrix(matrix: Mat4) -> GeometryResult<Self> {
        let kind = Self::type_of_matrix(&matrix)?;
        Ok(Self::with_type(kind, matrix, Self::is_rigid_matrix(&matrix)))
    }

    fn with_type(kind: TransformationType, matrix: Mat4, is_rigid: bool) -> Self {
        Self {
            kind,
            matrix,
            is_rigid,
        }
    }

    /// The undefined transformation.
    pub fn undefined() -> Self {
        Self::with_type(TransformationType::Undefined, Mat4::NAN, false)
    }

    /// The identity.
    pub fn identity() -> Self {
        Self::with_type(TransformationType::Identity, Mat4::IDENTITY, true)
    }

    /// Translation by `translation`.
    pub fn translation(translation: Vec3) -> GeometryResult<Self> {
        ensure_defined(vec3::is_defined(translation), "Translation vector")?;
        Ok(Self::with_type(
            TransformationType::Translation,
            Mat4::from_translation(translation),
            true,
        ))
    }

    /// Rotation described by a frame rotation vector.
    ///
    /// The transposed rotation matrix is embedded, so the rotation moves
    /// points opposite to the frame.
    pub fn rotation_from_vector(rotation_vector: &RotationVector) -> GeometryResult<Self> {
        ensure_defined(rotation_vector.is_defined(), "Rotation vector")?;
        let matrix = RotationMatrix::from_rotation_vector(rotation_vector)?;
        Self::rotation_from_matrix(&matrix)
    }

    /// Rotation described by a frame rotation matrix.
    pub fn rotation_from_matrix(rotation_matrix: &RotationMatrix) -> GeometryResult<Self> {
        ensure_defined(rotation_matrix.is_defined(), "Rotation matrix")?;
        Ok(Self::with_type(
            TransformationType::Rotation,
            Mat4::from_mat3(rotation_matrix.matrix().transpose()),
            true,
        ))
    }

    /// Rotation about an axis through `point`: `T(p)·R·T(−p)`.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::{Angle, RotationVector, Transformation, Vec3};
    /// let pivot = Vec3::new(1.0, 0.0, 0.0);
    /// let rv = RotationVector::z(Angle::degrees(180.0)).unwrap();
    /// let t = Transformation::rotation_around(pivot, &rv).unwrap();
    /// let moved = t.apply_to_point(Vec3::ZERO).unwrap();
    /// assert!(moved.distance(Vec3::new(2.0, 0.0, 0.0)) < 1e-12);
    /// ```
    pub fn rotation_around(point: Vec3, rotation_vector: &RotationVector) -> GeometryResult<Self> {
        ensure_defined(vec3::is_defined(point), "Point")?;
        let composed = (Self::translation(point)? * Self::rotation_from_vector(rotation_vector)?)?;
        composed * Self::translation(-point)?
    }

    /// Non-uniform scaling along the coordinate axes.
    pub fn scaling(factors: Vec3) -> GeometryResult<Self> {
        ensure_defined(vec3::is_defined(factors), "Scaling factors")?;
        let matrix = Mat4::from_scale(factors);
        Ok(Self::with_type(
            TransformationType::Scaling,
            matrix,
            Self::is_rigid_matrix(&matrix),
        ))
    }

    /// Reflection across the plane through the origin with `normal`.
    pub fn reflection(normal: Vec3) -> GeometryResult<Self> {
        ensure_defined(vec3::is_defined(normal), "Normal")?;
        let normal = normal
            .try_normalize()
            .ok_or_else(|| GeometryError::invalid_argument("reflection normal is zero"))?;
        let householder = Mat3::IDENTITY - vec3::outer(normal, normal) * 2.0;
        Ok(Self::with_type(
            TransformationType::Reflection,
            Mat4::from_mat3(householder),
            true,
        ))
    }

    /// Shear whose linear block is `I + shear`, where `shear` is strictly off-diagonal.
    pub fn shear(shear: Mat3) -> GeometryResult<Self> {
        ensure_defined(shear.is_finite(), "Shear matrix")?;
        if shear.x_axis.x != 0.0 || shear.y_axis.y != 0.0 || shear.z_axis.z != 0.0 {
            return Err(GeometryError::invalid_argument(
                "shear matrix must have a zero diagonal",
            ));
        }
        let matrix = Mat4::from_mat3(Mat3::IDENTITY + shear);
        Ok(Self::with_type(
            TransformationType::Shear,
            matrix,
            Self::is_rigid_matrix(&matrix),
        ))
    }

    /// Recognizes the identity matrix; any other defined matrix is an error.
    pub fn type_of_matrix(matrix: &Mat4) -> GeometryResult<TransformationType> {
        if !matrix.is_finite() {
            return Ok(TransformationType::Undefined);
        }
        if *matrix == Mat4::IDENTITY {
            return Ok(TransformationType::Identity);
        }
        Err(GeometryError::invalid_argument(
            "cannot identify transformation type",
        ))
    }

    /// True when the bottom row is `(0, 0, 0, 1)` and the linear block is
    /// orthogonal within tolerance.
    pub fn is_rigid_matrix(matrix: &Mat4) -> bool {
        if !matrix.is_finite() || matrix.row(3) != Vec4::W {
            return false;
        }
        let linear = Mat3::from_mat4(*matrix);
        (linear.transpose() * linear).abs_diff_eq(Mat3::IDENTITY, EPSILON)
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

    /// True when lengths and angles are preserved.
    pub fn is_rigid(&self) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Transformation")?;
        Ok(self.is_rigid)
    }

    /// Symbolic type.
    pub fn kind(&self) -> TransformationType {
        self.kind
    }

    /// Homogeneous matrix.
    pub fn matrix(&self) -> GeometryResult<Mat4> {
        ensure_defined(self.is_defined(), "Transformation")?;
        Ok(self.matrix)
    }

    /// Inverse, keeping the type and rigidity.
    pub fn inverse(&self) -> GeometryResult<Self> {
        ensure_defined(self.is_defined(), "Transformation")?;
        let determinant = self.matrix.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(GeometryError::numeric_failure(
                "transformation matrix is singular",
            ));
        }
        Ok(Self::with_type(self.kind, self.matrix.inverse(), self.is_rigid))
    }

    /// Applies to a position (w = 1).
    pub fn apply_to_point(&self, point: Vec3) -> GeometryResult<Vec3> {
        ensure_defined(vec3::is_defined(point), "Point")?;
        ensure_defined(self.is_defined(), "Transformation")?;
        Ok(self.matrix.project_point3(point))
    }

    /// Applies to a free vector (w = 0).
    pub fn apply_to_vector(&self, vector: Vec3) -> GeometryResult<Vec3> {
        ensure_defined(vec3::is_defined(vector), "Vector")?;
        ensure_defined(self.is_defined(), "Transformation")?;
        Ok(self.matrix.transform_vector3(vector))
    }

    /// Upper-left 3×3 block.
    pub(crate) fn linear_block(&self) -> Mat3 {
        Mat3::from_mat4(self.matrix)
    }
}

impl PartialEq for Transformation {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.matrix == other.matrix
    }
}

/// Composition; the right operand applies first.
impl Mul for Transformation {
    type Output = GeometryResult<Transformation>;

    fn mul(self, rhs: Transformation) -> GeometryResult<Transformation> {
        ensure_defined(self.is_defined(), "Transformation")?;
        ensure_defined(rhs.is_defined(), "Transformation")?;
        Ok(Transformation::with_type(
            TransformationType::compose(self.kind, rhs.kind),
            self.matrix * rhs.matrix,
            self.is_rigid && rhs.is_rigid,
        ))
    }
}

/// Applies to a free vector (w = 0).
impl Mul<Vec3> for Transformation {
    type Output = GeometryResult<Vec3>;

    fn mul(self, rhs: Vec3) -> GeometryResult<Vec3> {
        self.apply_to_vector(rhs)
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Transformation", self.kind)?;
        if self.is_defined() {
            let rows: Vec<String> = (0..4)
                .map(|i| {
                    let r = self.matrix.row(i);
                    format!("[{}, {}, {}, {}]", r.x, r.y, r.z, r.w)
                })
                .collect();
            write!(f, " [{}]", rows.join(", "))?;
        }
        Ok(())
    }
}
