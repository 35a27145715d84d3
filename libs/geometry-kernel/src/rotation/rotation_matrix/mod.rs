//! Orthonormal direction cosine matrix.
//!
//! Entries follow the frame-rotation convention shared with
//! [`Quaternion`]: `RotationMatrix::rz(θ)` maps `X` to `(cos θ, −sin θ, 0)`.

use std::fmt;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::config::EPSILON;
use crate::core::vec3::{self, Mat3, Vec3};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::rotation::{Quaternion, RotationVector};

/// A 3×3 rotation matrix.
///
/// # Examples
/// ```
/// use geometry_kernel::{Angle, RotationMatrix, Vec3};
/// let m = RotationMatrix::rz(Angle::degrees(90.0));
/// assert!((m * Vec3::X).distance(-Vec3::Y) < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RotationMatrix {
    matrix: Mat3,
}

impl RotationMatrix {
    /// Wraps `matrix` after checking its columns are orthonormal.
    pub fn new(matrix: Mat3) -> GeometryResult<Self> {
        let columns = [matrix.x_axis, matrix.y_axis, matrix.z_axis];
        if !columns.iter().all(|c| vec3::is_defined(*c)) {
            return Ok(Self::undefined());
        }

        for (index, column) in columns.iter().enumerate() {
            if !vec3::is_unit(*column) {
                return Err(GeometryError::invalid_argument(format!(
                    "rotation matrix column [{index}] is not unitary"
                )));
            }
        }
        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            if columns[a].dot(columns[b]).abs() > EPSILON {
                return Err(GeometryError::invalid_argument(format!(
                    "rotation matrix columns [{a}] and [{b}] are not orthogonal"
                )));
            }
        }

        Ok(Self { matrix })
    }

    /// The undefined matrix.
    pub fn undefined() -> Self {
        Self {
            matrix: Mat3::NAN,
        }
    }

    /// The identity rotation.
    pub fn unit() -> Self {
        Self {
            matrix: Mat3::IDENTITY,
        }
    }

    /// Frame rotation about X.
    pub fn rx(angle: Angle) -> Self {
        let (s, c) = angle.in_radians().sin_cos();
        Self::from_rows_unchecked([
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, c, s),
            Vec3::new(0.0, -s, c),
        ])
    }

    /// Frame rotation about Y.
    pub fn ry(angle: Angle) -> Self {
        let (s, c) = angle.in_radians().sin_cos();
        Self::from_rows_unchecked([
            Vec3::new(c, 0.0, -s),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(s, 0.0, c),
        ])
    }

    /// Frame rotation about Z.
    pub fn rz(angle: Angle) -> Self {
        let (s, c) = angle.in_radians().sin_cos();
        Self::from_rows_unchecked([
            Vec3::new(c, s, 0.0),
            Vec3::new(-s, c, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ])
    }

    /// Builds a matrix from its three rows.
    pub fn rows(first: Vec3, second: Vec3, third: Vec3) -> GeometryResult<Self> {
        Self::new(Mat3::from_cols(first, second, third).transpose())
    }

    /// Builds a matrix from its three columns.
    pub fn columns(first: Vec3, second: Vec3, third: Vec3) -> GeometryResult<Self> {
        Self::new(Mat3::from_cols(first, second, third))
    }

    /// Matrix of a unitary quaternion.
    pub fn from_quaternion(quaternion: &Quaternion) -> GeometryResult<Self> {
        ensure_defined(quaternion.is_defined(), "Quaternion")?;
        if !quaternion.is_unitary() {
            return Err(GeometryError::not_unitary(quaternion.to_string()));
        }

        let v = quaternion.vector_part();
        let (x, y, z, s) = (v.x, v.y, v.z, quaternion.scalar_part());

        Ok(Self::from_rows_unchecked([
            Vec3::new(
                x * x - y * y - z * z + s * s,
                2.0 * (x * y + z * s),
                2.0 * (x * z - y * s),
            ),
            Vec3::new(
                2.0 * (y * x - z * s),
                -x * x + y * y - z * z + s * s,
                2.0 * (y * z + x * s),
            ),
            Vec3::new(
                2.0 * (z * x + y * s),
                2.0 * (z * y - x * s),
                -x * x - y * y + z * z + s * s,
            ),
        ]))
    }

    /// Matrix of a rotation vector.
    pub fn from_rotation_vector(rotation_vector: &RotationVector) -> GeometryResult<Self> {
        ensure_defined(rotation_vector.is_defined(), "Rotation vector")?;
        let axis = rotation_vector.axis();
        let (x, y, z) = (axis.x, axis.y, axis.z);
        let (s, c) = rotation_vector.angle().in_radians().sin_cos();
        let t = 1.0 - c;

        Ok(Self::from_rows_unchecked([
            Vec3::new(c + t * x * x, t * x * y + s * z, t * x * z - s * y),
            Vec3::new(t * y * x - s * z, c + t * y * y, t * y * z + s * x),
            Vec3::new(t * z * x + s * y, t * z * y - s * x, c + t * z * z),
        ]))
    }

    fn from_rows_unchecked(rows: [Vec3; 3]) -> Self {
        Self {
            matrix: Mat3::from_cols(rows[0], rows[1], rows[2]).transpose(),
        }
    }

    /// True when every entry is finite.
    pub fn is_defined(&self) -> bool {
        self.matrix.is_finite()
    }

    /// Underlying matrix (column-major, as `glam` stores it).
    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    /// Row `index` (0-based).
    pub fn row_at(&self, index: usize) -> GeometryResult<Vec3> {
        ensure_defined(self.is_defined(), "Rotation matrix")?;
        if index > 2 {
            return Err(GeometryError::invalid_argument(format!(
                "row index [{index}] out of bounds"
            )));
        }
        Ok(self.matrix.row(index))
    }

    /// Column `index` (0-based).
    pub fn column_at(&self, index: usize) -> GeometryResult<Vec3> {
        ensure_defined(self.is_defined(), "Rotation matrix")?;
        if index > 2 {
            return Err(GeometryError::invalid_argument(format!(
                "column index [{index}] out of bounds"
            )));
        }
        Ok(self.matrix.col(index))
    }

    /// The transpose, which is also the inverse rotation.
    pub fn transposed(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        self.matrix = self.matrix.transpose();
    }
}

impl PartialEq for RotationMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.matrix == other.matrix
    }
}

impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        RotationMatrix {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

impl Mul<Vec3> for RotationMatrix {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.matrix * rhs
    }
}

impl fmt::Display for RotationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        let rows: Vec<String> = (0..3).map(|i| vec3::display(self.matrix.row(i))).collect();
        write!(f, "[{}]", rows.join(", "))
    }
}

#[cfg(test)]
mod tests;
