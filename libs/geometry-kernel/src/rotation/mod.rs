//! # Rotations
//!
//! Three interchangeable representations of a rotation in SO(3):
//!
//! - [`Quaternion`]: `(x, y, z, s)` with vector part first;
//! - [`RotationMatrix`]: an orthonormal 3×3 direction cosine matrix;
//! - [`RotationVector`]: a unit axis and an [`Angle`](crate::Angle).
//!
//! ## Convention
//!
//! All three describe *frame* rotations (passive form). Rotating a vector by a
//! quaternion, multiplying it by the matching rotation matrix, or converting a
//! rotation vector and doing either, gives the same coordinates:
//!
//! ```rust
//! use geometry_kernel::{Angle, Quaternion, RotationMatrix, RotationVector, Vec3};
//!
//! let rv = RotationVector::new(Vec3::Z, Angle::degrees(90.0)).unwrap();
//! let q = Quaternion::from_rotation_vector(&rv).unwrap();
//! let m = RotationMatrix::from_rotation_vector(&rv).unwrap();
//!
//! let by_q = (q * Vec3::X).unwrap();
//! let by_m = m * Vec3::X;
//! assert!(by_q.distance(by_m) < 1e-12);
//! assert!(by_q.distance(-Vec3::Y) < 1e-12);
//! ```
//!
//! To actively turn a vector by `+θ` about an axis, rotate by the conjugate.

pub mod quaternion;
pub mod rotation_matrix;
pub mod rotation_vector;

pub use quaternion::{Quaternion, QuaternionFormat};
pub use rotation_matrix::RotationMatrix;
pub use rotation_vector::RotationVector;
