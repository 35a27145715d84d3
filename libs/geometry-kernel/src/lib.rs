//! Three-dimensional computational geometry kernel.
//!
//! This crate models points, linear objects, surfaces and solids in Euclidean
//! space, and answers intersection, containment and distance queries between
//! them. Results of intersection queries are [`Intersection`] values that may
//! hold any number of objects; a dynamic [`Object`] sum type dispatches
//! queries between arbitrary primitive pairs.
//!
//! Rigid and affine [`Transformation`]s act on every primitive, and the
//! [`rotation`] module converts between quaternions, rotation matrices and
//! rotation vectors.
//!
//! Cone and pyramid lateral surfaces are approximated by fans of rays when
//! intersected with spheres and ellipsoids; see [`KernelConfig`] for the
//! discretization level.
//!
//! # Examples
//! ```
//! use geometry_kernel::{IntersectionWith, Line, Point, Sphere, Vec3};
//!
//! let sphere = Sphere::new(Point::origin(), 1.0).unwrap();
//! let line = Line::new(Point::new(-5.0, 0.0, 0.0), Vec3::X).unwrap();
//! let hits = sphere.intersection_with(&line).unwrap();
//! assert!(!hits.is_empty());
//! ```

pub mod angle;
pub mod config;
pub mod core;
pub mod error;
pub mod intersection;
pub mod interval;
pub mod object;
pub mod planar;
pub mod primitives;
pub mod rotation;
pub mod transformation;

mod discretization;
mod query;

pub use angle::{Angle, AngleUnit};
pub use config::KernelConfig;
pub use core::vec3::Vec3;
pub use error::{ErrorKind, GeometryError, GeometryResult};
pub use intersection::{Intersection, IntersectionType};
pub use interval::{Interval, IntervalType};
pub use object::{
    Composite, Contains, IntersectionWith, Intersects, Object, ObjectVariant, Transformable,
};
pub use primitives::*;
pub use rotation::{Quaternion, QuaternionFormat, RotationMatrix, RotationVector};
pub use transformation::{Transformation, TransformationType};
