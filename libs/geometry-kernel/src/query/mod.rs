//! # Closed-form queries
//!
//! Low-level routines the primitives delegate to. Inputs are plain vectors
//! and matrices that the callers have already validated, so nothing here
//! returns `GeometryResult`.
//!
//! - [`quadric`]: roots of a parametric line against a sphere or ellipsoid,
//!   clipped to a ray or segment range;
//! - [`oriented_box`]: slab test for lines against an oriented box, and the
//!   separating axis test between two boxes;
//! - [`eigen`]: symmetric 3×3 eigen decomposition (cyclic Jacobi).

pub(crate) mod eigen;
pub(crate) mod oriented_box;
pub(crate) mod quadric;
