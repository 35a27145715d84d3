//! # Planar
//!
//! The 2D pieces the 3D kernel builds on: a polygon with exact orientation
//! predicates, and a 3×3 homogeneous transformation sharing the 3D type
//! lattice.

pub mod polygon;
pub mod transformation;

pub use polygon::Polygon;
pub use transformation::Transformation;
