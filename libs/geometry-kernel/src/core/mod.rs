//! Core numeric substrate for the geometry kernel.
//!
//! Includes vector and matrix aliases (`Vec3`, `Mat3`, `Mat4`, `Vec2`) and the
//! small predicates every primitive relies on.

pub mod vec2;
pub mod vec3;
