//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! The helper functions keep vector predicates readable while avoiding direct
//! dependencies on `glam` from higher layers. An undefined vector carries NaN
//! components; every helper here treats non-finite input as undefined.

use std::cmp::Ordering;

pub use glam::{DMat3 as Mat3, DMat4 as Mat4, DVec3 as Vec3, DVec4 as Vec4};

use crate::config::{approx_equal, approx_zero, EPSILON};

/// Returns the sentinel used for undefined vectors.
///
/// # Examples
/// ```
/// use geometry_kernel::core::vec3;
/// assert!(!vec3::is_defined(vec3::undefined()));
/// ```
pub fn undefined() -> Vec3 {
    Vec3::NAN
}

/// True when every component is finite.
#[inline]
pub fn is_defined(v: Vec3) -> bool {
    v.is_finite()
}

/// True when `v` has zero length within the kernel tolerance.
#[inline]
pub fn is_zero(v: Vec3) -> bool {
    approx_zero(v.length())
}

/// True when `v` has unit length within the kernel tolerance.
#[inline]
pub fn is_unit(v: Vec3) -> bool {
    approx_equal(v.length(), 1.0)
}

/// True when `a` and `b` are within `tolerance` of each other.
///
/// # Examples
/// ```
/// use geometry_kernel::core::vec3::{is_near, Vec3};
/// assert!(is_near(Vec3::X, Vec3::new(1.0, 1.0e-12, 0.0), 1.0e-9));
/// ```
#[inline]
pub fn is_near(a: Vec3, b: Vec3, tolerance: f64) -> bool {
    a.distance(b) <= tolerance
}

/// True when `a` and `b` are parallel (or anti-parallel) within the kernel
/// tolerance. Both vectors are expected to be unit length.
#[inline]
pub fn is_parallel(a: Vec3, b: Vec3) -> bool {
    a.cross(b).length() <= EPSILON
}

/// Unsigned angle between two non-zero vectors, in radians within `[0, π]`.
///
/// Uses `atan2(|a × b|, a · b)`, which stays accurate near 0 and π where the
/// `acos` form loses precision.
///
/// # Examples
/// ```
/// use geometry_kernel::core::vec3::{angle_between, Vec3};
/// let angle = angle_between(Vec3::X, Vec3::Y);
/// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1.0e-12);
/// ```
#[inline]
pub fn angle_between(a: Vec3, b: Vec3) -> f64 {
    a.cross(b).length().atan2(a.dot(b))
}

/// Outer (tensor) product `a bᵀ`.
#[inline]
pub fn outer(a: Vec3, b: Vec3) -> Mat3 {
    Mat3::from_cols(a * b.x, a * b.y, a * b.z)
}

/// Lexicographic total order over defined vectors (x, then y, then z).
///
/// Used to keep point sets ordered and deduplicated.
pub fn lexicographic_cmp(a: Vec3, b: Vec3) -> Ordering {
    a.x.total_cmp(&b.x)
        .then(a.y.total_cmp(&b.y))
        .then(a.z.total_cmp(&b.z))
}

/// Formats a vector as `[x, y, z]`, or `Undefined`.
pub fn display(v: Vec3) -> String {
    if is_defined(v) {
        format!("[{}, {}, {}]", v.x, v.y, v.z)
    } else {
        "Undefined".to_string()
    }
}

#[cfg(test)]
mod tests;
