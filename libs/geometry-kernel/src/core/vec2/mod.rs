//! 2D vector definitions for the geometry kernel.
//!
//! Provides the `glam::DVec2` alias and the exact orientation predicate used by
//! planar polygon tests.

use std::cmp::Ordering;

pub use glam::DVec2 as Vec2;
use robust::Coord;

/// True when both components are finite.
#[inline]
pub fn is_defined(v: Vec2) -> bool {
    v.is_finite()
}

/// Orientation of `c` relative to the directed line `a → b`.
///
/// Returns [`Ordering::Greater`] when `c` is to the left (counter-clockwise),
/// [`Ordering::Less`] when it is to the right and [`Ordering::Equal`] when the
/// three points are collinear. Backed by the adaptive-precision
/// `robust::orient2d`, so the sign is exact.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use geometry_kernel::core::vec2::{orientation, Vec2};
///
/// let side = orientation(Vec2::ZERO, Vec2::X, Vec2::new(0.5, 1.0));
/// assert_eq!(side, Ordering::Greater);
/// ```
pub fn orientation(a: Vec2, b: Vec2, c: Vec2) -> Ordering {
    let det = robust::orient2d(coord(a), coord(b), coord(c));
    det.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

/// True when `p` lies on the closed segment `a → b`.
pub fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    orientation(a, b, p) == Ordering::Equal
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// True when the closed segments `p1 → p2` and `q1 → q2` share a point.
///
/// # Examples
/// ```
/// use geometry_kernel::core::vec2::{segments_intersect, Vec2};
///
/// let crossing = segments_intersect(
///     Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0),
///     Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0),
/// );
/// assert!(crossing);
/// ```
pub fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    let proper = d1 != Ordering::Equal
        && d2 != Ordering::Equal
        && d3 != Ordering::Equal
        && d4 != Ordering::Equal
        && d1 != d2
        && d3 != d4;

    proper
        || on_segment(q1, q2, p1)
        || on_segment(q1, q2, p2)
        || on_segment(p1, p2, q1)
        || on_segment(p1, p2, q2)
}

fn coord(v: Vec2) -> Coord<f64> {
    Coord { x: v.x, y: v.y }
}
