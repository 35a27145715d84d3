//! Parametric line against a sphere or an ellipsoid.
//!
//! The line is `origin + t·direction` with a unit `direction`, so `t` is an
//! arc length. Substituting into the implicit surface gives
//! `a2·t² + 2·a1·t + a0 = 0`; the discriminant `a1² − a2·a0` decides between
//! no hit, a tangent hit and a secant.
//!
//! Rays and segments clip the roots to their parameter range. A root that has
//! to be clamped onto the origin or an endpoint is kept only when the clamped
//! point is itself on the surface, which is what separates a genuine boundary
//! hit from an interior origin.

use crate::config::{EPSILON, QUADRIC_DISCRIMINANT_TOLERANCE};
use crate::core::vec3::{Mat3, Vec3};

/// Admissible parameter values of a linear primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ParameterRange {
    /// `(−∞, ∞)`
    Line,
    /// `[0, ∞)`
    Ray,
    /// `[0, length]`
    Segment { length: f64 },
}

impl ParameterRange {
    pub(crate) fn bounds(self) -> (f64, f64) {
        match self {
            Self::Line => (f64::NEG_INFINITY, f64::INFINITY),
            Self::Ray => (0.0, f64::INFINITY),
            Self::Segment { length } => (0.0, length),
        }
    }
}

/// Unclipped roots, ascending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Roots {
    None,
    Tangent(f64),
    Secant(f64, f64),
}

/// A closed quadric surface.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Quadric {
    Sphere {
        center: Vec3,
        radius: f64,
    },
    /// `(x − center)ᵀ · matrix · (x − center) = 1`
    Ellipsoid {
        center: Vec3,
        matrix: Mat3,
    },
}

impl Quadric {
    /// Implicit function: zero on the surface, negative inside.
    pub(crate) fn level(&self, point: Vec3) -> f64 {
        match *self {
            Self::Sphere { center, radius } => (point - center).length_squared() - radius * radius,
            Self::Ellipsoid { center, matrix } => {
                let offset = point - center;
                offset.dot(matrix * offset) - 1.0
            }
        }
    }

    pub(crate) fn is_on_surface(&self, point: Vec3) -> bool {
        self.level(point).abs() < EPSILON
    }

    fn coefficients(&self, origin: Vec3, direction: Vec3) -> (f64, f64, f64) {
        match *self {
            Self::Sphere { center, radius } => {
                let offset = origin - center;
                (
                    direction.length_squared(),
                    direction.dot(offset),
                    offset.length_squared() - radius * radius,
                )
            }
            Self::Ellipsoid { center, matrix } => {
                let offset = origin - center;
                let scaled = matrix * direction;
                (
                    direction.dot(scaled),
                    offset.dot(scaled),
                    offset.dot(matrix * offset) - 1.0,
                )
            }
        }
    }

    fn discriminant_tolerance(&self) -> f64 {
        match self {
            Self::Sphere { .. } => 0.0,
            Self::Ellipsoid { .. } => QUADRIC_DISCRIMINANT_TOLERANCE,
        }
    }

    /// Roots along the infinite line.
    pub(crate) fn line_roots(&self, origin: Vec3, direction: Vec3) -> Roots {
        let (a2, a1, a0) = self.coefficients(origin, direction);
        if a2 <= 0.0 {
            return Roots::None;
        }

        let discriminant = a1 * a1 - a2 * a0;
        let tolerance = self.discriminant_tolerance();
        if discriminant < -tolerance {
            return Roots::None;
        }
        if discriminant <= tolerance {
            return Roots::Tangent(-a1 / a2);
        }

        // avoids cancellation between -a1 and the square root
        let q = -(a1 + a1.signum() * discriminant.sqrt());
        let (first, second) = (q / a2, a0 / q);
        if first <= second {
            Roots::Secant(first, second)
        } else {
            Roots::Secant(second, first)
        }
    }

    /// Hit parameters within `range`, ascending and without duplicates.
    pub(crate) fn hits(&self, origin: Vec3, direction: Vec3, range: ParameterRange) -> Vec<f64> {
        let roots = match self.line_roots(origin, direction) {
            Roots::None => return Vec::new(),
            Roots::Tangent(t) => vec![t],
            Roots::Secant(first, second) => vec![first, second],
        };

        let (lower, upper) = range.bounds();
        let mut hits: Vec<f64> = Vec::with_capacity(2);
        for root in roots {
            let t = root.max(lower).min(upper);
            if t != root && !self.is_on_surface(origin + direction * t) {
                log::debug!("discarding clamped quadric hit: root {root}, clamped to {t}");
                continue;
            }
            if hits.last() != Some(&t) {
                hits.push(t);
            }
        }
        hits
    }
}

/// Half-width of an ellipsoid along the unit `normal`: `sqrt(nᵀ M⁻¹ n)`.
///
/// `axes` are the ellipsoid's orthonormal principal axes and `semi_axes` the
/// matching lengths.
pub(crate) fn support_radius(axes: [Vec3; 3], semi_axes: Vec3, normal: Vec3) -> f64 {
    axes.iter()
        .zip(semi_axes.to_array())
        .map(|(axis, length)| {
            let projected = axis.dot(normal) * length;
            projected * projected
        })
        .sum::<f64>()
        .sqrt()
}
