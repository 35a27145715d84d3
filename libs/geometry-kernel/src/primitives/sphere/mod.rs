//! Sphere surface.
//!
//! Membership is a surface test: a point inside the ball is not contained.
//! Line, ray and segment queries share the quadric root solver with
//! [`Ellipsoid`](crate::primitives::Ellipsoid).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EPSILON;
use crate::core::vec3::Vec3;
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::intersection::Intersection;
use crate::object::{Contains, IntersectionWith, Intersects, Transformable};
use crate::primitives::{Line, Plane, Point, PointSet, Ray, Segment};
use crate::query::quadric::{ParameterRange, Quadric, Roots};
use crate::transformation::Transformation;

/// A sphere with a non-negative radius.
///
/// # Examples
/// ```
/// use geometry_kernel::{IntersectionWith, Line, Point, PointSet, Sphere, Vec3};
///
/// let sphere = Sphere::unit(Point::origin());
/// let line = Line::new(Point::new(0.0, 0.0, -5.0), Vec3::Z).unwrap();
/// let hits = sphere.intersection_with(&line).unwrap();
/// assert_eq!(hits.as_variant::<PointSet>().unwrap().size(), 2);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sphere {
    pub(crate) center: Point,
    pub(crate) radius: f64,
}

impl Sphere {
    /// Creates a sphere. A negative radius is an `InvalidArgument`.
    pub fn new(center: Point, radius: f64) -> GeometryResult<Self> {
        if radius < 0.0 {
            return Err(GeometryError::invalid_argument(format!(
                "sphere radius [{radius}] is negative"
            )));
        }
        Ok(Self { center, radius })
    }

    /// Sphere of radius 1 around `center`.
    pub fn unit(center: Point) -> Self {
        Self {
            center,
            radius: 1.0,
        }
    }

    /// The undefined sphere.
    pub fn undefined() -> Self {
        Self {
            center: Point::undefined(),
            radius: f64::NAN,
        }
    }

    /// True when center and radius are defined.
    pub fn is_defined(&self) -> bool {
        self.center.is_defined() && self.radius.is_finite()
    }

    /// True for a radius of exactly 1.
    pub fn is_unitary(&self) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Sphere")?;
        Ok(self.radius == 1.0)
    }

    /// Center.
    pub fn center(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Sphere")?;
        Ok(self.center)
    }

    /// Radius.
    pub fn radius(&self) -> GeometryResult<f64> {
        ensure_defined(self.is_defined(), "Sphere")?;
        Ok(self.radius)
    }

    pub(crate) fn quadric(&self) -> Quadric {
        Quadric::Sphere {
            center: self.center.as_vector(),
            radius: self.radius,
        }
    }

    /// Ray hits. With `only_in_sight`, a two-point result is reduced to the
    /// hit nearest the ray origin.
    pub fn intersection_with_ray(&self, ray: &Ray, only_in_sight: bool) -> GeometryResult<Intersection> {
        ensure_defined(ray.is_defined(), "Ray")?;
        ensure_defined(self.is_defined(), "Sphere")?;
        Ok(quadric_intersection(
            &self.quadric(),
            ray.origin.as_vector(),
            ray.direction,
            ParameterRange::Ray,
            only_in_sight,
        ))
    }
}

/// Turns the hits of a linear primitive on a quadric into an intersection:
/// none, one point, or a two-point set.
///
/// Two hits closer than the kernel tolerance collapse into one point.
pub(crate) fn quadric_intersection(
    quadric: &Quadric,
    origin: Vec3,
    direction: Vec3,
    range: ParameterRange,
    only_in_sight: bool,
) -> Intersection {
    let hits = quadric.hits(origin, direction, range);
    let at = |t: f64| Point::from_vector(origin + direction * t);
    match hits.as_slice() {
        [] => Intersection::empty(),
        [t] => Intersection::point(at(*t)),
        [near, far, ..] => {
            let (near, far) = (at(*near), at(*far));
            if only_in_sight || (far - near).length() < EPSILON {
                Intersection::point(near)
            } else {
                Intersection::point_set(PointSet::new(vec![near, far]))
            }
        }
    }
}

/// Hits of a segment, treating a degenerate one as its single point.
pub(crate) fn quadric_segment_intersection(
    quadric: &Quadric,
    segment: &Segment,
) -> GeometryResult<Intersection> {
    match segment.parameterization()? {
        Some((origin, direction, length)) => Ok(quadric_intersection(
            quadric,
            origin,
            direction,
            ParameterRange::Segment { length },
            false,
        )),
        None if quadric.is_on_surface(segment.first.as_vector()) => {
            Ok(Intersection::point(segment.first))
        }
        None => Ok(Intersection::empty()),
    }
}

impl Intersects<Point> for Sphere {
    fn intersects(&self, other: &Point) -> GeometryResult<bool> {
        self.contains(other)
    }
}

impl Intersects<PointSet> for Sphere {
    fn intersects(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Sphere")?;
        for point in other {
            if self.contains(point)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Intersects<Line> for Sphere {
    fn intersects(&self, other: &Line) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Line")?;
        ensure_defined(self.is_defined(), "Sphere")?;
        let roots = self.quadric().line_roots(other.origin.as_vector(), other.direction);
        Ok(roots != Roots::None)
    }
}

impl Intersects<Ray> for Sphere {
    /// True when the ray meets the surface; a ray starting inside always does.
    fn intersects(&self, other: &Ray) -> GeometryResult<bool> {
        Ok(!self.intersection_with_ray(other, false)?.is_empty())
    }
}

impl Intersects<Segment> for Sphere {
    fn intersects(&self, other: &Segment) -> GeometryResult<bool> {
        Ok(!self.intersection_with(other)?.is_empty())
    }
}

impl Intersects<Plane> for Sphere {
    fn intersects(&self, other: &Plane) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Contains<Point> for Sphere {
    fn contains(&self, other: &Point) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Sphere")?;
        Ok(self.quadric().is_on_surface(other.as_vector()))
    }
}

impl Contains<PointSet> for Sphere {
    fn contains(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Sphere")?;
        if other.is_empty() {
            return Ok(false);
        }
        for point in other {
            if !self.contains(point)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl IntersectionWith<Line> for Sphere {
    fn intersection_with(&self, other: &Line) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Line")?;
        ensure_defined(self.is_defined(), "Sphere")?;
        Ok(quadric_intersection(
            &self.quadric(),
            other.origin.as_vector(),
            other.direction,
            ParameterRange::Line,
            false,
        ))
    }
}

impl IntersectionWith<Segment> for Sphere {
    fn intersection_with(&self, other: &Segment) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Segment")?;
        ensure_defined(self.is_defined(), "Sphere")?;
        quadric_segment_intersection(&self.quadric(), other)
    }
}

impl Transformable for Sphere {
    /// Only rigid transformations keep a sphere a sphere.
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Sphere")?;
        if !transformation.is_rigid()? {
            return Err(GeometryError::invalid_argument(format!(
                "sphere requires a rigid transformation, got {}",
                transformation.kind()
            )));
        }
        self.center.apply_transformation(transformation)
    }
}

impl PartialEq for Sphere {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.center == other.center
            && self.radius == other.radius
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(f, "Sphere [center: {}, radius: {}]", self.center, self.radius)
    }
}
