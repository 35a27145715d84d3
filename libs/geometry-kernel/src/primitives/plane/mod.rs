//! Infinite plane.
//!
//! Lines, rays and segments are intersected through one parametric test: a
//! single crossing yields a point, and a primitive lying in the plane is
//! returned whole.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EPSILON;
use crate::core::vec3::{self, Vec3};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::intersection::Intersection;
use crate::object::{Contains, IntersectionWith, Intersects, Transformable};
use crate::primitives::{Cuboid, Ellipsoid, Line, Point, PointSet, Ray, Segment, Sphere};
use crate::query::quadric::{support_radius, ParameterRange};
use crate::transformation::Transformation;

/// A plane through `point` with a unit `normal`.
///
/// # Examples
/// ```
/// use geometry_kernel::{Contains, Plane, Point, Vec3};
///
/// let ground = Plane::new(Point::origin(), Vec3::new(0.0, 0.0, 3.0)).unwrap();
/// assert_eq!(ground.normal().unwrap(), Vec3::Z);
/// assert!(ground.contains(&Point::new(4.0, -2.0, 0.0)).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Plane {
    pub(crate) point: Point,
    pub(crate) normal: Vec3,
}

/// Outcome of the parametric test of a linear primitive against a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PlaneCrossing {
    Miss,
    At(f64),
    Within,
}

impl Plane {
    /// Creates a plane, normalizing `normal`. A zero normal is an
    /// `InvalidArgument`.
    pub fn new(point: Point, normal: Vec3) -> GeometryResult<Self> {
        let normal = if !vec3::is_defined(normal) {
            normal
        } else if vec3::is_zero(normal) {
            return Err(GeometryError::invalid_argument("plane normal is zero"));
        } else {
            normal.normalize()
        };
        Ok(Self { point, normal })
    }

    /// The undefined plane.
    pub fn undefined() -> Self {
        Self {
            point: Point::undefined(),
            normal: vec3::undefined(),
        }
    }

    /// True when point and normal are defined.
    pub fn is_defined(&self) -> bool {
        self.point.is_defined() && vec3::is_defined(self.normal)
    }

    /// Reference point.
    pub fn point(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Plane")?;
        Ok(self.point)
    }

    /// Unit normal.
    pub fn normal(&self) -> GeometryResult<Vec3> {
        ensure_defined(self.is_defined(), "Plane")?;
        Ok(self.normal)
    }

    /// Unsigned distance to `point`.
    pub fn distance_to(&self, point: &Point) -> GeometryResult<f64> {
        ensure_defined(point.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Plane")?;
        Ok(self.signed_distance(point.as_vector()).abs())
    }

    pub(crate) fn signed_distance(&self, position: Vec3) -> f64 {
        (position - self.point.as_vector()).dot(self.normal)
    }

    /// Where `origin + t·direction`, with a unit `direction`, meets the
    /// plane within `range`.
    pub(crate) fn crossing(&self, origin: Vec3, direction: Vec3, range: ParameterRange) -> PlaneCrossing {
        let rate = direction.dot(self.normal);
        let offset = self.signed_distance(origin);

        if rate.abs() <= EPSILON {
            return if offset.abs() <= EPSILON {
                PlaneCrossing::Within
            } else {
                PlaneCrossing::Miss
            };
        }

        let t = -offset / rate;
        let (lower, upper) = range.bounds();
        if t < lower - EPSILON || t > upper + EPSILON {
            return PlaneCrossing::Miss;
        }
        PlaneCrossing::At(t.clamp(lower, upper))
    }

    fn crossing_intersection(
        &self,
        origin: Vec3,
        direction: Vec3,
        range: ParameterRange,
        whole: Intersection,
    ) -> Intersection {
        match self.crossing(origin, direction, range) {
            PlaneCrossing::Miss => Intersection::empty(),
            PlaneCrossing::At(t) => Intersection::point(Point::from_vector(origin + direction * t)),
            PlaneCrossing::Within => whole,
        }
    }
}

fn linear_range(segment: &Segment) -> GeometryResult<Option<(Vec3, Vec3, ParameterRange)>> {
    Ok(segment
        .parameterization()?
        .map(|(origin, direction, length)| (origin, direction, ParameterRange::Segment { length })))
}

impl Intersects<Point> for Plane {
    fn intersects(&self, other: &Point) -> GeometryResult<bool> {
        self.contains(other)
    }
}

impl Intersects<PointSet> for Plane {
    fn intersects(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Plane")?;
        for point in other {
            if self.contains(point)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Intersects<Line> for Plane {
    fn intersects(&self, other: &Line) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Line")?;
        ensure_defined(self.is_defined(), "Plane")?;
        let crossing = self.crossing(other.origin.as_vector(), other.direction, ParameterRange::Line);
        Ok(crossing != PlaneCrossing::Miss)
    }
}

impl Intersects<Ray> for Plane {
    fn intersects(&self, other: &Ray) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Ray")?;
        ensure_defined(self.is_defined(), "Plane")?;
        let crossing = self.crossing(other.origin.as_vector(), other.direction, ParameterRange::Ray);
        Ok(crossing != PlaneCrossing::Miss)
    }
}

impl Intersects<Segment> for Plane {
    fn intersects(&self, other: &Segment) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Segment")?;
        ensure_defined(self.is_defined(), "Plane")?;
        match linear_range(other)? {
            Some((origin, direction, range)) => {
                Ok(self.crossing(origin, direction, range) != PlaneCrossing::Miss)
            }
            None => self.contains(&other.first),
        }
    }
}

impl Intersects<Sphere> for Plane {
    fn intersects(&self, other: &Sphere) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Sphere")?;
        ensure_defined(self.is_defined(), "Plane")?;
        Ok(self.signed_distance(other.center.as_vector()).abs() <= other.radius)
    }
}

impl Intersects<Ellipsoid> for Plane {
    /// Compares the center offset with the ellipsoid half-width along the
    /// normal.
    fn intersects(&self, other: &Ellipsoid) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Ellipsoid")?;
        ensure_defined(self.is_defined(), "Plane")?;
        let reach = support_radius(other.axes()?, other.semi_axes, self.normal);
        Ok(self.signed_distance(other.center.as_vector()).abs() <= reach)
    }
}

impl Intersects<Cuboid> for Plane {
    fn intersects(&self, other: &Cuboid) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Cuboid")?;
        ensure_defined(self.is_defined(), "Plane")?;
        let reach = other.oriented_box().projected_radius(self.normal);
        Ok(self.signed_distance(other.center.as_vector()).abs() <= reach + EPSILON)
    }
}

impl Contains<Point> for Plane {
    fn contains(&self, other: &Point) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Plane")?;
        Ok(self.signed_distance(other.as_vector()).abs() < EPSILON)
    }
}

impl Contains<PointSet> for Plane {
    fn contains(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Plane")?;
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

impl Contains<Line> for Plane {
    fn contains(&self, other: &Line) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Line")?;
        Ok(other.direction.dot(self.normal).abs() < EPSILON && self.contains(&other.origin)?)
    }
}

impl Contains<Ray> for Plane {
    fn contains(&self, other: &Ray) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Ray")?;
        Ok(other.direction.dot(self.normal).abs() < EPSILON && self.contains(&other.origin)?)
    }
}

impl Contains<Segment> for Plane {
    fn contains(&self, other: &Segment) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Segment")?;
        Ok(self.contains(&other.first)? && self.contains(&other.second)?)
    }
}

impl IntersectionWith<Point> for Plane {
    fn intersection_with(&self, other: &Point) -> GeometryResult<Intersection> {
        if self.contains(other)? {
            return Ok(Intersection::point(*other));
        }
        Ok(Intersection::empty())
    }
}

impl IntersectionWith<PointSet> for Plane {
    /// The members lying in the plane, as a point set.
    fn intersection_with(&self, other: &PointSet) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Point set")?;
        ensure_defined(self.is_defined(), "Plane")?;
        let mut inside = Vec::new();
        for point in other {
            if self.contains(point)? {
                inside.push(*point);
            }
        }
        if inside.is_empty() {
            return Ok(Intersection::empty());
        }
        Ok(Intersection::point_set(PointSet::new(inside)))
    }
}

impl IntersectionWith<Line> for Plane {
    fn intersection_with(&self, other: &Line) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Line")?;
        ensure_defined(self.is_defined(), "Plane")?;
        Ok(self.crossing_intersection(
            other.origin.as_vector(),
            other.direction,
            ParameterRange::Line,
            Intersection::line(*other),
        ))
    }
}

impl IntersectionWith<Ray> for Plane {
    fn intersection_with(&self, other: &Ray) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Ray")?;
        ensure_defined(self.is_defined(), "Plane")?;
        Ok(self.crossing_intersection(
            other.origin.as_vector(),
            other.direction,
            ParameterRange::Ray,
            Intersection::ray(*other),
        ))
    }
}

impl IntersectionWith<Segment> for Plane {
    fn intersection_with(&self, other: &Segment) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Segment")?;
        ensure_defined(self.is_defined(), "Plane")?;
        match linear_range(other)? {
            Some((origin, direction, range)) => Ok(self.crossing_intersection(
                origin,
                direction,
                range,
                Intersection::segment(*other),
            )),
            None => self.intersection_with(&other.first),
        }
    }
}

impl Transformable for Plane {
    /// Moves the point and maps the normal through the inverse transpose of
    /// the linear part.
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Plane")?;
        let linear = transformation.linear_block();
        if linear.determinant().abs() <= f64::EPSILON {
            return Err(GeometryError::numeric_failure(
                "transformation collapses the plane",
            ));
        }
        let normal = linear.inverse().transpose() * self.normal;
        self.point.apply_transformation(transformation)?;
        self.normal = normal.normalize();
        Ok(())
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && vec3::is_parallel(self.normal, other.normal)
            && self.contains(&other.point).unwrap_or(false)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(
            f,
            "Plane [point: {}, normal: {}]",
            self.point,
            vec3::display(self.normal)
        )
    }
}
