//! Line segment between two endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EPSILON;
use crate::core::vec3::Vec3;
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::intersection::Intersection;
use crate::object::{Contains, IntersectionWith, Intersects, Transformable};
use crate::primitives::{Cuboid, Ellipsoid, Line, Plane, Point, PointSet, Sphere};
use crate::transformation::Transformation;

/// A closed segment. Equal endpoints make it degenerate, which is allowed.
///
/// # Examples
/// ```
/// use geometry_kernel::{Point, Segment};
///
/// let segment = Segment::new(Point::origin(), Point::new(2.0, 0.0, 0.0));
/// assert_eq!(segment.length().unwrap(), 2.0);
/// assert_eq!(segment.center().unwrap(), Point::new(1.0, 0.0, 0.0));
/// assert_eq!(segment, Segment::new(Point::new(2.0, 0.0, 0.0), Point::origin()));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment {
    pub(crate) first: Point,
    pub(crate) second: Point,
}

impl Segment {
    /// Segment from `first` to `second`.
    pub fn new(first: Point, second: Point) -> Self {
        Self { first, second }
    }

    /// The undefined segment.
    pub fn undefined() -> Self {
        Self::new(Point::undefined(), Point::undefined())
    }

    /// True when both endpoints are defined.
    pub fn is_defined(&self) -> bool {
        self.first.is_defined() && self.second.is_defined()
    }

    /// True when both endpoints coincide.
    pub fn is_degenerate(&self) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Segment")?;
        Ok(self.first == self.second)
    }

    /// First endpoint.
    pub fn first_point(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Segment")?;
        Ok(self.first)
    }

    /// Second endpoint.
    pub fn second_point(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Segment")?;
        Ok(self.second)
    }

    /// Midpoint.
    pub fn center(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Segment")?;
        Ok(self.first + (self.second - self.first) * 0.5)
    }

    /// Unit vector from the first to the second endpoint.
    pub fn direction(&self) -> GeometryResult<Vec3> {
        self.parameterization()?
            .map(|(_, direction, _)| direction)
            .ok_or_else(|| GeometryError::invalid_argument("degenerate segment has no direction"))
    }

    /// Distance between the endpoints.
    pub fn length(&self) -> GeometryResult<f64> {
        self.first.distance_to(&self.second)
    }

    /// Supporting line.
    pub fn to_line(&self) -> GeometryResult<Line> {
        Line::new(self.first, self.direction()?)
    }

    /// Distance to the closest point of the segment.
    pub fn distance_to(&self, point: &Point) -> GeometryResult<f64> {
        ensure_defined(point.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Segment")?;
        let Some((origin, direction, length)) = self.parameterization()? else {
            return self.first.distance_to(point);
        };
        let t = (point.as_vector() - origin).dot(direction).clamp(0.0, length);
        Ok(point.as_vector().distance(origin + direction * t))
    }

    /// Smallest distance to any point of `point_set`.
    pub fn distance_to_point_set(&self, point_set: &PointSet) -> GeometryResult<f64> {
        ensure_defined(point_set.is_defined(), "Point set")?;
        let mut smallest = f64::INFINITY;
        for point in point_set {
            smallest = smallest.min(self.distance_to(point)?);
        }
        Ok(smallest)
    }

    /// `(origin, unit direction, length)`, or `None` when degenerate.
    pub(crate) fn parameterization(&self) -> GeometryResult<Option<(Vec3, Vec3, f64)>> {
        if self.is_degenerate()? {
            return Ok(None);
        }
        let span = self.second - self.first;
        let length = span.length();
        Ok(Some((self.first.as_vector(), span / length, length)))
    }
}

impl Intersects<Point> for Segment {
    fn intersects(&self, other: &Point) -> GeometryResult<bool> {
        self.contains(other)
    }
}

impl Intersects<Plane> for Segment {
    fn intersects(&self, other: &Plane) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Intersects<Sphere> for Segment {
    fn intersects(&self, other: &Sphere) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Intersects<Ellipsoid> for Segment {
    fn intersects(&self, other: &Ellipsoid) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Intersects<Cuboid> for Segment {
    fn intersects(&self, other: &Cuboid) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Contains<Point> for Segment {
    /// Collinear with `0 ≤ AB·AP ≤ AB·AB`.
    fn contains(&self, other: &Point) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Segment")?;
        if self.is_degenerate()? {
            return Ok(self.first == *other);
        }
        let span = self.second - self.first;
        let offset = *other - self.first;
        let along = span.dot(offset);
        Ok(span.cross(offset).length() < EPSILON
            && along >= 0.0
            && along <= span.length_squared())
    }
}

impl Contains<PointSet> for Segment {
    fn contains(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Segment")?;
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

impl IntersectionWith<Plane> for Segment {
    fn intersection_with(&self, other: &Plane) -> GeometryResult<Intersection> {
        other.intersection_with(self)
    }
}

impl IntersectionWith<Sphere> for Segment {
    fn intersection_with(&self, other: &Sphere) -> GeometryResult<Intersection> {
        other.intersection_with(self)
    }
}

impl IntersectionWith<Ellipsoid> for Segment {
    fn intersection_with(&self, other: &Ellipsoid) -> GeometryResult<Intersection> {
        other.intersection_with(self)
    }
}

impl IntersectionWith<Cuboid> for Segment {
    fn intersection_with(&self, other: &Cuboid) -> GeometryResult<Intersection> {
        other.intersection_with(self)
    }
}

impl Transformable for Segment {
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Segment")?;
        self.first.apply_transformation(transformation)?;
        self.second.apply_transformation(transformation)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && ((self.first == other.first && self.second == other.second)
                || (self.first == other.second && self.second == other.first))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(f, "Segment [{}, {}]", self.first, self.second)
    }
}

#[cfg(test)]
mod tests;
