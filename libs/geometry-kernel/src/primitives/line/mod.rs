//! Infinite straight line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EPSILON;
use crate::core::vec3::{self, Vec3};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::intersection::Intersection;
use crate::object::{Contains, IntersectionWith, Intersects, Transformable};
use crate::primitives::{Cuboid, Ellipsoid, Plane, Point, PointSet, Sphere};
use crate::transformation::Transformation;

/// A line through `origin` along a unit `direction`.
///
/// Two lines are equal when they describe the same set of points, whatever
/// the origin or the sense of the direction.
///
/// # Examples
/// ```
/// use geometry_kernel::{Line, Point, Vec3};
///
/// let a = Line::new(Point::origin(), Vec3::X).unwrap();
/// let b = Line::new(Point::new(5.0, 0.0, 0.0), Vec3::new(-2.0, 0.0, 0.0)).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Line {
    pub(crate) origin: Point,
    pub(crate) direction: Vec3,
}

impl Line {
    /// Creates a line, normalizing `direction`. A zero direction is an
    /// `InvalidArgument`.
    pub fn new(origin: Point, direction: Vec3) -> GeometryResult<Self> {
        Ok(Self {
            origin,
            direction: unit_direction(direction, "line")?,
        })
    }

    /// The line through two distinct points.
    pub fn points(first: &Point, second: &Point) -> GeometryResult<Self> {
        ensure_defined(first.is_defined(), "Point")?;
        ensure_defined(second.is_defined(), "Point")?;
        if first == second {
            return Err(GeometryError::invalid_argument(
                "cannot build a line from two identical points",
            ));
        }
        Self::new(*first, *second - *first)
    }

    /// The undefined line.
    pub fn undefined() -> Self {
        Self {
            origin: Point::undefined(),
            direction: vec3::undefined(),
        }
    }

    /// True when origin and direction are defined.
    pub fn is_defined(&self) -> bool {
        self.origin.is_defined() && vec3::is_defined(self.direction)
    }

    /// A point on the line.
    pub fn origin(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Line")?;
        Ok(self.origin)
    }

    /// Unit direction.
    pub fn direction(&self) -> GeometryResult<Vec3> {
        ensure_defined(self.is_defined(), "Line")?;
        Ok(self.direction)
    }

    /// Perpendicular distance to `point`.
    pub fn distance_to(&self, point: &Point) -> GeometryResult<f64> {
        ensure_defined(point.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Line")?;
        Ok((*point - self.origin).cross(self.direction).length())
    }
}

/// Normalizes a direction, passing undefined input through.
pub(crate) fn unit_direction(direction: Vec3, owner: &str) -> GeometryResult<Vec3> {
    if !vec3::is_defined(direction) {
        return Ok(vec3::undefined());
    }
    if vec3::is_zero(direction) {
        return Err(GeometryError::invalid_argument(format!(
            "{owner} direction is zero"
        )));
    }
    Ok(direction.normalize())
}

/// Maps a unit direction through `transformation` and renormalizes it.
pub(crate) fn transform_direction(
    transformation: &Transformation,
    direction: Vec3,
    owner: &str,
) -> GeometryResult<Vec3> {
    let mapped = transformation.apply_to_vector(direction)?;
    if vec3::is_zero(mapped) {
        return Err(GeometryError::numeric_failure(format!(
            "transformation collapses the {owner} direction"
        )));
    }
    Ok(mapped.normalize())
}

impl Intersects<Point> for Line {
    fn intersects(&self, other: &Point) -> GeometryResult<bool> {
        self.contains(other)
    }
}

impl Intersects<Plane> for Line {
    fn intersects(&self, other: &Plane) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Intersects<Sphere> for Line {
    fn intersects(&self, other: &Sphere) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Intersects<Ellipsoid> for Line {
    fn intersects(&self, other: &Ellipsoid) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Intersects<Cuboid> for Line {
    fn intersects(&self, other: &Cuboid) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Contains<Point> for Line {
    fn contains(&self, other: &Point) -> GeometryResult<bool> {
        Ok(self.distance_to(other)? < EPSILON)
    }
}

impl Contains<PointSet> for Line {
    fn contains(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Line")?;
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

impl IntersectionWith<Plane> for Line {
    fn intersection_with(&self, other: &Plane) -> GeometryResult<Intersection> {
        other.intersection_with(self)
    }
}

impl IntersectionWith<Sphere> for Line {
    fn intersection_with(&self, other: &Sphere) -> GeometryResult<Intersection> {
        other.intersection_with(self)
    }
}

impl IntersectionWith<Ellipsoid> for Line {
    fn intersection_with(&self, other: &Ellipsoid) -> GeometryResult<Intersection> {
        other.intersection_with(self)
    }
}

impl IntersectionWith<Cuboid> for Line {
    fn intersection_with(&self, other: &Cuboid) -> GeometryResult<Intersection> {
        other.intersection_with(self)
    }
}

impl Transformable for Line {
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Line")?;
        let direction = transform_direction(transformation, self.direction, "line")?;
        self.origin.apply_transformation(transformation)?;
        self.direction = direction;
        Ok(())
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && vec3::is_parallel(self.direction, other.direction)
            && self.contains(&other.origin).unwrap_or(false)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(
            f,
            "Line [origin: {}, direction: {}]",
            self.origin,
            vec3::display(self.direction)
        )
    }
}

#[cfg(test)]
mod tests;
