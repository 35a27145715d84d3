//! Half-line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EPSILON;
use crate::core::vec3::{self, Vec3};
use crate::error::{ensure_defined, GeometryResult};
use crate::intersection::Intersection;
use crate::object::{Contains, IntersectionWith, Intersects, Transformable};
use crate::primitives::line::{transform_direction, unit_direction};
use crate::primitives::{Cuboid, Ellipsoid, Plane, Point, PointSet, Sphere};
use crate::transformation::Transformation;

/// A half-line starting at `origin` along a unit `direction`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ray {
    pub(crate) origin: Point,
    pub(crate) direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`. A zero direction is an
    /// `InvalidArgument`.
    pub fn new(origin: Point, direction: Vec3) -> GeometryResult<Self> {
        Ok(Self {
            origin,
            direction: unit_direction(direction, "ray")?,
        })
    }

    /// The undefined ray.
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

    /// Start point.
    pub fn origin(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Ray")?;
        Ok(self.origin)
    }

    /// Unit direction.
    pub fn direction(&self) -> GeometryResult<Vec3> {
        ensure_defined(self.is_defined(), "Ray")?;
        Ok(self.direction)
    }

    /// Distance to `point`: to the origin when `point` is behind it,
    /// otherwise to the supporting line.
    pub fn distance_to(&self, point: &Point) -> GeometryResult<f64> {
        ensure_defined(point.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Ray")?;
        let offset = *point - self.origin;
        if offset.dot(self.direction) < 0.0 {
            return Ok(offset.length());
        }
        Ok(offset.cross(self.direction).length())
    }
}

impl Intersects<Point> for Ray {
    fn intersects(&self, other: &Point) -> GeometryResult<bool> {
        self.contains(other)
    }
}

impl Intersects<Plane> for Ray {
    fn intersects(&self, other: &Plane) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Intersects<Sphere> for Ray {
    fn intersects(&self, other: &Sphere) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Intersects<Ellipsoid> for Ray {
    fn intersects(&self, other: &Ellipsoid) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Intersects<Cuboid> for Ray {
    fn intersects(&self, other: &Cuboid) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Contains<Point> for Ray {
    /// Collinear and not behind the origin.
    fn contains(&self, other: &Point) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Ray")?;
        let offset = *other - self.origin;
        Ok(offset.cross(self.direction).length() < EPSILON && offset.dot(self.direction) >= 0.0)
    }
}

impl Contains<PointSet> for Ray {
    fn contains(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Ray")?;
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

impl IntersectionWith<Plane> for Ray {
    fn intersection_with(&self, other: &Plane) -> GeometryResult<Intersection> {
        other.intersection_with(self)
    }
}

impl IntersectionWith<Sphere> for Ray {
    /// Both hits are kept; see [`Sphere::intersection_with_ray`] for the
    /// in-sight variant.
    fn intersection_with(&self, other: &Sphere) -> GeometryResult<Intersection> {
        other.intersection_with_ray(self, false)
    }
}

impl IntersectionWith<Ellipsoid> for Ray {
    fn intersection_with(&self, other: &Ellipsoid) -> GeometryResult<Intersection> {
        other.intersection_with_ray(self, false)
    }
}

impl IntersectionWith<Cuboid> for Ray {
    fn intersection_with(&self, other: &Cuboid) -> GeometryResult<Intersection> {
        other.intersection_with(self)
    }
}

impl Transformable for Ray {
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Ray")?;
        let direction = transform_direction(transformation, self.direction, "ray")?;
        self.origin.apply_transformation(transformation)?;
        self.direction = direction;
        Ok(())
    }
}

impl PartialEq for Ray {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.origin == other.origin
            && self.direction == other.direction
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(
            f,
            "Ray [origin: {}, direction: {}]",
            self.origin,
            vec3::display(self.direction)
        )
    }
}

#[cfg(test)]
mod tests;
