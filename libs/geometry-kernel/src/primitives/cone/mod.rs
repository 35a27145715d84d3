//! Infinite circular cone.
//!
//! The solid bounded by all rays from the apex whose angle to the axis is at
//! most the half-angle. Surface intersections with spheres and ellipsoids go
//! through a ray fan over the lateral surface.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::config::EPSILON;
use crate::core::vec3::{self, Vec3};
use crate::discretization::{fan_intersection, fan_intersects, rotate_about};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::interval::Interval;
use crate::intersection::Intersection;
use crate::object::{Contains, Intersects, Transformable};
use crate::primitives::line::{transform_direction, unit_direction};
use crate::primitives::{Ellipsoid, Point, PointSet, Ray, Segment, Sphere};
use crate::transformation::Transformation;

/// A cone given by its apex, unit axis and half-angle.
///
/// # Examples
/// ```
/// use geometry_kernel::{Angle, Cone, Contains, Point, Vec3};
///
/// let cone = Cone::new(Point::origin(), Vec3::Z, Angle::degrees(45.0)).unwrap();
/// assert!(cone.contains(&Point::new(0.5, 0.0, 1.0)).unwrap());
/// assert!(!cone.contains(&Point::new(2.0, 0.0, 1.0)).unwrap());
/// assert_eq!(cone.rays_of_lateral_surface(4).unwrap().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cone {
    pub(crate) apex: Point,
    pub(crate) axis: Vec3,
    pub(crate) angle: Angle,
}

impl Cone {
    /// Creates a cone. The axis is normalized and must not be zero; the
    /// half-angle must lie in `[0°, 180°]`.
    pub fn new(apex: Point, axis: Vec3, angle: Angle) -> GeometryResult<Self> {
        let axis = unit_direction(axis, "Cone")?;
        if angle.is_defined() && !(0.0..=std::f64::consts::PI).contains(&angle.in_radians()) {
            return Err(GeometryError::invalid_argument(format!(
                "cone half-angle [{angle}] is outside [0, 180] degrees"
            )));
        }
        Ok(Self { apex, axis, angle })
    }

    /// The undefined cone.
    pub fn undefined() -> Self {
        Self {
            apex: Point::undefined(),
            axis: vec3::undefined(),
            angle: Angle::undefined(),
        }
    }

    /// True when apex, axis and angle are defined.
    pub fn is_defined(&self) -> bool {
        self.apex.is_defined() && vec3::is_defined(self.axis) && self.angle.is_defined()
    }

    /// Apex.
    pub fn apex(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Cone")?;
        Ok(self.apex)
    }

    /// Unit axis.
    pub fn axis(&self) -> GeometryResult<Vec3> {
        ensure_defined(self.is_defined(), "Cone")?;
        Ok(self.axis)
    }

    /// Half-angle.
    pub fn angle(&self) -> GeometryResult<Angle> {
        ensure_defined(self.is_defined(), "Cone")?;
        Ok(self.angle)
    }

    /// `ray_count` generating rays spread evenly around the axis, starting
    /// from a fixed reference ray.
    pub fn rays_of_lateral_surface(&self, ray_count: usize) -> GeometryResult<Vec<Ray>> {
        ensure_defined(self.is_defined(), "Cone")?;
        if ray_count == 0 {
            return Err(GeometryError::invalid_argument("ray count too low: 0"));
        }

        let reference = if self.axis.dot(Vec3::X).abs() < 0.5 {
            self.axis.cross(Vec3::X).normalize()
        } else {
            self.axis.cross(Vec3::Y).normalize()
        };
        let generator = rotate_about(self.axis, reference, self.angle)?;

        let turns = if ray_count > 1 {
            Interval::half_open_right(0.0, std::f64::consts::TAU).generate_array_with_size(ray_count)?
        } else {
            vec![0.0]
        };
        turns
            .into_iter()
            .map(|turn| Ray::new(self.apex, rotate_about(generator, self.axis, Angle::radians(turn))?))
            .collect()
    }

    /// Distance to the lateral surface, or to the apex for points behind it.
    pub fn distance_to(&self, point: &Point) -> GeometryResult<f64> {
        ensure_defined(point.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Cone")?;
        if *point == self.apex {
            return Ok(0.0);
        }
        let offset = *point - self.apex;
        if offset.dot(self.axis) < 0.0 {
            return Ok(offset.length());
        }

        let radial = self.axis.cross(offset).cross(self.axis);
        let radial = if radial.length() > EPSILON {
            radial.normalize()
        } else {
            let helper = if self.axis.cross(Vec3::X).length() > EPSILON {
                Vec3::X
            } else {
                Vec3::Y
            };
            self.axis.cross(helper).cross(self.axis).normalize()
        };
        let (sin, cos) = self.angle.in_radians().sin_cos();
        Ray::new(self.apex, self.axis * cos + radial * sin)?.distance_to(point)
    }

    /// True when any generating ray of the fan meets the sphere.
    pub fn intersects_sphere(&self, sphere: &Sphere, discretization_level: usize) -> GeometryResult<bool> {
        ensure_defined(sphere.is_defined(), "Sphere")?;
        let rays = self.rays_of_lateral_surface(discretization_level)?;
        fan_intersects(&rays, |ray| sphere.intersects(ray))
    }

    /// True when any generating ray of the fan meets the ellipsoid.
    pub fn intersects_ellipsoid(
        &self,
        ellipsoid: &Ellipsoid,
        discretization_level: usize,
    ) -> GeometryResult<bool> {
        ensure_defined(ellipsoid.is_defined(), "Ellipsoid")?;
        let rays = self.rays_of_lateral_surface(discretization_level)?;
        fan_intersects(&rays, |ray| ellipsoid.intersects(ray))
    }

    /// Outline of the sphere as seen along the generating rays.
    pub fn intersection_with_sphere(
        &self,
        sphere: &Sphere,
        only_in_sight: bool,
        discretization_level: usize,
    ) -> GeometryResult<Intersection> {
        ensure_defined(sphere.is_defined(), "Sphere")?;
        let rays = self.rays_of_lateral_surface(discretization_level)?;
        fan_intersection(self.apex, &rays, only_in_sight, |ray| {
            sphere.intersection_with_ray(ray, only_in_sight)
        })
    }

    /// Outline of the ellipsoid as seen along the generating rays.
    pub fn intersection_with_ellipsoid(
        &self,
        ellipsoid: &Ellipsoid,
        only_in_sight: bool,
        discretization_level: usize,
    ) -> GeometryResult<Intersection> {
        ensure_defined(ellipsoid.is_defined(), "Ellipsoid")?;
        let rays = self.rays_of_lateral_surface(discretization_level)?;
        fan_intersection(self.apex, &rays, only_in_sight, |ray| {
            ellipsoid.intersection_with_ray(ray, only_in_sight)
        })
    }

    fn within_half_angle(&self, direction: Vec3) -> bool {
        vec3::angle_between(direction, self.axis) <= self.angle.in_radians() + EPSILON
    }
}

impl Contains<Point> for Cone {
    fn contains(&self, other: &Point) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Cone")?;
        let offset = *other - self.apex;
        if offset.length() < EPSILON {
            return Ok(true);
        }
        if offset.dot(self.axis) < 0.0 {
            return Ok(false);
        }
        Ok(self.within_half_angle(offset))
    }
}

impl Contains<PointSet> for Cone {
    /// Every point inside; an empty set is vacuously contained.
    fn contains(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Cone")?;
        for point in other {
            if !self.contains(point)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Contains<Segment> for Cone {
    fn contains(&self, other: &Segment) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Segment")?;
        Ok(self.contains(&other.first)? && self.contains(&other.second)?)
    }
}

impl Contains<Ray> for Cone {
    fn contains(&self, other: &Ray) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Ray")?;
        Ok(self.contains(&other.origin)? && self.within_half_angle(other.direction))
    }
}

impl Contains<Sphere> for Cone {
    fn contains(&self, other: &Sphere) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Sphere")?;
        Ok(self.contains(&other.center)? && self.distance_to(&other.center)? >= other.radius)
    }
}

impl Contains<Ellipsoid> for Cone {
    fn contains(&self, other: &Ellipsoid) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Ellipsoid")?;
        ensure_defined(self.is_defined(), "Cone")?;
        Err(GeometryError::not_implemented("cone containment of an ellipsoid"))
    }
}

impl Transformable for Cone {
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Cone")?;
        let axis = transform_direction(transformation, self.axis, "Cone")?;
        self.apex.apply_transformation(transformation)?;
        self.axis = axis;
        Ok(())
    }
}

impl PartialEq for Cone {
    /// Same apex, and either the same axis and angle or the opposite axis
    /// with the supplementary angle.
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() || self.apex != other.apex {
            return false;
        }
        (self.axis == other.axis && self.angle == other.angle)
            || (self.axis == -other.axis && self.angle == Angle::pi() - other.angle)
    }
}

impl fmt::Display for Cone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(
            f,
            "Cone [apex: {}, axis: {}, angle: {}]",
            self.apex,
            vec3::display(self.axis),
            self.angle
        )
    }
}

#[cfg(test)]
mod tests;
