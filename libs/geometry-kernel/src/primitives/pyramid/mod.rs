//! Pyramid over a polygonal base.
//!
//! The solid is the set of rays from the apex through the base polygon, so
//! containment projects a point onto the base plane along its apex ray. Each
//! base edge spans one triangular lateral face; surface intersections sample
//! those faces with ray fans.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::config::EPSILON;
use crate::core::vec2::Vec2;
use crate::core::vec3;
use crate::discretization::{fan_intersection, fan_intersects, rotate_about};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::interval::Interval;
use crate::intersection::Intersection;
use crate::object::{Contains, IntersectionWith, Intersects, Transformable};
use crate::planar;
use crate::primitives::{Ellipsoid, Plane, Point, PointSet, Polygon, Ray, Segment, Sphere};
use crate::transformation::Transformation;

/// A pyramid with a planar polygonal base and an apex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pyramid {
    pub(crate) base: Polygon,
    pub(crate) apex: Point,
}

impl Pyramid {
    /// Creates a pyramid.
    pub fn new(base: Polygon, apex: Point) -> Self {
        Self { base, apex }
    }

    /// The undefined pyramid.
    pub fn undefined() -> Self {
        Self {
            base: Polygon::undefined(),
            apex: Point::undefined(),
        }
    }

    /// True when base and apex are defined.
    pub fn is_defined(&self) -> bool {
        self.base.is_defined() && self.apex.is_defined()
    }

    /// Base polygon.
    pub fn base(&self) -> GeometryResult<&Polygon> {
        ensure_defined(self.is_defined(), "Pyramid")?;
        Ok(&self.base)
    }

    /// Apex.
    pub fn apex(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Pyramid")?;
        Ok(self.apex)
    }

    /// One lateral face per base edge.
    pub fn lateral_face_count(&self) -> GeometryResult<usize> {
        ensure_defined(self.is_defined(), "Pyramid")?;
        self.base.edge_count()
    }

    /// Triangle spanned by the apex and base edge `index`, framed at the apex
    /// with its x axis towards the first edge point.
    pub fn lateral_face_at(&self, index: usize) -> GeometryResult<Polygon> {
        ensure_defined(self.is_defined(), "Pyramid")?;
        let edge = self.base.edge_at(index)?;
        let to_first = edge.first - self.apex;
        let to_second = edge.second - self.apex;

        let x_axis = to_first.normalize();
        let y_axis = x_axis.cross(to_second.normalize()).cross(x_axis).normalize();
        let edge_vector = edge.second - edge.first;

        let first = Vec2::new(to_first.length(), 0.0);
        let second = first + Vec2::new(edge_vector.dot(x_axis), edge_vector.dot(y_axis));
        let triangle = planar::Polygon::new(vec![Vec2::ZERO, first, second])?;
        Polygon::new(triangle, self.apex, x_axis, y_axis)
    }

    /// `ray_count` rays from the apex sweeping lateral face `index`, from the
    /// first edge point to the second one inclusive.
    pub fn rays_of_lateral_face_at(&self, index: usize, ray_count: usize) -> GeometryResult<Vec<Ray>> {
        ensure_defined(self.is_defined(), "Pyramid")?;
        if ray_count == 0 {
            return Err(GeometryError::invalid_argument("ray count too low: 0"));
        }
        let edge = self.base.edge_at(index)?;
        let first = (edge.first - self.apex).normalize();
        let second = (edge.second - self.apex).normalize();

        if vec3::is_near(first, second, EPSILON) {
            return Ok(vec![Ray::new(self.apex, first)?]);
        }

        let axis = first.cross(second).normalize();
        let sweeps = if ray_count > 1 {
            let spread = Angle::between(first, second)?;
            Interval::closed(0.0, spread.in_radians()).generate_array_with_size(ray_count)?
        } else {
            vec![0.0]
        };
        sweeps
            .into_iter()
            .map(|sweep| Ray::new(self.apex, rotate_about(first, axis, Angle::radians(sweep))?))
            .collect()
    }

    /// Rays over every lateral face, `ray_count / face count` per face. Rays
    /// along shared edges are cast once per adjacent face.
    pub fn rays_of_lateral_faces(&self, ray_count: usize) -> GeometryResult<Vec<Ray>> {
        let face_count = self.lateral_face_count()?;
        if ray_count < face_count {
            return Err(GeometryError::invalid_argument(format!(
                "ray count too low: {ray_count} rays for {face_count} lateral faces"
            )));
        }
        let per_face = ray_count / face_count;
        let mut rays = Vec::with_capacity(per_face * face_count);
        for index in 0..face_count {
            rays.extend(self.rays_of_lateral_face_at(index, per_face)?);
        }
        Ok(rays)
    }

    /// True when any ray of the lateral fan meets the sphere.
    pub fn intersects_sphere(&self, sphere: &Sphere, discretization_level: usize) -> GeometryResult<bool> {
        ensure_defined(sphere.is_defined(), "Sphere")?;
        let rays = self.rays_of_lateral_faces(discretization_level)?;
        fan_intersects(&rays, |ray| sphere.intersects(ray))
    }

    /// True when any ray of the lateral fan meets the ellipsoid.
    pub fn intersects_ellipsoid(
        &self,
        ellipsoid: &Ellipsoid,
        discretization_level: usize,
    ) -> GeometryResult<bool> {
        ensure_defined(ellipsoid.is_defined(), "Ellipsoid")?;
        let rays = self.rays_of_lateral_faces(discretization_level)?;
        fan_intersects(&rays, |ray| ellipsoid.intersects(ray))
    }

    /// Outline of the sphere along the lateral fan.
    pub fn intersection_with_sphere(
        &self,
        sphere: &Sphere,
        only_in_sight: bool,
        discretization_level: usize,
    ) -> GeometryResult<Intersection> {
        ensure_defined(sphere.is_defined(), "Sphere")?;
        let rays = self.rays_of_lateral_faces(discretization_level)?;
        fan_intersection(self.apex, &rays, only_in_sight, |ray| {
            sphere.intersection_with_ray(ray, only_in_sight)
        })
    }

    /// Outline of the ellipsoid along the lateral fan.
    pub fn intersection_with_ellipsoid(
        &self,
        ellipsoid: &Ellipsoid,
        only_in_sight: bool,
        discretization_level: usize,
    ) -> GeometryResult<Intersection> {
        ensure_defined(ellipsoid.is_defined(), "Ellipsoid")?;
        let rays = self.rays_of_lateral_faces(discretization_level)?;
        fan_intersection(self.apex, &rays, only_in_sight, |ray| {
            ellipsoid.intersection_with_ray(ray, only_in_sight)
        })
    }
}

impl Contains<Point> for Pyramid {
    fn contains(&self, other: &Point) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Pyramid")?;
        if other.is_near(&self.apex, EPSILON)? {
            return Ok(true);
        }

        let apex_to_point = Ray::new(self.apex, *other - self.apex)?;
        let base_plane = Plane::new(self.base.origin, self.base.normal()?)?;
        let projection = base_plane.intersection_with(&apex_to_point)?;
        if projection.is_empty() {
            return Ok(false);
        }
        let Ok(hit) = projection.as_variant::<Point>() else {
            log::debug!("apex ray of {other} lies in the base plane: {projection}");
            return Err(GeometryError::numeric_failure(format!(
                "degenerate pyramid: apex {} lies in the base plane",
                self.apex
            )));
        };
        self.base.polygon.contains_point(self.base.local(hit.as_vector()))
    }
}

impl Contains<PointSet> for Pyramid {
    /// Every point inside; an empty set is vacuously contained.
    fn contains(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Pyramid")?;
        for point in other {
            if !self.contains(point)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Contains<Segment> for Pyramid {
    fn contains(&self, other: &Segment) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Segment")?;
        Ok(self.contains(&other.first)? && self.contains(&other.second)?)
    }
}

impl Contains<Ellipsoid> for Pyramid {
    fn contains(&self, other: &Ellipsoid) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Ellipsoid")?;
        ensure_defined(self.is_defined(), "Pyramid")?;
        Err(GeometryError::not_implemented("pyramid containment of an ellipsoid"))
    }
}

impl Transformable for Pyramid {
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Pyramid")?;
        let mut base = self.base.clone();
        base.apply_transformation(transformation)?;
        self.apex.apply_transformation(transformation)?;
        self.base = base;
        Ok(())
    }
}

impl PartialEq for Pyramid {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.base == other.base && self.apex == other.apex
    }
}

impl fmt::Display for Pyramid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(f, "Pyramid [apex: {}, base: {}]", self.apex, self.base)
    }
}

#[cfg(test)]
mod tests;
