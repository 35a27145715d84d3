//! Planar polygon placed in 3D.
//!
//! A [`planar::Polygon`] is lifted through a frame: vertex `(u, v)` sits at
//! `origin + u·x_axis + v·y_axis`. The axes are unit and orthogonal, so the
//! plane normal is `x_axis × y_axis`.

use std::fmt;

use glam::DMat2;
use serde::{Deserialize, Serialize};

use crate::config::EPSILON;
use crate::core::vec2::Vec2;
use crate::core::vec3::{self, Vec3};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::intersection::Intersection;
use crate::object::{Contains, IntersectionWith, Intersects, Transformable};
use crate::planar;
use crate::primitives::{Point, Segment};
use crate::transformation::Transformation;

/// A polygon lying in the plane spanned by two orthonormal axes.
///
/// # Examples
/// ```
/// use geometry_kernel::core::vec2::Vec2;
/// use geometry_kernel::{planar, Contains, Point, Polygon, Vec3};
///
/// let square = planar::Polygon::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(1.0, 0.0),
///     Vec2::new(1.0, 1.0),
///     Vec2::new(0.0, 1.0),
/// ])
/// .unwrap();
/// let wall = Polygon::new(square, Point::origin(), Vec3::X, Vec3::Z).unwrap();
/// assert!(wall.contains(&Point::new(0.5, 0.0, 0.5)).unwrap());
/// assert!(!wall.contains(&Point::new(0.5, 0.1, 0.5)).unwrap());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    pub(crate) polygon: planar::Polygon,
    pub(crate) origin: Point,
    pub(crate) x_axis: Vec3,
    pub(crate) y_axis: Vec3,
}

impl Polygon {
    /// Lifts `polygon` into the frame. Both axes are normalized; a zero or
    /// non-orthogonal pair is an `InvalidArgument`.
    pub fn new(
        polygon: planar::Polygon,
        origin: Point,
        x_axis: Vec3,
        y_axis: Vec3,
    ) -> GeometryResult<Self> {
        let x_axis = frame_axis(x_axis, "x")?;
        let y_axis = frame_axis(y_axis, "y")?;
        if vec3::is_defined(x_axis) && vec3::is_defined(y_axis) && x_axis.dot(y_axis).abs() > EPSILON
        {
            return Err(GeometryError::invalid_argument(format!(
                "polygon axes {} and {} are not orthogonal",
                vec3::display(x_axis),
                vec3::display(y_axis)
            )));
        }
        Ok(Self {
            polygon,
            origin,
            x_axis,
            y_axis,
        })
    }

    /// The undefined polygon.
    pub fn undefined() -> Self {
        Self {
            polygon: planar::Polygon::undefined(),
            origin: Point::undefined(),
            x_axis: vec3::undefined(),
            y_axis: vec3::undefined(),
        }
    }

    /// True when the planar polygon and the frame are defined.
    pub fn is_defined(&self) -> bool {
        self.polygon.is_defined()
            && self.origin.is_defined()
            && vec3::is_defined(self.x_axis)
            && vec3::is_defined(self.y_axis)
    }

    /// The polygon in frame coordinates.
    pub fn planar_polygon(&self) -> GeometryResult<&planar::Polygon> {
        ensure_defined(self.is_defined(), "Polygon")?;
        Ok(&self.polygon)
    }

    /// Frame origin.
    pub fn origin(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Polygon")?;
        Ok(self.origin)
    }

    /// First frame axis.
    pub fn x_axis(&self) -> GeometryResult<Vec3> {
        ensure_defined(self.is_defined(), "Polygon")?;
        Ok(self.x_axis)
    }

    /// Second frame axis.
    pub fn y_axis(&self) -> GeometryResult<Vec3> {
        ensure_defined(self.is_defined(), "Polygon")?;
        Ok(self.y_axis)
    }

    /// Plane normal, `x_axis × y_axis`.
    pub fn normal(&self) -> GeometryResult<Vec3> {
        ensure_defined(self.is_defined(), "Polygon")?;
        Ok(self.x_axis.cross(self.y_axis))
    }

    /// Outer ring vertex count.
    pub fn vertex_count(&self) -> GeometryResult<usize> {
        ensure_defined(self.is_defined(), "Polygon")?;
        Ok(self.polygon.vertex_count())
    }

    /// Outer ring edge count.
    pub fn edge_count(&self) -> GeometryResult<usize> {
        ensure_defined(self.is_defined(), "Polygon")?;
        Ok(self.polygon.edge_count())
    }

    /// Vertex `index` of the outer ring.
    pub fn vertex_at(&self, index: usize) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Polygon")?;
        Ok(self.lift(self.polygon.vertex_at(index)?))
    }

    /// Edge `index` of the outer ring.
    pub fn edge_at(&self, index: usize) -> GeometryResult<Segment> {
        ensure_defined(self.is_defined(), "Polygon")?;
        let (start, end) = self.polygon.edge_at(index)?;
        Ok(Segment::new(self.lift(start), self.lift(end)))
    }

    /// Outer ring vertices.
    pub fn vertices(&self) -> GeometryResult<Vec<Point>> {
        ensure_defined(self.is_defined(), "Polygon")?;
        Ok(self.polygon.outer_ring().iter().map(|v| self.lift(*v)).collect())
    }

    /// Outer ring edges.
    pub fn edges(&self) -> GeometryResult<Vec<Segment>> {
        ensure_defined(self.is_defined(), "Polygon")?;
        Ok(self
            .polygon
            .edges()
            .into_iter()
            .map(|(start, end)| Segment::new(self.lift(start), self.lift(end)))
            .collect())
    }

    /// True when both have the same vertex count and paired vertices are
    /// within `tolerance`.
    pub fn is_near(&self, other: &Polygon, tolerance: f64) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Polygon")?;
        let (mine, theirs) = (self.vertices()?, other.vertices()?);
        if mine.len() != theirs.len() {
            return Ok(false);
        }
        for (a, b) in mine.iter().zip(&theirs) {
            if !a.is_near(b, tolerance)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub(crate) fn lift(&self, vertex: Vec2) -> Point {
        self.origin + self.x_axis * vertex.x + self.y_axis * vertex.y
    }

    pub(crate) fn local(&self, point: Vec3) -> Vec2 {
        let offset = point - self.origin.as_vector();
        Vec2::new(offset.dot(self.x_axis), offset.dot(self.y_axis))
    }

    pub(crate) fn offset_from_plane(&self, point: Vec3) -> f64 {
        (point - self.origin.as_vector()).dot(self.x_axis.cross(self.y_axis))
    }

    fn is_coplanar_with(&self, other: &Polygon) -> bool {
        let normal = self.x_axis.cross(self.y_axis);
        let other_normal = other.x_axis.cross(other.y_axis);
        vec3::is_parallel(normal, other_normal)
            && self.offset_from_plane(other.origin.as_vector()).abs() < EPSILON
    }

    /// `other` expressed in this polygon's frame.
    fn reframe(&self, other: &Polygon) -> GeometryResult<planar::Polygon> {
        let map_ring = |ring: &[Vec2]| -> Vec<Vec2> {
            ring.iter()
                .map(|vertex| self.local(other.lift(*vertex).as_vector()))
                .collect()
        };
        planar::Polygon::with_inner_rings(
            map_ring(other.polygon.outer_ring()),
            other.polygon.inner_rings().iter().map(|ring| map_ring(ring)).collect(),
        )
    }
}

fn frame_axis(axis: Vec3, name: &str) -> GeometryResult<Vec3> {
    if !vec3::is_defined(axis) {
        return Ok(axis);
    }
    if vec3::is_zero(axis) {
        return Err(GeometryError::invalid_argument(format!(
            "polygon {name} axis is zero"
        )));
    }
    Ok(axis.normalize())
}

impl Intersects<Point> for Polygon {
    fn intersects(&self, other: &Point) -> GeometryResult<bool> {
        self.contains(other)
    }
}

impl Intersects<Polygon> for Polygon {
    /// Only coplanar polygons are supported.
    fn intersects(&self, other: &Polygon) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Polygon")?;
        ensure_defined(other.is_defined(), "Polygon")?;
        if !self.is_coplanar_with(other) {
            return Err(GeometryError::not_implemented(
                "intersection test of non-coplanar polygons",
            ));
        }
        self.polygon.intersects(&self.reframe(other)?)
    }
}

impl Contains<Point> for Polygon {
    fn contains(&self, other: &Point) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Polygon")?;
        let position = other.as_vector();
        if self.offset_from_plane(position).abs() >= EPSILON {
            return Ok(false);
        }
        self.polygon.contains_point(self.local(position))
    }
}

impl IntersectionWith<Polygon> for Polygon {
    fn intersection_with(&self, other: &Polygon) -> GeometryResult<Intersection> {
        ensure_defined(self.is_defined(), "Polygon")?;
        ensure_defined(other.is_defined(), "Polygon")?;
        Err(GeometryError::not_implemented("polygon intersection"))
    }
}

impl Transformable for Polygon {
    /// Moves the frame. The images of the axes are re-orthonormalized and
    /// whatever stretch or shear remains is applied to the planar polygon.
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Polygon")?;
        if transformation.is_identity()? {
            return Ok(());
        }

        let mapped_x = transformation.apply_to_vector(self.x_axis)?;
        let mapped_y = transformation.apply_to_vector(self.y_axis)?;
        let x_axis = mapped_x.try_normalize().ok_or_else(|| {
            GeometryError::numeric_failure("transformation collapses the polygon x axis")
        })?;
        let y_axis = (mapped_y - x_axis * mapped_y.dot(x_axis))
            .try_normalize()
            .ok_or_else(|| {
                GeometryError::numeric_failure("transformation collapses the polygon plane")
            })?;

        let in_frame = DMat2::from_cols(
            Vec2::new(mapped_x.dot(x_axis), 0.0),
            Vec2::new(mapped_y.dot(x_axis), mapped_y.dot(y_axis)),
        );
        let mut polygon = self.polygon.clone();
        if !in_frame.abs_diff_eq(DMat2::IDENTITY, EPSILON) {
            polygon.apply_transformation(&planar::Transformation::linear(in_frame)?)?;
        }
        let mut origin = self.origin;
        origin.apply_transformation(transformation)?;

        self.polygon = polygon;
        self.origin = origin;
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        Ok(())
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.polygon == other.polygon
            && self.origin == other.origin
            && self.x_axis == other.x_axis
            && self.y_axis == other.y_axis
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(
            f,
            "Polygon [origin: {}, x axis: {}, y axis: {}, {}]",
            self.origin,
            vec3::display(self.x_axis),
            vec3::display(self.y_axis),
            self.polygon
        )
    }
}
