//! Solid oriented box.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EPSILON;
use crate::core::vec3::{self, Vec3};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::intersection::Intersection;
use crate::object::{Contains, IntersectionWith, Intersects, Transformable};
use crate::primitives::line::transform_direction;
use crate::primitives::{Line, Plane, Point, PointSet, Ray, Segment};
use crate::query::oriented_box::OrientedBox;
use crate::query::quadric::ParameterRange;
use crate::transformation::Transformation;

const AXIS_PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// A box with three orthonormal axes and full edge lengths along them.
///
/// # Examples
/// ```
/// use geometry_kernel::{Contains, Cuboid, Point};
///
/// let cube = Cuboid::cube(Point::origin(), 1.0).unwrap();
/// assert!(cube.contains(&Point::new(0.5, 0.0, 0.0)).unwrap());
/// assert!(!cube.contains(&Point::new(0.51, 0.0, 0.0)).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cuboid {
    pub(crate) center: Point,
    pub(crate) axes: [Vec3; 3],
    pub(crate) extents: [f64; 3],
}

impl Cuboid {
    /// Creates a cuboid. The axes must be orthonormal and the extents
    /// non-negative.
    pub fn new(center: Point, axes: [Vec3; 3], extents: [f64; 3]) -> GeometryResult<Self> {
        let cuboid = Self {
            center,
            axes,
            extents,
        };
        if !cuboid.is_defined() {
            return Ok(cuboid);
        }
        if let Some(extent) = extents.iter().find(|extent| **extent < 0.0) {
            return Err(GeometryError::invalid_argument(format!(
                "cuboid extent [{extent}] is negative"
            )));
        }
        for (index, axis) in axes.iter().enumerate() {
            if !vec3::is_unit(*axis) {
                return Err(GeometryError::invalid_argument(format!(
                    "cuboid axis {} is not unit",
                    vec3::display(*axis)
                )));
            }
            for other in &axes[index + 1..] {
                if axis.dot(*other).abs() > EPSILON {
                    return Err(GeometryError::invalid_argument(format!(
                        "cuboid axes {} and {} are not orthogonal",
                        vec3::display(*axis),
                        vec3::display(*other)
                    )));
                }
            }
        }
        Ok(cuboid)
    }

    /// Axis-aligned cube with edge length `extent`.
    pub fn cube(center: Point, extent: f64) -> GeometryResult<Self> {
        ensure_defined(center.is_defined(), "Center")?;
        ensure_defined(extent.is_finite(), "Extent")?;
        Self::new(center, [Vec3::X, Vec3::Y, Vec3::Z], [extent; 3])
    }

    /// The undefined cuboid.
    pub fn undefined() -> Self {
        Self {
            center: Point::undefined(),
            axes: [vec3::undefined(); 3],
            extents: [f64::NAN; 3],
        }
    }

    /// True when center, axes and extents are defined.
    pub fn is_defined(&self) -> bool {
        self.center.is_defined()
            && self.axes.iter().all(|axis| vec3::is_defined(*axis))
            && self.extents.iter().all(|extent| extent.is_finite())
    }

    /// Center.
    pub fn center(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Cuboid")?;
        Ok(self.center)
    }

    /// The three axes.
    pub fn axes(&self) -> GeometryResult<[Vec3; 3]> {
        ensure_defined(self.is_defined(), "Cuboid")?;
        Ok(self.axes)
    }

    /// The three full edge lengths.
    pub fn extents(&self) -> GeometryResult<[f64; 3]> {
        ensure_defined(self.is_defined(), "Cuboid")?;
        Ok(self.extents)
    }

    /// The 8 corners.
    pub fn vertices(&self) -> GeometryResult<Vec<Point>> {
        ensure_defined(self.is_defined(), "Cuboid")?;
        let half = self.extents.map(|extent| extent / 2.0);
        let mut vertices = Vec::with_capacity(8);
        for first in [1.0, -1.0] {
            for second in [1.0, -1.0] {
                for third in [1.0, -1.0] {
                    let offset = self.axes[0] * (first * half[0])
                        + self.axes[1] * (second * half[1])
                        + self.axes[2] * (third * half[2]);
                    vertices.push(self.center + offset);
                }
            }
        }
        Ok(vertices)
    }

    /// True when both vertex sets match within `tolerance`.
    pub fn is_near(&self, other: &Cuboid, tolerance: f64) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Cuboid")?;
        let mine = PointSet::new(self.vertices()?);
        let theirs = PointSet::new(other.vertices()?);
        mine.is_near(&theirs, tolerance)
    }

    pub(crate) fn oriented_box(&self) -> OrientedBox {
        OrientedBox {
            center: self.center.as_vector(),
            axes: self.axes,
            half_extents: Vec3::from_array(self.extents) / 2.0,
        }
    }

    fn clipped(&self, origin: Vec3, direction: Vec3, range: ParameterRange) -> Intersection {
        match self.oriented_box().clip(origin, direction, range) {
            None => Intersection::empty(),
            Some((entry, exit)) if exit - entry <= EPSILON => {
                Intersection::point(Point::from_vector(origin + direction * entry))
            }
            Some((entry, exit)) => Intersection::point_set(PointSet::new(vec![
                Point::from_vector(origin + direction * entry),
                Point::from_vector(origin + direction * exit),
            ])),
        }
    }
}

impl Intersects<Point> for Cuboid {
    fn intersects(&self, other: &Point) -> GeometryResult<bool> {
        self.contains(other)
    }
}

impl Intersects<PointSet> for Cuboid {
    fn intersects(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Cuboid")?;
        for point in other {
            if self.contains(point)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Intersects<Line> for Cuboid {
    fn intersects(&self, other: &Line) -> GeometryResult<bool> {
        Ok(!self.intersection_with(other)?.is_empty())
    }
}

impl Intersects<Ray> for Cuboid {
    fn intersects(&self, other: &Ray) -> GeometryResult<bool> {
        Ok(!self.intersection_with(other)?.is_empty())
    }
}

impl Intersects<Segment> for Cuboid {
    fn intersects(&self, other: &Segment) -> GeometryResult<bool> {
        Ok(!self.intersection_with(other)?.is_empty())
    }
}

impl Intersects<Plane> for Cuboid {
    fn intersects(&self, other: &Plane) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Intersects<Cuboid> for Cuboid {
    fn intersects(&self, other: &Cuboid) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Cuboid")?;
        ensure_defined(other.is_defined(), "Cuboid")?;
        Ok(self.oriented_box().overlaps(&other.oriented_box()))
    }
}

impl Contains<Point> for Cuboid {
    /// Solid containment, faces included.
    fn contains(&self, other: &Point) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Point")?;
        ensure_defined(self.is_defined(), "Cuboid")?;
        Ok(self.oriented_box().contains_point(other.as_vector()))
    }
}

impl Contains<PointSet> for Cuboid {
    fn contains(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Cuboid")?;
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

impl Contains<Segment> for Cuboid {
    fn contains(&self, other: &Segment) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Segment")?;
        Ok(self.contains(&other.first)? && self.contains(&other.second)?)
    }
}

impl IntersectionWith<Line> for Cuboid {
    /// Entry and exit points of the line.
    fn intersection_with(&self, other: &Line) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Line")?;
        ensure_defined(self.is_defined(), "Cuboid")?;
        Ok(self.clipped(other.origin.as_vector(), other.direction, ParameterRange::Line))
    }
}

impl IntersectionWith<Ray> for Cuboid {
    /// The part of the ray inside the box, as its end points. A ray starting
    /// inside keeps its origin.
    fn intersection_with(&self, other: &Ray) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Ray")?;
        ensure_defined(self.is_defined(), "Cuboid")?;
        Ok(self.clipped(other.origin.as_vector(), other.direction, ParameterRange::Ray))
    }
}

impl IntersectionWith<Segment> for Cuboid {
    fn intersection_with(&self, other: &Segment) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Segment")?;
        ensure_defined(self.is_defined(), "Cuboid")?;
        match other.parameterization()? {
            Some((origin, direction, length)) => Ok(self.clipped(
                origin,
                direction,
                ParameterRange::Segment { length },
            )),
            None if self.contains(&other.first)? => Ok(Intersection::point(other.first)),
            None => Ok(Intersection::empty()),
        }
    }
}

impl Transformable for Cuboid {
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Cuboid")?;
        if transformation.is_identity()? {
            return Ok(());
        }

        let mut axes = self.axes;
        let mut extents = self.extents;
        for ((axis, extent), original) in axes.iter_mut().zip(extents.iter_mut()).zip(self.axes) {
            *extent *= transformation.apply_to_vector(original)?.length();
            *axis = transform_direction(transformation, original, "Cuboid")?;
        }
        let mut center = self.center;
        center.apply_transformation(transformation)?;

        self.center = center;
        self.axes = axes;
        self.extents = extents;
        Ok(())
    }
}

impl PartialEq for Cuboid {
    /// Same center, and the same axes up to sign and order with matching
    /// extents.
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() || self.center != other.center {
            return false;
        }
        AXIS_PERMUTATIONS.iter().any(|permutation| {
            permutation.iter().enumerate().all(|(mine, theirs)| {
                let (axis, other_axis) = (self.axes[mine], other.axes[*theirs]);
                (axis == other_axis || axis == -other_axis)
                    && self.extents[mine] == other.extents[*theirs]
            })
        })
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(
            f,
            "Cuboid [center: {}, axes: [{}, {}, {}], extents: [{}, {}, {}]]",
            self.center,
            vec3::display(self.axes[0]),
            vec3::display(self.axes[1]),
            vec3::display(self.axes[2]),
            self.extents[0],
            self.extents[1],
            self.extents[2]
        )
    }
}
