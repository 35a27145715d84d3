//! Ellipsoid surface.
//!
//! The shape is stored as a center, three principal semi-axes and an
//! orientation quaternion `q`; the principal axes are `q* · X`, `q* · Y` and
//! `q* · Z`. Queries work with the shape matrix
//! `M = Σ (axisᵢ / sᵢ)(axisᵢ / sᵢ)ᵀ`, for which the surface is
//! `(x − c)ᵀ M (x − c) = 1`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EPSILON;
use crate::core::vec3::{self, Mat3, Vec3};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::intersection::Intersection;
use crate::object::{Contains, IntersectionWith, Intersects, Transformable};
use crate::primitives::sphere::{quadric_intersection, quadric_segment_intersection};
use crate::primitives::{Line, Plane, Point, PointSet, Ray, Segment};
use crate::query::eigen::SymmetricEigen;
use crate::query::quadric::{ParameterRange, Quadric, Roots};
use crate::rotation::{Quaternion, RotationMatrix};
use crate::transformation::Transformation;

/// A triaxial ellipsoid.
///
/// # Examples
/// ```
/// use geometry_kernel::{Contains, Ellipsoid, Point, Quaternion};
///
/// let ellipsoid = Ellipsoid::new(Point::origin(), 3.0, 2.0, 1.0, Quaternion::unit()).unwrap();
/// assert!(ellipsoid.contains(&Point::new(3.0, 0.0, 0.0)).unwrap());
/// assert!(!ellipsoid.contains(&Point::new(0.0, 3.0, 0.0)).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ellipsoid {
    pub(crate) center: Point,
    pub(crate) semi_axes: Vec3,
    pub(crate) orientation: Quaternion,
}

impl Ellipsoid {
    /// Creates an ellipsoid. Negative semi-axes are an `InvalidArgument`, a
    /// defined but non-unit orientation is `NotUnitary`.
    pub fn new(
        center: Point,
        first_semi_axis: f64,
        second_semi_axis: f64,
        third_semi_axis: f64,
        orientation: Quaternion,
    ) -> GeometryResult<Self> {
        let semi_axes = Vec3::new(first_semi_axis, second_semi_axis, third_semi_axis);
        for (rank, length) in ["first", "second", "third"].iter().zip(semi_axes.to_array()) {
            if length < 0.0 {
                return Err(GeometryError::invalid_argument(format!(
                    "{rank} principal semi-axis [{length}] is negative"
                )));
            }
        }
        if orientation.is_defined() && !orientation.is_unitary() {
            return Err(GeometryError::not_unitary(orientation.to_string()));
        }
        Ok(Self {
            center,
            semi_axes,
            orientation,
        })
    }

    /// The undefined ellipsoid.
    pub fn undefined() -> Self {
        Self {
            center: Point::undefined(),
            semi_axes: vec3::undefined(),
            orientation: Quaternion::undefined(),
        }
    }

    /// True when every component is defined.
    pub fn is_defined(&self) -> bool {
        self.center.is_defined() && vec3::is_defined(self.semi_axes) && self.orientation.is_defined()
    }

    /// Center.
    pub fn center(&self) -> GeometryResult<Point> {
        ensure_defined(self.is_defined(), "Ellipsoid")?;
        Ok(self.center)
    }

    /// Semi-axis along [`Ellipsoid::first_axis`].
    pub fn first_principal_semi_axis(&self) -> GeometryResult<f64> {
        ensure_defined(self.is_defined(), "Ellipsoid")?;
        Ok(self.semi_axes.x)
    }

    /// Semi-axis along [`Ellipsoid::second_axis`].
    pub fn second_principal_semi_axis(&self) -> GeometryResult<f64> {
        ensure_defined(self.is_defined(), "Ellipsoid")?;
        Ok(self.semi_axes.y)
    }

    /// Semi-axis along [`Ellipsoid::third_axis`].
    pub fn third_principal_semi_axis(&self) -> GeometryResult<f64> {
        ensure_defined(self.is_defined(), "Ellipsoid")?;
        Ok(self.semi_axes.z)
    }

    /// First principal axis, `q* · X`.
    pub fn first_axis(&self) -> GeometryResult<Vec3> {
        Ok(self.axes()?[0])
    }

    /// Second principal axis, `q* · Y`.
    pub fn second_axis(&self) -> GeometryResult<Vec3> {
        Ok(self.axes()?[1])
    }

    /// Third principal axis, `q* · Z`.
    pub fn third_axis(&self) -> GeometryResult<Vec3> {
        Ok(self.axes()?[2])
    }

    /// Orientation quaternion.
    pub fn orientation(&self) -> GeometryResult<Quaternion> {
        ensure_defined(self.is_defined(), "Ellipsoid")?;
        Ok(self.orientation)
    }

    /// Shape matrix `Σ (axisᵢ / sᵢ)(axisᵢ / sᵢ)ᵀ`.
    pub fn matrix(&self) -> GeometryResult<Mat3> {
        let axes = self.axes()?;
        Ok(axes
            .iter()
            .zip(self.semi_axes.to_array())
            .map(|(axis, length)| {
                let ratio = *axis / length;
                vec3::outer(ratio, ratio)
            })
            .fold(Mat3::ZERO, |sum, term| sum + term))
    }

    pub(crate) fn axes(&self) -> GeometryResult<[Vec3; 3]> {
        ensure_defined(self.is_defined(), "Ellipsoid")?;
        let frame = self.orientation.conjugate();
        Ok([(frame * Vec3::X)?, (frame * Vec3::Y)?, (frame * Vec3::Z)?])
    }

    pub(crate) fn quadric(&self) -> GeometryResult<Quadric> {
        Ok(Quadric::Ellipsoid {
            center: self.center.as_vector(),
            matrix: self.matrix()?,
        })
    }

    /// Ray hits. With `only_in_sight`, a two-point result is reduced to the
    /// hit nearest the ray origin.
    pub fn intersection_with_ray(&self, ray: &Ray, only_in_sight: bool) -> GeometryResult<Intersection> {
        ensure_defined(ray.is_defined(), "Ray")?;
        ensure_defined(self.is_defined(), "Ellipsoid")?;
        Ok(quadric_intersection(
            &self.quadric()?,
            ray.origin.as_vector(),
            ray.direction,
            ParameterRange::Ray,
            only_in_sight,
        ))
    }
}

impl Intersects<Point> for Ellipsoid {
    fn intersects(&self, other: &Point) -> GeometryResult<bool> {
        self.contains(other)
    }
}

impl Intersects<PointSet> for Ellipsoid {
    fn intersects(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Ellipsoid")?;
        for point in other {
            if self.contains(point)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Intersects<Line> for Ellipsoid {
    fn intersects(&self, other: &Line) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Line")?;
        let roots = self.quadric()?.line_roots(other.origin.as_vector(), other.direction);
        Ok(roots != Roots::None)
    }
}

impl Intersects<Ray> for Ellipsoid {
    fn intersects(&self, other: &Ray) -> GeometryResult<bool> {
        Ok(!self.intersection_with_ray(other, false)?.is_empty())
    }
}

impl Intersects<Segment> for Ellipsoid {
    fn intersects(&self, other: &Segment) -> GeometryResult<bool> {
        Ok(!self.intersection_with(other)?.is_empty())
    }
}

impl Intersects<Plane> for Ellipsoid {
    fn intersects(&self, other: &Plane) -> GeometryResult<bool> {
        other.intersects(self)
    }
}

impl Contains<Point> for Ellipsoid {
    /// Surface test in the principal frame.
    fn contains(&self, other: &Point) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Point")?;
        let axes = self.axes()?;
        let offset = *other - self.center;
        let level = axes
            .iter()
            .zip(self.semi_axes.to_array())
            .map(|(axis, length)| {
                let ratio = offset.dot(*axis) / length;
                ratio * ratio
            })
            .sum::<f64>();
        Ok((level - 1.0).abs() < EPSILON)
    }
}

impl Contains<PointSet> for Ellipsoid {
    fn contains(&self, other: &PointSet) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Ellipsoid")?;
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

impl Contains<Segment> for Ellipsoid {
    fn contains(&self, other: &Segment) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Segment")?;
        Ok(self.contains(&other.first)? && self.contains(&other.second)?)
    }
}

impl IntersectionWith<Line> for Ellipsoid {
    fn intersection_with(&self, other: &Line) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Line")?;
        Ok(quadric_intersection(
            &self.quadric()?,
            other.origin.as_vector(),
            other.direction,
            ParameterRange::Line,
            false,
        ))
    }
}

impl IntersectionWith<Segment> for Ellipsoid {
    fn intersection_with(&self, other: &Segment) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Segment")?;
        quadric_segment_intersection(&self.quadric()?, other)
    }
}

impl Transformable for Ellipsoid {
    /// Maps the shape matrix by congruence with the inverse linear part and
    /// reads the new semi-axes and frame back from its eigen decomposition.
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Ellipsoid")?;
        if transformation.is_identity()? {
            return Ok(());
        }

        let linear = transformation.linear_block();
        if linear.determinant().abs() <= f64::EPSILON {
            return Err(GeometryError::numeric_failure(
                "transformation collapses the ellipsoid",
            ));
        }
        let inverse = linear.inverse();
        let transformed = inverse.transpose() * self.matrix()? * inverse;

        let eigen = SymmetricEigen::new(transformed);
        let eigenvalues = eigen.eigenvalues.to_array();
        if eigenvalues.iter().any(|value| *value <= 0.0) {
            return Err(GeometryError::numeric_failure(format!(
                "ellipsoid matrix is not positive definite: eigenvalues {}",
                vec3::display(eigen.eigenvalues)
            )));
        }

        let first_axis = eigen.eigenvectors.x_axis;
        let second_axis = eigen.eigenvectors.y_axis;
        let third_axis = first_axis.cross(second_axis);
        let frame = RotationMatrix::columns(first_axis, second_axis, third_axis)?;

        let mut center = self.center;
        center.apply_transformation(transformation)?;

        self.center = center;
        self.semi_axes = Vec3::from_array(eigenvalues.map(|value| 1.0 / value.sqrt()));
        self.orientation = Quaternion::from_rotation_matrix(&frame)?.conjugate();
        Ok(())
    }
}

impl PartialEq for Ellipsoid {
    /// Same center, and either the same parameters or the same shape matrix.
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() || self.center != other.center {
            return false;
        }
        if self.semi_axes == other.semi_axes && self.orientation == other.orientation {
            return true;
        }
        match (self.matrix(), other.matrix()) {
            (Ok(mine), Ok(theirs)) => mine.abs_diff_eq(theirs, EPSILON),
            _ => false,
        }
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(
            f,
            "Ellipsoid [center: {}, semi-axes: {}, orientation: {}]",
            self.center,
            vec3::display(self.semi_axes),
            self.orientation
        )
    }
}
