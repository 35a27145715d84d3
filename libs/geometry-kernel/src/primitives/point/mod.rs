//! Point in 3D space.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::core::vec3::{self, Vec3};
use crate::error::{ensure_defined, GeometryResult};
use crate::object::Transformable;
use crate::transformation::Transformation;

/// A position. Undefined when any coordinate is not finite.
///
/// # Examples
/// ```
/// use geometry_kernel::Point;
///
/// let a = Point::new(1.0, 2.0, 2.0);
/// assert_eq!(a.distance_to(&Point::origin()).unwrap(), 3.0);
/// assert!(Point::undefined() != Point::undefined());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point(Vec3);

impl Point {
    /// Point at `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Point at the tip of `position`.
    pub fn from_vector(position: Vec3) -> Self {
        Self(position)
    }

    /// The undefined point.
    pub fn undefined() -> Self {
        Self(vec3::undefined())
    }

    /// `(0, 0, 0)`.
    pub fn origin() -> Self {
        Self(Vec3::ZERO)
    }

    /// True when every coordinate is finite.
    pub fn is_defined(&self) -> bool {
        vec3::is_defined(self.0)
    }

    /// Position vector.
    pub fn as_vector(&self) -> Vec3 {
        self.0
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Z coordinate.
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Euclidean distance.
    pub fn distance_to(&self, other: &Point) -> GeometryResult<f64> {
        ensure_defined(self.is_defined(), "Point")?;
        ensure_defined(other.is_defined(), "Point")?;
        Ok(self.0.distance(other.0))
    }

    /// True when within `tolerance` of `other`.
    pub fn is_near(&self, other: &Point, tolerance: f64) -> GeometryResult<bool> {
        Ok(self.distance_to(other)? <= tolerance)
    }
}

impl Transformable for Point {
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Point")?;
        self.0 = transformation.apply_to_point(self.0)?;
        Ok(())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.0 == other.0
    }
}

impl From<Vec3> for Point {
    fn from(position: Vec3) -> Self {
        Self(position)
    }
}

impl Sub for Point {
    type Output = Vec3;

    fn sub(self, rhs: Point) -> Vec3 {
        self.0 - rhs.0
    }
}

impl Add<Vec3> for Point {
    type Output = Point;

    fn add(self, rhs: Vec3) -> Point {
        Point(self.0 + rhs)
    }
}

impl Sub<Vec3> for Point {
    type Output = Point;

    fn sub(self, rhs: Vec3) -> Point {
        Point(self.0 - rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&vec3::display(self.0))
    }
}
