//! Ordered polyline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::object::Transformable;
use crate::primitives::{Point, Segment};
use crate::transformation::Transformation;

/// Points in insertion order. Unlike [`PointSet`](crate::primitives::PointSet)
/// nothing is sorted or deduplicated.
///
/// # Examples
/// ```
/// use geometry_kernel::{LineString, Point};
///
/// let path = LineString::new(vec![Point::origin(), Point::new(1.0, 0.0, 0.0)]);
/// assert_eq!(path.point_count(), 2);
/// assert_eq!(path.point_closest_to(&Point::new(2.0, 0.0, 0.0)).unwrap(), Point::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Wraps `points` as given.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The empty line string.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Same as [`LineString::empty`].
    pub fn undefined() -> Self {
        Self::empty()
    }

    /// The two end points of `segment`.
    pub fn from_segment(segment: &Segment) -> GeometryResult<Self> {
        ensure_defined(segment.is_defined(), "Segment")?;
        Ok(Self::new(vec![segment.first, segment.second]))
    }

    /// True when non-empty and every point is defined.
    pub fn is_defined(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(Point::is_defined)
    }

    /// True when no point is held.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Point `index`, or `InvalidArgument` when out of bounds.
    pub fn point_at(&self, index: usize) -> GeometryResult<Point> {
        self.points.get(index).copied().ok_or_else(|| {
            GeometryError::invalid_argument(format!(
                "point index [{index}] out of bounds [{}]",
                self.points.len()
            ))
        })
    }

    /// Points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// True when both have the same length and paired points are within
    /// `tolerance`. Empty line strings are never near.
    pub fn is_near(&self, other: &LineString, tolerance: f64) -> GeometryResult<bool> {
        if self.is_empty() || other.is_empty() || self.point_count() != other.point_count() {
            return Ok(false);
        }
        for (a, b) in self.points.iter().zip(&other.points) {
            if !a.is_near(b, tolerance)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The vertex closest to `point`; the first one wins ties.
    pub fn point_closest_to(&self, point: &Point) -> GeometryResult<Point> {
        ensure_defined(point.is_defined(), "Point")?;
        ensure_defined(!self.is_empty(), "Line string")?;

        let squared = |candidate: &Point| (*candidate - *point).length_squared();
        self.points
            .iter()
            .copied()
            .min_by(|a, b| squared(a).total_cmp(&squared(b)))
            .ok_or_else(|| GeometryError::undefined("Line string"))
    }
}

impl<'a> IntoIterator for &'a LineString {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Transformable for LineString {
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Line string")?;
        for point in &mut self.points {
            point.apply_transformation(transformation)?;
        }
        Ok(())
    }
}

impl PartialEq for LineString {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.points == other.points
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let points: Vec<String> = self.points.iter().map(ToString::to_string).collect();
        write!(f, "LineString [{}]", points.join(", "))
    }
}

#[cfg(test)]
mod tests;
