//! Ordered set of unique points.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::vec3;
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::object::Transformable;
use crate::primitives::Point;
use crate::transformation::Transformation;

/// Points kept in lexicographic order with exact duplicates removed.
///
/// An empty set is not defined.
///
/// # Examples
/// ```
/// use geometry_kernel::{Point, PointSet};
///
/// let set = PointSet::new(vec![
///     Point::new(1.0, 0.0, 0.0),
///     Point::origin(),
///     Point::new(1.0, 0.0, 0.0),
/// ]);
/// assert_eq!(set.size(), 2);
/// assert_eq!(set.points()[0], Point::origin());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Sorts and deduplicates `points`.
    pub fn new(points: Vec<Point>) -> Self {
        let mut points = points;
        points.sort_by(|a, b| vec3::lexicographic_cmp(a.as_vector(), b.as_vector()));
        points.dedup_by(|a, b| a.as_vector() == b.as_vector());
        Self { points }
    }

    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Same as [`PointSet::empty`].
    pub fn undefined() -> Self {
        Self::empty()
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
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// True when both sets have the same size and each point of `self` can
    /// be paired with a distinct point of `other` within `tolerance`.
    pub fn is_near(&self, other: &PointSet, tolerance: f64) -> GeometryResult<bool> {
        if self.is_empty() || other.is_empty() || self.size() != other.size() {
            return Ok(false);
        }

        let mut unmatched: Vec<Point> = other.points.clone();
        for point in &self.points {
            let mut partner = None;
            for (index, candidate) in unmatched.iter().enumerate() {
                if point.is_near(candidate, tolerance)? {
                    partner = Some(index);
                    break;
                }
            }
            match partner {
                Some(index) => {
                    unmatched.swap_remove(index);
                }
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    /// Distance from `point` to the closest member.
    pub fn distance_to(&self, point: &Point) -> GeometryResult<f64> {
        let closest = self.point_closest_to(point)?;
        closest.distance_to(point)
    }

    /// The member closest to `point`; the first one wins ties.
    pub fn point_closest_to(&self, point: &Point) -> GeometryResult<Point> {
        ensure_defined(point.is_defined(), "Point")?;
        ensure_defined(!self.is_empty(), "Point set")?;

        let squared = |candidate: &Point| (*candidate - *point).length_squared();
        self.points
            .iter()
            .copied()
            .min_by(|a, b| squared(a).total_cmp(&squared(b)))
            .ok_or_else(|| GeometryError::undefined("Point set"))
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Transformable for PointSet {
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Point set")?;
        let mut points = self.points.clone();
        for point in &mut points {
            point.apply_transformation(transformation)?;
        }
        *self = Self::new(points);
        Ok(())
    }
}

impl PartialEq for PointSet {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.points == other.points
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("PointSet []");
        }
        let points: Vec<String> = self.points.iter().map(ToString::to_string).collect();
        write!(f, "PointSet [{}]", points.join(", "))
    }
}
