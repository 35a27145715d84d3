//! Planar polygon with optional holes.
//!
//! Point membership uses a winding-number sweep over the exact
//! `robust::orient2d` sign, so collinear and boundary cases are decided
//! without rounding. Boundary points count as contained.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::vec2::{self, Vec2};
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::planar::Transformation;

/// A simple polygon: one outer ring and zero or more inner rings.
///
/// Rings are stored open (the closing edge back to the first vertex is
/// implicit).
///
/// # Examples
/// ```
/// use geometry_kernel::core::vec2::Vec2;
/// use geometry_kernel::planar::Polygon;
///
/// let square = Polygon::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(1.0, 0.0),
///     Vec2::new(1.0, 1.0),
///     Vec2::new(0.0, 1.0),
/// ])
/// .unwrap();
/// assert!(square.contains_point(Vec2::new(0.5, 0.5)).unwrap());
/// assert!(square.contains_point(Vec2::new(1.0, 0.5)).unwrap());
/// assert!(!square.contains_point(Vec2::new(1.5, 0.5)).unwrap());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    outer_ring: Vec<Vec2>,
    inner_rings: Vec<Vec<Vec2>>,
}

impl Polygon {
    /// Creates a polygon without holes.
    pub fn new(outer_ring: Vec<Vec2>) -> GeometryResult<Self> {
        Self::with_inner_rings(outer_ring, Vec::new())
    }

    /// Creates a polygon with holes. Every ring needs at least 3 vertices.
    pub fn with_inner_rings(
        outer_ring: Vec<Vec2>,
        inner_rings: Vec<Vec<Vec2>>,
    ) -> GeometryResult<Self> {
        let outer_ring = open_ring(outer_ring);
        let inner_rings: Vec<Vec<Vec2>> = inner_rings.into_iter().map(open_ring).collect();

        for ring in std::iter::once(&outer_ring).chain(inner_rings.iter()) {
            if ring.len() < 3 {
                return Err(GeometryError::invalid_argument(format!(
                    "polygon ring has {} vertices, at least 3 required",
                    ring.len()
                )));
            }
        }

        Ok(Self {
            outer_ring,
            inner_rings,
        })
    }

    /// The undefined polygon.
    pub fn undefined() -> Self {
        Self {
            outer_ring: Vec::new(),
            inner_rings: Vec::new(),
        }
    }

    /// True when the outer ring has at least 3 vertices and every vertex is finite.
    pub fn is_defined(&self) -> bool {
        self.outer_ring.len() >= 3
            && self
                .outer_ring
                .iter()
                .chain(self.inner_rings.iter().flatten())
                .all(|v| vec2::is_defined(*v))
    }

    /// Vertices of the outer ring.
    pub fn outer_ring(&self) -> &[Vec2] {
        &self.outer_ring
    }

    /// Holes.
    pub fn inner_rings(&self) -> &[Vec<Vec2>] {
        &self.inner_rings
    }

    /// Number of outer ring vertices.
    pub fn vertex_count(&self) -> usize {
        self.outer_ring.len()
    }

    /// Number of outer ring edges (equal to the vertex count).
    pub fn edge_count(&self) -> usize {
        self.outer_ring.len()
    }

    /// Outer ring vertex `index`.
    pub fn vertex_at(&self, index: usize) -> GeometryResult<Vec2> {
        ensure_defined(self.is_defined(), "Polygon")?;
        self.outer_ring.get(index).copied().ok_or_else(|| {
            GeometryError::invalid_argument(format!(
                "vertex index [{index}] out of bounds [{}]",
                self.outer_ring.len()
            ))
        })
    }

    /// Outer ring edge `index`, from vertex `index` to the next one.
    pub fn edge_at(&self, index: usize) -> GeometryResult<(Vec2, Vec2)> {
        let start = self.vertex_at(index)?;
        let end = self.outer_ring[(index + 1) % self.outer_ring.len()];
        Ok((start, end))
    }

    /// All edges of the outer ring.
    pub fn edges(&self) -> Vec<(Vec2, Vec2)> {
        ring_edges(&self.outer_ring).collect()
    }

    /// True when `point` lies inside or on the boundary, and not strictly
    /// inside a hole.
    pub fn contains_point(&self, point: Vec2) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Polygon")?;
        ensure_defined(vec2::is_defined(point), "Point")?;

        if !ring_covers(&self.outer_ring, point) {
            return Ok(false);
        }
        Ok(!self
            .inner_rings
            .iter()
            .any(|hole| ring_covers(hole, point) && !ring_boundary_contains(hole, point)))
    }

    /// True when every vertex of `other` is covered and no edges cross properly.
    pub fn contains_polygon(&self, other: &Polygon) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Polygon")?;
        ensure_defined(other.is_defined(), "Polygon")?;
        for vertex in &other.outer_ring {
            if !self.contains_point(*vertex)? {
                return Ok(false);
            }
        }
        let crossing = self.all_edges().any(|(a, b)| {
            other
                .edges()
                .iter()
                .any(|(c, d)| crosses_properly(a, b, *c, *d))
        });
        Ok(!crossing)
    }

    /// True when the two polygons share at least one point.
    pub fn intersects(&self, other: &Polygon) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Polygon")?;
        ensure_defined(other.is_defined(), "Polygon")?;

        let edges_touch = self.all_edges().any(|(a, b)| {
            other
                .all_edges()
                .any(|(c, d)| vec2::segments_intersect(a, b, c, d))
        });
        if edges_touch {
            return Ok(true);
        }
        Ok(self.contains_point(other.outer_ring[0])? || other.contains_point(self.outer_ring[0])?)
    }

    /// True when both have the same ring sizes and every vertex is within
    /// `tolerance` of its counterpart.
    pub fn is_near(&self, other: &Polygon, tolerance: f64) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Polygon")?;
        ensure_defined(other.is_defined(), "Polygon")?;
        if self.outer_ring.len() != other.outer_ring.len()
            || self.inner_rings.len() != other.inner_rings.len()
        {
            return Ok(false);
        }
        let rings = std::iter::once((&self.outer_ring, &other.outer_ring))
            .chain(self.inner_rings.iter().zip(other.inner_rings.iter()));
        for (mine, theirs) in rings {
            if mine.len() != theirs.len()
                || mine.iter().zip(theirs).any(|(a, b)| a.distance(*b) > tolerance)
            {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Maps every vertex through `transformation`.
    pub fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Polygon")?;
        if transformation.is_identity()? {
            return Ok(());
        }
        for vertex in self
            .outer_ring
            .iter_mut()
            .chain(self.inner_rings.iter_mut().flatten())
        {
            *vertex = transformation.apply_to_point(*vertex)?;
        }
        Ok(())
    }

    fn all_edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        std::iter::once(&self.outer_ring)
            .chain(self.inner_rings.iter())
            .flat_map(|ring| ring_edges(ring))
    }
}

fn open_ring(mut ring: Vec<Vec2>) -> Vec<Vec2> {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

fn ring_edges(ring: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    (0..ring.len()).map(move |i| (ring[i], ring[(i + 1) % ring.len()]))
}

fn ring_boundary_contains(ring: &[Vec2], point: Vec2) -> bool {
    ring_edges(ring).any(|(a, b)| vec2::on_segment(a, b, point))
}

/// Inside or on the boundary of a closed ring (non-zero winding).
fn ring_covers(ring: &[Vec2], point: Vec2) -> bool {
    if ring_boundary_contains(ring, point) {
        return true;
    }

    let mut winding = 0i32;
    for (a, b) in ring_edges(ring) {
        if a.y <= point.y {
            if b.y > point.y && vec2::orientation(a, b, point) == Ordering::Greater {
                winding += 1;
            }
        } else if b.y <= point.y && vec2::orientation(a, b, point) == Ordering::Less {
            winding -= 1;
        }
    }
    winding != 0
}

fn crosses_properly(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let d1 = vec2::orientation(c, d, a);
    let d2 = vec2::orientation(c, d, b);
    let d3 = vec2::orientation(a, b, c);
    let d4 = vec2::orientation(a, b, d);
    d1 != Ordering::Equal
        && d2 != Ordering::Equal
        && d3 != Ordering::Equal
        && d4 != Ordering::Equal
        && d1 != d2
        && d3 != d4
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.outer_ring == other.outer_ring
            && self.inner_rings == other.inner_rings
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        let ring: Vec<String> = self
            .outer_ring
            .iter()
            .map(|v| format!("[{}, {}]", v.x, v.y))
            .collect();
        write!(f, "Polygon [{}]", ring.join(", "))?;
        if !self.inner_rings.is_empty() {
            write!(f, " with {} inner ring(s)", self.inner_rings.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
