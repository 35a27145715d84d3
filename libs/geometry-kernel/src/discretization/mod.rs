//! # Discretization
//!
//! Cone and pyramid lateral surfaces are approximated by fans of rays cast
//! from the apex. Each ray is intersected exactly with the target; the hits
//! are then stitched into line strings.
//!
//! A ray can hit a closed surface twice. The hit closest to the apex goes to
//! the near string and the other to the far string, so the two strings trace
//! the entry and exit outlines of the surface.

use crate::angle::Angle;
use crate::core::vec3::Vec3;
use crate::error::{GeometryError, GeometryResult};
use crate::intersection::Intersection;
use crate::primitives::{LineString, Point, PointSet, Ray};
use crate::rotation::{Quaternion, RotationVector};

/// Rotates `vector` by `angle` about the unit `axis`, turning it
/// counter-clockwise when seen from the tip of the axis.
pub(crate) fn rotate_about(vector: Vec3, axis: Vec3, angle: Angle) -> GeometryResult<Vec3> {
    let rotation = Quaternion::from_rotation_vector(&RotationVector::new(axis, angle)?)?;
    rotation.conjugate() * vector
}

#[derive(Debug, Default)]
struct Outlines {
    near: Vec<Point>,
    far: Vec<Point>,
}

impl Outlines {
    fn collect(&mut self, apex: Point, hit: &Intersection) -> GeometryResult<()> {
        if hit.is_empty() {
            return Ok(());
        }
        if let Ok(point) = hit.as_variant::<Point>() {
            self.near.push(*point);
            return Ok(());
        }
        let points = hit.as_variant::<PointSet>()?;
        let near = points.point_closest_to(&apex)?;
        self.near.push(near);
        self.far
            .extend(points.iter().copied().filter(|point| *point != near));
        Ok(())
    }

    fn into_intersection(self, only_in_sight: bool) -> GeometryResult<Intersection> {
        let Outlines { near, far } = self;
        match (near.is_empty(), far.is_empty()) {
            (false, false) if !only_in_sight => {
                Intersection::line_string(LineString::new(near))
                    + Intersection::line_string(LineString::new(far))
            }
            (false, _) => Ok(Intersection::line_string(LineString::new(near))),
            (true, false) => Ok(Intersection::line_string(LineString::new(far))),
            (true, true) => Ok(Intersection::empty()),
        }
    }
}

/// Casts every ray of the fan and stitches the hits into line strings.
///
/// With both outlines present and `only_in_sight` unset the result holds
/// two line strings (near, then far); otherwise it is the single non-empty
/// string, or empty.
pub(crate) fn fan_intersection<F>(
    apex: Point,
    rays: &[Ray],
    only_in_sight: bool,
    mut cast: F,
) -> GeometryResult<Intersection>
where
    F: FnMut(&Ray) -> GeometryResult<Intersection>,
{
    let mut outlines = Outlines::default();
    for ray in rays {
        let hit = cast(ray)?;
        if !hit.is_empty() && !hit.is::<Point>() && !hit.is::<PointSet>() {
            return Err(GeometryError::numeric_failure(format!(
                "unexpected ray hit: {hit}"
            )));
        }
        outlines.collect(apex, &hit)?;
    }
    log::trace!(
        "ray fan of {} rays: {} near hits, {} far hits",
        rays.len(),
        outlines.near.len(),
        outlines.far.len()
    );
    outlines.into_intersection(only_in_sight)
}

/// True as soon as one ray of the fan hits.
pub(crate) fn fan_intersects<F>(rays: &[Ray], mut hits: F) -> GeometryResult<bool>
where
    F: FnMut(&Ray) -> GeometryResult<bool>,
{
    for (index, ray) in rays.iter().enumerate() {
        if hits(ray)? {
            log::trace!("ray fan hit after {} of {} rays", index + 1, rays.len());
            return Ok(true);
        }
    }
    Ok(false)
}
