//! Oriented box queries: slab clipping and the separating axis test.

use crate::config::EPSILON;
use crate::core::vec3::Vec3;
use crate::query::quadric::ParameterRange;

/// A solid box with orthonormal `axes` and half-lengths along them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OrientedBox {
    pub(crate) center: Vec3,
    pub(crate) axes: [Vec3; 3],
    pub(crate) half_extents: Vec3,
}

impl OrientedBox {
    /// Coordinates of `point` in the box frame.
    pub(crate) fn local(&self, point: Vec3) -> Vec3 {
        let offset = point - self.center;
        Vec3::new(
            offset.dot(self.axes[0]),
            offset.dot(self.axes[1]),
            offset.dot(self.axes[2]),
        )
    }

    /// Solid containment with an ε band around the faces.
    pub(crate) fn contains_point(&self, point: Vec3) -> bool {
        let local = self.local(point).abs();
        let limit = self.half_extents + Vec3::splat(EPSILON);
        local.cmple(limit).all()
    }

    /// Parameter interval of `origin + t·direction` inside the box, restricted
    /// to `range`, or `None` when the primitive misses the box.
    pub(crate) fn clip(
        &self,
        origin: Vec3,
        direction: Vec3,
        range: ParameterRange,
    ) -> Option<(f64, f64)> {
        let local_origin = self.local(origin);
        let local_direction = Vec3::new(
            direction.dot(self.axes[0]),
            direction.dot(self.axes[1]),
            direction.dot(self.axes[2]),
        );

        let (mut t_min, mut t_max) = range.bounds();

        for axis in 0..3 {
            let o = local_origin[axis];
            let d = local_direction[axis];
            let extent = self.half_extents[axis] + EPSILON;

            if d.abs() <= f64::EPSILON {
                if o.abs() > extent {
                    return None;
                }
                continue;
            }

            let inv_d = 1.0 / d;
            let mut t0 = (-extent - o) * inv_d;
            let mut t1 = (extent - o) * inv_d;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        Some((t_min, t_max))
    }

    /// Half-width of the box along the unit `normal`.
    pub(crate) fn projected_radius(&self, normal: Vec3) -> f64 {
        self.axes
            .iter()
            .zip(self.half_extents.to_array())
            .map(|(axis, half)| half * axis.dot(normal).abs())
            .sum()
    }

    /// True when the two solid boxes overlap (touching counts).
    ///
    /// Tests the 15 candidate separating axes: the 3 face normals of each box
    /// and the 9 pairwise edge cross products. Near-parallel edge pairs give a
    /// degenerate cross product and are skipped; their separation is already
    /// covered by the face normals.
    pub(crate) fn overlaps(&self, other: &OrientedBox) -> bool {
        let offset = other.center - self.center;

        let mut candidates: Vec<Vec3> = Vec::with_capacity(15);
        candidates.extend_from_slice(&self.axes);
        candidates.extend_from_slice(&other.axes);
        for mine in &self.axes {
            for theirs in &other.axes {
                let axis = mine.cross(*theirs);
                if axis.length_squared() > EPSILON * EPSILON {
                    candidates.push(axis.normalize());
                }
            }
        }

        candidates.iter().all(|axis| {
            let distance = offset.dot(*axis).abs();
            distance <= self.projected_radius(*axis) + other.projected_radius(*axis) + EPSILON
        })
    }
}
