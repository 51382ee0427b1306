//! Spatial hit-testing seam.
//!
//! The engine asks a `SpatialQuery` for the nearest enemy along the aim ray.
//! Hosts that own richer collision shapes can plug in their own; the default
//! `AabbRaycaster` tests against each enemy's axis-aligned hitbox.

use glam::Vec3;
use hecs::Entity;

/// One enemy volume offered to the hit test.
#[derive(Debug, Clone, Copy)]
pub struct HitCandidate {
    pub entity: Entity,
    pub center: Vec3,
    pub half_extents: Vec3,
}

/// Ray/volume intersection provider.
pub trait SpatialQuery {
    /// Nearest candidate intersected by the ray, or `None`.
    /// `direction` is a unit vector.
    fn nearest_hit(&self, origin: Vec3, direction: Vec3, candidates: &[HitCandidate])
        -> Option<Entity>;
}

/// Slab-test raycaster over axis-aligned boxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AabbRaycaster;

impl SpatialQuery for AabbRaycaster {
    fn nearest_hit(
        &self,
        origin: Vec3,
        direction: Vec3,
        candidates: &[HitCandidate],
    ) -> Option<Entity> {
        let mut best: Option<(f32, Entity)> = None;
        for candidate in candidates {
            let Some(t) = ray_aabb(origin, direction, candidate.center, candidate.half_extents)
            else {
                continue;
            };
            if best.is_none_or(|(best_t, _)| t < best_t) {
                best = Some((t, candidate.entity));
            }
        }
        best.map(|(_, entity)| entity)
    }
}

/// Distance along the ray to the first intersection with the box, or `None`.
/// A ray starting inside the box hits at distance 0.
pub fn ray_aabb(origin: Vec3, direction: Vec3, center: Vec3, half_extents: Vec3) -> Option<f32> {
    let min = center - half_extents;
    let max = center + half_extents;

    let mut t_near = 0.0_f32;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        if d.abs() <= f32::EPSILON {
            // Parallel to this slab: must already lie within it.
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    Some(t_near)
}
