//! Cleanup system: removes expired projectiles.

use hecs::{Entity, World};

use skirmish_core::components::Projectile;

/// Despawn every projectile whose lifetime ran out. Enemies are removed by
/// the shot that kills them, never here. Uses a pre-allocated buffer to
/// avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.life_frames == 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
