//! Projectile travel: straight-line motion with a frame countdown.
//!
//! Runs every frame in every phase. Expired projectiles are removed by the
//! cleanup system.

use hecs::World;

use skirmish_core::components::Projectile;
use skirmish_core::types::Position;

pub fn run(world: &mut World) {
    for (_entity, (pos, projectile)) in world.query_mut::<(&mut Position, &mut Projectile)>() {
        pos.0 += projectile.direction * projectile.speed;
        projectile.life_frames = projectile.life_frames.saturating_sub(1);
    }
}
