//! Entity spawn factories.
//!
//! Creates enemy and projectile entities with their component bundles.

use glam::Vec3;
use hecs::{Entity, World};

use skirmish_core::components::{Enemy, EnemyState, Hitbox, Projectile};
use skirmish_core::config::Tuning;
use skirmish_core::types::{Facing, Position};

/// Spawn one enemy at `position` with full health and no attack history.
pub fn spawn_enemy(world: &mut World, id: u32, position: Position, tuning: &Tuning) -> Entity {
    world.spawn((
        Enemy,
        position,
        Facing::default(),
        EnemyState {
            id,
            health: tuning.enemy_health,
            speed: tuning.enemy_speed,
            last_attack_ms: None,
        },
        Hitbox {
            half_extents: tuning.enemy_half_extents(),
        },
    ))
}

/// Spawn a projectile at `origin` travelling along `direction`.
pub fn spawn_projectile(
    world: &mut World,
    origin: Position,
    direction: Vec3,
    tuning: &Tuning,
) -> Entity {
    world.spawn((
        origin,
        Projectile {
            direction,
            speed: tuning.projectile_speed,
            life_frames: tuning.projectile_life_frames,
        },
    ))
}

/// A point on a ring of `radius` around the world origin at `angle` radians
/// (measured from +x toward +z), lifted to `height`.
pub fn ring_point(angle: f32, radius: f32, height: f32) -> Position {
    Position::new(angle.cos() * radius, height, angle.sin() * radius)
}

/// Number of live enemies.
pub fn enemy_count(world: &World) -> usize {
    world.query::<&Enemy>().iter().count()
}
