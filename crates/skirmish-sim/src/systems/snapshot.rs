//! Snapshot system: reads the world and player into a `FrameSnapshot`.

use hecs::World;

use skirmish_core::components::{Enemy, EnemyState, Projectile};
use skirmish_core::enums::GamePhase;
use skirmish_core::events::GameEvent;
use skirmish_core::state::{EnemyView, FrameSnapshot, ProjectileView};
use skirmish_core::types::{Facing, Position, SimTime};

use crate::player::Player;

/// Build the render-facing snapshot for this frame.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    player: &Player,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Facing, &EnemyState)>()
        .iter()
        .map(|(_entity, (_enemy, pos, facing, state))| EnemyView {
            id: state.id,
            position: *pos,
            facing: *facing,
            health: state.health,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);

    let projectiles = world
        .query::<(&Position, &Projectile)>()
        .iter()
        .map(|(_entity, (pos, projectile))| ProjectileView {
            position: *pos,
            direction: projectile.direction,
            life_frames: projectile.life_frames,
        })
        .collect();

    FrameSnapshot {
        time: *time,
        phase,
        player: player.view(),
        enemies,
        projectiles,
        events,
    }
}
