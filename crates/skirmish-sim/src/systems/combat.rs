//! Combat resolution: firing, hit application, kills and reloading.
//!
//! A shot is resolved the instant it is fired. The projectile it spawns is
//! cosmetic and takes no further part in hit detection.

use hecs::World;
use log::debug;

use skirmish_core::components::{Enemy, EnemyState, Hitbox};
use skirmish_core::config::Tuning;
use skirmish_core::events::GameEvent;
use skirmish_core::types::Position;

use crate::hit_test::{HitCandidate, SpatialQuery};
use crate::player::Player;
use crate::systems::wave_spawner::WaveSpawner;
use crate::world_setup;

/// What a single shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The ray intersected no enemy.
    Miss,
    /// An enemy was damaged and survived.
    Hit { enemy_id: u32, remaining_health: u32 },
    /// An enemy was killed. `wave_spawned` is set when it was the last one.
    Kill { enemy_id: u32, wave_spawned: bool },
}

/// Fire one round along the player's facing.
///
/// Returns `None` (and changes nothing) when the clip is empty.
pub fn fire(
    world: &mut World,
    player: &mut Player,
    spatial: &dyn SpatialQuery,
    spawner: &mut WaveSpawner,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> Option<ShotOutcome> {
    if player.ammo == 0 {
        return None;
    }

    player.ammo -= 1;
    events.push(player.stats_event());

    let aim = player.facing.forward();
    world_setup::spawn_projectile(world, player.position, aim, tuning);
    events.push(GameEvent::ShotFired);

    let candidates: Vec<HitCandidate> = world
        .query_mut::<(&Enemy, &Position, &Hitbox)>()
        .into_iter()
        .map(|(entity, (_enemy, pos, hitbox))| HitCandidate {
            entity,
            center: pos.0,
            half_extents: hitbox.half_extents,
        })
        .collect();

    let Some(target) = spatial.nearest_hit(player.position.0, aim, &candidates) else {
        return Some(ShotOutcome::Miss);
    };

    // A query may hand back something that is not a live enemy; treat as a miss.
    let (enemy_id, remaining_health) = match world.get::<&mut EnemyState>(target) {
        Ok(mut state) => {
            state.health = state.health.saturating_sub(tuning.shot_damage);
            (state.id, state.health)
        }
        Err(_) => return Some(ShotOutcome::Miss),
    };

    if remaining_health > 0 {
        return Some(ShotOutcome::Hit {
            enemy_id,
            remaining_health,
        });
    }

    let _ = world.despawn(target);
    player.score = player.score.saturating_add(tuning.kill_score);
    events.push(GameEvent::EnemyKilled { enemy_id });
    events.push(player.stats_event());
    debug!("enemy {enemy_id} killed, score {}", player.score);

    let wave_spawned = world_setup::enemy_count(world) == 0;
    if wave_spawned {
        let count = spawner.spawn_wave(world, tuning);
        events.push(GameEvent::WaveSpawned { count });
    }

    Some(ShotOutcome::Kill {
        enemy_id,
        wave_spawned,
    })
}

/// Move rounds from reserve into the clip, up to clip capacity.
///
/// Returns the number of rounds moved. A full clip or empty reserve moves
/// nothing and emits nothing.
pub fn reload(player: &mut Player, tuning: &Tuning, events: &mut Vec<GameEvent>) -> u32 {
    let deficit = tuning.clip_size.saturating_sub(player.ammo);
    let moved = deficit.min(player.max_ammo);
    if moved == 0 {
        return 0;
    }

    player.ammo += moved;
    player.max_ammo -= moved;
    events.push(player.stats_event());
    debug!(
        "reloaded {moved} rounds: clip {} reserve {}",
        player.ammo, player.max_ammo
    );
    moved
}
