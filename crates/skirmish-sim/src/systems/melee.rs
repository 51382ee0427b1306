//! Enemy melee: enemies in contact range strike the player on a cooldown.

use hecs::World;

use skirmish_core::components::{Enemy, EnemyState};
use skirmish_core::config::Tuning;
use skirmish_core::events::GameEvent;
use skirmish_core::types::Position;

use skirmish_ai::attack::{should_strike, AttackContext};

use crate::player::Player;

/// Result of one melee pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeleeOutcome {
    Survived,
    /// Health reached zero. Remaining enemies did not get to act.
    PlayerKilled,
}

/// Let every enemy in range and off cooldown hit the player once.
pub fn run(
    world: &mut World,
    player: &mut Player,
    now_ms: u64,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> MeleeOutcome {
    for (_entity, (_enemy, pos, state)) in
        world.query_mut::<(&Enemy, &Position, &mut EnemyState)>()
    {
        let ctx = AttackContext {
            range_to_target: pos.range_to(&player.position),
            last_attack_ms: state.last_attack_ms,
            now_ms,
            melee_range: tuning.melee_range,
            cooldown_ms: tuning.melee_cooldown_ms,
        };
        if !should_strike(&ctx) {
            continue;
        }

        player.health = player.health.saturating_sub(tuning.melee_damage);
        state.last_attack_ms = Some(now_ms);
        events.push(player.stats_event());

        if player.is_dead() {
            return MeleeOutcome::PlayerKilled;
        }
    }
    MeleeOutcome::Survived
}
