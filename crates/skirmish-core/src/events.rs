//! Events emitted by the simulation for HUD and menu feedback.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;

/// Notifications for the presentation layer, collected per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Health, ammo or score changed.
    StatsChanged { health: u32, ammo: u32, score: u32 },
    /// The player died. Emitted once, before the player is reset.
    GameOver { final_score: u32 },
    /// A shot was fired (projectile spawned).
    ShotFired,
    /// An enemy was killed by the player.
    EnemyKilled { enemy_id: u32 },
    /// A new wave entered the arena.
    WaveSpawned { count: u32 },
    /// Top-level phase transition.
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Outbound interface implemented by whatever draws the HUD and menus.
pub trait PresentationSink {
    /// Health, ammo or score changed; redraw the HUD.
    fn stats_changed(&mut self, health: u32, ammo: u32, score: u32);

    /// The player died with `final_score`. The simulation has already
    /// returned to the menu.
    fn game_over(&mut self, final_score: u32);
}

/// Route the notification events of one frame to a presentation sink.
/// Informational events without a sink method are skipped.
pub fn dispatch_events(events: &[GameEvent], sink: &mut dyn PresentationSink) {
    for event in events {
        match *event {
            GameEvent::StatsChanged {
                health,
                ammo,
                score,
            } => sink.stats_changed(health, ammo, score),
            GameEvent::GameOver { final_score } => sink.game_over(final_score),
            GameEvent::ShotFired
            | GameEvent::EnemyKilled { .. }
            | GameEvent::WaveSpawned { .. }
            | GameEvent::PhaseChanged { .. } => {}
        }
    }
}
