//! Player data model and per-frame input state.
//!
//! Stored directly in `SimulationEngine`, NOT as an ECS entity.

use glam::{Quat, Vec3};

use skirmish_core::config::Tuning;
use skirmish_core::events::GameEvent;
use skirmish_core::state::PlayerView;
use skirmish_core::types::{Facing, Position};

/// The single human-controlled combatant.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Position,
    /// Camera orientation as of the last simulated frame.
    pub facing: Facing,
    /// Displacement applied during the last simulated frame.
    pub velocity: Vec3,
    pub health: u32,
    /// Rounds in the clip.
    pub ammo: u32,
    /// Reserve rounds. Only ever decreases.
    pub max_ammo: u32,
    pub score: u32,
}

impl Player {
    /// A fresh player at the spawn point with full health and ammunition.
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            position: Position(tuning.player_spawn),
            facing: Facing::default(),
            velocity: Vec3::ZERO,
            health: tuning.player_max_health,
            ammo: tuning.clip_size,
            max_ammo: tuning.starting_reserve,
            score: 0,
        }
    }

    /// Restore spawn defaults after a death. Orientation is kept.
    pub fn reset(&mut self, tuning: &Tuning) {
        let facing = self.facing;
        *self = Self::spawn(tuning);
        self.facing = facing;
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// HUD notification for the current health/ammo/score.
    pub fn stats_event(&self) -> GameEvent {
        GameEvent::StatsChanged {
            health: self.health,
            ammo: self.ammo,
            score: self.score,
        }
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.position,
            facing: self.facing,
            health: self.health,
            ammo: self.ammo,
            max_ammo: self.max_ammo,
            score: self.score,
        }
    }
}

/// Direction keys currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementIntent {
    /// Local-space intent: forward is -z, right is +x. Opposing keys cancel.
    pub fn local_vector(&self) -> Vec3 {
        let mut v = Vec3::ZERO;
        if self.forward {
            v.z -= 1.0;
        }
        if self.back {
            v.z += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v
    }

    /// World-space displacement for one frame: rotated by yaw only, kept
    /// level and scaled to `speed`. Zero when no net key is held.
    pub fn displacement(&self, yaw: f32, speed: f32) -> Vec3 {
        let local = self.local_vector();
        if local == Vec3::ZERO {
            return Vec3::ZERO;
        }
        let mut world = Quat::from_rotation_y(yaw) * local.normalize();
        world.y = 0.0;
        world.normalize_or_zero() * speed
    }
}
