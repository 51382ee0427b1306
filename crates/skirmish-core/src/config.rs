//! Gameplay tuning and configuration errors.
//!
//! `Tuning` carries every gameplay number the simulation uses. It defaults to
//! the values in [`crate::constants`] and can be partially overridden from JSON.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay tuning parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_spawn: Vec3,
    pub player_max_health: u32,
    pub move_speed: f32,
    pub mouse_sensitivity: f32,

    pub clip_size: u32,
    pub starting_reserve: u32,
    pub shot_damage: u32,
    pub kill_score: u32,
    pub projectile_speed: f32,
    pub projectile_life_frames: u32,

    pub wave_size: u32,
    pub spawn_radius_min: f32,
    pub spawn_radius_max: f32,
    pub enemy_spawn_height: f32,
    pub enemy_health: u32,
    pub enemy_speed: f32,
    pub enemy_box_size: Vec3,

    pub melee_range: f32,
    pub melee_damage: u32,
    pub melee_cooldown_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_spawn: Vec3::from_array(PLAYER_SPAWN),
            player_max_health: PLAYER_MAX_HEALTH,
            move_speed: PLAYER_MOVE_SPEED,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            clip_size: CLIP_SIZE,
            starting_reserve: STARTING_RESERVE,
            shot_damage: SHOT_DAMAGE,
            kill_score: KILL_SCORE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_life_frames: PROJECTILE_LIFE_FRAMES,
            wave_size: WAVE_SIZE,
            spawn_radius_min: SPAWN_RADIUS_MIN,
            spawn_radius_max: SPAWN_RADIUS_MAX,
            enemy_spawn_height: ENEMY_SPAWN_HEIGHT,
            enemy_health: ENEMY_HEALTH,
            enemy_speed: ENEMY_SPEED,
            enemy_box_size: Vec3::from_array(ENEMY_BOX_SIZE),
            melee_range: MELEE_RANGE,
            melee_damage: MELEE_DAMAGE,
            melee_cooldown_ms: MELEE_COOLDOWN_MS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON object and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if self.player_max_health == 0 {
            return invalid("player_max_health", "must be at least 1");
        }
        if self.clip_size == 0 {
            return invalid("clip_size", "must be at least 1");
        }
        if self.wave_size == 0 {
            return invalid("wave_size", "must be at least 1");
        }
        if self.enemy_health == 0 {
            return invalid("enemy_health", "must be at least 1");
        }
        if !(self.move_speed > 0.0) {
            return invalid("move_speed", "must be positive");
        }
        if !(self.enemy_speed >= 0.0) {
            return invalid("enemy_speed", "must not be negative");
        }
        if !(self.projectile_speed > 0.0) {
            return invalid("projectile_speed", "must be positive");
        }
        if !(self.spawn_radius_min >= 0.0 && self.spawn_radius_min < self.spawn_radius_max) {
            return invalid("spawn_radius_min", "must be non-negative and below spawn_radius_max");
        }
        if !(self.melee_range > 0.0) {
            return invalid("melee_range", "must be positive");
        }
        if self.enemy_box_size.min_element() <= 0.0 {
            return invalid("enemy_box_size", "all extents must be positive");
        }
        Ok(())
    }

    /// Half extents of the enemy collision box.
    pub fn enemy_half_extents(&self) -> Vec3 {
        self.enemy_box_size * 0.5
    }
}
