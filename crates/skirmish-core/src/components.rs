//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Per-enemy combat and locomotion state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyState {
    /// Unique id, never reused within one engine.
    pub id: u32,
    /// Remaining hit points. The enemy is despawned when this reaches 0.
    pub health: u32,
    /// Pursuit speed (units per frame).
    pub speed: f32,
    /// Host time of the last melee hit. `None` until the first attack.
    pub last_attack_ms: Option<u64>,
}

/// Axis-aligned collision box centred on the entity position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub half_extents: Vec3,
}

/// Cosmetic projectile travelling in a straight line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit travel direction.
    pub direction: Vec3,
    /// Units per frame.
    pub speed: f32,
    /// Frames left before the projectile expires.
    pub life_frames: u32,
}

/// Marks an entity as a hostile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

// Position and Facing are defined in types.rs and attached as components too.
