//! Frame snapshot: the complete visible state handed to the render layer
//! after each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{Facing, Position, SimTime};

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events raised since the previous snapshot, in order.
    pub events: Vec<GameEvent>,
}

/// Player state for the camera and HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub facing: Facing,
    pub health: u32,
    pub ammo: u32,
    /// Reserve ammunition.
    pub max_ammo: u32,
    pub score: u32,
}

/// A live enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Position,
    pub facing: Facing,
    pub health: u32,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub direction: Vec3,
    pub life_frames: u32,
}
