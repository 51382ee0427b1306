//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are plain functions over `&mut World` and the player record.
//! They do not own state; all state lives in components and the engine.

pub mod cleanup;
pub mod combat;
pub mod melee;
pub mod player_movement;
pub mod projectiles;
pub mod pursuit;
pub mod snapshot;
pub mod wave_spawner;
