//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world and the player record, advances every system once
//! per host frame, and produces `FrameSnapshot`s for the render layer.

pub mod engine;
pub mod hit_test;
pub mod player;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skirmish_core as core;
