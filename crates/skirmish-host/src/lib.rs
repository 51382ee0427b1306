//! Headless host for the SKIRMISH simulation.
//!
//! Runs the engine on its own thread at display cadence, feeds it wall-clock
//! time, forwards commands from the input layer and hands events and
//! snapshots to the presentation layer.

pub mod control;
pub mod game_loop;
pub mod state;

pub use skirmish_core as core;
