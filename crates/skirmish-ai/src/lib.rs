//! Enemy AI for SKIRMISH.
//!
//! Pure functions for pursuit steering and melee attack decisions.
//! No ECS dependency; operates on plain data.

pub mod attack;
pub mod pursuit;

pub use skirmish_core as core;

#[cfg(test)]
mod tests;
