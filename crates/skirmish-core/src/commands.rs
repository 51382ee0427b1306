//! Player commands sent from the input/presentation layer to the simulation.
//!
//! Commands are queued and processed in order at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Continuous input ---
    /// Currently held direction keys. Persists until replaced.
    SetMovementIntent {
        forward: bool,
        back: bool,
        left: bool,
        right: bool,
    },
    /// Raw pointer movement since the last report.
    SetOrientationDelta { dx: f32, dy: f32 },

    // --- Discrete actions ---
    Fire,
    Reload,

    // --- Flow control ---
    /// Leave the menu and start (or resume) playing.
    Start,
    /// Open the menu while playing.
    ToggleMenu,
}
