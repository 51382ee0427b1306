//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// `GameOver` is transient: the engine passes through it and lands in
/// `Menu` within the same frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

impl GamePhase {
    /// Whether movement, enemy AI and melee run this frame.
    pub fn is_simulating(self) -> bool {
        self == GamePhase::Playing
    }
}
