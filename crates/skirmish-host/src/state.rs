//! Host state shared between the control API and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use thiserror::Error;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::state::FrameSnapshot;

/// Commands sent from the control API to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Failures surfaced by the host control API.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop thread has stopped")]
    LoopStopped,
    #[error("host state lock poisoned")]
    LockPoisoned,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("malformed command: {0}")]
    BadCommand(#[from] serde_json::Error),
}

impl<T> From<std::sync::PoisonError<T>> for HostError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        HostError::LockPoisoned
    }
}

/// Shared host state.
///
/// Must be `Send + Sync` so a UI thread can hold it:
/// - `mpsc::Sender` and the join handle sit behind `Mutex`
/// - `Mutex<Option<...>>` for anything that does not exist before `start`
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the loop thread)
pub struct HostState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the game loop thread after each frame.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    /// Game loop thread, joined on shutdown.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a game loop thread has been started and not shut down.
    pub fn is_running(&self) -> Result<bool, HostError> {
        Ok(self.loop_handle.lock()?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_state_creation() {
        let state = HostState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!state.is_running().unwrap());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(HostError::NotStarted.to_string(), "simulation not started");
        let err: HostError = serde_json::from_str::<PlayerCommand>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("malformed command"));
    }
}
