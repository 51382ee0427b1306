//! Control API: the entry points an input/UI layer calls.
//!
//! These bridge requests to the game loop thread via channels.

use log::info;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::events::PresentationSink;
use skirmish_core::state::FrameSnapshot;
use skirmish_sim::engine::SimConfig;

use crate::game_loop;
use crate::state::{GameLoopCommand, HostError, HostState};

impl HostState {
    /// Start the simulation thread. Fails if it is already running.
    pub fn start(
        &self,
        config: SimConfig,
        sink: Box<dyn PresentationSink + Send>,
    ) -> Result<(), HostError> {
        let mut handle_lock = self.loop_handle.lock()?;
        if handle_lock.is_some() {
            return Err(HostError::AlreadyRunning);
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, self.latest_snapshot.clone(), sink)?;

        *self.command_tx.lock()? = Some(cmd_tx);
        *handle_lock = Some(handle);
        Ok(())
    }

    /// Send a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), HostError> {
        let tx_lock = self.command_tx.lock()?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|_| HostError::LoopStopped),
            None => Err(HostError::NotStarted),
        }
    }

    /// Send a command encoded as JSON, e.g. `{"type":"Fire"}`.
    pub fn send_json_command(&self, json: &str) -> Result<(), HostError> {
        let command: PlayerCommand = serde_json::from_str(json)?;
        self.send_command(command)
    }

    /// Get the latest snapshot (for polling / initial state).
    pub fn snapshot(&self) -> Result<Option<FrameSnapshot>, HostError> {
        Ok(self.latest_snapshot.lock()?.clone())
    }

    /// Stop the loop thread and wait for it to exit.
    pub fn shutdown(&self) -> Result<(), HostError> {
        let handle = self.loop_handle.lock()?.take().ok_or(HostError::NotStarted)?;
        if let Some(tx) = self.command_tx.lock()?.take() {
            // The loop may already be gone; joining below is what matters.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        handle.join().map_err(|_| HostError::LoopStopped)?;
        info!("host shut down");
        Ok(())
    }
}
