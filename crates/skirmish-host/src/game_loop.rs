//! Game loop thread: advances the engine once per display frame and
//! publishes the results.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Events go to the
//! presentation sink; snapshots are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use skirmish_core::events::{dispatch_events, PresentationSink};
use skirmish_core::state::FrameSnapshot;
use skirmish_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, HostError};

/// Display refresh rate the loop paces itself to.
pub const DISPLAY_REFRESH_HZ: u64 = 60;

/// Nominal duration of one display frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / DISPLAY_REFRESH_HZ);

/// Presentation sink that only writes to the log.
#[derive(Debug, Default)]
pub struct LogSink;

impl PresentationSink for LogSink {
    fn stats_changed(&mut self, health: u32, ammo: u32, score: u32) {
        debug!("hud: health {health} ammo {ammo} score {score}");
    }

    fn game_over(&mut self, final_score: u32) {
        info!("game over! final score: {final_score}");
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the control layer and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    sink: Box<dyn PresentationSink + Send>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), HostError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, sink);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
    mut sink: Box<dyn PresentationSink + Send>,
) {
    let mut engine = SimulationEngine::new(config);
    let started = Instant::now();
    let mut next_frame_time = started;
    info!("game loop started at {DISPLAY_REFRESH_HZ} Hz");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!("game loop stopped after {} frames", engine.time().frame);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame (engine handles phase gating internally)
        let now_ms = started.elapsed().as_millis() as u64;
        let snapshot = engine.advance_frame(now_ms);

        // 3. Notify the presentation layer
        dispatch_events(&snapshot.events, sink.as_mut());

        // 4. Store latest snapshot for synchronous polling
        let mut lock = latest_snapshot.lock().unwrap_or_else(|poisoned| {
            warn!("snapshot lock poisoned; recovering");
            latest_snapshot.clear_poison();
            poisoned.into_inner()
        });
        *lock = Some(snapshot);
        drop(lock);

        // 5. Sleep until the next display frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}
