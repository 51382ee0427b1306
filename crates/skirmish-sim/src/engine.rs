//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the player, processes
//! player commands, runs all systems once per host frame and produces
//! `FrameSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use log::{info, trace};
use serde::{Deserialize, Serialize};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::config::{ConfigError, Tuning};
use skirmish_core::enums::GamePhase;
use skirmish_core::events::GameEvent;
use skirmish_core::state::FrameSnapshot;
use skirmish_core::types::{Facing, SimTime};

use crate::hit_test::{AabbRaycaster, SpatialQuery};
use crate::player::{MovementIntent, Player};
use crate::systems;
use crate::systems::combat::ShotOutcome;
use crate::systems::melee::MeleeOutcome;
use crate::systems::wave_spawner::WaveSpawner;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON config and validate its tuning.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.tuning.validate()?;
        Ok(config)
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tuning: Tuning,
    player: Player,
    intent: MovementIntent,
    /// Accumulated pointer orientation; copied onto the player each frame.
    look: Facing,
    spawner: WaveSpawner,
    spatial: Box<dyn SpatialQuery + Send>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine in the menu with a fresh player and the opening
    /// wave already in place.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            player: Player::spawn(&config.tuning),
            tuning: config.tuning,
            intent: MovementIntent::default(),
            look: Facing::default(),
            spawner: WaveSpawner::new(config.seed),
            spatial: Box::new(AabbRaycaster),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        let count = engine.spawner.spawn_wave(&mut engine.world, &engine.tuning);
        engine.events.push(GameEvent::WaveSpawned { count });
        engine
    }

    /// Replace the hit-test provider (defaults to `AabbRaycaster`).
    pub fn with_spatial_query(mut self, spatial: impl SpatialQuery + Send + 'static) -> Self {
        self.spatial = Box::new(spatial);
        self
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// `now_ms` is the host's monotonic clock; it only drives melee cooldowns.
    pub fn advance_frame(&mut self, now_ms: u64) -> FrameSnapshot {
        self.process_commands();

        if self.phase.is_simulating() {
            self.run_systems(now_ms);
        }

        // Projectiles fly out their lifetime in every phase.
        systems::projectiles::run(&mut self.world);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        self.time.advance(now_ms);
        trace!("frame {} phase {:?}", self.time.frame, self.phase);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.player, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of live enemies.
    pub fn enemy_count(&self) -> usize {
        world_setup::enemy_count(&self.world)
    }

    /// Waves spawned so far, including the opening wave.
    pub fn waves_spawned(&self) -> u32 {
        self.spawner.waves_spawned()
    }

    /// Mutable player access (for tests).
    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Mutable world access (for tests that place enemies by hand).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetMovementIntent {
                forward,
                back,
                left,
                right,
            } => {
                self.intent = MovementIntent {
                    forward,
                    back,
                    left,
                    right,
                };
            }
            PlayerCommand::SetOrientationDelta { dx, dy } => {
                // Pointer input is only captured while playing.
                if self.phase.is_simulating() {
                    let sensitivity = self.tuning.mouse_sensitivity;
                    self.look = Facing::new(
                        self.look.yaw - dx * sensitivity,
                        self.look.pitch - dy * sensitivity,
                    )
                    .clamped();
                }
            }
            PlayerCommand::Fire => {
                if self.phase.is_simulating() {
                    if let Some(outcome) = self.fire() {
                        trace!("shot: {outcome:?}");
                    }
                }
            }
            PlayerCommand::Reload => {
                systems::combat::reload(&mut self.player, &self.tuning, &mut self.events);
            }
            PlayerCommand::Start => {
                if self.phase == GamePhase::Menu {
                    self.set_phase(GamePhase::Playing);
                }
            }
            PlayerCommand::ToggleMenu => {
                if self.phase == GamePhase::Playing {
                    self.set_phase(GamePhase::Menu);
                }
            }
        }
    }

    fn fire(&mut self) -> Option<ShotOutcome> {
        systems::combat::fire(
            &mut self.world,
            &mut self.player,
            self.spatial.as_ref(),
            &mut self.spawner,
            &self.tuning,
            &mut self.events,
        )
    }

    /// Run the gameplay systems in order. Only called while playing.
    fn run_systems(&mut self, now_ms: u64) {
        // 1. Player movement and camera
        systems::player_movement::run(&mut self.player, self.intent, self.look, &self.tuning);
        // 2. Enemy pursuit
        systems::pursuit::run(&mut self.world, self.player.position);
        // 3. Enemy melee
        let outcome = systems::melee::run(
            &mut self.world,
            &mut self.player,
            now_ms,
            &self.tuning,
            &mut self.events,
        );
        if outcome == MeleeOutcome::PlayerKilled {
            self.game_over();
        }
    }

    /// Report the final score, restore a fresh player and fall back to the
    /// menu. Enemies and projectiles are left where they are.
    fn game_over(&mut self) {
        let final_score = self.player.score;
        self.set_phase(GamePhase::GameOver);
        info!("game over, final score {final_score}");
        self.events.push(GameEvent::GameOver { final_score });

        self.player.reset(&self.tuning);
        self.events.push(self.player.stats_event());

        self.set_phase(GamePhase::Menu);
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        info!("phase {from:?} -> {to:?}");
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }
}
