//! Wave spawning: a ring of enemies around the origin whenever the arena
//! has been cleared.

use std::f32::consts::TAU;

use hecs::World;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skirmish_core::config::Tuning;

use crate::world_setup;

/// Seeded spawner that hands out enemy ids and spawn radii.
#[derive(Debug, Clone)]
pub struct WaveSpawner {
    rng: ChaCha8Rng,
    next_enemy_id: u32,
    waves_spawned: u32,
}

impl WaveSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_enemy_id: 0,
            waves_spawned: 0,
        }
    }

    /// Spawn one full wave: `wave_size` enemies at evenly spaced angles and
    /// a random radius in `[spawn_radius_min, spawn_radius_max)`.
    /// Returns the number of enemies spawned.
    pub fn spawn_wave(&mut self, world: &mut World, tuning: &Tuning) -> u32 {
        for i in 0..tuning.wave_size {
            let angle = i as f32 / tuning.wave_size as f32 * TAU;
            let radius = self
                .rng
                .gen_range(tuning.spawn_radius_min..tuning.spawn_radius_max);
            let position = world_setup::ring_point(angle, radius, tuning.enemy_spawn_height);
            world_setup::spawn_enemy(world, self.next_enemy_id, position, tuning);
            self.next_enemy_id += 1;
        }
        self.waves_spawned += 1;
        debug!(
            "wave {} spawned: {} enemies",
            self.waves_spawned, tuning.wave_size
        );
        tuning.wave_size
    }

    /// Number of waves spawned so far, including the opening wave.
    pub fn waves_spawned(&self) -> u32 {
        self.waves_spawned
    }
}
