//! Simulation constants and tuning defaults.
//!
//! All speeds are per frame: the simulation has no fixed timestep and
//! advances once per host frame.

// --- Player ---

/// Player spawn point (eye height above the ground plane).
pub const PLAYER_SPAWN: [f32; 3] = [0.0, 1.6, 0.0];

/// Maximum (and starting) player health.
pub const PLAYER_MAX_HEALTH: u32 = 100;

/// Walking speed (units per frame).
pub const PLAYER_MOVE_SPEED: f32 = 0.1;

/// Radians of yaw/pitch per unit of pointer movement.
pub const MOUSE_SENSITIVITY: f32 = 0.002;

// --- Weapon ---

/// Clip capacity.
pub const CLIP_SIZE: u32 = 30;

/// Reserve ammunition at spawn.
pub const STARTING_RESERVE: u32 = 90;

/// Damage dealt by one shot.
pub const SHOT_DAMAGE: u32 = 50;

/// Score awarded per kill.
pub const KILL_SCORE: u32 = 100;

/// Projectile speed (units per frame).
pub const PROJECTILE_SPEED: f32 = 2.0;

/// Projectile lifetime (frames).
pub const PROJECTILE_LIFE_FRAMES: u32 = 100;

// --- Enemies ---

/// Enemies per wave.
pub const WAVE_SIZE: u32 = 5;

/// Inclusive lower bound of the spawn ring radius.
pub const SPAWN_RADIUS_MIN: f32 = 20.0;

/// Exclusive upper bound of the spawn ring radius.
pub const SPAWN_RADIUS_MAX: f32 = 50.0;

/// Height of an enemy's centre above the ground plane.
pub const ENEMY_SPAWN_HEIGHT: f32 = 1.0;

/// Enemy starting health.
pub const ENEMY_HEALTH: u32 = 100;

/// Pursuit speed (units per frame).
pub const ENEMY_SPEED: f32 = 0.02;

/// Enemy collision box size (width, height, depth).
pub const ENEMY_BOX_SIZE: [f32; 3] = [1.0, 2.0, 1.0];

// --- Melee ---

/// Distance below which an enemy can strike the player.
pub const MELEE_RANGE: f32 = 2.0;

/// Damage per melee hit.
pub const MELEE_DAMAGE: u32 = 10;

/// Minimum time between two hits from the same enemy (milliseconds).
pub const MELEE_COOLDOWN_MS: u64 = 1000;
