//! Fundamental geometric and simulation types.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// 3D position in world space (units).
/// x = right, y = up, z = toward the viewer; the default forward is -z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Orientation as yaw (about +Y) and pitch (about +X), radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    pub yaw: f32,
    pub pitch: f32,
}

/// Frame-stepped simulation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed frames.
    pub frame: u64,
    /// Host wall clock (milliseconds) passed to the most recent frame.
    pub now_ms: u64,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Straight-line distance to another position.
    pub fn range_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }
}

impl Facing {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Rotation applied to the local frame: yaw first, then pitch.
    /// A camera drawing this facing must use the same `YXZ` order to match the aim.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Unit forward vector (local -Z rotated into world space).
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Same yaw with pitch clamped to straight up / straight down.
    pub fn clamped(self) -> Self {
        use std::f32::consts::FRAC_PI_2;
        Self {
            yaw: self.yaw,
            pitch: self.pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
        }
    }
}

impl SimTime {
    /// Advance by one frame, recording the host clock for that frame.
    pub fn advance(&mut self, now_ms: u64) {
        self.frame += 1;
        self.now_ms = now_ms;
    }
}
