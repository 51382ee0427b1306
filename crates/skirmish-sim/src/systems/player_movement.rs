//! Player kinematics: level walking from held keys, camera from look state.

use skirmish_core::config::Tuning;
use skirmish_core::types::Facing;

use crate::player::{MovementIntent, Player};

/// Apply one frame of player movement.
///
/// Facing is always taken from `look`; translation uses yaw only, so the
/// player stays level regardless of pitch.
pub fn run(player: &mut Player, intent: MovementIntent, look: Facing, tuning: &Tuning) {
    player.facing = look;
    let step = intent.displacement(look.yaw, tuning.move_speed);
    player.position.0 += step;
    player.velocity = step;
}
