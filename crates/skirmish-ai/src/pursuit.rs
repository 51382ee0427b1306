//! Pursuit steering: every frame, step straight toward the player's
//! current position and turn to face them.

use skirmish_core::types::{Facing, Position};

/// Input to the steering rule for a single enemy.
pub struct PursuitContext {
    pub position: Position,
    pub target: Position,
    /// Units per frame.
    pub speed: f32,
}

/// Output of the steering rule.
pub struct PursuitUpdate {
    pub new_position: Position,
    pub new_facing: Facing,
    /// Distance to the target after the step.
    pub range_to_target: f32,
}

/// Advance one enemy by one frame of pure pursuit.
///
/// An enemy standing exactly on its target does not move and keeps a
/// neutral facing.
pub fn evaluate(ctx: &PursuitContext) -> PursuitUpdate {
    let heading = (ctx.target.0 - ctx.position.0).normalize_or_zero();
    let new_position = Position(ctx.position.0 + heading * ctx.speed);

    PursuitUpdate {
        new_position,
        new_facing: look_at(&new_position, &ctx.target),
        range_to_target: new_position.range_to(&ctx.target),
    }
}

/// Facing whose forward vector points from `from` toward `to`.
pub fn look_at(from: &Position, to: &Position) -> Facing {
    let delta = to.0 - from.0;
    let len = delta.length();
    if len <= f32::EPSILON {
        return Facing::default();
    }
    let yaw = (-delta.x).atan2(-delta.z);
    let pitch = (delta.y / len).clamp(-1.0, 1.0).asin();
    Facing::new(yaw, pitch)
}

