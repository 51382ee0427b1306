//! Enemy pursuit system.
//!
//! Calls the steering rule from skirmish-ai for each enemy and writes the
//! result back into its components.

use hecs::World;

use skirmish_core::components::{Enemy, EnemyState};
use skirmish_core::types::{Facing, Position};

use skirmish_ai::pursuit::{evaluate, PursuitContext};

/// Step every enemy toward `target` and turn it to face the target.
pub fn run(world: &mut World, target: Position) {
    for (_entity, (_enemy, pos, facing, state)) in
        world.query_mut::<(&Enemy, &mut Position, &mut Facing, &EnemyState)>()
    {
        let update = evaluate(&PursuitContext {
            position: *pos,
            target,
            speed: state.speed,
        });
        *pos = update.new_position;
        *facing = update.new_facing;
    }
}
