//! Kinematic advance system.
//!
//! Velocities are authored in pixels per tick, so the update is a plain
//! add with no dt factor. The player's velocity is always zero; its
//! movement comes from held-key intents applied later in the sequence.

use hecs::World;

use skystrike_core::types::{Position, Velocity};

/// Advance every actor with Position + Velocity by one tick.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0;
    }
}
