//! Kill-count reconciliation.
//!
//! Rather than crediting kills at each damage site, the loop records the
//! hostile-plane count before the collision passes and credits the delta
//! after the purge. Penetrated enemies therefore count as kills too.

use hecs::{Entity, World};

use skystrike_core::components::{HostileUnit, PlayerState};

/// Count the hostile planes currently alive.
pub fn count_hostiles(world: &mut World) -> usize {
    world.query_mut::<&HostileUnit>().into_iter().count()
}

/// Credit the player with every hostile plane removed since the count
/// was recorded earlier this tick.
pub fn reconcile(world: &mut World, player: Entity, hostiles_before: usize) {
    let hostiles_after = count_hostiles(world);
    let removed = hostiles_before.saturating_sub(hostiles_after);
    if removed > 0 {
        if let Ok(mut state) = world.get::<&mut PlayerState>(player) {
            state.kills += removed as u32;
        }
    }
}
