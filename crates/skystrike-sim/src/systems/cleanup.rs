//! Cleanup system: purges destroyed actors and culls runaway projectiles.

use hecs::{Entity, World};

use skystrike_core::components::{Destructible, EnemyProjectile, PlayerProjectile};
use skystrike_core::constants::{PROJECTILE_CULL_MARGIN, SCREEN_WIDTH};
use skystrike_core::types::Position;

/// Remove every actor flagged destroyed this tick, plus projectiles that
/// have left the screen by more than the cull margin.
///
/// The player entity is never despawned here — the end-of-tick win/lose
/// check and the snapshot still need to read it. Uses a pre-allocated
/// buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, player: Entity) {
    despawn_buffer.clear();

    for (entity, destructible) in world.query_mut::<&Destructible>() {
        if destructible.destroyed && entity != player {
            despawn_buffer.push(entity);
        }
    }

    // Projectiles past the margin can never collide again; cull them
    // so the roster stays bounded.
    for (entity, (pos, _shot)) in world.query_mut::<(&Position, &PlayerProjectile)>() {
        if out_of_bounds(pos) {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (pos, _shot)) in world.query_mut::<(&Position, &EnemyProjectile)>() {
        if out_of_bounds(pos) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn out_of_bounds(pos: &Position) -> bool {
    pos.0.x < -PROJECTILE_CULL_MARGIN || pos.0.x > SCREEN_WIDTH + PROJECTILE_CULL_MARGIN
}
