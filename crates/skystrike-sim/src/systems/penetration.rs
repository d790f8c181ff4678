//! Boundary penetration: an enemy plane that crosses the full screen width
//! damages the player and is removed.

use hecs::{Entity, World};

use skystrike_core::components::{Destructible, Penetrator};
use skystrike_core::constants::SCREEN_WIDTH;
use skystrike_core::events::GameEvent;
use skystrike_core::types::Position;

use super::damage;

/// Detect and resolve enemy penetrations for this tick.
///
/// A penetrated enemy is destroyed outright regardless of remaining
/// health; the player takes one damage event per penetration (still
/// subject to invincibility).
pub fn run(world: &mut World, player: Entity, events: &mut Vec<GameEvent>) {
    let mut penetrated: Vec<Entity> = Vec::new();

    for (entity, (pos, penetrator)) in world.query::<(&Position, &Penetrator)>().iter() {
        if (pos.0.x - penetrator.origin_x).abs() > SCREEN_WIDTH {
            penetrated.push(entity);
        }
    }

    for entity in penetrated {
        damage::apply(world, player, events);
        if let Ok(mut destructible) = world.get::<&mut Destructible>(entity) {
            destructible.destroyed = true;
        }
        events.push(GameEvent::EnemyPenetrated);
    }
}
