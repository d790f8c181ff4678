//! Damage application, dispatched on the actor-kind tag.
//!
//! Projectiles are destroyed by any hit. Planes decrement health and are
//! destroyed exactly once when it reaches zero. The player ignores damage
//! while invincible; the boss ignores damage while shielded.

use hecs::{Entity, World};

use skystrike_core::components::{BossState, Destructible, Health, PlayerState};
use skystrike_core::constants::INVINCIBILITY_TICKS;
use skystrike_core::enums::ActorKind;
use skystrike_core::events::GameEvent;

/// Apply one damage event to an actor.
pub fn apply(world: &mut World, entity: Entity, events: &mut Vec<GameEvent>) {
    let kind = match world.get::<&ActorKind>(entity) {
        Ok(kind) => *kind,
        Err(_) => return,
    };

    if kind.is_projectile() {
        if let Ok(mut destructible) = world.get::<&mut Destructible>(entity) {
            destructible.destroyed = true;
        }
        return;
    }

    match kind {
        ActorKind::Player => apply_to_player(world, entity, events),
        ActorKind::Boss => {
            let shielded = world
                .get::<&BossState>(entity)
                .map(|state| state.shielded)
                .unwrap_or(false);
            if !shielded {
                decrement_health(world, entity);
            }
        }
        ActorKind::Enemy | ActorKind::Elite => {
            if decrement_health(world, entity) {
                events.push(GameEvent::EnemyDown { kind });
            }
        }
        _ => {}
    }
}

/// Player damage: a no-op while invincible, otherwise lose one health and
/// either die or start the invincibility window.
fn apply_to_player(world: &mut World, entity: Entity, events: &mut Vec<GameEvent>) {
    let invincible = world
        .get::<&PlayerState>(entity)
        .map(|state| state.invincible_ticks > 0)
        .unwrap_or(true);
    if invincible {
        return;
    }

    let died = decrement_health(world, entity);
    let remaining = world
        .get::<&Health>(entity)
        .map(|h| h.current)
        .unwrap_or(0);
    events.push(GameEvent::PlayerHit {
        remaining_health: remaining,
    });

    if died {
        events.push(GameEvent::PlayerDown);
    } else if let Ok(mut state) = world.get::<&mut PlayerState>(entity) {
        state.invincible_ticks = INVINCIBILITY_TICKS;
    }
}

/// Decrement health and flip the destroyed flag on the zero transition.
/// Returns true if this call destroyed the plane.
fn decrement_health(world: &mut World, entity: Entity) -> bool {
    let mut died = false;
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        if health.current > 0 {
            health.current -= 1;
            died = health.current == 0;
        }
    }
    if died {
        if let Ok(mut destructible) = world.get::<&mut Destructible>(entity) {
            destructible.destroyed = true;
        }
    }
    died
}
