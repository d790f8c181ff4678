//! Player intent system: held-key movement, clamping, firing, and the
//! invincibility countdown.

use hecs::{Entity, World};

use skystrike_core::components::{PlayerState, Sprite};
use skystrike_core::constants::*;
use skystrike_core::events::GameEvent;
use skystrike_core::types::Position;

use crate::world_setup;

/// Apply the player's held-key intents for this tick.
pub fn run(world: &mut World, player: Entity, id_counter: &mut u32, events: &mut Vec<GameEvent>) {
    let mut fire_origin = None;

    if let Ok((pos, state, sprite)) =
        world.query_one_mut::<(&mut Position, &mut PlayerState, &mut Sprite)>(player)
    {
        tick_countdowns(state, sprite);
        apply_movement(pos, state);

        if state.fire_held && state.fire_cooldown_ticks == 0 {
            state.fire_cooldown_ticks = PLAYER_FIRE_COOLDOWN_TICKS;
            fire_origin = Some(pos.0);
        }
    }

    if let Some(origin) = fire_origin {
        world_setup::spawn_player_shot(world, id_counter, origin);
        events.push(GameEvent::PlayerFired);
    }
}

/// Decrement the per-tick countdowns and drive the blink effect.
///
/// Both countdowns only run while the level ticks, so pausing the loop
/// freezes them along with everything else.
fn tick_countdowns(state: &mut PlayerState, sprite: &mut Sprite) {
    if state.fire_cooldown_ticks > 0 {
        state.fire_cooldown_ticks -= 1;
    }

    if state.invincible_ticks > 0 {
        state.invincible_ticks -= 1;
        let elapsed = INVINCIBILITY_TICKS - state.invincible_ticks;
        // Invisible for the first blink interval, then alternating.
        sprite.visible = (elapsed / BLINK_INTERVAL_TICKS) % 2 == 1;
        if state.invincible_ticks == 0 {
            sprite.visible = true;
        }
    }
}

/// Move per axis by speed times the intent multiplier, rejecting any axis
/// whose result would leave the movement rectangle.
fn apply_movement(pos: &mut Position, state: &PlayerState) {
    if state.horizontal_mult != 0 {
        let new_x = pos.0.x + PLAYER_SPEED * state.horizontal_mult as f64;
        if (PLAYER_X_LEFT_BOUND..=PLAYER_X_RIGHT_BOUND).contains(&new_x) {
            pos.0.x = new_x;
        }
    }
    if state.vertical_mult != 0 {
        let new_y = pos.0.y + PLAYER_SPEED * state.vertical_mult as f64;
        if (PLAYER_Y_UPPER_BOUND..=PLAYER_Y_LOWER_BOUND).contains(&new_y) {
            pos.0.y = new_y;
        }
    }
}
