//! Boss behavior: pattern-driven vertical movement and the shield cycle.

use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::BossState;
use skystrike_core::constants::*;
use skystrike_core::events::GameEvent;
use skystrike_core::types::Position;

/// Advance the boss one tick: apply the next pattern move, then update
/// the shield state machine.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) {
    for (_entity, (pos, state)) in world.query_mut::<(&mut Position, &mut BossState)>() {
        apply_move(pos, state, rng);
        update_shield(state, rng, events);
    }
}

/// Draw the current pattern step and apply it vertically.
///
/// A move that would leave the vertical band is reverted, but the
/// draw bookkeeping still advances.
fn apply_move(pos: &mut Position, state: &mut BossState, rng: &mut ChaCha8Rng) {
    let step = state.pattern[state.cursor];
    pos.0.y += step;
    if pos.0.y < BOSS_Y_UPPER_BOUND || pos.0.y > BOSS_Y_LOWER_BOUND {
        pos.0.y -= step;
    }

    state.consecutive_uses += 1;
    if state.consecutive_uses == BOSS_MAX_TICKS_SAME_MOVE {
        state.pattern.shuffle(rng);
        state.consecutive_uses = 0;
        state.cursor += 1;
    }
    if state.cursor == state.pattern.len() {
        state.cursor = 0;
    }
}

/// Shield state machine: Unshielded -> Shielded on a per-tick roll,
/// Shielded -> Unshielded after exactly the shield window elapses.
fn update_shield(state: &mut BossState, rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) {
    if state.shielded {
        state.shield_ticks += 1;
    } else if rng.gen_bool(BOSS_SHIELD_PROBABILITY) {
        state.shielded = true;
        events.push(GameEvent::BossShieldUp);
    }

    if state.shield_ticks == BOSS_SHIELD_TICKS {
        state.shielded = false;
        state.shield_ticks = 0;
        events.push(GameEvent::BossShieldDown);
    }
}
