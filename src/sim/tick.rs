//! Per-tick simulation pipeline
//!
//! Fixed component order while playing: player physics, frame counter,
//! spawner, cadence recompute, meteors (advance + collide + dodge scoring),
//! then pickups (advance + collect). A terminal collision stops the tick
//! immediately; removals that already happened this tick stand.

use super::collision::overlaps;
use super::physics;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};

/// Held directional intents for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// True when any movement key is held (drives the thruster sprite)
    pub fn any_held(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Advance the game by one `dt`-scaled step. Outside `Playing` this only
/// clears the event list; the start and game-over screens are frozen.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    if state.phase != GamePhase::Playing {
        return;
    }

    physics::integrate(
        &mut state.player,
        input,
        state.bounds,
        &state.tuning.player,
        dt,
    );

    state.frame_count += 1;
    if spawn::meteor_due(state.frame_count, state.spawn_rate) {
        let m = spawn::meteor(&mut state.rng, state.bounds, &state.tuning);
        state.meteors.push(m);
    }
    if spawn::pickup_due(state.frame_count, &state.tuning) {
        let p = spawn::pickup(&mut state.rng, state.bounds, &state.tuning);
        state.pickups.push(p);
    }
    state.spawn_rate = spawn::rate_for_score(state.score, &state.tuning);

    let player_box = state.player.hitbox_rect();

    let mut i = 0;
    while i < state.meteors.len() {
        state.meteors[i].advance(dt);
        if overlaps(&player_box, &state.meteors[i].hitbox_rect()) {
            state.phase = GamePhase::GameOver;
            if state.score > state.best_score {
                state.best_score = state.score;
                state.events.push(GameEvent::NewBest { score: state.score });
            }
            state.events.push(GameEvent::GameOver { score: state.score });
            // Meteors dodged earlier this tick keep their points; nothing
            // else advances once the run ends.
            return;
        }
        if state.meteors[i].exited(state.bounds.y) {
            state.meteors.remove(i);
            state.score += state.tuning.dodge_points;
            state.events.push(GameEvent::MeteorDodged);
        } else {
            i += 1;
        }
    }

    let mut i = 0;
    while i < state.pickups.len() {
        state.pickups[i].advance(dt);
        if overlaps(&player_box, &state.pickups[i].hitbox_rect()) {
            let bonus = state.tuning.pickup_bonus;
            state.score += bonus;
            state.events.push(GameEvent::PickupCollected { bonus });
            state.pickups.remove(i);
            continue;
        }
        if state.pickups[i].exited(state.bounds.y) {
            state.pickups.remove(i);
        } else {
            i += 1;
        }
    }
}
