//! Procedural spawning of falling entities
//!
//! Meteor cadence tightens as the score climbs; pickups arrive on a fixed,
//! much longer period, independent of difficulty.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Faller;
use crate::tuning::Tuning;

/// Meteor cadence for a score: the base rate shortened by one frame per
/// `score_divisor` points, floored at the minimum cadence. The floor also
/// keeps the frame modulo nonzero.
pub fn rate_for_score(score: u32, tuning: &Tuning) -> f32 {
    (tuning.base_spawn_rate - (score / tuning.score_divisor) as f32).max(tuning.min_spawn_rate)
}

/// A meteor spawns whenever the frame counter lands on the cadence
pub fn meteor_due(frame_count: u64, spawn_rate: f32) -> bool {
    frame_count % spawn_rate.floor() as u64 == 0
}

/// Pickups use a fixed period
pub fn pickup_due(frame_count: u64, tuning: &Tuning) -> bool {
    frame_count % tuning.pickup_period == 0
}

/// Roll a new meteor: uniform size, horizontal placement that keeps the
/// full width on-screen, start fully above the visible area, jittered speed.
pub fn meteor(rng: &mut Pcg32, bounds: Vec2, tuning: &Tuning) -> Faller {
    let size = tuning.meteor_size_min + rng.random::<f32>() * tuning.meteor_size_span;
    let x = rng.random::<f32>() * (bounds.x - size);
    let speed = tuning.meteor_speed + rng.random::<f32>() * tuning.meteor_speed_jitter;
    Faller::meteor(size, x, speed, tuning.hazard_size)
}

/// Roll a new pickup: fixed size and speed, random horizontal placement
pub fn pickup(rng: &mut Pcg32, bounds: Vec2, tuning: &Tuning) -> Faller {
    let x = rng.random::<f32>() * (bounds.x - tuning.pickup_size);
    Faller::pickup(x, tuning.pickup_size, tuning.pickup_speed)
}
