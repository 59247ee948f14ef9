//! Decorative star layer
//!
//! A fixed-count backdrop of drifting stars. They fall, wrap back above the
//! top edge with a fresh horizontal position, and are never read by
//! gameplay. The update lives here so the render pass stays pure.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Star;

const WHITE: u32 = 0xFFFFFF;
const GREY: u32 = 0xCCCCCC;

/// Roll a star anywhere on screen
fn star(rng: &mut Pcg32, bounds: Vec2) -> Star {
    Star {
        pos: Vec2::new(
            rng.random::<f32>() * bounds.x,
            rng.random::<f32>() * bounds.y,
        ),
        size: Vec2::new(
            rng.random::<f32>() * 2.0 + 1.0,
            rng.random::<f32>() * 2.0 + 1.0,
        ),
        speed: rng.random::<f32>() * 2.0 + 1.0,
        color: if rng.random::<f32>() > 0.5 { WHITE } else { GREY },
    }
}

/// Populate a fresh field of `count` stars
pub fn populate(rng: &mut Pcg32, bounds: Vec2, count: usize) -> Vec<Star> {
    (0..count).map(|_| star(rng, bounds)).collect()
}

/// Advance every star; any that leaves the bottom respawns just above the
/// top at a new horizontal position.
pub fn update(stars: &mut [Star], rng: &mut Pcg32, bounds: Vec2, dt: f32) {
    for s in stars.iter_mut() {
        s.pos.y += s.speed * dt;
        if s.pos.y > bounds.y {
            s.pos.y = -s.size.y;
            s.pos.x = rng.random::<f32>() * bounds.x;
        }
    }
}
