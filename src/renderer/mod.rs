//! Rendering: entity state to draw calls
//!
//! The draw pass is pure over the game state; platform backends implement
//! [`RenderBackend`]. Every mutation, including star wrap-around, belongs to
//! the simulation, never to rendering.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use std::f32::consts::PI;

use glam::Vec2;

use crate::assets::SpriteId;
use crate::sim::{FallerKind, GameState, TickInput};

/// Pickup glow pulse: base halo radius plus a sinusoid of the frame counter
const GLOW_BASE: f32 = 8.0;
const GLOW_AMPLITUDE: f32 = 4.0;
const GLOW_RATE: f32 = 0.15;

/// Drawing capability the game renders through
pub trait RenderBackend {
    /// Wipe the frame
    fn clear(&mut self, size: Vec2);
    /// Solid rectangle (stars)
    fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: u32);
    /// Sprite draw. `rotation` is radians about the sprite center; `glow`
    /// is a halo radius in pixels, 0 for none.
    fn draw_image(&mut self, sprite: SpriteId, pos: Vec2, size: Vec2, rotation: f32, glow: f32);
}

/// Issue one frame's draw calls: backdrop, meteors, pickups, then the player
pub fn render_frame<B: RenderBackend>(state: &GameState, input: &TickInput, backend: &mut B) {
    backend.clear(state.bounds);

    for star in &state.stars {
        backend.draw_rect(star.pos, star.size, star.color);
    }

    for meteor in &state.meteors {
        let sprite = match meteor.kind {
            FallerKind::Meteor { hazardous: true } => SpriteId::MeteorRed,
            _ => SpriteId::MeteorGreen,
        };
        backend.draw_image(sprite, meteor.pos, meteor.size, 0.0, 0.0);
    }

    let glow = GLOW_BASE + GLOW_AMPLITUDE * (state.frame_count as f32 * GLOW_RATE).sin();
    for pickup in &state.pickups {
        backend.draw_image(SpriteId::Bonus, pickup.pos, pickup.size, 0.0, glow);
    }

    // Horizontal speed doubles as the tilt angle: the raw per-frame value
    // goes to the backend as radians.
    let rotation = state.player.vel.x * PI / 180.0;
    let sprite = if input.any_held() {
        SpriteId::AstronautOn
    } else {
        SpriteId::AstronautOff
    };
    backend.draw_image(sprite, state.player.pos, state.player.size, rotation, 0.0);
}
