//! Astro Dodge - a falling-meteor dodge arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, collision, spawning, game state)
//! - `renderer`: Backend-agnostic draw pass + Canvas-2D backend
//! - `assets`: Sprite handle resolution and readiness gating
//! - `highscores`: Persisted best score
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod highscores;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use highscores::BestScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Milliseconds per reference frame. Wall-clock deltas divide by this,
    /// so all speeds stay calibrated in 60 Hz frame units.
    pub const FRAME_MS: f32 = 16.67;

    /// Velocity magnitudes below this snap to zero to stop drift
    pub const SPEED_EPSILON: f32 = 0.1;

    /// Astronaut sprite size
    pub const PLAYER_SIZE: Vec2 = Vec2::new(50.0, 87.0);
    /// Astronaut hitbox, inset within the sprite
    pub const PLAYER_HITBOX_OFFSET: Vec2 = Vec2::new(12.0, 6.0);
    pub const PLAYER_HITBOX_SIZE: Vec2 = Vec2::new(30.0, 60.0);

    /// Meteor hitbox as a fraction of sprite size, and its inset
    pub const METEOR_HITBOX_SCALE: f32 = 0.75;
    pub const METEOR_HITBOX_INSET: f32 = 0.1;

    /// Pickup hitbox fractions
    pub const PICKUP_HITBOX_SCALE: f32 = 0.8;
    pub const PICKUP_HITBOX_INSET: f32 = 0.1;
}
