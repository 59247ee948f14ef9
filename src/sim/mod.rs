//! Game simulation module
//!
//! All gameplay logic lives here, free of platform and rendering
//! dependencies:
//! - `dt`-scaled integration (no fixed-step accumulator)
//! - Seeded RNG owned by the session state
//! - No DOM, storage, or draw calls

pub mod collision;
pub mod physics;
pub mod spawn;
pub mod starfield;
pub mod state;
pub mod tick;

pub use collision::{HitRect, Hitbox, overlaps};
pub use state::{Faller, FallerKind, GameEvent, GamePhase, GameState, Player, Star};
pub use tick::{TickInput, tick};
