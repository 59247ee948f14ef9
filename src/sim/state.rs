//! Game state and core simulation types
//!
//! Everything a running session owns lives in [`GameState`]; the tick
//! pipeline is its only mutator while a run is active.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{HitRect, Hitbox};
use super::starfield;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Awaiting the begin signal; nothing simulates
    Start,
    /// Active gameplay
    Playing,
    /// Run ended; state frozen until restart
    GameOver,
}

/// The player's astronaut
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub hitbox: Hitbox,
}

impl Player {
    /// Spawn centered within the canvas bounds
    pub fn centered(bounds: Vec2) -> Self {
        Self {
            pos: (bounds - PLAYER_SIZE) * 0.5,
            size: PLAYER_SIZE,
            vel: Vec2::ZERO,
            hitbox: Hitbox {
                offset: PLAYER_HITBOX_OFFSET,
                size: PLAYER_HITBOX_SIZE,
            },
        }
    }

    pub fn hitbox_rect(&self) -> HitRect {
        self.hitbox.at(self.pos)
    }
}

/// What a falling entity is. Decides the collision outcome; the hazardous
/// flag only changes which sprite a meteor renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallerKind {
    /// Obstacle; contact ends the run
    Meteor { hazardous: bool },
    /// Bonus; contact awards score and removes it
    Pickup,
}

/// A falling entity (meteor or pickup)
#[derive(Debug, Clone)]
pub struct Faller {
    pub kind: FallerKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Fall speed, pixels per frame
    pub speed: f32,
    pub hitbox: Hitbox,
}

impl Faller {
    /// Build a meteor of the given size, starting fully above the screen.
    /// Sizes at or above `hazard_size` get the hazardous sprite.
    pub fn meteor(size: f32, x: f32, speed: f32, hazard_size: f32) -> Self {
        Self {
            kind: FallerKind::Meteor {
                hazardous: size >= hazard_size,
            },
            pos: Vec2::new(x, -size),
            size: Vec2::splat(size),
            speed,
            hitbox: Hitbox {
                offset: Vec2::splat(size * METEOR_HITBOX_INSET),
                size: Vec2::splat(size * METEOR_HITBOX_SCALE),
            },
        }
    }

    /// Build a bonus pickup at the given horizontal position
    pub fn pickup(x: f32, size: f32, speed: f32) -> Self {
        Self {
            kind: FallerKind::Pickup,
            pos: Vec2::new(x, -size),
            size: Vec2::splat(size),
            speed,
            hitbox: Hitbox {
                offset: Vec2::splat(size * PICKUP_HITBOX_INSET),
                size: Vec2::splat(size * PICKUP_HITBOX_SCALE),
            },
        }
    }

    /// Advance the fall by one step
    pub fn advance(&mut self, dt: f32) {
        self.pos.y += self.speed * dt;
    }

    pub fn hitbox_rect(&self) -> HitRect {
        self.hitbox.at(self.pos)
    }

    /// True once the entity has passed the bottom bound
    pub fn exited(&self, bound_y: f32) -> bool {
        self.pos.y > bound_y
    }
}

/// A decorative background star; never read by gameplay
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Packed RGB
    pub color: u32,
}

/// Things that happened during a tick, drained by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A meteor left the screen without contact
    MeteorDodged,
    /// A pickup was collected
    PickupCollected { bonus: u32 },
    /// The current score became the best ever; persist it now
    NewBest { score: u32 },
    /// Terminal collision; the run is over
    GameOver { score: u32 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Canvas extent in pixels
    pub bounds: Vec2,
    /// Difficulty and balance knobs
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Ticks elapsed in the current run
    pub frame_count: u64,
    /// Current run score
    pub score: u32,
    /// Highest score observed at any terminal collision; survives runs
    pub best_score: u32,
    /// Meteor cadence in frames; recomputed from the score each tick
    pub spawn_rate: f32,
    pub player: Player,
    pub meteors: Vec<Faller>,
    pub pickups: Vec<Faller>,
    pub stars: Vec<Star>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session awaiting the begin signal
    pub fn new(seed: u64, bounds: Vec2, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = starfield::populate(&mut rng, bounds, tuning.star_count);
        Self {
            seed,
            bounds,
            phase: GamePhase::Start,
            frame_count: 0,
            score: 0,
            best_score: 0,
            spawn_rate: tuning.base_spawn_rate,
            player: Player::centered(bounds),
            meteors: Vec::new(),
            pickups: Vec::new(),
            stars,
            events: Vec::new(),
            rng,
            tuning,
        }
    }

    /// Begin or restart a run: reset the player, entities, score, and frame
    /// counter, then enter `Playing`. The best score is left alone.
    pub fn start_run(&mut self) {
        self.player = Player::centered(self.bounds);
        self.meteors.clear();
        self.pickups.clear();
        self.stars = starfield::populate(&mut self.rng, self.bounds, self.tuning.star_count);
        self.score = 0;
        self.frame_count = 0;
        self.spawn_rate = self.tuning.base_spawn_rate;
        self.events.clear();
        self.phase = GamePhase::Playing;
    }

    /// Advance the decorative star layer. Runs every frame in every phase,
    /// so the backdrop keeps drifting behind the start and game-over screens.
    pub fn advance_backdrop(&mut self, dt: f32) {
        starfield::update(&mut self.stars, &mut self.rng, self.bounds, dt);
    }
}
