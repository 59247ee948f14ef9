//! Data-driven game balance
//!
//! Difficulty and feel knobs, persisted separately from the best score in
//! LocalStorage so tweaks survive reloads. Speeds are in pixels per
//! reference frame; the tick scales them by `dt`.

use serde::{Deserialize, Serialize};

/// Player movement feel
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerTuning {
    /// Speed cap per axis
    pub max_speed: f32,
    /// Velocity gained per held direction per frame
    pub acceleration: f32,
    /// Fraction of velocity shed per frame
    pub friction: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_speed: 10.0,
            acceleration: 0.25,
            friction: 0.02,
        }
    }
}

/// Difficulty and balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    pub player: PlayerTuning,

    // === Meteors ===
    /// Base fall speed
    pub meteor_speed: f32,
    /// Uniform random speed added on top of the base
    pub meteor_speed_jitter: f32,
    /// Smallest meteor
    pub meteor_size_min: f32,
    /// Uniform random size span above the minimum
    pub meteor_size_span: f32,
    /// Sizes at or above this render as the hazardous variant
    pub hazard_size: f32,

    // === Spawn cadence ===
    /// Frames between meteor spawns at score zero
    pub base_spawn_rate: f32,
    /// Cadence floor; keeps the frame modulo nonzero
    pub min_spawn_rate: f32,
    /// Score points per one-frame cadence reduction
    pub score_divisor: u32,

    // === Scoring ===
    /// Points per meteor that falls off-screen
    pub dodge_points: u32,
    /// Points per collected pickup
    pub pickup_bonus: u32,

    // === Pickups ===
    /// Frames between pickup spawns, independent of score
    pub pickup_period: u64,
    pub pickup_size: f32,
    pub pickup_speed: f32,

    // === Backdrop ===
    pub star_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player: PlayerTuning::default(),

            meteor_speed: 3.0,
            meteor_speed_jitter: 2.0,
            meteor_size_min: 20.0,
            meteor_size_span: 100.0,
            hazard_size: 100.0,

            base_spawn_rate: 50.0,
            min_spawn_rate: 10.0,
            score_divisor: 200,

            dodge_points: 10,
            pickup_bonus: 1000,

            pickup_period: 600,
            pickup_size: 30.0,
            pickup_speed: 2.5,

            star_count: 100,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "astro_dodge_tuning";

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
