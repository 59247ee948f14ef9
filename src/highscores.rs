//! Best score persistence
//!
//! A single integer slot in LocalStorage, read at boot and rewritten when a
//! run ends above it. Reads degrade to zero; writes are fire-and-forget.

/// The highest score ever reached, independent of the current session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore(pub u32);

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "astro_dodge_best_score";

    /// Load from LocalStorage (WASM only); a missing or garbled value falls
    /// back to zero.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match storage.get_item(Self::STORAGE_KEY) {
                Ok(Some(raw)) => match raw.parse::<u32>() {
                    Ok(value) => {
                        log::info!("Loaded best score: {value}");
                        return Self(value);
                    }
                    Err(_) => log::warn!("Stored best score unreadable, starting at 0"),
                },
                Ok(None) => log::info!("No best score stored yet"),
                Err(_) => log::warn!("Best score read failed, starting at 0"),
            }
        }

        Self(0)
    }

    /// Persist to LocalStorage (WASM only); failures are not retried
    #[cfg(target_arch = "wasm32")]
    pub fn save(self) {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.0.to_string());
            log::info!("Best score saved: {}", self.0);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self(0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(self) {
        // No-op for native
    }
}
