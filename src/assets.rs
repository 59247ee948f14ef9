//! Image assets
//!
//! Sprites are opaque drawable handles resolved from named files. Gameplay
//! start is gated on every handle becoming ready; readiness is a
//! precondition, not a runtime error.

/// Drawable sprite handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    /// Astronaut with thrusters firing (any movement key held)
    AstronautOn,
    /// Astronaut coasting
    AstronautOff,
    MeteorGreen,
    /// Hazardous meteor variant
    MeteorRed,
    /// Bonus pickup
    Bonus,
}

impl SpriteId {
    pub const ALL: [SpriteId; 5] = [
        SpriteId::AstronautOn,
        SpriteId::AstronautOff,
        SpriteId::MeteorGreen,
        SpriteId::MeteorRed,
        SpriteId::Bonus,
    ];

    /// Source file for this sprite
    pub fn file_name(self) -> &'static str {
        match self {
            SpriteId::AstronautOn => "astronaut-on.png",
            SpriteId::AstronautOff => "astronaut-off.png",
            SpriteId::MeteorGreen => "meteor-green.png",
            SpriteId::MeteorRed => "meteor-red.png",
            SpriteId::Bonus => "star-bonus.png",
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod store {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlImageElement;

    use super::SpriteId;

    /// Resolves sprites to `HtmlImageElement`s. `ready` completes once every
    /// image has decoded.
    pub struct AssetStore {
        images: Vec<HtmlImageElement>,
    }

    impl AssetStore {
        /// Create the image elements and start loading
        pub fn load() -> Result<Self, JsValue> {
            let mut images = Vec::with_capacity(SpriteId::ALL.len());
            for id in SpriteId::ALL {
                let img = HtmlImageElement::new()?;
                img.set_src(id.file_name());
                images.push(img);
            }
            Ok(Self { images })
        }

        /// Wait until every sprite has decoded
        pub async fn ready(&self) -> Result<(), JsValue> {
            for img in &self.images {
                JsFuture::from(img.decode()).await?;
            }
            log::info!("{} sprites ready", self.images.len());
            Ok(())
        }

        pub fn image(&self, id: SpriteId) -> &HtmlImageElement {
            &self.images[id as usize]
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use store::AssetStore;
