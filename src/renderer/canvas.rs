//! Canvas-2D backend
//!
//! Implements [`RenderBackend`] over a `CanvasRenderingContext2d`. Rotation
//! draws through a translate/rotate frame around the sprite center; glow
//! maps to shadow blur.

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::RenderBackend;
use crate::assets::{AssetStore, SpriteId};

/// Glow halo color
const GLOW_COLOR: &str = "#FFFF99";

pub struct CanvasBackend {
    ctx: CanvasRenderingContext2d,
    assets: AssetStore,
}

impl CanvasBackend {
    pub fn new(ctx: CanvasRenderingContext2d, assets: AssetStore) -> Self {
        Self { ctx, assets }
    }
}

impl RenderBackend for CanvasBackend {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: u32) {
        self.ctx.set_fill_style_str(&format!("#{color:06X}"));
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn draw_image(&mut self, sprite: SpriteId, pos: Vec2, size: Vec2, rotation: f32, glow: f32) {
        let img = self.assets.image(sprite);
        let (w, h) = (size.x as f64, size.y as f64);

        if rotation == 0.0 && glow == 0.0 {
            let _ = self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    pos.x as f64,
                    pos.y as f64,
                    w,
                    h,
                );
            return;
        }

        self.ctx.save();
        if glow > 0.0 {
            self.ctx.set_shadow_color(GLOW_COLOR);
            self.ctx.set_shadow_blur(glow as f64);
        }
        let _ = self
            .ctx
            .translate((pos.x + size.x / 2.0) as f64, (pos.y + size.y / 2.0) as f64);
        let _ = self.ctx.rotate(rotation as f64);
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(img, -w / 2.0, -h / 2.0, w, h);
        self.ctx.restore();
    }
}
