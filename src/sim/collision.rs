//! Inset-AABB collision detection
//!
//! Entities collide on a hitbox smaller than their sprite: a rectangle
//! offset within and shrunk from the visual bounding box.

use glam::Vec2;

/// A collision rectangle, relative to an entity position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    /// Offset of the hitbox within the sprite
    pub offset: Vec2,
    /// Hitbox extent
    pub size: Vec2,
}

impl Hitbox {
    /// Resolve against a world position
    pub fn at(&self, pos: Vec2) -> HitRect {
        let min = pos + self.offset;
        HitRect {
            min,
            max: min + self.size,
        }
    }
}

/// A resolved, world-space collision rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRect {
    pub min: Vec2,
    pub max: Vec2,
}

/// Separation test for two resolved rects. Strict inequalities: rectangles
/// sharing only an edge do not overlap.
#[inline]
pub fn overlaps(a: &HitRect, b: &HitRect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> HitRect {
        Hitbox {
            offset: Vec2::ZERO,
            size: Vec2::new(w, h),
        }
        .at(Vec2::new(x, y))
    }

    #[test]
    fn test_hitbox_resolution() {
        let hb = Hitbox {
            offset: Vec2::new(12.0, 6.0),
            size: Vec2::new(30.0, 60.0),
        };
        let r = hb.at(Vec2::new(100.0, 200.0));
        assert_eq!(r.min, Vec2::new(112.0, 206.0));
        assert_eq!(r.max, Vec2::new(142.0, 266.0));
    }

    #[test]
    fn test_overlapping_rects_collide() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));

        // Full containment counts too
        let inner = rect(2.0, 2.0, 3.0, 3.0);
        assert!(overlaps(&a, &inner));
    }

    #[test]
    fn test_separated_rects_miss() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(20.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));

        let below = rect(0.0, 30.0, 10.0, 10.0);
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = rect(0.0, 0.0, 10.0, 10.0);

        // Shared vertical edge
        let right = rect(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&right, &a));

        // Shared horizontal edge
        let below = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &below));

        // Shared corner only
        let corner = rect(10.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &corner));

        // One unit of penetration flips the result
        let nudged = rect(9.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&a, &nudged));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -200.0f32..200.0, ay in -200.0f32..200.0,
            aw in 0.1f32..150.0, ah in 0.1f32..150.0,
            bx in -200.0f32..200.0, by in -200.0f32..200.0,
            bw in 0.1f32..150.0, bh in 0.1f32..150.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }
}
