//! Sprite transforms
//!
//! Draw positions are expressed as 2D affine transforms applied to a sprite's
//! local pixel frame (origin top-left, native size). Composition follows the
//! usual matrix convention: `b * a` applies `a` first.
//!
//! macroquad only draws axis-aligned textured quads, so [`DrawRect`]
//! decomposes a transform without rotation into a destination rectangle
//! plus flip flags.

use macroquad::math::{DAffine2, DVec2};
use crate::assets::SpriteSize;
use super::state::Player;

/// Translate by `(x, y)`
pub fn translation(x: f64, y: f64) -> DAffine2 {
    DAffine2::from_translation(DVec2::new(x, y))
}

/// Scale by `(sx, sy)` about the origin
pub fn scaling(sx: f64, sy: f64) -> DAffine2 {
    DAffine2::from_scale(DVec2::new(sx, sy))
}

/// Mirror horizontally within the sprite's own width, so the flipped image
/// still covers `[0, width]`
pub fn mirror_x(width: f64) -> DAffine2 {
    translation(width, 0.0) * scaling(-1.0, 1.0)
}

/// Player placement: mirror (when facing left), then uniform scale, then
/// translate to the player's position.
pub fn player_transform(player: &Player, scale: f64, native: SpriteSize) -> DAffine2 {
    let mut transform = DAffine2::IDENTITY;
    if !player.facing_right {
        transform = mirror_x(native.width) * transform;
    }
    transform = scaling(scale, scale) * transform;
    translation(player.x, player.y) * transform
}

/// Axis-aligned destination of a transformed sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl DrawRect {
    /// Map the sprite's local rectangle through `transform`.
    /// Rotation and shear are not representable and are ignored.
    pub fn from_transform(transform: &DAffine2, size: SpriteSize) -> Self {
        let a = transform.transform_point2(DVec2::ZERO);
        let b = transform.transform_point2(DVec2::new(size.width, size.height));
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (b.x - a.x).abs(),
            h: (b.y - a.y).abs(),
            flip_x: transform.matrix2.x_axis.x < 0.0,
            flip_y: transform.matrix2.y_axis.y < 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATIVE: SpriteSize = SpriteSize::new(160.0, 200.0);

    #[test]
    fn test_facing_right_is_scale_then_translate() {
        let player = Player::new(100.0, 300.0);
        let t = player_transform(&player, 0.25, NATIVE);

        assert_eq!(t.transform_point2(DVec2::ZERO), DVec2::new(100.0, 300.0));
        assert_eq!(t.transform_point2(DVec2::new(160.0, 200.0)), DVec2::new(140.0, 350.0));

        let rect = DrawRect::from_transform(&t, NATIVE);
        assert_eq!(rect, DrawRect { x: 100.0, y: 300.0, w: 40.0, h: 50.0, flip_x: false, flip_y: false });
    }

    #[test]
    fn test_facing_left_mirrors_in_place() {
        let mut player = Player::new(100.0, 300.0);
        player.facing_right = false;
        let t = player_transform(&player, 0.25, NATIVE);

        // Left edge of the image lands on the right edge of the box
        assert_eq!(t.transform_point2(DVec2::ZERO), DVec2::new(140.0, 300.0));
        assert_eq!(t.transform_point2(DVec2::new(160.0, 0.0)), DVec2::new(100.0, 300.0));

        let rect = DrawRect::from_transform(&t, NATIVE);
        assert_eq!(rect, DrawRect { x: 100.0, y: 300.0, w: 40.0, h: 50.0, flip_x: true, flip_y: false });
    }

    #[test]
    fn test_translation_keeps_native_size() {
        let size = SpriteSize::new(80.0, 20.0);
        let rect = DrawRect::from_transform(&translation(12.0, 34.0), size);
        assert_eq!(rect, DrawRect { x: 12.0, y: 34.0, w: 80.0, h: 20.0, flip_x: false, flip_y: false });
    }
}
