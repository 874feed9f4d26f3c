//! Frame composition
//!
//! Turns the current state into an ordered list of sprite draws. The
//! [`Canvas`] decides how a draw actually reaches the screen, so the same
//! composition runs against macroquad in the game and a recorder in tests.

use macroquad::math::DAffine2;
use crate::assets::{Sprite, SpriteSizes};
use crate::config::Tuning;
use super::state::GameState;
use super::transform::{player_transform, translation};

/// Receives sprite draws in back-to-front order
pub trait Canvas {
    fn draw_sprite(&mut self, sprite: Sprite, transform: DAffine2);
}

/// Draw background, platforms (sequence order), then the player.
/// Read-only: rendering never touches the simulation.
pub fn render(state: &GameState, tuning: &Tuning, sizes: &SpriteSizes, canvas: &mut impl Canvas) {
    canvas.draw_sprite(Sprite::Background, DAffine2::IDENTITY);

    for platform in &state.platforms {
        canvas.draw_sprite(Sprite::Platform, translation(platform.x, platform.y));
    }

    let transform = player_transform(&state.player, tuning.player_scale, sizes.player);
    canvas.draw_sprite(Sprite::Player, transform);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use macroquad::math::DVec2;
    use crate::assets::SpriteSize;
    use crate::game::state::{Platform, Player};

    /// Canvas that just remembers what it was asked to draw
    #[derive(Default)]
    pub struct RecordingCanvas {
        pub draws: Vec<(Sprite, DAffine2)>,
    }

    impl Canvas for RecordingCanvas {
        fn draw_sprite(&mut self, sprite: Sprite, transform: DAffine2) {
            self.draws.push((sprite, transform));
        }
    }

    const SIZES: SpriteSizes = SpriteSizes {
        player: SpriteSize::new(160.0, 160.0),
        platform: SpriteSize::new(80.0, 20.0),
    };

    fn state(facing_right: bool) -> GameState {
        let mut player = Player::new(100.0, 200.0);
        player.facing_right = facing_right;
        GameState {
            player,
            platforms: vec![Platform::new(10.0, 20.0), Platform::new(30.0, 40.0)],
            highest_platform_y: 0.0,
        }
    }

    #[test]
    fn test_draw_order() {
        let mut canvas = RecordingCanvas::default();
        render(&state(true), &Tuning::default(), &SIZES, &mut canvas);

        let sprites: Vec<Sprite> = canvas.draws.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            sprites,
            vec![Sprite::Background, Sprite::Platform, Sprite::Platform, Sprite::Player]
        );
        assert_eq!(canvas.draws[0].1, DAffine2::IDENTITY);
    }

    #[test]
    fn test_platforms_translated_unscaled() {
        let mut canvas = RecordingCanvas::default();
        render(&state(true), &Tuning::default(), &SIZES, &mut canvas);

        let (_, second) = canvas.draws[2];
        assert_eq!(second.translation, DVec2::new(30.0, 40.0));
        assert_eq!(second.matrix2, DAffine2::IDENTITY.matrix2);
    }

    #[test]
    fn test_player_mirrored_when_facing_left() {
        let mut canvas = RecordingCanvas::default();
        render(&state(false), &Tuning::default(), &SIZES, &mut canvas);

        let (_, player) = canvas.draws[3];
        assert_eq!(player.matrix2.x_axis.x, -0.25);
        assert_eq!(player.matrix2.y_axis.y, 0.25);
        // Image left edge maps to the right side of the 40px box at x=100
        assert_eq!(player.transform_point2(DVec2::ZERO), DVec2::new(140.0, 200.0));
    }

    #[test]
    fn test_render_does_not_mutate() {
        let before = state(false);
        let after = before.clone();
        let mut canvas = RecordingCanvas::default();
        render(&after, &Tuning::default(), &SIZES, &mut canvas);
        assert_eq!(before, after);
    }
}
