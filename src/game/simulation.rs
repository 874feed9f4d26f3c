//! Game loop simulation
//!
//! One call to [`GameLoop::advance`] is one fixed tick: gravity, floor
//! bounce, platform landing, steering, then camera scroll with platform
//! regeneration. All arithmetic, no failure paths.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::assets::SpriteSizes;
use crate::config::{Tuning, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::InputState;
use super::state::{GameState, Platform};

/// Owns the simulation state and everything needed to step it
pub struct GameLoop {
    state: GameState,
    tuning: Tuning,
    sizes: SpriteSizes,
    rng: StdRng,
}

impl GameLoop {
    /// Start a new game. `seed` drives horizontal platform placement.
    pub fn new(tuning: Tuning, sizes: SpriteSizes, seed: u64) -> Self {
        Self::with_state(GameState::new(&tuning), tuning, sizes, seed)
    }

    /// Resume from an arbitrary state
    pub fn with_state(state: GameState, tuning: Tuning, sizes: SpriteSizes, seed: u64) -> Self {
        Self {
            state,
            tuning,
            sizes,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn sizes(&self) -> &SpriteSizes {
        &self.sizes
    }

    /// Step the simulation by one tick
    pub fn advance(&mut self, input: InputState) {
        self.integrate();
        self.bounce_on_floor();
        self.land_on_platforms();
        self.steer(input);
        self.scroll_camera();
    }

    /// Semi-implicit Euler: position uses last tick's velocity
    fn integrate(&mut self) {
        let player = &mut self.state.player;
        player.y += player.velocity_y;
        player.velocity_y += self.tuning.gravity;
    }

    fn bounce_on_floor(&mut self) {
        let floor = self.tuning.floor_line();
        let player = &mut self.state.player;
        if player.y >= floor {
            player.y = floor;
            player.velocity_y = self.tuning.jump_speed;
        }
    }

    /// Swept test on the player's bottom edge so fast falls can't skip a
    /// platform. Every platform is checked; a later match overrides an
    /// earlier one, though after the first snap the player is rising and
    /// nothing else matches with the default tuning.
    fn land_on_platforms(&mut self) {
        let player_size = self.sizes.player.scaled(self.tuning.player_scale);
        let platform_width = self.sizes.platform.width;
        let jump_speed = self.tuning.jump_speed;
        let player = &mut self.state.player;

        for platform in &self.state.platforms {
            let bottom = player.y + player_size.height;
            let falling = player.velocity_y > 0.0;
            let crossed = bottom > platform.y && bottom - player.velocity_y < platform.y;
            let overlaps = player.x + player_size.width > platform.x
                && player.x < platform.x + platform_width;

            if falling && crossed && overlaps {
                player.y = platform.y - player_size.height;
                player.velocity_y = jump_speed;
            }
        }
    }

    /// Direct position steering with screen wrap. Left is applied before
    /// right, so holding both ends up facing right.
    fn steer(&mut self, input: InputState) {
        let player = &mut self.state.player;

        if input.left {
            player.x -= self.tuning.move_speed;
            player.facing_right = false;
            if player.x < self.tuning.wrap_left {
                player.x = SCREEN_WIDTH;
            }
        }

        if input.right {
            player.x += self.tuning.move_speed;
            player.facing_right = true;
            if player.x > self.tuning.wrap_right {
                player.x = 0.0;
            }
        }
    }

    /// Pin the player to the midline and move the world down instead,
    /// back-filling rows above and dropping whatever fell off the bottom.
    fn scroll_camera(&mut self) {
        let midline = self.tuning.midline();
        if self.state.player.y >= midline {
            return;
        }

        let offset = midline - self.state.player.y;
        self.state.player.y = midline;

        for platform in &mut self.state.platforms {
            platform.y += offset;
        }
        self.state.highest_platform_y += offset;

        while self.state.highest_platform_y > 0.0 {
            let x = self.random_platform_x();
            let y = self.state.highest_platform_y - self.tuning.platform_spacing;
            self.state.platforms.push(Platform::new(x, y));
            self.state.highest_platform_y -= self.tuning.platform_spacing;
        }

        self.state.platforms.retain(|p| p.y < SCREEN_HEIGHT);
    }

    /// Whole-pixel X in `[0, SCREEN_WIDTH - platform_width)`
    fn random_platform_x(&mut self) -> f64 {
        let span = (SCREEN_WIDTH - self.sizes.platform.width) as i64;
        if span <= 0 {
            return 0.0;
        }
        self.rng.gen_range(0..span) as f64
    }
}
