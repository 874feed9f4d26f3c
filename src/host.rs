//! Host integration
//!
//! Drives the game from macroquad's frame loop. The simulation runs at a
//! fixed tick rate regardless of display refresh, and each frame is drawn
//! into a fixed 480x640 render target that is then letterboxed into the
//! window.

use macroquad::prelude::*;
use macroquad::math::DAffine2;
use crate::assets::{Assets, Sprite};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::transform::DrawRect;
use crate::game::{render, Canvas, GameLoop};
use crate::input::{Action, InputSource, InputState};

/// Most simulation steps run in one frame; any backlog past this is dropped
pub const MAX_STEPS_PER_FRAME: u32 = 5;

/// Everything the driver needs from the platform
pub trait Host {
    type Canvas: Canvas;

    /// Called before anything else each frame
    fn begin_frame(&mut self) {}
    /// Input snapshot for this frame
    fn poll_input(&mut self) -> InputState;
    /// Seconds since the previous frame
    fn frame_time(&self) -> f64;
    fn canvas(&mut self) -> &mut Self::Canvas;
    /// Called after the frame has been composed
    fn present(&mut self) {}
    fn exit_requested(&self) -> bool;
}

/// Fixed-step accumulator
#[derive(Debug, Clone)]
pub struct TickClock {
    step: f64,
    accumulator: f64,
}

impl TickClock {
    pub fn new(step: f64) -> Self {
        Self { step, accumulator: 0.0 }
    }

    /// Feed elapsed time, get the number of steps now due
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        self.accumulator += elapsed.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step;
            steps += 1;
        }

        // Window was stalled (dragged, minimized); don't try to catch up
        if self.accumulator >= self.step {
            self.accumulator = 0.0;
        }
        steps
    }
}

/// Owns the game and its clock; one [`Driver::tick`] per displayed frame
pub struct Driver {
    game: GameLoop,
    clock: TickClock,
}

impl Driver {
    pub fn new(game: GameLoop) -> Self {
        let clock = TickClock::new(game.tuning().tick_duration());
        Self { game, clock }
    }

    #[cfg(test)]
    pub fn game(&self) -> &GameLoop {
        &self.game
    }

    /// Run the due simulation steps, then draw once. Returns the step count.
    pub fn tick<H: Host>(&mut self, host: &mut H) -> u32 {
        host.begin_frame();
        let input = host.poll_input();

        let steps = self.clock.advance(host.frame_time());
        for _ in 0..steps {
            self.game.advance(input);
        }

        let game = &self.game;
        render(game.state(), game.tuning(), game.sizes(), host.canvas());
        host.present();
        steps
    }
}

/// Run until the host asks to stop
pub async fn run<H: Host>(driver: &mut Driver, host: &mut H) {
    while !host.exit_requested() {
        driver.tick(host);
        next_frame().await;
    }
    println!("Exiting");
}

/// Where the logical canvas lands inside the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Viewport {
    /// Largest centred 480:640 rectangle that fits the window
    pub fn letterbox(window_w: f64, window_h: f64) -> Self {
        let scale = (window_w / SCREEN_WIDTH).min(window_h / SCREEN_HEIGHT);
        Self {
            x: (window_w - SCREEN_WIDTH * scale) * 0.5,
            y: (window_h - SCREEN_HEIGHT * scale) * 0.5,
            scale,
        }
    }

    pub fn width(&self) -> f64 {
        SCREEN_WIDTH * self.scale
    }

    pub fn height(&self) -> f64 {
        SCREEN_HEIGHT * self.scale
    }
}

/// Draws sprites with macroquad into whatever camera is active
pub struct MacroquadCanvas<'a> {
    assets: &'a Assets,
}

impl Canvas for MacroquadCanvas<'_> {
    fn draw_sprite(&mut self, sprite: Sprite, transform: DAffine2) {
        let rect = DrawRect::from_transform(&transform, self.assets.size(sprite));
        draw_texture_ex(
            self.assets.texture(sprite),
            rect.x as f32,
            rect.y as f32,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w as f32, rect.h as f32)),
                flip_x: rect.flip_x,
                flip_y: rect.flip_y,
                ..Default::default()
            },
        );
    }
}

/// The real window: keyboard/gamepad in, letterboxed render target out
pub struct MacroquadHost<'a> {
    input: InputSource,
    canvas: MacroquadCanvas<'a>,
    target: RenderTarget,
}

impl<'a> MacroquadHost<'a> {
    pub fn new(assets: &'a Assets) -> Self {
        let target = render_target(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
        target.texture.set_filter(FilterMode::Nearest);
        Self {
            input: InputSource::new(),
            canvas: MacroquadCanvas { assets },
            target,
        }
    }
}

impl<'a> Host for MacroquadHost<'a> {
    type Canvas = MacroquadCanvas<'a>;

    fn begin_frame(&mut self) {
        let mut camera = Camera2D::from_display_rect(Rect::new(
            0.0,
            0.0,
            SCREEN_WIDTH as f32,
            SCREEN_HEIGHT as f32,
        ));
        camera.render_target = Some(self.target.clone());
        set_camera(&camera);
        clear_background(BLACK);
    }

    fn poll_input(&mut self) -> InputState {
        self.input.poll();
        self.input.snapshot()
    }

    fn frame_time(&self) -> f64 {
        get_frame_time() as f64
    }

    fn canvas(&mut self) -> &mut Self::Canvas {
        &mut self.canvas
    }

    fn present(&mut self) {
        set_default_camera();
        clear_background(BLACK);

        let view = Viewport::letterbox(screen_width() as f64, screen_height() as f64);
        draw_texture_ex(
            &self.target.texture,
            view.x as f32,
            view.y as f32,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(view.width() as f32, view.height() as f32)),
                // Render targets come out upside down under from_display_rect
                flip_y: true,
                ..Default::default()
            },
        );
    }

    fn exit_requested(&self) -> bool {
        self.input.action_down(Action::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{SpriteSize, SpriteSizes};
    use crate::config::Tuning;
    use crate::game::render::tests::RecordingCanvas;

    struct FakeHost {
        input: InputState,
        frame_time: f64,
        canvas: RecordingCanvas,
        frames: u32,
    }

    impl FakeHost {
        fn new(frame_time: f64) -> Self {
            Self {
                input: InputState::IDLE,
                frame_time,
                canvas: RecordingCanvas::default(),
                frames: 0,
            }
        }
    }

    impl Host for FakeHost {
        type Canvas = RecordingCanvas;

        fn begin_frame(&mut self) {
            self.frames += 1;
            self.canvas.draws.clear();
        }

        fn poll_input(&mut self) -> InputState {
            self.input
        }

        fn frame_time(&self) -> f64 {
            self.frame_time
        }

        fn canvas(&mut self) -> &mut RecordingCanvas {
            &mut self.canvas
        }

        fn exit_requested(&self) -> bool {
            false
        }
    }

    const SIZES: SpriteSizes = SpriteSizes {
        player: SpriteSize::new(160.0, 160.0),
        platform: SpriteSize::new(80.0, 20.0),
    };

    fn driver(ticks_per_second: f64) -> Driver {
        let tuning = Tuning { ticks_per_second, ..Tuning::default() };
        Driver::new(GameLoop::new(tuning, SIZES, 5))
    }

    #[test]
    fn test_clock_accumulates_partial_frames() {
        let mut clock = TickClock::new(0.25);
        assert_eq!(clock.advance(0.125), 0);
        assert_eq!(clock.advance(0.125), 1);
        assert_eq!(clock.advance(0.5), 2);
    }

    #[test]
    fn test_clock_drops_backlog() {
        let mut clock = TickClock::new(0.25);
        assert_eq!(clock.advance(10.0), MAX_STEPS_PER_FRAME);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_clock_ignores_negative_time() {
        let mut clock = TickClock::new(0.25);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(0.25), 1);
    }

    #[test]
    fn test_tick_advances_then_renders() {
        let mut driver = driver(4.0);
        let mut host = FakeHost::new(0.25);

        let steps = driver.tick(&mut host);
        assert_eq!(steps, 1);
        // First step from the start position bounces off the floor
        assert_eq!(driver.game().state().player.velocity_y, -18.0);
        assert_eq!(host.canvas.draws.len(), 1 + 4 + 1);
        assert_eq!(host.frames, 1);
    }

    #[test]
    fn test_fast_display_renders_without_stepping() {
        let mut driver = driver(4.0);
        let mut host = FakeHost::new(0.0625);

        let before = driver.game().state().clone();
        assert_eq!(driver.tick(&mut host), 0);
        assert_eq!(driver.game().state(), &before);
        assert!(!host.canvas.draws.is_empty());
    }

    #[test]
    fn test_input_applies_to_every_step() {
        let mut driver = driver(4.0);
        let mut host = FakeHost::new(0.5);
        host.input = InputState::LEFT;

        assert_eq!(driver.tick(&mut host), 2);
        assert_eq!(driver.game().state().player.x, 240.0 - 10.0);
    }

    #[test]
    fn test_letterbox_wide_window() {
        let view = Viewport::letterbox(960.0, 640.0);
        assert_eq!(view, Viewport { x: 240.0, y: 0.0, scale: 1.0 });
    }

    #[test]
    fn test_letterbox_tall_window() {
        let view = Viewport::letterbox(960.0, 1280.0);
        assert_eq!(view, Viewport { x: 0.0, y: 0.0, scale: 2.0 });

        let view = Viewport::letterbox(480.0, 1280.0);
        assert_eq!(view, Viewport { x: 0.0, y: 320.0, scale: 1.0 });
        assert_eq!((view.width(), view.height()), (480.0, 640.0));
    }
}
