//=========================================================================
// Ledge Demo
//
// Minimal platformer: one player, a handful of ledges, arrow keys to run,
// space to jump, Q or Escape to quit. Ledges and the player are drawn as
// filled rectangles; the player changes color while airborne.
//
// Usage:
//   ledge-demo --fps 60 --debug --title "Ledge" --width 800 --height 600
//
//=========================================================================

use clap::Parser;

use ledge_engine::core::math::{clamp, round_to_i32};
use ledge_engine::core::sprite::{Animation, SpriteSheet};
use ledge_engine::platform::{Rgba, WinitBackend};
use ledge_engine::prelude::*;

//=== Command Line ========================================================

#[derive(Debug, Parser)]
#[command(name = "ledge-demo", about = "Ledge engine platformer demo")]
struct Cli {
    #[command(flatten)]
    game: GameConfig,
}

//=== Tuning ==============================================================

const RUN_SPEED: f32 = 6.0;
const JUMP_SPEED: f32 = 14.0;
const GRAVITY: f32 = 1.2;
const MAX_FALL_SPEED: f32 = 18.0;

//=== Palette =============================================================

const LEDGE_COLOR: Rgba = [96, 112, 128, 255];
const PLAYER_COLOR: Rgba = [232, 176, 64, 255];
const PLAYER_AIRBORNE_COLOR: Rgba = [232, 120, 64, 255];

//=== Player ==============================================================

struct Player {
    bounds: Rectangle,
    velocity: Vector2,
    on_ground: bool,
    ledges: Vec<Rectangle>,
    sheet: SpriteSheet,
    idle: Animation,
    run: Animation,
    frame: i32,
}

impl Player {
    fn new(ledges: Vec<Rectangle>) -> Self {
        Self {
            bounds: Rectangle::new(64.0, 0.0, 32.0, 48.0),
            velocity: Vector2::ZERO,
            on_ground: false,
            ledges,
            sheet: SpriteSheet::new(256, 96, 8, 2, 0),
            idle: Animation::new(0, 0),
            run: Animation::new(8, 13),
            frame: 0,
        }
    }

    /// Pushes the player out of every ledge it overlaps, along the
    /// shallower axis.
    fn resolve_collisions(&mut self) {
        self.on_ground = false;

        for ledge in &self.ledges {
            let depth = intersection_depth(&self.bounds, ledge);
            if depth.is_zero() {
                continue;
            }

            if depth.y.abs() < depth.x.abs() {
                self.bounds.y += depth.y;
                if depth.y < 0.0 {
                    self.on_ground = true;
                }
                self.velocity.y = 0.0;
            } else {
                self.bounds.x += depth.x;
                self.velocity.x = 0.0;
            }
        }
    }
}

impl Component<WinitBackend> for Player {
    fn initialize(&mut self, ctx: &mut GameContext<'_, WinitBackend>) {
        ctx.diagnostics()
            .debug_value("Ledges in level", self.ledges.len());
    }

    fn update(&mut self, ctx: &mut GameContext<'_, WinitBackend>, timing: &FrameTiming) {
        let input = ctx.input();
        let step = timing.elapsed_as_fraction();

        let left = input.is_key_down(KeyCode::LEFT);
        let right = input.is_key_down(KeyCode::RIGHT);
        self.velocity.x = match (left, right) {
            (true, false) => -RUN_SPEED,
            (false, true) => RUN_SPEED,
            _ => 0.0,
        };

        if self.on_ground && input.is_key_down(KeyCode::SPACE) {
            self.velocity.y = -JUMP_SPEED;
        }
        self.velocity.y = (self.velocity.y + GRAVITY * step).min(MAX_FALL_SPEED);

        let moved = self
            .bounds
            .location()
            .translate(self.velocity.x * step, self.velocity.y * step);
        let viewport = ctx.viewport();
        self.bounds.set_position(
            clamp(moved.x, viewport.left(), viewport.right() - self.bounds.width),
            moved.y,
        );

        self.resolve_collisions();

        let animation = if self.velocity.x == 0.0 { self.idle } else { self.run };
        self.frame = animation.next_frame(self.frame);

        // Fell off the level: respawn.
        if self.bounds.top() > viewport.bottom() {
            self.bounds.set_position(64.0, 0.0);
            self.velocity = Vector2::ZERO;
        }
    }

    fn draw(&mut self, ctx: &mut GameContext<'_, WinitBackend>, _timing: &FrameTiming) {
        let backend = ctx.backend_mut();
        for ledge in &self.ledges {
            backend.fill_rect(ledge, LEDGE_COLOR);
        }

        let color = if self.on_ground {
            PLAYER_COLOR
        } else {
            PLAYER_AIRBORNE_COLOR
        };
        backend.fill_rect(&self.bounds, color);

        if let Some((sx, sy)) = self.sheet.source_of(self.frame) {
            ctx.diagnostics().debug(&format!(
                "player sprite ({}, {}) at ({}, {})",
                sx,
                sy,
                round_to_i32(self.bounds.x),
                round_to_i32(self.bounds.y)
            ));
        }
    }
}

//=== DemoGame ============================================================

struct DemoGame {
    title: String,
}

impl Component<WinitBackend> for DemoGame {
    fn load(&mut self, ctx: &mut GameContext<'_, WinitBackend>) {
        let title = format!("{} ({} fps)", self.title, ctx.fps());
        ctx.backend_mut().set_title(&title);
    }

    fn update(&mut self, _ctx: &mut GameContext<'_, WinitBackend>, _timing: &FrameTiming) {}

    fn draw(&mut self, _ctx: &mut GameContext<'_, WinitBackend>, _timing: &FrameTiming) {}

    fn unload(&mut self, ctx: &mut GameContext<'_, WinitBackend>) {
        ctx.diagnostics().info("Goodbye");
    }
}

impl Game<WinitBackend> for DemoGame {
    fn handle_system_input(
        &mut self,
        ctx: &mut GameContext<'_, WinitBackend>,
        _timing: &FrameTiming,
    ) {
        let input = ctx.input();
        let quit_key = input.is_key_down(KeyCode::Q) || input.is_key_down(KeyCode::ESCAPE);
        if quit_key || ctx.backend().close_requested() {
            ctx.quit();
        }
    }
}

//=== Entry Point =========================================================

fn level(width: f32, height: f32) -> Vec<Rectangle> {
    vec![
        Rectangle::new(0.0, height - 32.0, width, 32.0),
        Rectangle::new(width * 0.25, height - 140.0, 160.0, 16.0),
        Rectangle::new(width * 0.55, height - 240.0, 160.0, 16.0),
    ]
}

fn main() {
    let cli = Cli::parse();
    let config = cli.game;
    init_logging(config.logging());

    let diagnostics = config.diagnostics();
    let mut player = Player::new(level(config.width as f32, config.height as f32));
    let mut backend = WinitBackend::from_config(&config);

    let mut game_loop = GameLoopBuilder::new(DemoGame {
        title: config.title.clone(),
    })
    .with_config(&config)
    .build();
    game_loop.register(&mut player);

    if let Err(err) = game_loop.run(&mut backend) {
        diagnostics.fatal(&err.to_string());
    }
}
