//=========================================================================
// Ledge Engine Library Root
//
// Real-time core of a 2D side-scrolling platform-game engine.
//
// Responsibilities:
// - Expose the game loop (`GameLoop`, `GameLoopBuilder`)
// - Expose the building blocks gameplay code works with (`core`)
// - Provide concrete window backends (`platform`)
//
// Typical usage:
// ```no_run
// use ledge_engine::prelude::*;
// use ledge_engine::platform::WinitBackend;
//
// struct MyGame;
//
// impl Component<WinitBackend> for MyGame {
//     fn update(&mut self, _ctx: &mut GameContext<'_, WinitBackend>, _timing: &FrameTiming) {}
//     fn draw(&mut self, _ctx: &mut GameContext<'_, WinitBackend>, _timing: &FrameTiming) {}
// }
//
// impl Game<WinitBackend> for MyGame {}
//
// let mut backend = WinitBackend::new("My Game", 800, 600);
// GameLoop::new(MyGame).run(&mut backend)?;
// # Ok::<(), GameError>(())
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that does not depend on a concrete window
// system: input, timing, geometry, the component contract and the
// backend contract.
//
// `platform` holds the backends (winit window, headless).
//
pub mod core;
pub mod platform;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the game loop and its builder.
//
mod engine;

//--- Public Exports ------------------------------------------------------

pub use crate::core::context::LoopState;
pub use engine::{GameError, GameLoop, GameLoopBuilder};
