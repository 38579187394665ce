//=========================================================================
// Core
//
// Engine-side building blocks shared by the game loop and gameplay code.
//
// Responsibilities:
// - Input snapshot and key codes (`input`)
// - Frame timing and time sources (`time`)
// - AABB geometry and penetration queries (`geometry`)
// - Lifecycle contract and per-call context (`component`, `context`)
// - Backend contract and event dispatch (`platform_bridge`)
// - Diagnostics, configuration, sprite and numeric helpers
//
// Notes:
// Nothing in `core` depends on a concrete window system. Backends are
// plugged in through `platform_bridge::Backend`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod component;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod geometry;
pub mod input;
pub mod math;
pub mod platform_bridge;
pub mod sprite;
pub mod time;

//=== Public API ==========================================================

pub use component::{Component, Game};
pub use context::{GameContext, LoopState};
pub use time::{FrameTiming, GameClock, ManualClock, TimeSource};
