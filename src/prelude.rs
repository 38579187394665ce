//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use ledge_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Game loop
pub use crate::engine::{GameError, GameLoop, GameLoopBuilder};

// Lifecycle contract
pub use crate::core::component::{Component, Game};
pub use crate::core::context::{GameContext, LoopState};

// Backend contract
pub use crate::core::platform_bridge::{Backend, BackendError, BackendEvent};

// Input, timing, geometry
pub use crate::core::geometry::{intersection_depth, Rectangle, Vector2};
pub use crate::core::input::{InputState, KeyCode};
pub use crate::core::time::{FrameTiming, TimeSource};

// Configuration and diagnostics
pub use crate::core::config::GameConfig;
pub use crate::core::diagnostics::{init_logging, Diagnostics, LoggingConfig};
