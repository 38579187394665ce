//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges window systems (winit, headless, ...) with the game loop.
//
// Components:
// - `interface`: the `Backend` contract, its events and errors
// - `event_dispatcher`: bounded per-frame drain into `InputState`
//
// Backends live in `crate::platform`; the loop only sees the trait.
//
//=========================================================================

//=== Module Declarations =================================================

mod event_dispatcher;
mod interface;

//=== Public API ==========================================================

pub use interface::{Backend, BackendError, BackendEvent};

//=== Internal API ========================================================

pub(crate) use event_dispatcher::EventDispatcher;
