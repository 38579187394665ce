//=========================================================================
// Platform Subsystem
//
// Concrete `Backend` implementations.
//
// Architecture:
// ```text
//  ┌───────────────────────────┐     ┌──────────────────────┐
//  │  WinitBackend             │     │  HeadlessBackend     │
//  │   ├─ pump_app_events(0)   │     │   └─ EventInjector   │
//  │   ├─ event_mapper         │     │      (any thread)    │
//  │   ├─ raster (pixels)      │     │   crossbeam channel  │
//  │   └─ crossbeam channel    │     │                      │
//  └─────────────┬─────────────┘     └──────────┬───────────┘
//                │      Backend trait           │
//                └──────────────┬───────────────┘
//                               ↓
//                     GameLoop (EventDispatcher)
// ```
//
// Responsibilities:
// - Create and manage the OS window (winit)
// - Convert Winit types into `BackendEvent`s, in logical pixels
// - Fill rectangles into the window's frame buffer
// - Offer a display-free backend for tests and tooling
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod headless;
mod raster;
mod winit_backend;

//=== Public API ==========================================================

pub use headless::{EventInjector, HeadlessBackend};
pub use raster::Rgba;
pub use winit_backend::{WinitBackend, DEFAULT_CLEAR_COLOR};
