//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Backend contract, backend events and backend errors.
//
// The game loop only talks to a window system through `Backend`. Drawing
// primitives are not part of the contract: components call them on the
// concrete backend type they were written for.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::Duration;

//=== External Crates =====================================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;

//=== BackendEvent ========================================================

/// Raw events surfaced by a backend, one per pending queue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendEvent {
    KeyPress(KeyCode),
    KeyRelease(KeyCode),

    /// Pointer moved to window coordinates `(x, y)`.
    PointerMotion { x: i32, y: i32 },

    /// Pointer entered the window.
    PointerEnter,

    /// Pointer left the window.
    PointerLeave,

    /// Window surface changed size.
    Resize { width: u32, height: u32 },

    /// Anything the engine does not track.
    Other,
}

//=== BackendError ========================================================

/// Backend start-up and runtime failures.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The display server or device could not be reached.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Event loop creation or pumping failed.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The OS refused to create the window.
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    /// The pixel surface for the window could not be created.
    #[error("surface creation failed: {0}")]
    Surface(#[from] pixels::Error),
}

//=== Backend =============================================================

/// Window, event and presentation primitives used by the game loop.
///
/// # Call Order
///
/// ```text
/// connect() ─> open_window() ─> { poll/next_event, sleep, clear, present }* ─> close_window()
/// ```
///
/// `connect` and `open_window` are the fallible steps. Once the window is
/// open the loop assumes the remaining primitives cannot fail.
pub trait Backend {
    /// Establishes the connection to the display.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if no display can be reached. The loop
    /// treats this as fatal and runs no lifecycle call.
    fn connect(&mut self) -> Result<(), BackendError>;

    /// Shows the game window.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the OS refuses the window. The loop
    /// treats this as fatal and runs no frame.
    fn open_window(&mut self) -> Result<(), BackendError>;

    /// Tears the game window down.
    fn close_window(&mut self);

    /// Number of events currently queued.
    fn poll_pending_event_count(&mut self) -> usize;

    /// Takes the next queued event, or `None` if the queue is empty.
    fn next_event(&mut self) -> Option<BackendEvent>;

    /// Clears the drawing surface before a frame is drawn.
    fn clear_surface(&mut self);

    /// Presents the finished frame.
    fn present_surface(&mut self);

    /// Suspends the calling thread.
    fn sleep_microseconds(&mut self, micros: u64) {
        thread::sleep(Duration::from_micros(micros));
    }

    /// Returns `true` once the OS has asked the window to close.
    fn close_requested(&self) -> bool {
        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
