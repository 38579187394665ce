//=========================================================================
// Headless Backend
//=========================================================================
//
// Window-less backend fed through a channel.
//
// Architecture:
//   EventInjector (any thread) ──crossbeam──> HeadlessBackend ──> GameLoop
//
// Surface calls are counted and sleeps are recorded instead of performed,
// so a session runs as fast as the loop can iterate. Used by tests, replay
// tooling and servers that simulate without a display.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

//=== External Crates =====================================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;
use crate::core::platform_bridge::{Backend, BackendError, BackendEvent};

//=== EventInjector =======================================================

/// Cloneable handle for feeding events into a [`HeadlessBackend`].
#[derive(Debug, Clone)]
pub struct EventInjector {
    sender: Sender<BackendEvent>,
    close_requested: Arc<AtomicBool>,
}

impl EventInjector {
    /// Queues `event`. Dropped with a warning if the backend is gone.
    pub fn send(&self, event: BackendEvent) {
        if self.sender.send(event).is_err() {
            warn!(target: "platform", "Headless backend dropped, discarding {:?}", event);
        }
    }

    pub fn key_press(&self, key: KeyCode) {
        self.send(BackendEvent::KeyPress(key));
    }

    pub fn key_release(&self, key: KeyCode) {
        self.send(BackendEvent::KeyRelease(key));
    }

    pub fn pointer_motion(&self, x: i32, y: i32) {
        self.send(BackendEvent::PointerMotion { x, y });
    }

    pub fn pointer_enter(&self) {
        self.send(BackendEvent::PointerEnter);
    }

    pub fn pointer_leave(&self) {
        self.send(BackendEvent::PointerLeave);
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.send(BackendEvent::Resize { width, height });
    }

    /// Simulates the user closing the window.
    pub fn request_close(&self) {
        self.close_requested.store(true, Ordering::SeqCst);
    }
}

//=== HeadlessBackend =====================================================

/// Backend without a display.
#[derive(Debug)]
pub struct HeadlessBackend {
    receiver: Receiver<BackendEvent>,
    injector: EventInjector,
    failure: Option<String>,
    window_failure: Option<String>,
    connected: bool,
    window_open: bool,
    windows_opened: usize,
    clears: usize,
    presents: usize,
    sleeps: Vec<u64>,
}

impl HeadlessBackend {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        let (sender, receiver) = unbounded();

        Self {
            receiver,
            injector: EventInjector {
                sender,
                close_requested: Arc::new(AtomicBool::new(false)),
            },
            failure: None,
            window_failure: None,
            connected: false,
            window_open: false,
            windows_opened: 0,
            clears: 0,
            presents: 0,
            sleeps: Vec::new(),
        }
    }

    /// A backend whose `connect()` fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// A backend that connects but whose `open_window()` fails with
    /// `reason`.
    pub fn failing_window(reason: impl Into<String>) -> Self {
        Self {
            window_failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// Handle for queueing events, usable from other threads.
    pub fn injector(&self) -> EventInjector {
        self.injector.clone()
    }

    //--- Recorded State ---------------------------------------------------

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_window_open(&self) -> bool {
        self.window_open
    }

    /// Number of windows successfully opened.
    pub fn windows_opened(&self) -> usize {
        self.windows_opened
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn present_count(&self) -> usize {
        self.presents
    }

    /// Every requested sleep, in microseconds, in call order.
    pub fn sleeps(&self) -> &[u64] {
        &self.sleeps
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

//=== Backend =============================================================

impl Backend for HeadlessBackend {
    fn connect(&mut self) -> Result<(), BackendError> {
        if let Some(reason) = &self.failure {
            return Err(BackendError::Unavailable(reason.clone()));
        }

        self.connected = true;
        debug!(target: "platform", "Headless backend connected");
        Ok(())
    }

    fn open_window(&mut self) -> Result<(), BackendError> {
        if let Some(reason) = &self.window_failure {
            return Err(BackendError::Unavailable(reason.clone()));
        }

        self.window_open = true;
        self.windows_opened += 1;
        Ok(())
    }

    fn close_window(&mut self) {
        self.window_open = false;
    }

    fn poll_pending_event_count(&mut self) -> usize {
        self.receiver.len()
    }

    fn next_event(&mut self) -> Option<BackendEvent> {
        self.receiver.try_recv().ok()
    }

    fn clear_surface(&mut self) {
        self.clears += 1;
    }

    fn present_surface(&mut self) {
        self.presents += 1;
    }

    fn sleep_microseconds(&mut self, micros: u64) {
        self.sleeps.push(micros);
    }

    fn close_requested(&self) -> bool {
        self.injector.close_requested.load(Ordering::SeqCst)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
