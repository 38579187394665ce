//=========================================================================
// Game Context
//=========================================================================
//
// Per-call view of the loop handed to every lifecycle method.
//
// Architecture:
//   GameLoop ──borrows──> GameContext { backend, input, viewport, control }
//                              │
//                              └──> Component::update(ctx, timing)
//
// A context lives for exactly one lifecycle call. It lends the backend
// mutably, the input snapshot and viewport read-only, and the loop
// controls (running flag, target fps, lifecycle phase) through `quit`,
// `set_fps` and `state`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::diagnostics::Diagnostics;
use crate::core::geometry::Rectangle;
use crate::core::input::InputState;
use crate::core::platform_bridge::Backend;

//=== LoopState ===========================================================

/// Lifecycle phase of a game loop. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    NotStarted,
    Initializing,
    Loading,
    Running,
    Unloading,
    Stopped,
}

//=== LoopControl =========================================================

/// Running flag, lifecycle phase and target frame rate of one loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LoopControl {
    running: bool,
    quit_requested: bool,
    state: LoopState,
    fps: u32,
}

impl LoopControl {
    pub(crate) fn new(fps: u32) -> Self {
        Self {
            running: false,
            quit_requested: false,
            state: LoopState::NotStarted,
            fps,
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    /// Sets the running flag unless a quit was already requested.
    pub(crate) fn start(&mut self) {
        self.running = !self.quit_requested;
        if self.quit_requested {
            debug!("Quit requested before start, no frame will run");
        }
    }

    /// Clears the running flag. Never set again, even by a later `start`.
    pub(crate) fn quit(&mut self) {
        if self.running {
            debug!("Quit requested");
        }
        self.running = false;
        self.quit_requested = true;
    }

    pub(crate) fn state(&self) -> LoopState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: LoopState) {
        self.state = state;
    }

    pub(crate) fn fps(&self) -> u32 {
        self.fps
    }

    /// Changes the target rate. Zero is rejected.
    pub(crate) fn set_fps(&mut self, fps: u32) {
        if fps == 0 {
            warn!("Ignoring FPS of 0, keeping {}", self.fps);
            return;
        }
        self.fps = fps;
    }

    /// Sleep between frames, in microseconds.
    pub(crate) fn frame_interval_micros(&self) -> u64 {
        1_000_000 / u64::from(self.fps)
    }
}

//=== GameContext =========================================================

/// Loop services available inside a lifecycle call.
pub struct GameContext<'a, B: Backend> {
    backend: &'a mut B,
    input: &'a InputState,
    viewport: &'a Rectangle,
    control: &'a mut LoopControl,
    diagnostics: &'a Diagnostics,
}

impl<'a, B: Backend> GameContext<'a, B> {
    pub(crate) fn new(
        backend: &'a mut B,
        input: &'a InputState,
        viewport: &'a Rectangle,
        control: &'a mut LoopControl,
        diagnostics: &'a Diagnostics,
    ) -> Self {
        Self {
            backend,
            input,
            viewport,
            control,
            diagnostics,
        }
    }

    //--- Backend ----------------------------------------------------------

    /// The backend, for drawing and window queries.
    pub fn backend(&self) -> &B {
        self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.backend
    }

    //--- Snapshots --------------------------------------------------------

    /// Keyboard and mouse state as of the last event drain.
    pub fn input(&self) -> &InputState {
        self.input
    }

    /// Current drawable region.
    pub fn viewport(&self) -> &Rectangle {
        self.viewport
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        self.diagnostics
    }

    //--- Loop Control -----------------------------------------------------

    pub fn fps(&self) -> u32 {
        self.control.fps()
    }

    /// Changes the target rate from the next frame's sleep on.
    ///
    /// Zero is rejected with a warning.
    pub fn set_fps(&mut self, fps: u32) {
        self.control.set_fps(fps);
    }

    /// Stops the loop once the current frame has finished.
    pub fn quit(&mut self) {
        self.control.quit();
    }

    pub fn is_running(&self) -> bool {
        self.control.is_running()
    }

    /// Lifecycle phase the current call belongs to.
    pub fn state(&self) -> LoopState {
        self.control.state()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessBackend;

    //=====================================================================
    // LoopControl
    //=====================================================================

    #[test]
    fn control_starts_stopped() {
        let control = LoopControl::new(30);
        assert!(!control.is_running());
        assert_eq!(control.fps(), 30);
    }

    #[test]
    fn quit_is_irreversible_within_a_run() {
        let mut control = LoopControl::new(30);
        control.start();
        control.quit();
        control.quit();
        assert!(!control.is_running());
    }

    #[test]
    fn quit_before_start_keeps_loop_stopped() {
        let mut control = LoopControl::new(30);
        control.quit();
        control.start();
        assert!(!control.is_running());
    }

    #[test]
    fn control_tracks_lifecycle_phase() {
        let mut control = LoopControl::new(30);
        assert_eq!(control.state(), LoopState::NotStarted);

        control.set_state(LoopState::Loading);
        assert_eq!(control.state(), LoopState::Loading);
    }

    #[test]
    fn zero_fps_is_rejected() {
        let mut control = LoopControl::new(30);
        control.set_fps(0);
        assert_eq!(control.fps(), 30);
    }

    #[test]
    fn frame_interval_follows_fps() {
        let mut control = LoopControl::new(30);
        assert_eq!(control.frame_interval_micros(), 33_333);

        control.set_fps(50);
        assert_eq!(control.frame_interval_micros(), 20_000);
    }

    //=====================================================================
    // GameContext
    //=====================================================================

    #[test]
    fn context_forwards_loop_control() {
        let mut backend = HeadlessBackend::new();
        let input = InputState::new();
        let viewport = Rectangle::new(0.0, 0.0, 320.0, 240.0);
        let mut control = LoopControl::new(30);
        let diagnostics = Diagnostics::default();
        control.start();
        control.set_state(LoopState::Running);

        {
            let mut ctx =
                GameContext::new(&mut backend, &input, &viewport, &mut control, &diagnostics);
            assert!(ctx.is_running());
            assert_eq!(ctx.state(), LoopState::Running);
            assert_eq!(ctx.viewport().width, 320.0);

            ctx.set_fps(60);
            ctx.quit();
            assert!(!ctx.is_running());
        }

        assert_eq!(control.fps(), 60);
        assert!(!control.is_running());
    }

    #[test]
    fn context_lends_backend_mutably() {
        let mut backend = HeadlessBackend::new();
        let input = InputState::new();
        let viewport = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        let mut control = LoopControl::new(30);
        let diagnostics = Diagnostics::default();

        {
            let mut ctx =
                GameContext::new(&mut backend, &input, &viewport, &mut control, &diagnostics);
            ctx.backend_mut().clear_surface();
        }

        assert_eq!(backend.clear_count(), 1);
    }
}
