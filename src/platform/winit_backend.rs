//=========================================================================
// Winit Backend
//=========================================================================
//
// OS window backed by Winit, driven from the game loop's own thread, with
// a `pixels` frame buffer as the drawing surface.
//
// Architecture:
// ```text
//  GameLoop (main thread)
//   │
//   ├─ poll_pending_event_count()
//   │    └─ pump_app_events(timeout = 0) ──> WindowApp (ApplicationHandler)
//   │                                          ├─ map_window_event(scale)
//   │                                          └─ Sender<BackendEvent>
//   │                                                   │
//   ├─ next_event() <──── Receiver<BackendEvent> <───────┘
//   │
//   └─ clear_surface() ─> fill_rect()* ─> present_surface()
//        └─ Pixels frame (logical size) ──render()──> window surface
// ```
//
// Key Design Decisions:
// - **Pump, don't run**: `run_app` never returns control, which would
//   invert the game loop. Pumping with a zero timeout keeps the loop in
//   charge of pacing.
// - **Logical units**: the window, the frame buffer and every event use
//   logical pixels. `pixels` scales the buffer onto the physical surface.
// - **Close is latched, not quit**: a close request only sets
//   `close_requested()`. The game's system-input hook decides to quit.
// - **Main thread requirement**: Winit mandates the main thread on some
//   platforms, so the loop must run where the backend was created.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Arc;
use std::time::Duration;

//=== External Crates =====================================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::*;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Dependencies ===============================================

use super::event_mapper::map_window_event;
use super::raster::{self, Rgba};
use crate::core::config::GameConfig;
use crate::core::geometry::Rectangle;
use crate::core::platform_bridge::{Backend, BackendError, BackendEvent};

/// Color `clear_surface()` paints before a frame is drawn.
pub const DEFAULT_CLEAR_COLOR: Rgba = [24, 24, 32, 255];

//=== WindowApp ===========================================================

/// Winit-facing half of the backend.
struct WindowApp {
    title: String,
    size: LogicalSize<u32>,
    scale_factor: f64,
    pixels: Option<Pixels<'static>>,
    window: Option<Arc<Window>>,
    window_requested: bool,
    window_error: Option<BackendError>,
    close_requested: bool,
    sender: Sender<BackendEvent>,
}

impl WindowApp {
    /// Creates the window and its surface once they have been requested.
    fn ensure_window(&mut self, event_loop: &ActiveEventLoop) {
        if !self.window_requested || self.window.is_some() {
            return;
        }

        // One attempt per request; a failure waits for `open_window()`.
        self.window_requested = false;

        if let Err(err) = self.create_window(event_loop) {
            debug!(target: "platform", "Window setup failed: {}", err);
            self.window_error = Some(err);
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), BackendError> {
        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(self.size);

        let window = Arc::new(event_loop.create_window(attrs)?);
        let physical = window.inner_size();
        self.scale_factor = window.scale_factor();

        let surface = SurfaceTexture::new(physical.width, physical.height, Arc::clone(&window));
        let pixels = Pixels::new(self.size.width, self.size.height, surface)?;

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            physical.width,
            physical.height,
            self.scale_factor
        );

        self.pixels = Some(pixels);
        self.window = Some(window);
        Ok(())
    }

    /// Follows the physical surface size. Zero-sized (minimized) surfaces
    /// are skipped.
    fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Some(pixels) = self.pixels.as_mut() {
            if let Err(e) = pixels.resize_surface(width, height) {
                warn!(target: "platform", "Surface resize to {}x{} failed: {}", width, height, e);
            }
        }
    }

    fn forward(&self, event: BackendEvent) {
        if self.sender.send(event).is_err() {
            warn!(target: "platform::input", "Receiver dropped, discarding {:?}", event);
        }
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.ensure_window(event_loop);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.close_requested = true;
                return;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                debug!(target: "platform", "Scale factor changed to {}", scale_factor);
                self.scale_factor = *scale_factor;
            }
            WindowEvent::Resized(size) => self.resize_surface(size.width, size.height),
            _ => {}
        }

        match map_window_event(&event, self.scale_factor) {
            Some(mapped) => {
                trace!(target: "platform::input", "{:?}", mapped);
                self.forward(mapped);
            }
            None => trace!(target: "platform::input", "Unmapped window event ignored"),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.ensure_window(event_loop);
    }
}

//=== WinitBackend ========================================================

/// Backend with a real OS window.
///
/// Drawing is done on the concrete type: components written against
/// `WinitBackend` call [`fill_rect`](WinitBackend::fill_rect) through
/// `ctx.backend_mut()` between the loop's clear and present.
///
/// # Examples
///
/// ```no_run
/// use ledge_engine::core::config::GameConfig;
/// use ledge_engine::platform::WinitBackend;
///
/// let mut backend = WinitBackend::from_config(&GameConfig::default());
/// backend.set_title("Level 1");
/// backend.set_clear_color([0, 0, 0, 255]);
/// ```
pub struct WinitBackend {
    // Dropped before the event loop that created its window.
    app: WindowApp,
    event_loop: Option<EventLoop<()>>,
    receiver: Receiver<BackendEvent>,
    clear_color: Rgba,
}

impl WinitBackend {
    //--- Construction -----------------------------------------------------

    /// Creates a backend for a `width x height` window, in logical pixels.
    /// Nothing touches the OS until `connect()`.
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        let (sender, receiver) = unbounded();

        Self {
            app: WindowApp {
                title: title.into(),
                size: LogicalSize::new(width, height),
                scale_factor: 1.0,
                pixels: None,
                window: None,
                window_requested: false,
                window_error: None,
                close_requested: false,
                sender,
            },
            event_loop: None,
            receiver,
            clear_color: DEFAULT_CLEAR_COLOR,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.title.clone(), config.width, config.height)
    }

    //--- Window -----------------------------------------------------------

    /// The window, once open.
    pub fn window(&self) -> Option<&Window> {
        self.app.window.as_deref()
    }

    pub fn set_title(&mut self, title: &str) {
        self.app.title = title.to_string();
        if let Some(window) = &self.app.window {
            window.set_title(title);
        }
    }

    /// Physical pixels per logical pixel, as last reported by the OS.
    pub fn scale_factor(&self) -> f64 {
        self.app.scale_factor
    }

    //--- Drawing ----------------------------------------------------------

    pub fn set_clear_color(&mut self, color: Rgba) {
        self.clear_color = color;
    }

    /// Fills `rect` (logical pixels) with `color`. Parts outside the frame
    /// are clipped. Does nothing before the window is open.
    pub fn fill_rect(&mut self, rect: &Rectangle, color: Rgba) {
        let LogicalSize { width, height } = self.app.size;
        if let Some(pixels) = self.app.pixels.as_mut() {
            raster::fill_rect(pixels.frame_mut(), width, height, rect, color);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Dispatches whatever the OS has queued without blocking.
    fn pump(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };

        let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut self.app);
        if let PumpStatus::Exit(code) = status {
            debug!(target: "platform", "Event loop exited with code {}", code);
            self.app.close_requested = true;
        }
    }
}

//=== Backend =============================================================

impl Backend for WinitBackend {
    fn connect(&mut self) -> Result<(), BackendError> {
        if self.event_loop.is_some() {
            return Ok(());
        }

        debug!(target: "platform", "Creating Winit event loop");
        self.event_loop = Some(EventLoop::new()?);
        Ok(())
    }

    fn open_window(&mut self) -> Result<(), BackendError> {
        self.app.window_requested = self.app.window.is_none();
        self.pump();

        if let Some(err) = self.app.window_error.take() {
            return Err(err);
        }

        if self.app.window.is_none() {
            warn!(target: "platform", "Window not created yet, retrying on next pump");
        }
        Ok(())
    }

    fn close_window(&mut self) {
        self.app.window_requested = false;
        self.app.pixels = None;
        if self.app.window.take().is_some() {
            info!(target: "platform", "Window closed");
        }
        self.pump();
    }

    fn poll_pending_event_count(&mut self) -> usize {
        self.pump();

        // A window the OS refused after `open_window()` returned.
        if let Some(err) = self.app.window_error.take() {
            error!(target: "platform", "{}", err);
            self.app.close_requested = true;
        }

        self.receiver.len()
    }

    fn next_event(&mut self) -> Option<BackendEvent> {
        self.receiver.try_recv().ok()
    }

    fn clear_surface(&mut self) {
        if let Some(pixels) = self.app.pixels.as_mut() {
            raster::fill(pixels.frame_mut(), self.clear_color);
        }
    }

    fn present_surface(&mut self) {
        let (Some(window), Some(pixels)) = (&self.app.window, &self.app.pixels) else {
            return;
        };

        window.pre_present_notify();
        if let Err(e) = pixels.render() {
            warn!(target: "platform", "Frame presentation failed: {}", e);
        }
    }

    fn close_requested(&self) -> bool {
        self.app.close_requested
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
//
// Only display-free behavior is tested; connecting needs a display server.
