//=========================================================================
// Event Dispatcher
//=========================================================================
//
// Bounded drain of backend events into the input snapshot and viewport.
//
// Architecture:
//   Backend::poll_pending_event_count() ─> N
//   Backend::next_event() × N ─> apply() ─> InputState / viewport
//
// The pending count is read once per frame. Events that arrive while the
// drain is in progress wait for the next frame, so an event flood cannot
// stall the loop.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::{Backend, BackendEvent};
use crate::core::geometry::Rectangle;
use crate::core::input::InputState;

//=== EventDispatcher =====================================================

/// Applies backend events to the input snapshot and viewport.
#[derive(Debug, Default)]
pub(crate) struct EventDispatcher {
    pointer_inside: bool,
}

impl EventDispatcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns `true` between a pointer-enter and the next pointer-leave.
    #[cfg(test)]
    pub(crate) fn is_pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Drains the events queued right now and returns how many were applied.
    pub(crate) fn drain<B: Backend + ?Sized>(
        &mut self,
        backend: &mut B,
        input: &mut InputState,
        viewport: &mut Rectangle,
    ) -> usize {
        let pending = backend.poll_pending_event_count();
        let mut applied = 0;

        while applied < pending {
            match backend.next_event() {
                Some(event) => {
                    self.apply(event, input, viewport);
                    applied += 1;
                }
                None => {
                    warn!(
                        "Backend announced {} events but produced {}",
                        pending, applied
                    );
                    break;
                }
            }
        }

        if applied > 0 {
            trace!("Drained {} events", applied);
        }

        applied
    }

    /// Applies one event.
    pub(crate) fn apply(
        &mut self,
        event: BackendEvent,
        input: &mut InputState,
        viewport: &mut Rectangle,
    ) {
        match event {
            BackendEvent::KeyPress(key) => input.keyboard_mut().set(key),
            BackendEvent::KeyRelease(key) => input.keyboard_mut().clear(key),

            BackendEvent::PointerMotion { x, y } => {
                if self.pointer_inside {
                    input.mouse_mut().set_position(x, y);
                }
            }

            BackendEvent::PointerEnter => self.pointer_inside = true,
            BackendEvent::PointerLeave => self.pointer_inside = false,

            BackendEvent::Resize { width, height } => grow_viewport(viewport, width, height),

            BackendEvent::Other => {}
        }
    }
}

//=== Resize ==============================================================

/// Grows `viewport` to enclose a `width x height` surface.
///
/// Only acts when at least one axis exceeds the current extent. The offset
/// is half the size delta on each axis (truncated toward zero, taken before
/// growth); extents never shrink.
fn grow_viewport(viewport: &mut Rectangle, width: u32, height: u32) {
    let new_width = width as f32;
    let new_height = height as f32;

    if new_width <= viewport.width && new_height <= viewport.height {
        return;
    }

    let dx = ((new_width - viewport.width) / 2.0).trunc();
    let dy = ((new_height - viewport.height) / 2.0).trunc();

    viewport.set_position(dx, dy);
    viewport.width = viewport.width.max(new_width);
    viewport.height = viewport.height.max(new_height);
}

//=========================================================================
// Unit Tests
//=========================================================================
