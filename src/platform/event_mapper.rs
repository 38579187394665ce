//=========================================================================
// Platform Event Mapper
//
// Converts Winit window events into engine `BackendEvent`s.
//
// Responsibilities:
// - Translate Winit physical keys into X11-style `KeyCode`s
// - Translate pointer and resize events from physical to logical pixels
// - Drop key auto-repeat (held keys are already tracked as down)
// - Provide a fallback (`UNIDENTIFIED`) for unmapped keys
//
//=========================================================================

use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::KeyCode as WinitKeyCode;
use winit::keyboard::PhysicalKey;

use crate::core::input::KeyCode;
use crate::core::platform_bridge::BackendEvent;

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to engine key codes. Only the keys a
// platformer needs are mapped; all others become `UNIDENTIFIED`.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Numeric keys -----------------------------------------------------
            Digit0 => KeyCode::DIGIT_0, Digit1 => KeyCode::DIGIT_1,
            Digit2 => KeyCode::DIGIT_2, Digit3 => KeyCode::DIGIT_3,
            Digit4 => KeyCode::DIGIT_4, Digit5 => KeyCode::DIGIT_5,
            Digit6 => KeyCode::DIGIT_6, Digit7 => KeyCode::DIGIT_7,
            Digit8 => KeyCode::DIGIT_8, Digit9 => KeyCode::DIGIT_9,

            //--- Alphabetic keys --------------------------------------------------
            KeyA => KeyCode::A, KeyB => KeyCode::B, KeyC => KeyCode::C,
            KeyD => KeyCode::D, KeyE => KeyCode::E, KeyF => KeyCode::F,
            KeyG => KeyCode::G, KeyH => KeyCode::H, KeyI => KeyCode::I,
            KeyJ => KeyCode::J, KeyK => KeyCode::K, KeyL => KeyCode::L,
            KeyM => KeyCode::M, KeyN => KeyCode::N, KeyO => KeyCode::O,
            KeyP => KeyCode::P, KeyQ => KeyCode::Q, KeyR => KeyCode::R,
            KeyS => KeyCode::S, KeyT => KeyCode::T, KeyU => KeyCode::U,
            KeyV => KeyCode::V, KeyW => KeyCode::W, KeyX => KeyCode::X,
            KeyY => KeyCode::Y, KeyZ => KeyCode::Z,

            //--- Arrow keys -------------------------------------------------------
            ArrowDown => KeyCode::DOWN, ArrowLeft => KeyCode::LEFT,
            ArrowRight => KeyCode::RIGHT, ArrowUp => KeyCode::UP,

            //--- Control keys -----------------------------------------------------
            Escape => KeyCode::ESCAPE, Space => KeyCode::SPACE,
            Enter => KeyCode::ENTER, Tab => KeyCode::TAB,
            Backspace => KeyCode::BACKSPACE, Delete => KeyCode::DELETE,
            ShiftLeft => KeyCode::SHIFT_LEFT, ShiftRight => KeyCode::SHIFT_RIGHT,
            ControlLeft => KeyCode::CONTROL_LEFT, AltLeft => KeyCode::ALT_LEFT,

            //--- Fallback ---------------------------------------------------------
            _ => KeyCode::UNIDENTIFIED,
        }
    }
}

impl From<PhysicalKey> for KeyCode {
    fn from(key: PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            PhysicalKey::Unidentified(_) => KeyCode::UNIDENTIFIED,
        }
    }
}

//=== Event Conversion ====================================================

/// Key press or release, or `None` for auto-repeat.
pub(crate) fn map_key(key: PhysicalKey, state: ElementState, repeat: bool) -> Option<BackendEvent> {
    if repeat {
        return None;
    }

    let code = KeyCode::from(key);
    Some(match state {
        ElementState::Pressed => BackendEvent::KeyPress(code),
        ElementState::Released => BackendEvent::KeyRelease(code),
    })
}

/// Pointer motion in logical pixels.
pub(crate) fn map_pointer(position: PhysicalPosition<f64>, scale_factor: f64) -> BackendEvent {
    let logical: LogicalPosition<f64> = position.to_logical(scale_factor);
    BackendEvent::PointerMotion {
        x: logical.x as i32,
        y: logical.y as i32,
    }
}

/// Surface size in logical pixels.
pub(crate) fn map_resize(size: PhysicalSize<u32>, scale_factor: f64) -> BackendEvent {
    let logical: LogicalSize<u32> = size.to_logical(scale_factor);
    BackendEvent::Resize {
        width: logical.width,
        height: logical.height,
    }
}

/// Converts a window event, or returns `None` if it carries nothing the
/// engine tracks.
///
/// Winit reports sizes and positions in physical pixels. They are divided
/// by `scale_factor` so they match the logical units the window and the
/// viewport are configured in.
///
/// Close requests are not events here; the backend latches them.
pub(crate) fn map_window_event(event: &WindowEvent, scale_factor: f64) -> Option<BackendEvent> {
    match event {
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key,
                    state,
                    repeat,
                    ..
                },
            ..
        } => map_key(*physical_key, *state, *repeat),

        WindowEvent::CursorMoved { position, .. } => Some(map_pointer(*position, scale_factor)),

        WindowEvent::CursorEntered { .. } => Some(BackendEvent::PointerEnter),
        WindowEvent::CursorLeft { .. } => Some(BackendEvent::PointerLeave),

        WindowEvent::Resized(size) => Some(map_resize(*size, scale_factor)),

        _ => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
