//=========================================================================
// Input State
//
// Keyboard bitmask plus mouse-position snapshot for the current frame.
//
// Responsibilities:
// - Track which keys are held (`KeyboardState`)
// - Track the last in-bounds pointer position (`MouseState`)
// - Expose O(1), read-only queries to gameplay code
//
// Notes:
// The event dispatcher is the only writer. Components receive
// `&InputState` through their `GameContext`, so gameplay code can query
// but never mutate the snapshot.
//
//=========================================================================

//=== Submodules ==========================================================

mod key_code;
mod keyboard_state;
mod mouse_state;

//=== Public API ==========================================================

pub use key_code::KeyCode;
pub use keyboard_state::KeyboardState;
pub use mouse_state::MouseState;

//=== InputState ==========================================================

/// Combined keyboard and mouse snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    keyboard: KeyboardState,
    mouse: MouseState,
}

impl InputState {
    //--- Construction -----------------------------------------------------

    /// Creates an empty snapshot: no keys held, pointer at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Query Methods ----------------------------------------------------

    /// Returns `true` if `key` is currently pressed.
    #[inline]
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keyboard.is_key_down(key)
    }

    /// Returns `true` if `key` is currently released.
    #[inline]
    pub fn is_key_up(&self, key: KeyCode) -> bool {
        self.keyboard.is_key_up(key)
    }

    /// Returns the last in-bounds pointer position.
    #[inline]
    pub fn mouse_position(&self) -> (i32, i32) {
        self.mouse.position()
    }

    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    //--- Mutation ---------------------------------------------------------

    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }

    pub fn mouse_mut(&mut self) -> &mut MouseState {
        &mut self.mouse
    }

    /// Releases every key. The pointer position is kept.
    pub fn reset(&mut self) {
        self.keyboard.reset();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_delegate_to_keyboard() {
        let mut input = InputState::new();
        input.keyboard_mut().set(KeyCode::J);

        assert!(input.is_key_down(KeyCode::J));
        assert!(input.is_key_up(KeyCode::E));
    }

    #[test]
    fn reset_releases_keys_but_keeps_pointer() {
        let mut input = InputState::new();
        input.keyboard_mut().set(KeyCode::SPACE);
        input.mouse_mut().set_position(40, 50);

        input.reset();

        assert!(input.is_key_up(KeyCode::SPACE));
        assert_eq!(input.mouse_position(), (40, 50));
    }
}
