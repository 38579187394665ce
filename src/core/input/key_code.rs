//=========================================================================
// Key Codes
//
// Hardware key identifiers as reported by the backend.
//
// The numbering follows the X11 keycode layout (evdev scancode + 8), which
// keeps every common key below 256 and therefore inside the addressable
// range of `KeyboardState`. Backends with a different native numbering
// translate into this table (see `platform::event_mapper`).
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== KeyCode =============================================================

/// Raw hardware key code.
///
/// Any `u32` is a valid `KeyCode` value, but only codes below
/// [`KeyboardState::CAPACITY`](super::KeyboardState::CAPACITY) can be
/// tracked. Codes outside that range are ignored by the keyboard state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u32);

impl KeyCode {
    //--- Special Keys -----------------------------------------------------

    pub const ESCAPE: KeyCode = KeyCode(9);
    pub const BACKSPACE: KeyCode = KeyCode(22);
    pub const TAB: KeyCode = KeyCode(23);
    pub const ENTER: KeyCode = KeyCode(36);
    pub const CONTROL_LEFT: KeyCode = KeyCode(37);
    pub const SHIFT_LEFT: KeyCode = KeyCode(50);
    pub const SHIFT_RIGHT: KeyCode = KeyCode(62);
    pub const ALT_LEFT: KeyCode = KeyCode(64);
    pub const SPACE: KeyCode = KeyCode(65);
    pub const DELETE: KeyCode = KeyCode(119);

    //--- Numeric Keys -----------------------------------------------------

    pub const DIGIT_1: KeyCode = KeyCode(10);
    pub const DIGIT_2: KeyCode = KeyCode(11);
    pub const DIGIT_3: KeyCode = KeyCode(12);
    pub const DIGIT_4: KeyCode = KeyCode(13);
    pub const DIGIT_5: KeyCode = KeyCode(14);
    pub const DIGIT_6: KeyCode = KeyCode(15);
    pub const DIGIT_7: KeyCode = KeyCode(16);
    pub const DIGIT_8: KeyCode = KeyCode(17);
    pub const DIGIT_9: KeyCode = KeyCode(18);
    pub const DIGIT_0: KeyCode = KeyCode(19);

    //--- Alphabetic Keys --------------------------------------------------

    pub const Q: KeyCode = KeyCode(24);
    pub const W: KeyCode = KeyCode(25);
    pub const E: KeyCode = KeyCode(26);
    pub const R: KeyCode = KeyCode(27);
    pub const T: KeyCode = KeyCode(28);
    pub const Y: KeyCode = KeyCode(29);
    pub const U: KeyCode = KeyCode(30);
    pub const I: KeyCode = KeyCode(31);
    pub const O: KeyCode = KeyCode(32);
    pub const P: KeyCode = KeyCode(33);
    pub const A: KeyCode = KeyCode(38);
    pub const S: KeyCode = KeyCode(39);
    pub const D: KeyCode = KeyCode(40);
    pub const F: KeyCode = KeyCode(41);
    pub const G: KeyCode = KeyCode(42);
    pub const H: KeyCode = KeyCode(43);
    pub const J: KeyCode = KeyCode(44);
    pub const K: KeyCode = KeyCode(45);
    pub const L: KeyCode = KeyCode(46);
    pub const Z: KeyCode = KeyCode(52);
    pub const X: KeyCode = KeyCode(53);
    pub const C: KeyCode = KeyCode(54);
    pub const V: KeyCode = KeyCode(55);
    pub const B: KeyCode = KeyCode(56);
    pub const N: KeyCode = KeyCode(57);
    pub const M: KeyCode = KeyCode(58);

    //--- Arrow Keys -------------------------------------------------------

    pub const UP: KeyCode = KeyCode(111);
    pub const LEFT: KeyCode = KeyCode(113);
    pub const RIGHT: KeyCode = KeyCode(114);
    pub const DOWN: KeyCode = KeyCode(116);

    //--- Fallback ---------------------------------------------------------

    /// Placeholder for keys the backend could not translate.
    ///
    /// Deliberately outside the trackable range, so pressing an
    /// unidentified key never changes the keyboard state.
    pub const UNIDENTIFIED: KeyCode = KeyCode(u32::MAX);

    /// Returns the raw numeric code.
    #[inline]
    pub const fn code(self) -> u32 {
        self.0
    }
}

impl From<u32> for KeyCode {
    fn from(code: u32) -> Self {
        KeyCode(code)
    }
}

impl fmt::Debug for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == KeyCode::UNIDENTIFIED {
            f.write_str("KeyCode(Unidentified)")
        } else {
            write!(f, "KeyCode({})", self.0)
        }
    }
}
