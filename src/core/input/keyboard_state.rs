//=========================================================================
// Keyboard State
//
// Compact pressed/released snapshot of the keyboard.
//
// Each key code owns exactly one bit in a fixed array of 32-bit words:
//
// ```text
//   word = code >> 5          (key group)
//   mask = 1 << (code & 0x1f) (slot within the group)
// ```
//
// Codes whose word index falls outside the array are not trackable. They
// are ignored when written and always read as "up"; backends routinely
// report codes that mean nothing to the game.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Modules ====================================================

use super::KeyCode;

//=== KeyboardState =======================================================

/// Bit-packed keyboard state.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    words: [u32; KeyboardState::WORD_COUNT],
}

impl KeyboardState {
    /// Number of 32-bit key groups.
    pub const WORD_COUNT: usize = 8;

    /// Number of addressable key codes (`WORD_COUNT * 32`).
    pub const CAPACITY: u32 = (Self::WORD_COUNT as u32) * 32;

    //--- Construction -----------------------------------------------------

    /// Creates a keyboard state with every key released.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` if `key` is currently pressed.
    #[inline]
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        match Self::slot(key) {
            Some((index, mask)) => self.words[index] & mask != 0,
            None => false,
        }
    }

    /// Returns `true` if `key` is currently released.
    #[inline]
    pub fn is_key_up(&self, key: KeyCode) -> bool {
        !self.is_key_down(key)
    }

    /// Number of addressable key codes.
    pub const fn capacity(&self) -> u32 {
        Self::CAPACITY
    }

    /// Returns `true` if `key` can be tracked by this state.
    #[inline]
    pub fn is_trackable(key: KeyCode) -> bool {
        Self::slot(key).is_some()
    }

    /// Returns `true` if no key is pressed.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    /// Iterates over every pressed key, in ascending code order.
    pub fn pressed(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.words.iter().enumerate().flat_map(|(index, word)| {
            (0..32u32)
                .filter(move |bit| word & (1 << bit) != 0)
                .map(move |bit| KeyCode(((index as u32) << 5) | bit))
        })
    }

    //--- Mutation ---------------------------------------------------------

    /// Marks `key` as pressed. Untrackable codes are ignored.
    #[inline]
    pub fn set(&mut self, key: KeyCode) {
        if let Some((index, mask)) = Self::slot(key) {
            self.words[index] |= mask;
        }
    }

    /// Marks `key` as released. Untrackable codes are ignored.
    #[inline]
    pub fn clear(&mut self, key: KeyCode) {
        if let Some((index, mask)) = Self::slot(key) {
            self.words[index] &= !mask;
        }
    }

    /// Releases every key.
    pub fn reset(&mut self) {
        self.words = [0; Self::WORD_COUNT];
    }

    //--- Internal Helpers -------------------------------------------------

    /// Maps a key code to its `(word index, bit mask)` pair.
    #[inline]
    fn slot(key: KeyCode) -> Option<(usize, u32)> {
        let index = (key.0 >> 5) as usize;
        if index < Self::WORD_COUNT {
            Some((index, 1u32 << (key.0 & 0x1f)))
        } else {
            None
        }
    }
}

//=== Debug Trait =========================================================
//
// Lists pressed keys instead of dumping raw words.
//
// ```text
// KeyboardState { pressed: [KeyCode(65), KeyCode(113)] }
// ```
//
impl fmt::Debug for KeyboardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pressed: Vec<_> = self.pressed().collect();
        f.debug_struct("KeyboardState")
            .field("pressed", &pressed)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn every_trackable_key() -> impl Iterator<Item = KeyCode> {
        (0..KeyboardState::CAPACITY).map(KeyCode)
    }

    //=====================================================================
    // Set / Clear
    //=====================================================================

    #[test]
    fn new_state_has_every_key_up() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.is_empty());
        assert!(every_trackable_key().all(|key| keyboard.is_key_up(key)));
    }

    #[test]
    fn set_marks_key_down_for_every_trackable_code() {
        for key in every_trackable_key() {
            let mut keyboard = KeyboardState::new();
            keyboard.set(key);
            assert!(keyboard.is_key_down(key), "{:?} should be down", key);
            assert!(!keyboard.is_key_up(key), "{:?} should not be up", key);
        }
    }

    #[test]
    fn clear_inverts_set_for_every_trackable_code() {
        for key in every_trackable_key() {
            let mut keyboard = KeyboardState::new();
            keyboard.set(key);
            keyboard.clear(key);
            assert!(!keyboard.is_key_down(key));
            assert!(keyboard.is_key_up(key));
        }
    }

    #[test]
    fn set_is_idempotent() {
        let mut keyboard = KeyboardState::new();
        keyboard.set(KeyCode::SPACE);
        keyboard.set(KeyCode::SPACE);
        keyboard.clear(KeyCode::SPACE);
        assert!(keyboard.is_key_up(KeyCode::SPACE));
    }

    #[test]
    fn keys_sharing_a_word_are_independent() {
        // LEFT (113) and RIGHT (114) both live in word 3.
        let mut keyboard = KeyboardState::new();
        keyboard.set(KeyCode::LEFT);
        keyboard.set(KeyCode::RIGHT);
        keyboard.clear(KeyCode::LEFT);

        assert!(keyboard.is_key_up(KeyCode::LEFT));
        assert!(keyboard.is_key_down(KeyCode::RIGHT));
    }

    //=====================================================================
    // Reset
    //=====================================================================

    #[test]
    fn reset_releases_every_previously_set_key() {
        let mut keyboard = KeyboardState::new();
        let keys = [KeyCode(0), KeyCode::Q, KeyCode::SPACE, KeyCode::RIGHT, KeyCode(255)];
        for key in keys {
            keyboard.set(key);
        }

        keyboard.reset();

        assert!(keys.iter().all(|key| !keyboard.is_key_down(*key)));
        assert!(keyboard.is_empty());
    }

    //=====================================================================
    // Mapping
    //=====================================================================

    #[test]
    fn mapping_is_injective_within_capacity() {
        let mut seen = std::collections::HashSet::new();
        for key in every_trackable_key() {
            let slot = KeyboardState::slot(key).expect("trackable key must map");
            assert!(seen.insert(slot), "{:?} collides with another code", key);
        }
        assert_eq!(seen.len() as u32, KeyboardState::CAPACITY);
    }

    #[test]
    fn capacity_equals_word_count_times_32() {
        assert_eq!(KeyboardState::CAPACITY, 256);
        assert!(KeyboardState::is_trackable(KeyCode(255)));
        assert!(!KeyboardState::is_trackable(KeyCode(256)));
    }

    #[test]
    fn slot_follows_shift_and_mask_layout() {
        assert_eq!(KeyboardState::slot(KeyCode(0)), Some((0, 1)));
        assert_eq!(KeyboardState::slot(KeyCode(31)), Some((0, 1 << 31)));
        assert_eq!(KeyboardState::slot(KeyCode(32)), Some((1, 1)));
        assert_eq!(KeyboardState::slot(KeyCode::SPACE), Some((2, 1 << 1)));
    }

    //=====================================================================
    // Out-of-range Codes
    //=====================================================================

    #[test]
    fn out_of_range_codes_are_ignored() {
        let mut keyboard = KeyboardState::new();
        keyboard.set(KeyCode(256));
        keyboard.set(KeyCode::UNIDENTIFIED);

        assert!(keyboard.is_empty());
        assert!(!keyboard.is_key_down(KeyCode(256)));
        assert!(keyboard.is_key_up(KeyCode::UNIDENTIFIED));
    }

    #[test]
    fn out_of_range_clear_does_not_touch_aliased_bits() {
        // 256 would alias code 0 if the word index were wrapped.
        let mut keyboard = KeyboardState::new();
        keyboard.set(KeyCode(0));
        keyboard.clear(KeyCode(256));
        assert!(keyboard.is_key_down(KeyCode(0)));
    }

    //=====================================================================
    // Iteration & Debug
    //=====================================================================

    #[test]
    fn pressed_lists_keys_in_code_order() {
        let mut keyboard = KeyboardState::new();
        keyboard.set(KeyCode::RIGHT);
        keyboard.set(KeyCode::Q);
        keyboard.set(KeyCode::SPACE);

        let pressed: Vec<_> = keyboard.pressed().collect();
        assert_eq!(pressed, vec![KeyCode::Q, KeyCode::SPACE, KeyCode::RIGHT]);
    }

    #[test]
    fn debug_lists_pressed_keys() {
        let mut keyboard = KeyboardState::new();
        keyboard.set(KeyCode::SPACE);
        let text = format!("{:?}", keyboard);
        assert!(text.contains("KeyCode(65)"));
    }
}
