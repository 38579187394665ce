//=========================================================================
// Mouse State
//
// Last known pointer position, in surface pixels.
//
// The position is only refreshed while the pointer is inside the viewport;
// outside it the previous value is retained. The dispatcher enforces that
// rule, this type just stores the coordinates.
//
//=========================================================================

/// Pointer position snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MouseState {
    x: i32,
    y: i32,
}

impl MouseState {
    /// Creates a state with the pointer at the origin.
    pub const fn new() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Horizontal pointer position.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical pointer position.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Pointer position as `(x, y)`.
    #[inline]
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Overwrites both coordinates at once.
    #[inline]
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}
