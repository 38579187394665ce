//=========================================================================
// Rectangle
//=========================================================================
//
// Axis-aligned rectangle, origin top-left, y growing downward.
// Edges and center are derived on demand, never stored.
//
//=========================================================================

//=== Internal Modules ====================================================

use super::Vector2;

//=== Rectangle ===========================================================

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    //--- Construction -----------------------------------------------------

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    //--- Edges ------------------------------------------------------------

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    //--- Center -----------------------------------------------------------

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.center_x(), self.center_y())
    }

    /// Half extents `(width / 2, height / 2)`.
    #[inline]
    pub fn half_size(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top-left corner.
    #[inline]
    pub fn location(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    //--- Mutation ---------------------------------------------------------

    /// Moves the top-left corner, keeping the size.
    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Returns a copy moved by `(dx, dy)`.
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Rectangle {
        Rectangle::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    //--- Tests ------------------------------------------------------------

    /// Half-open containment: `[left, right) x [top, bottom)`.
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Strict overlap on both axes. Touching edges do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
