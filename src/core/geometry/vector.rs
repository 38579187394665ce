//=========================================================================
// Vector2
//=========================================================================

//=== Standard Library Imports ============================================

use std::ops::{Add, Neg, Sub};

//=== Vector2 =============================================================

/// Two-component value, used for positions, centers and penetration depths.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    #[inline]
    pub fn add(a: Vector2, b: Vector2) -> Vector2 {
        Vector2::new(a.x + b.x, a.y + b.y)
    }

    /// Component-wise difference `a - b`.
    #[inline]
    pub fn sub(a: Vector2, b: Vector2) -> Vector2 {
        Vector2::new(a.x - b.x, a.y - b.y)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(a: Vector2, b: Vector2) -> f32 {
        Vector2::sub(a, b).length()
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns a copy shifted by `(dx, dy)`.
    #[inline]
    pub fn translate(self, dx: f32, dy: f32) -> Vector2 {
        Vector2::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

//--- Operators -----------------------------------------------------------

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::sub(self, rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
