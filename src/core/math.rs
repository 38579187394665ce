//=========================================================================
// Math Helpers
//
// Float-to-pixel conversions used when gameplay positions (f32) are handed
// to integer drawing primitives.
//
//=========================================================================

/// Restricts `value` to `[min, max]`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Restricts `value` to `[min, max]` and truncates toward zero.
#[inline]
pub fn clamp_to_i32(value: f32, min: i32, max: i32) -> i32 {
    if value < min as f32 {
        min
    } else if value > max as f32 {
        max
    } else {
        value as i32
    }
}

/// Nearest integer, halfway cases away from zero.
#[inline]
pub fn round_to_i32(value: f32) -> i32 {
    value.round() as i32
}

/// Largest integer not greater than `value`.
#[inline]
pub fn floor_to_i32(value: f32) -> i32 {
    value.floor() as i32
}

/// Smallest integer not less than `value`.
#[inline]
pub fn ceil_to_i32(value: f32) -> i32 {
    value.ceil() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_both_sides() {
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.5, 0.0, 10.0), 10.0);
        assert_eq!(clamp(4.25, 0.0, 10.0), 4.25);
    }

    #[test]
    fn clamp_to_i32_truncates_inside_range() {
        assert_eq!(clamp_to_i32(7.9, 0, 10), 7);
        assert_eq!(clamp_to_i32(-7.9, -10, 10), -7);
        assert_eq!(clamp_to_i32(99.0, 0, 10), 10);
        assert_eq!(clamp_to_i32(-99.0, 0, 10), 0);
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round_to_i32(2.5), 3);
        assert_eq!(round_to_i32(-2.5), -3);
        assert_eq!(floor_to_i32(-0.5), -1);
        assert_eq!(ceil_to_i32(0.1), 1);
    }
}
