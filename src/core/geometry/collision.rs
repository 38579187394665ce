//=========================================================================
// Collision Geometry
//=========================================================================
//
// Separating-axis penetration depth between axis-aligned rectangles.
//
// For each axis:
//
// ```text
//   distance     = center(A) - center(B)
//   min_distance = half_extent(A) + half_extent(B)
//
//   |distance| >= min_distance   -> separated on this axis
//   distance > 0                 -> depth =  min_distance - distance
//   otherwise                    -> depth = -min_distance - distance
// ```
//
// The depth is the signed push that moves A out of B along that axis,
// toward the side A already leans to. Exact edge contact counts as
// separated.
//
// `intersection_depth` is conjunctive: both axes must overlap or the
// result is zero on both. `horizontal_depth` and `vertical_depth` test a
// single axis and ignore the other, so a caller can resolve each axis
// independently.
//
//=========================================================================

//=== Internal Modules ====================================================

use super::{Rectangle, Vector2};

//=== Public API ==========================================================

/// Minimal signed push-out of `a` from `b`, or `(0, 0)` if they do not
/// overlap on both axes.
pub fn intersection_depth(a: &Rectangle, b: &Rectangle) -> Vector2 {
    let distance = a.center() - b.center();
    let min_distance = a.half_size() + b.half_size();

    match (
        axis_depth(distance.x, min_distance.x),
        axis_depth(distance.y, min_distance.y),
    ) {
        (Some(x), Some(y)) => Vector2::new(x, y),
        _ => Vector2::ZERO,
    }
}

/// Horizontal push-out of `a` from `b`, ignoring the vertical axis.
pub fn horizontal_depth(a: &Rectangle, b: &Rectangle) -> f32 {
    let distance = a.center_x() - b.center_x();
    let min_distance = a.width / 2.0 + b.width / 2.0;
    axis_depth(distance, min_distance).unwrap_or(0.0)
}

/// Vertical push-out of `a` from `b`, ignoring the horizontal axis.
pub fn vertical_depth(a: &Rectangle, b: &Rectangle) -> f32 {
    let distance = a.center_y() - b.center_y();
    let min_distance = a.height / 2.0 + b.height / 2.0;
    axis_depth(distance, min_distance).unwrap_or(0.0)
}

//=== Internal Helpers ====================================================

/// Signed depth along one axis, `None` when separated on that axis.
#[inline]
fn axis_depth(distance: f32, min_distance: f32) -> Option<f32> {
    if distance.abs() >= min_distance {
        return None;
    }

    Some(if distance > 0.0 {
        min_distance - distance
    } else {
        -min_distance - distance
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
