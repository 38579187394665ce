//=========================================================================
// Geometry
//=========================================================================
//
// 2-D value types and AABB penetration queries used by gameplay code.
//
// Flow:
//   Rectangle (player) + Rectangle (obstacle)
//     → intersection_depth() → Vector2 correction → gameplay moves player
//
//=========================================================================

//=== Module Declarations =================================================

mod collision;
mod rectangle;
mod vector;

//=== Public API ==========================================================

pub use collision::{horizontal_depth, intersection_depth, vertical_depth};
pub use rectangle::Rectangle;
pub use vector::Vector2;
