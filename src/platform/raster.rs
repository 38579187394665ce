//=========================================================================
// Raster
//
// Software fills into an RGBA8 frame buffer, row-major, 4 bytes per pixel.
//
// Rectangles are snapped to whole pixels by rounding their edges, then
// clipped to the buffer. Anything fully outside draws nothing.
//
//=========================================================================

use crate::core::geometry::Rectangle;
use crate::core::math::clamp_to_i32;

/// RGBA color, 8 bits per channel.
pub type Rgba = [u8; 4];

const BYTES_PER_PIXEL: usize = 4;

/// Paints every pixel of `frame` with `color`.
pub(crate) fn fill(frame: &mut [u8], color: Rgba) {
    for pixel in frame.chunks_exact_mut(BYTES_PER_PIXEL) {
        pixel.copy_from_slice(&color);
    }
}

/// Paints the part of `rect` that lies inside a `width x height` frame.
pub(crate) fn fill_rect(frame: &mut [u8], width: u32, height: u32, rect: &Rectangle, color: Rgba) {
    let max_x = width as i32;
    let max_y = height as i32;

    let left = clamp_to_i32(rect.left().round(), 0, max_x) as usize;
    let right = clamp_to_i32(rect.right().round(), 0, max_x) as usize;
    let top = clamp_to_i32(rect.top().round(), 0, max_y) as usize;
    let bottom = clamp_to_i32(rect.bottom().round(), 0, max_y) as usize;

    if left >= right || top >= bottom {
        return;
    }

    let stride = width as usize * BYTES_PER_PIXEL;
    for row in frame.chunks_exact_mut(stride).take(bottom).skip(top) {
        let span = &mut row[left * BYTES_PER_PIXEL..right * BYTES_PER_PIXEL];
        fill(span, color);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
