//! Reference grid overlay.
//!
//! Draws semi-transparent lines every 10% of the surface, with short tick
//! marks along the top and left edges, so viewers can read approximate
//! sample positions off the composite.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;

/// Grid line spacing as a percentage of the surface.
const GRID_STEP_PERCENT: u32 = 10;

/// Tick mark length in pixels.
const TICK_LENGTH: f32 = 6.0;

const GRID_COLOR: Rgba<u8> = Rgba([128, 128, 128, 128]);
const TICK_COLOR: Rgba<u8> = Rgba([64, 64, 64, 200]);

/// Draw the 10%-interval reference grid over a composite image.
pub fn draw_reference_grid(img: &mut RgbaImage) {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let w = width as f32;
    let h = height as f32;

    for step in (GRID_STEP_PERCENT..100).step_by(GRID_STEP_PERCENT as usize) {
        let x = (step as f32 / 100.0) * w;
        let y = (step as f32 / 100.0) * h;

        draw_line_segment_mut(img, (x, 0.0), (x, h - 1.0), GRID_COLOR);
        draw_line_segment_mut(img, (0.0, y), (w - 1.0, y), GRID_COLOR);

        draw_line_segment_mut(img, (x, 0.0), (x, TICK_LENGTH), TICK_COLOR);
        draw_line_segment_mut(img, (0.0, y), (TICK_LENGTH, y), TICK_COLOR);
    }
}
