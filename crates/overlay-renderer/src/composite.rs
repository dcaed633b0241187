//! Background compositing.

use image::{imageops, RgbaImage};
use overlay_common::Surface;

/// Resize the background to the surface and draw the overlay on top.
///
/// The background is resampled to exactly the surface dimensions (the
/// surface was fitted to its aspect ratio, so this never distorts), then the
/// overlay is blended over it at (0, 0) with standard alpha-over semantics.
pub fn composite_over(background: &RgbaImage, overlay: &RgbaImage, surface: Surface) -> RgbaImage {
    let mut base = if background.dimensions() == (surface.width, surface.height) {
        background.clone()
    } else {
        imageops::resize(
            background,
            surface.width,
            surface.height,
            imageops::FilterType::Triangle,
        )
    };

    imageops::overlay(&mut base, overlay, 0, 0);
    base
}
