//! Palette colorization of the density map.

use image::RgbaImage;
use rayon::prelude::*;

use crate::density::DensityMap;
use crate::palette::PaletteLut;

/// Density levels below this byte value render fully transparent, removing
/// the faint halo a linear falloff otherwise leaves around every point.
pub const DENSITY_CUTOFF: u8 = 10;

/// Map per-pixel density to palette colors.
///
/// Pixels with density 0 stay fully transparent and never receive a palette
/// color. All other pixels take the LUT color for their density byte, with
/// alpha = `opacity * 255` - except below [`DENSITY_CUTOFF`], where alpha is
/// forced to 0.
pub fn colorize(density: &DensityMap, lut: &PaletteLut, opacity: f32) -> RgbaImage {
    let levels = density.levels();
    let overlay_alpha = (opacity.clamp(0.0, 1.0) as f64 * 255.0).round() as u8;

    let mut pixels = vec![0u8; levels.len() * 4];
    pixels
        .par_chunks_exact_mut(4)
        .zip(levels.par_iter())
        .for_each(|(pixel, &level)| {
            if level == 0 {
                return;
            }
            let [r, g, b] = lut.color(level);
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
            pixel[3] = if level < DENSITY_CUTOFF { 0 } else { overlay_alpha };
        });

    // Buffer length matches width * height * 4 by construction
    RgbaImage::from_raw(density.width(), density.height(), pixels)
        .unwrap_or_else(|| RgbaImage::new(density.width(), density.height()))
}
