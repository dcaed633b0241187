//! Heatmap overlay rasterization.
//!
//! Converts a batch of (x, y, intensity) samples into a colorized overlay
//! composited over a background image:
//! - Density accumulation (radial falloff stamps, source-over blending)
//! - Palette colorization through a 256-entry lookup table
//! - Alpha-over compositing onto the fitted background
//! - Optional reference grid

pub mod colorize;
pub mod composite;
pub mod density;
pub mod grid;
pub mod palette;

pub use colorize::{colorize, DENSITY_CUTOFF};
pub use composite::composite_over;
pub use density::{DensityMap, MIN_VISIBLE_ALPHA};
pub use grid::draw_reference_grid;
pub use palette::PaletteLut;

use image::RgbaImage;
use overlay_common::{CoordinateMode, GradientSpec, Sample, Surface};
use tracing::debug;

/// Style parameters for a single render call.
#[derive(Debug, Clone, Copy)]
pub struct RenderParams {
    /// Solid point radius in surface pixels
    pub radius: f32,
    /// Radial fade extent: inner radius = max(radius - blur, 0), outer
    /// radius = radius + blur
    pub blur: f32,
    /// Global overlay alpha multiplier in [0, 1]
    pub opacity: f32,
    /// Interpretation of sample coordinates
    pub mode: CoordinateMode,
    /// Draw a 10%-interval reference grid over the composite
    pub show_grid: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            radius: 20.0,
            blur: 15.0,
            opacity: 0.7,
            mode: CoordinateMode::Percent,
            show_grid: false,
        }
    }
}

/// Render the colorized heat overlay alone, without a background.
///
/// Returns an RGBA image of exactly the surface dimensions. Anomalous input
/// (no samples, all-zero values, out-of-surface coordinates) degrades to a
/// fully or partially transparent overlay; this function does not fail.
pub fn render_overlay(
    surface: Surface,
    samples: &[Sample],
    natural: (u32, u32),
    gradient: &GradientSpec,
    params: &RenderParams,
) -> RgbaImage {
    let density = DensityMap::accumulate(
        surface,
        samples,
        params.mode,
        natural,
        params.radius,
        params.blur,
    );
    let lut = PaletteLut::from_spec(gradient);
    colorize(&density, &lut, params.opacity)
}

/// Render the full composite: background resized to the surface, with the
/// colorized heat overlay drawn on top.
pub fn render_heatmap(
    background: &RgbaImage,
    surface: Surface,
    samples: &[Sample],
    gradient: &GradientSpec,
    params: &RenderParams,
) -> RgbaImage {
    debug!(
        samples = samples.len(),
        width = surface.width,
        height = surface.height,
        "Rendering heatmap overlay"
    );

    let overlay = render_overlay(surface, samples, background.dimensions(), gradient, params);
    let mut composite = composite_over(background, &overlay, surface);

    if params.show_grid {
        draw_reference_grid(&mut composite);
    }

    composite
}
