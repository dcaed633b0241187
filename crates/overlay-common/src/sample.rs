//! Heat samples and coordinate modes.

use serde::{Deserialize, Serialize};

use crate::surface::Surface;

/// One heat data point in source coordinate space.
///
/// Coordinates are interpreted per [`CoordinateMode`]; `value` is the
/// non-negative intensity, normalized against the batch maximum at render
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }
}

/// How sample coordinates map onto the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMode {
    /// Coordinates are percentages of the surface size, in [0, 100].
    #[default]
    Percent,
    /// Coordinates are pixels in the original (unscaled) image space and are
    /// rescaled by the surface/natural ratio on each axis.
    Pixels,
}

impl CoordinateMode {
    /// Project a coordinate pair to surface pixel space.
    ///
    /// `natural` is the background image's unscaled pixel dimensions; it is
    /// only consulted in pixel mode. Out-of-range inputs project to
    /// out-of-surface positions and are clipped later, never rejected here.
    pub fn project(&self, x: f64, y: f64, surface: Surface, natural: (u32, u32)) -> (f32, f32) {
        match self {
            CoordinateMode::Percent => (
                ((x / 100.0) * surface.width as f64) as f32,
                ((y / 100.0) * surface.height as f64) as f32,
            ),
            CoordinateMode::Pixels => {
                let (natural_width, natural_height) = natural;
                let scale_x = if natural_width > 0 {
                    surface.width as f64 / natural_width as f64
                } else {
                    0.0
                };
                let scale_y = if natural_height > 0 {
                    surface.height as f64 / natural_height as f64
                } else {
                    0.0
                };
                ((x * scale_x) as f32, (y * scale_y) as f32)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_mode_scales_against_surface() {
        let surface = Surface::new(200, 100);
        let (x, y) = CoordinateMode::Percent.project(50.0, 50.0, surface, (999, 999));
        assert_eq!((x, y), (100.0, 50.0));
    }

    #[test]
    fn test_pixel_mode_scales_by_natural_ratio() {
        // Surface is half the natural image size on both axes
        let surface = Surface::new(400, 300);
        let (x, y) = CoordinateMode::Pixels.project(400.0, 300.0, surface, (800, 600));
        assert_eq!((x, y), (200.0, 150.0));
    }

    #[test]
    fn test_modes_disagree_when_natural_differs_from_surface() {
        let surface = Surface::new(200, 100);
        let percent = CoordinateMode::Percent.project(50.0, 50.0, surface, (400, 400));
        let pixels = CoordinateMode::Pixels.project(50.0, 50.0, surface, (400, 400));
        assert_ne!(percent, pixels);
        // 50 source pixels of a 400px-wide image on a 200px surface
        assert_eq!(pixels, (25.0, 12.5));
    }

    #[test]
    fn test_serde_names_are_lowercase() {
        assert_eq!(
            serde_json::from_str::<CoordinateMode>("\"percent\"").unwrap(),
            CoordinateMode::Percent
        );
        assert_eq!(
            serde_json::from_str::<CoordinateMode>("\"pixels\"").unwrap(),
            CoordinateMode::Pixels
        );
    }

    #[test]
    fn test_negative_coordinates_project_off_surface() {
        let surface = Surface::new(200, 100);
        let (x, y) = CoordinateMode::Percent.project(-10.0, -10.0, surface, (0, 0));
        assert!(x < 0.0);
        assert!(y < 0.0);
    }
}
