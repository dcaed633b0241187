//! Render surface sizing.

use serde::{Deserialize, Serialize};

/// Target raster dimensions for a render.
///
/// A surface is sized by fitting the background image's natural dimensions
/// into a container rectangle while preserving the image aspect ratio: the
/// image is never cropped and never stretched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Fit an image of `natural_width` x `natural_height` into a container.
    ///
    /// A container wider than the image (relative aspect) fits by height;
    /// otherwise the image fits by width. The result never exceeds the
    /// container on either axis.
    pub fn fit(
        natural_width: u32,
        natural_height: u32,
        container_width: u32,
        container_height: u32,
    ) -> Self {
        let image_ratio = natural_width as f64 / natural_height as f64;
        let container_ratio = container_width as f64 / container_height as f64;

        if !image_ratio.is_finite() || !container_ratio.is_finite() || image_ratio <= 0.0 {
            return Self::new(container_width.max(1), container_height.max(1));
        }

        let (width, height) = if container_ratio > image_ratio {
            let height = container_height as f64;
            (height * image_ratio, height)
        } else {
            let width = container_width as f64;
            (width, width / image_ratio)
        };

        Self::new((width.round() as u32).max(1), (height.round() as u32).max(1))
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_container_fits_by_height() {
        // 800x600 image into a 1600x600 container: height-bound
        let s = Surface::fit(800, 600, 1600, 600);
        assert_eq!(s, Surface::new(800, 600));
    }

    #[test]
    fn test_fit_tall_container_fits_by_width() {
        // 800x600 image into a 400x600 container: width-bound
        let s = Surface::fit(800, 600, 400, 600);
        assert_eq!(s, Surface::new(400, 300));
    }

    #[test]
    fn test_fit_exact_halving() {
        let s = Surface::fit(800, 600, 400, 300);
        assert_eq!(s, Surface::new(400, 300));
    }

    #[test]
    fn test_fit_never_exceeds_container() {
        let s = Surface::fit(1920, 1080, 500, 333);
        assert!(s.width <= 500);
        assert!(s.height <= 333);
    }

    #[test]
    fn test_fit_preserves_aspect_ratio() {
        let s = Surface::fit(1000, 500, 640, 480);
        let ratio = s.width as f64 / s.height as f64;
        assert!((ratio - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_fit_degenerate_image_falls_back_to_container() {
        let s = Surface::fit(0, 0, 320, 240);
        assert_eq!(s, Surface::new(320, 240));
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(Surface::new(200, 100).pixel_count(), 20_000);
    }
}
