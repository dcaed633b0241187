//! Palette lookup table.
//!
//! Gradient stops are rasterized once per render into a 256-entry RGB table
//! indexed directly by the density alpha byte, so colorization is a single
//! table lookup per pixel instead of a per-pixel gradient evaluation.

use overlay_common::GradientSpec;

pub const PALETTE_SIZE: usize = 256;

/// A gradient rasterized to 256 RGB entries.
#[derive(Debug, Clone)]
pub struct PaletteLut {
    entries: [[u8; 3]; PALETTE_SIZE],
}

impl PaletteLut {
    /// Rasterize a gradient by linear interpolation between its stops.
    ///
    /// Positions before the first stop take the first stop's color and
    /// positions after the last stop take the last stop's color. Stops are
    /// sorted by position first, so an unvalidated spec still produces a
    /// usable table.
    pub fn from_spec(spec: &GradientSpec) -> Self {
        let mut entries = [[0u8; 3]; PALETTE_SIZE];

        let mut stops = spec.stops.clone();
        stops.sort_by(|a, b| {
            a.position
                .partial_cmp(&b.position)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if stops.is_empty() {
            return Self { entries };
        }

        for (index, entry) in entries.iter_mut().enumerate() {
            let position = index as f32 / (PALETTE_SIZE - 1) as f32;

            let (r, g, b, _) = if position <= stops[0].position {
                stops[0].color.to_rgba()
            } else if position >= stops[stops.len() - 1].position {
                stops[stops.len() - 1].color.to_rgba()
            } else {
                // Find the bracketing stop pair
                let mut high = 1;
                while high < stops.len() - 1 && stops[high].position < position {
                    high += 1;
                }
                let low = &stops[high - 1];
                let high = &stops[high];

                let span = high.position - low.position;
                let t = if span.abs() < f32::EPSILON {
                    0.0
                } else {
                    (position - low.position) / span
                };
                low.color.lerp(&high.color, t)
            };

            *entry = [r, g, b];
        }

        Self { entries }
    }

    /// Color for a density alpha byte.
    pub fn color(&self, level: u8) -> [u8; 3] {
        self.entries[level as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay_common::{Color, GradientStop};

    fn two_stop(first: &str, last: &str) -> GradientSpec {
        GradientSpec {
            name: "Test".to_string(),
            description: String::new(),
            stops: vec![
                GradientStop::new(0.0, Color::Named(first.to_string())),
                GradientStop::new(1.0, Color::Named(last.to_string())),
            ],
        }
    }

    #[test]
    fn test_endpoints_match_stops() {
        let lut = PaletteLut::from_spec(&two_stop("black", "white"));
        assert_eq!(lut.color(0), [0, 0, 0]);
        assert_eq!(lut.color(255), [255, 255, 255]);
    }

    #[test]
    fn test_midpoint_interpolates_linearly() {
        let lut = PaletteLut::from_spec(&two_stop("black", "white"));
        let [r, g, b] = lut.color(128);
        assert!(r.abs_diff(128) <= 1);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_positions_before_first_stop_clamp_to_first_color() {
        let spec = GradientSpec {
            name: "Test".to_string(),
            description: String::new(),
            stops: vec![
                GradientStop::new(0.4, Color::Named("blue".to_string())),
                GradientStop::new(1.0, Color::Named("red".to_string())),
            ],
        };
        let lut = PaletteLut::from_spec(&spec);
        // Everything up to position 0.4 (index 102) is solid blue
        assert_eq!(lut.color(0), [0, 0, 255]);
        assert_eq!(lut.color(100), [0, 0, 255]);
        assert_eq!(lut.color(255), [255, 0, 0]);
    }

    #[test]
    fn test_classic_top_stop_is_red() {
        let lut = PaletteLut::from_spec(&GradientSpec::classic());
        assert_eq!(lut.color(255), [255, 0, 0]);
    }

    #[test]
    fn test_unsorted_stops_are_sorted_first() {
        let spec = GradientSpec {
            name: "Test".to_string(),
            description: String::new(),
            stops: vec![
                GradientStop::new(1.0, Color::Named("white".to_string())),
                GradientStop::new(0.0, Color::Named("black".to_string())),
            ],
        };
        let lut = PaletteLut::from_spec(&spec);
        assert_eq!(lut.color(0), [0, 0, 0]);
        assert_eq!(lut.color(255), [255, 255, 255]);
    }

    #[test]
    fn test_empty_spec_is_all_black() {
        let spec = GradientSpec {
            name: "Empty".to_string(),
            description: String::new(),
            stops: vec![],
        };
        let lut = PaletteLut::from_spec(&spec);
        assert_eq!(lut.color(0), [0, 0, 0]);
        assert_eq!(lut.color(255), [0, 0, 0]);
    }
}
