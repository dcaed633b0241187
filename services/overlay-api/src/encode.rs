//! Output image encoding.
//!
//! PNG is the default response format and preserves the overlay alpha.
//! WebP also keeps transparency at a smaller size; JPEG does not support
//! transparency, so the composite is flattened onto a white background.

use std::io::Cursor;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use overlay_common::{OverlayError, OverlayResult};

/// Default JPEG quality (0-100). Can be overridden via environment variable.
const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Default WebP quality (0-100). Can be overridden via environment variable.
const DEFAULT_WEBP_QUALITY: f32 = 85.0;

/// Response encoding for a rendered composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Webp,
    Jpeg,
}

impl OutputFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Webp => "image/webp",
            OutputFormat::Jpeg => "image/jpeg",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Webp => "webp",
            OutputFormat::Jpeg => "jpeg",
        }
    }
}

/// Encode a rendered composite in the requested format.
pub fn encode_image(img: &RgbaImage, format: OutputFormat) -> OverlayResult<Vec<u8>> {
    match format {
        OutputFormat::Png => encode_png(img),
        OutputFormat::Webp => encode_webp(img),
        OutputFormat::Jpeg => encode_jpeg(img),
    }
}

fn encode_png(img: &RgbaImage) -> OverlayResult<Vec<u8>> {
    let mut data = Vec::new();
    img.write_to(&mut Cursor::new(&mut data), image::ImageOutputFormat::Png)
        .map_err(|e| OverlayError::RenderError(format!("Failed to encode PNG: {}", e)))?;
    Ok(data)
}

fn encode_webp(img: &RgbaImage) -> OverlayResult<Vec<u8>> {
    let quality = std::env::var("WEBP_QUALITY")
        .ok()
        .and_then(|v| v.parse::<f32>().ok())
        .unwrap_or(DEFAULT_WEBP_QUALITY)
        .clamp(0.0, 100.0);

    let (width, height) = img.dimensions();
    let encoder = webp::Encoder::from_rgba(img.as_raw(), width, height);
    Ok(encoder.encode(quality).to_vec())
}

fn encode_jpeg(img: &RgbaImage) -> OverlayResult<Vec<u8>> {
    let quality = std::env::var("JPEG_QUALITY")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(DEFAULT_JPEG_QUALITY)
        .min(100);

    let (width, height) = img.dimensions();

    // Flatten transparency onto white before dropping the alpha channel
    let mut rgb = image::RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels() {
        let Rgba([r, g, b, a]) = *pixel;
        let alpha = a as f32 / 255.0;
        rgb.put_pixel(
            x,
            y,
            image::Rgb([
                (r as f32 * alpha + 255.0 * (1.0 - alpha)) as u8,
                (g as f32 * alpha + 255.0 * (1.0 - alpha)) as u8,
                (b as f32 * alpha + 255.0 * (1.0 - alpha)) as u8,
            ]),
        );
    }

    let mut data = Vec::new();
    let mut cursor = Cursor::new(&mut data);
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality);
    encoder
        .encode(rgb.as_raw(), width, height, image::ColorType::Rgb8)
        .map_err(|e| OverlayError::RenderError(format!("Failed to encode JPEG: {}", e)))?;

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> RgbaImage {
        RgbaImage::from_pixel(16, 16, Rgba([120, 60, 30, 255]))
    }

    #[test]
    fn test_encode_png_signature() {
        let data = encode_image(&test_image(), OutputFormat::Png).unwrap();
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_webp_riff_header() {
        let data = encode_image(&test_image(), OutputFormat::Webp).unwrap();
        assert_eq!(&data[0..4], b"RIFF");
        assert_eq!(&data[8..12], b"WEBP");
    }

    #[test]
    fn test_encode_jpeg_marker() {
        let data = encode_image(&test_image(), OutputFormat::Jpeg).unwrap();
        assert_eq!(&data[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_format_content_types() {
        assert_eq!(OutputFormat::Png.content_type(), "image/png");
        assert_eq!(OutputFormat::Webp.content_type(), "image/webp");
        assert_eq!(OutputFormat::Jpeg.content_type(), "image/jpeg");
    }

    #[test]
    fn test_format_parses_from_lowercase() {
        assert_eq!(
            serde_json::from_str::<OutputFormat>("\"jpeg\"").unwrap(),
            OutputFormat::Jpeg
        );
    }
}
