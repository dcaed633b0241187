//! Render request types.

use serde::Deserialize;

use overlay_common::{CoordinateMode, Sample};

use crate::encode::OutputFormat;
use crate::extract::QueryPayload;

/// Body of a `POST /render` request.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    /// Background image reference: an http(s) URL or a local file path
    pub image: String,

    /// Container width the background image is fitted into
    pub width: u32,

    /// Container height the background image is fitted into
    pub height: u32,

    /// Row-oriented query payload (two dimensions = x/y, one measure =
    /// intensity), as supplied by the dashboard host
    #[serde(default)]
    pub query: Option<QueryPayload>,

    /// Pre-extracted samples; takes precedence over `query` when both are
    /// present
    #[serde(default)]
    pub samples: Option<Vec<Sample>>,

    #[serde(default)]
    pub options: RenderOptions,
}

/// Style options for a render, all optional with dashboard defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Gradient name from the style configuration
    pub gradient: String,

    /// Point radius in surface pixels
    pub radius: f32,

    /// Radial fade extent added to / subtracted from the radius
    pub blur: f32,

    /// Overlay opacity in [0, 1]
    pub opacity: f32,

    /// Interpretation of sample coordinates
    pub coordinate_mode: CoordinateMode,

    /// Draw the 10% reference grid
    pub show_grid: bool,

    /// Response encoding
    pub format: OutputFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            gradient: "classic".to_string(),
            radius: 20.0,
            blur: 15.0,
            opacity: 0.7,
            coordinate_mode: CoordinateMode::Percent,
            show_grid: false,
            format: OutputFormat::Png,
        }
    }
}
