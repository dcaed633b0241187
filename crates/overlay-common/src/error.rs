//! Error types for the overlay rendering services.

use thiserror::Error;

/// Result type alias using OverlayError.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Primary error type for render requests.
#[derive(Debug, Error)]
pub enum OverlayError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Gradient not found: {0}")]
    GradientNotFound(String),

    #[error("Insufficient query fields: {0}")]
    InsufficientFields(String),

    // === Background Image Errors ===
    #[error("Background image not found: {0}")]
    ImageNotFound(String),

    #[error("Failed to fetch background image: {0}")]
    ImageFetchError(String),

    #[error("Failed to decode background image: {0}")]
    ImageDecodeError(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("Requested output format not supported: {0}")]
    UnsupportedFormat(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl OverlayError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            OverlayError::MissingParameter(_)
            | OverlayError::InvalidParameter { .. }
            | OverlayError::InsufficientFields(_)
            | OverlayError::UnsupportedFormat(_) => 400,

            OverlayError::GradientNotFound(_) | OverlayError::ImageNotFound(_) => 404,

            OverlayError::ImageFetchError(_) => 502,

            OverlayError::ImageDecodeError(_)
            | OverlayError::RenderError(_)
            | OverlayError::InternalError(_) => 500,
        }
    }

    /// Short machine-readable code for JSON error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            OverlayError::MissingParameter(_) => "missing_parameter",
            OverlayError::InvalidParameter { .. } => "invalid_parameter",
            OverlayError::GradientNotFound(_) => "gradient_not_found",
            OverlayError::InsufficientFields(_) => "insufficient_fields",
            OverlayError::ImageNotFound(_) => "image_not_found",
            OverlayError::ImageFetchError(_) => "image_fetch_failed",
            OverlayError::ImageDecodeError(_) => "image_decode_failed",
            OverlayError::RenderError(_) => "render_failed",
            OverlayError::UnsupportedFormat(_) => "unsupported_format",
            OverlayError::InternalError(_) => "internal_error",
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for OverlayError {
    fn from(err: std::io::Error) -> Self {
        OverlayError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for OverlayError {
    fn from(err: serde_json::Error) -> Self {
        OverlayError::InternalError(format!("JSON error: {}", err))
    }
}
