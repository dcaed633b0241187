//! Render request validation.
//!
//! All user-facing validation happens here, before any image is fetched or
//! any pixel is drawn; the rasterizer itself assumes pre-validated inputs
//! and never fails.

use overlay_common::{OverlayError, OverlayResult};

use crate::request::RenderRequest;

pub fn validate_request(request: &RenderRequest) -> OverlayResult<()> {
    if request.image.trim().is_empty() {
        return Err(OverlayError::MissingParameter("image".to_string()));
    }

    if request.width == 0 || request.height == 0 {
        return Err(OverlayError::InvalidParameter {
            param: "width/height".to_string(),
            message: "container dimensions must be positive".to_string(),
        });
    }

    if request.query.is_none() && request.samples.is_none() {
        return Err(OverlayError::MissingParameter(
            "query or samples".to_string(),
        ));
    }

    let options = &request.options;

    if !(options.radius > 0.0) {
        return Err(OverlayError::InvalidParameter {
            param: "radius".to_string(),
            message: "must be positive".to_string(),
        });
    }

    if !(options.blur >= 0.0) {
        return Err(OverlayError::InvalidParameter {
            param: "blur".to_string(),
            message: "must be zero or positive".to_string(),
        });
    }

    if !(0.0..=1.0).contains(&options.opacity) {
        return Err(OverlayError::InvalidParameter {
            param: "opacity".to_string(),
            message: "must be between 0 and 1".to_string(),
        });
    }

    Ok(())
}
