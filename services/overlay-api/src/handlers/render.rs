//! Heatmap render endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics::{counter, histogram};
use tracing::info;

use overlay_common::{OverlayError, OverlayResult, Sample, Surface};
use overlay_renderer::{render_heatmap, RenderParams};

use crate::encode::encode_image;
use crate::extract::extract_samples;
use crate::request::RenderRequest;
use crate::state::AppState;
use crate::validation::validate_request;

/// `POST /render` - render a heatmap overlay composite.
pub async fn render_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<RenderRequest>,
) -> Response {
    match handle_render(&state, request).await {
        Ok((bytes, content_type)) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(bytes))
            .unwrap(),
        Err(err) => error_response(&err),
    }
}

async fn handle_render(
    state: &AppState,
    request: RenderRequest,
) -> OverlayResult<(Vec<u8>, &'static str)> {
    validate_request(&request)?;

    let gradient = state
        .styles
        .get(&request.options.gradient)
        .cloned()
        .ok_or_else(|| OverlayError::GradientNotFound(request.options.gradient.clone()))?;

    let background = state.background(&request.image).await?;
    let (natural_width, natural_height) = background.natural_size();
    let surface = Surface::fit(natural_width, natural_height, request.width, request.height);

    let samples: Vec<Sample> = match (&request.samples, &request.query) {
        (Some(samples), _) => samples.clone(),
        (None, Some(query)) => extract_samples(query)?,
        // validate_request requires one of the two
        (None, None) => Vec::new(),
    };

    let params = RenderParams {
        radius: request.options.radius,
        blur: request.options.blur,
        opacity: request.options.opacity,
        mode: request.options.coordinate_mode,
        show_grid: request.options.show_grid,
    };

    let started = Instant::now();
    let composite = render_heatmap(&background.pixels, surface, &samples, &gradient, &params);
    let elapsed = started.elapsed();

    histogram!("overlay_render_duration_seconds").record(elapsed.as_secs_f64());
    counter!(
        "overlay_renders_total",
        "gradient" => request.options.gradient.clone(),
        "format" => request.options.format.as_str()
    )
    .increment(1);

    info!(
        samples = samples.len(),
        width = surface.width,
        height = surface.height,
        gradient = %request.options.gradient,
        elapsed_ms = elapsed.as_millis() as u64,
        "Rendered heatmap overlay"
    );

    let bytes = encode_image(&composite, request.options.format)?;
    Ok((bytes, request.options.format.content_type()))
}

/// Map an OverlayError to a JSON error response.
pub fn error_response(err: &OverlayError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let body = serde_json::json!({
        "code": err.code(),
        "error": err.to_string(),
    });

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn state_with_background(dir: &tempfile::TempDir) -> (Arc<AppState>, String) {
        let path = dir.path().join("bg.png");
        RgbaImage::from_pixel(80, 60, Rgba([0, 0, 0, 255]))
            .save(&path)
            .unwrap();
        (
            Arc::new(AppState::new(None).unwrap()),
            path.to_str().unwrap().to_string(),
        )
    }

    #[tokio::test]
    async fn test_handle_render_returns_png() {
        let dir = tempfile::tempdir().unwrap();
        let (state, image) = state_with_background(&dir);

        let request: RenderRequest = serde_json::from_str(&format!(
            r#"{{
                "image": "{}",
                "width": 40,
                "height": 30,
                "samples": [{{"x": 50.0, "y": 50.0, "value": 2.0}}]
            }}"#,
            image
        ))
        .unwrap();

        let (bytes, content_type) = handle_render(&state, request).await.unwrap();
        assert_eq!(content_type, "image/png");
        assert_eq!(&bytes[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[tokio::test]
    async fn test_unknown_gradient_is_a_404() {
        let dir = tempfile::tempdir().unwrap();
        let (state, image) = state_with_background(&dir);

        let request: RenderRequest = serde_json::from_str(&format!(
            r#"{{
                "image": "{}",
                "width": 40,
                "height": 30,
                "samples": [],
                "options": {{"gradient": "lava"}}
            }}"#,
            image
        ))
        .unwrap();

        let err = handle_render(&state, request).await.unwrap_err();
        assert!(matches!(err, OverlayError::GradientNotFound(_)));
    }

    #[tokio::test]
    async fn test_query_payload_is_extracted() {
        let dir = tempfile::tempdir().unwrap();
        let (state, image) = state_with_background(&dir);

        let request: RenderRequest = serde_json::from_str(&format!(
            r#"{{
                "image": "{}",
                "width": 40,
                "height": 30,
                "query": {{
                    "fields": {{
                        "dimensions": [{{"name": "x"}}, {{"name": "y"}}],
                        "measures": [{{"name": "heat"}}]
                    }},
                    "rows": [
                        {{"x": {{"value": 50}}, "y": {{"value": 50}}, "heat": {{"value": 9}}}}
                    ]
                }}
            }}"#,
            image
        ))
        .unwrap();

        assert!(handle_render(&state, request).await.is_ok());
    }

    #[tokio::test]
    async fn test_query_without_enough_fields_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (state, image) = state_with_background(&dir);

        let request: RenderRequest = serde_json::from_str(&format!(
            r#"{{
                "image": "{}",
                "width": 40,
                "height": 30,
                "query": {{
                    "fields": {{"dimensions": [{{"name": "x"}}], "measures": []}},
                    "rows": []
                }}
            }}"#,
            image
        ))
        .unwrap();

        let err = handle_render(&state, request).await.unwrap_err();
        assert!(matches!(err, OverlayError::InsufficientFields(_)));
    }
}
