//! Tests for the overlay API request/response surface.
//!
//! These focus on the JSON contract: request deserialization with the
//! documented defaults, and the shape of error responses.

use axum::http::StatusCode;
use overlay_api::handlers::render::error_response;
use overlay_api::request::RenderRequest;
use overlay_common::OverlayError;

// ============================================================================
// Request deserialization
// ============================================================================

#[test]
fn test_render_request_with_query_payload() {
    let json = r#"{
        "image": "https://example.com/floorplan.png",
        "width": 1024,
        "height": 768,
        "query": {
            "fields": {
                "dimensions": [{"name": "position.x"}, {"name": "position.y"}],
                "measures": [{"name": "events.count"}]
            },
            "rows": [
                {"position.x": {"value": 12}, "position.y": {"value": 34}, "events.count": {"value": 56}}
            ]
        },
        "options": {"gradient": "cool", "coordinate_mode": "percent"}
    }"#;

    let request: RenderRequest = serde_json::from_str(json).unwrap();
    let query = request.query.expect("query payload");
    assert_eq!(query.fields.dimensions.len(), 2);
    assert_eq!(query.rows.len(), 1);
    assert_eq!(request.options.gradient, "cool");
    // Unspecified options keep their defaults
    assert_eq!(request.options.radius, 20.0);
    assert_eq!(request.options.opacity, 0.7);
}

#[test]
fn test_render_request_rejects_missing_image() {
    let json = r#"{"width": 100, "height": 100}"#;
    assert!(serde_json::from_str::<RenderRequest>(json).is_err());
}

// ============================================================================
// Error responses
// ============================================================================

#[tokio::test]
async fn test_error_response_shape() {
    let response = error_response(&OverlayError::GradientNotFound("lava".to_string()));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["code"], "gradient_not_found");
    assert!(body["error"].as_str().unwrap().contains("lava"));
}

#[tokio::test]
async fn test_validation_error_maps_to_bad_request() {
    let response = error_response(&OverlayError::InvalidParameter {
        param: "opacity".to_string(),
        message: "must be between 0 and 1".to_string(),
    });
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
