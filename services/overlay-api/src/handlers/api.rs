//! Gradient discovery, health and metrics endpoints.

use std::sync::Arc;

use axum::{extract::Extension, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GradientInfo {
    pub key: String,
    pub name: String,
    pub stops: usize,
}

#[derive(Debug, Serialize)]
pub struct GradientsResponse {
    pub gradients: Vec<GradientInfo>,
}

/// `GET /gradients` - list the configured gradient styles.
pub async fn gradients_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<GradientsResponse> {
    let gradients = state
        .styles
        .names()
        .into_iter()
        .filter_map(|key| {
            state.styles.get(&key).map(|spec| GradientInfo {
                key: key.clone(),
                name: spec.name.clone(),
                stops: spec.stops.len(),
            })
        })
        .collect();

    Json(GradientsResponse { gradients })
}

/// `GET /health` - liveness probe.
pub async fn health_handler() -> &'static str {
    "OK"
}

/// `GET /ready` - readiness probe.
pub async fn ready_handler() -> &'static str {
    "READY"
}

/// `GET /metrics` - Prometheus text exposition.
pub async fn metrics_handler(Extension(handle): Extension<PrometheusHandle>) -> String {
    handle.render()
}
