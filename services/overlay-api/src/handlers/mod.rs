//! HTTP request handlers.
//!
//! - `render`: the heatmap render endpoint
//! - `api`: gradient discovery, health and metrics endpoints

pub mod api;
pub mod render;

pub use api::{gradients_handler, health_handler, metrics_handler, ready_handler};
pub use render::render_handler;
