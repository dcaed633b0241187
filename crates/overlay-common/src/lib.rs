//! Common types shared across the heatmap overlay crates and services.

pub mod error;
pub mod sample;
pub mod style;
pub mod surface;

pub use error::{OverlayError, OverlayResult};
pub use sample::{CoordinateMode, Sample};
pub use style::{Color, GradientSpec, GradientStop, StyleConfig, StyleError};
pub use surface::Surface;
