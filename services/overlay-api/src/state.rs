//! Application state and shared resources.

use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use anyhow::Result;
use image::RgbaImage;
use tokio::sync::RwLock;
use tracing::{info, warn};

use overlay_common::{OverlayError, OverlayResult, StyleConfig};

/// A decoded background image; natural dimensions come from the buffer.
#[derive(Debug)]
pub struct BackgroundImage {
    pub pixels: RgbaImage,
}

impl BackgroundImage {
    pub fn natural_size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// Shared application state.
///
/// The decoded-image cache is the only state that crosses render calls;
/// every other render entity is recomputed per request.
pub struct AppState {
    pub styles: StyleConfig,
    images: RwLock<HashMap<String, Arc<BackgroundImage>>>,
    http: reqwest::Client,
}

impl AppState {
    pub fn new(style_file: Option<&str>) -> Result<Self> {
        let style_file = style_file
            .map(str::to_string)
            .or_else(|| env::var("STYLE_FILE").ok());

        let styles = match style_file {
            Some(path) => {
                let config = StyleConfig::from_file(&path)?;
                config.validate()?;
                info!(path = %path, gradients = config.gradients.len(), "Loaded style configuration");
                config
            }
            None => {
                info!("No style file configured, using builtin gradients");
                StyleConfig::builtin()
            }
        };

        Ok(Self {
            styles,
            images: RwLock::new(HashMap::new()),
            http: reqwest::Client::new(),
        })
    }

    /// Get the decoded background image for a reference, loading and caching
    /// it on first use.
    pub async fn background(&self, reference: &str) -> OverlayResult<Arc<BackgroundImage>> {
        {
            let cache = self.images.read().await;
            if let Some(image) = cache.get(reference) {
                return Ok(Arc::clone(image));
            }
        }

        let bytes = self.load_bytes(reference).await?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| OverlayError::ImageDecodeError(format!("{}: {}", reference, e)))?
            .to_rgba8();

        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(OverlayError::ImageDecodeError(format!(
                "{}: image has zero dimensions",
                reference
            )));
        }

        info!(reference = %reference, width, height, "Decoded background image");

        let image = Arc::new(BackgroundImage { pixels: decoded });

        let mut cache = self.images.write().await;
        // A concurrent request may have decoded the same image; keep the
        // first entry so all callers share one buffer
        let entry = cache
            .entry(reference.to_string())
            .or_insert_with(|| Arc::clone(&image));
        Ok(Arc::clone(entry))
    }

    async fn load_bytes(&self, reference: &str) -> OverlayResult<Vec<u8>> {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            let response = self
                .http
                .get(reference)
                .send()
                .await
                .map_err(|e| OverlayError::ImageFetchError(format!("{}: {}", reference, e)))?;

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Err(OverlayError::ImageNotFound(reference.to_string()));
            }
            if !response.status().is_success() {
                warn!(reference = %reference, status = %response.status(), "Background image fetch failed");
                return Err(OverlayError::ImageFetchError(format!(
                    "{}: HTTP {}",
                    reference,
                    response.status()
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| OverlayError::ImageFetchError(format!("{}: {}", reference, e)))?;
            Ok(bytes.to_vec())
        } else {
            match tokio::fs::read(reference).await {
                Ok(bytes) => Ok(bytes),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    Err(OverlayError::ImageNotFound(reference.to_string()))
                }
                Err(e) => Err(OverlayError::InternalError(format!(
                    "Failed to read {}: {}",
                    reference, e
                ))),
            }
        }
    }
}
