//! Placeholder satellite imagery source.

use agrimitra_core::config::{DEFAULT_IMAGERY_URL, ImagerySettings};
use agrimitra_core::error::Result;
use agrimitra_core::geo::ImageryProvider;
use async_trait::async_trait;

/// Returns one fixed image URL regardless of coordinates.
// TODO: replace with a tile lookup keyed by coordinates once an imagery provider is chosen.
#[derive(Debug, Clone)]
pub struct PlaceholderImageryProvider {
    url: String,
}

impl Default for PlaceholderImageryProvider {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGERY_URL)
    }
}

impl PlaceholderImageryProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_settings(settings: &ImagerySettings) -> Self {
        Self::new(settings.placeholder_url.clone())
    }
}

#[async_trait]
impl ImageryProvider for PlaceholderImageryProvider {
    async fn lookup(&self, latitude: f64, longitude: f64) -> Result<String> {
        tracing::debug!(
            "[Imagery] Placeholder image for ({:.4}, {:.4})",
            latitude,
            longitude
        );
        Ok(self.url.clone())
    }
}
