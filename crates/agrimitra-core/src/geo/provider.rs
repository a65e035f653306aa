//! Platform capability traits for location and imagery.

use async_trait::async_trait;

use super::model::Coordinates;
use crate::error::Result;

/// One-shot access to the device position.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Whether the runtime exposes a location capability at all.
    fn is_available(&self) -> bool;

    /// Requests the current position once.
    ///
    /// # Errors
    ///
    /// `LocationDenied`, `LocationTimeout` or `LocationUnavailable` depending
    /// on how the platform reported the failure.
    async fn current_position(&self) -> Result<Coordinates>;
}

/// Source of satellite imagery for a coordinate pair.
#[async_trait]
pub trait ImageryProvider: Send + Sync {
    /// Returns an image URL for the given position.
    async fn lookup(&self, latitude: f64, longitude: f64) -> Result<String>;
}
