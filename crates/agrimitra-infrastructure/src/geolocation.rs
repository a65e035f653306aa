//! Stand-in location capabilities.
//!
//! The dashboard has no platform geolocation of its own; these providers stand
//! in for it in the demo host and in tests.

use agrimitra_core::error::{AgriError, Result};
use agrimitra_core::geo::{Coordinates, GeolocationProvider};
use async_trait::async_trait;
use std::time::Duration;

/// Resolves to fixed coordinates, optionally after a simulated latency.
#[derive(Debug, Clone)]
pub struct FixedGeolocationProvider {
    coordinates: Coordinates,
    latency: Duration,
}

impl FixedGeolocationProvider {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Coordinates::new(latitude, longitude),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl GeolocationProvider for FixedGeolocationProvider {
    fn is_available(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Coordinates> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.coordinates)
    }
}

/// Always fails with the configured error, e.g. a denied permission.
#[derive(Debug, Clone)]
pub struct FailingGeolocationProvider {
    error: AgriError,
    latency: Duration,
}

impl FailingGeolocationProvider {
    pub fn new(error: AgriError) -> Self {
        Self {
            error,
            latency: Duration::ZERO,
        }
    }

    /// Shorthand for a permission refusal with the given reason.
    pub fn denied(reason: impl Into<String>) -> Self {
        Self::new(AgriError::location_denied(reason))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl GeolocationProvider for FailingGeolocationProvider {
    fn is_available(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Coordinates> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Err(self.error.clone())
    }
}

/// A runtime without any location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableGeolocationProvider;

#[async_trait]
impl GeolocationProvider for UnavailableGeolocationProvider {
    fn is_available(&self) -> bool {
        false
    }

    async fn current_position(&self) -> Result<Coordinates> {
        Err(AgriError::CapabilityUnavailable)
    }
}
