//! Error types for the AgriMitra dashboard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire dashboard.
///
/// Every variant is recoverable: the UI stays usable after any failure and
/// the affected piece of state keeps its prior value.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AgriError {
    /// Login attempted with an empty username or password.
    #[error("Please enter username and password")]
    MissingCredentials,

    /// A dashboard operation was attempted before logging in.
    #[error("Please log in first")]
    SessionLocked,

    /// The runtime has no location capability at all.
    #[error("Geolocation is not supported on this device.")]
    CapabilityUnavailable,

    /// The user (or platform policy) refused the location request.
    #[error("{0}")]
    LocationDenied(String),

    /// The location request did not complete in time.
    #[error("Timeout expired")]
    LocationTimeout,

    /// Any other acquisition failure reported by the platform.
    #[error("{0}")]
    LocationUnavailable(String),

    /// Satellite imagery lookup failed
    #[error("Imagery lookup failed: {0}")]
    Imagery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },
}

impl AgriError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a LocationDenied error
    pub fn location_denied(reason: impl Into<String>) -> Self {
        Self::LocationDenied(reason.into())
    }

    /// Creates a LocationUnavailable error
    pub fn location_unavailable(reason: impl Into<String>) -> Self {
        Self::LocationUnavailable(reason.into())
    }

    /// Creates an Imagery error
    pub fn imagery(message: impl Into<String>) -> Self {
        Self::Imagery(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error came from the login gate rather than a failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingCredentials | Self::SessionLocked)
    }

    /// Check if this error is a failed location acquisition.
    ///
    /// `CapabilityUnavailable` is not included: it is raised before any
    /// request is issued.
    pub fn is_location_failure(&self) -> bool {
        matches!(
            self,
            Self::LocationDenied(_) | Self::LocationTimeout | Self::LocationUnavailable(_)
        )
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for AgriError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AgriError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AgriError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AgriError>`.
pub type Result<T> = std::result::Result<T, AgriError>;
