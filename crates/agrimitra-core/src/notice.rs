//! User-visible notices.
//!
//! Every failure in the dashboard ends up as a notice; none is fatal.

use serde::{Deserialize, Serialize};

use crate::error::AgriError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    MissingCredentials,
    CapabilityUnavailable,
    LocationFailed,
    ActionAcknowledged,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub severity: NoticeSeverity,
    pub message: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, severity: NoticeSeverity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn info(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self::new(kind, NoticeSeverity::Info, message)
    }

    /// Builds the notice shown for an error.
    ///
    /// Gate and capability errors are warnings; everything else is an error.
    pub fn from_error(err: &AgriError) -> Self {
        let severity = if err.is_validation() || matches!(err, AgriError::CapabilityUnavailable) {
            NoticeSeverity::Warning
        } else {
            NoticeSeverity::Error
        };

        if err.is_location_failure() {
            return Self::new(
                NoticeKind::LocationFailed,
                severity,
                format!("Unable to get location: {}", err),
            );
        }

        let kind = match err {
            AgriError::MissingCredentials => NoticeKind::MissingCredentials,
            AgriError::CapabilityUnavailable => NoticeKind::CapabilityUnavailable,
            _ => NoticeKind::Internal,
        };
        Self::new(kind, severity, err.to_string())
    }
}
