//! Session domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AgriError, Result};

/// Name shown on the farmer card when the login carried no usable name.
pub const DEFAULT_FARMER_NAME: &str = "Ramesh";

/// Authentication state of the running dashboard.
///
/// A session starts unauthenticated and flips to authenticated at most once.
/// There is no logout: the session lives until the process ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Whether the login gate has been passed.
    pub authenticated: bool,
    /// Name entered at login. Empty until authenticated.
    pub username: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a fresh, unauthenticated session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            authenticated: false,
            username: String::new(),
        }
    }

    /// Attempts to pass the login gate.
    ///
    /// Any pair of non-empty strings is accepted; there is no credential
    /// store. The password is only checked for presence and never retained.
    ///
    /// # Errors
    ///
    /// Returns `AgriError::MissingCredentials` when either field is empty.
    /// The session is left untouched in that case.
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(AgriError::MissingCredentials);
        }

        if self.authenticated {
            tracing::debug!("[SessionGate] Session {} already authenticated", self.id);
            return Ok(());
        }

        self.authenticated = true;
        self.username = username.to_string();
        tracing::info!("[SessionGate] Session {} authenticated", self.id);
        Ok(())
    }

    /// Name displayed on the farmer card.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            DEFAULT_FARMER_NAME
        } else {
            &self.username
        }
    }
}
