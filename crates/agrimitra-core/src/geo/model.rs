//! Geolocation workflow state.

use serde::{Deserialize, Serialize};

/// Identifier attached to each location request.
pub type RequestId = u64;

/// A latitude/longitude pair reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A resolved location plus the imagery shown for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Imagery URL. Absent when the lookup failed.
    pub imagery_ref: Option<String>,
}

impl GeoFix {
    /// Coordinates rendered with four decimals, e.g. `Lat: 12.3400, Lon: 56.7800`.
    pub fn display_coordinates(&self) -> String {
        format!("Lat: {:.4}, Lon: {:.4}", self.latitude, self.longitude)
    }
}

/// Where location acquisition stands.
///
/// `Requesting` holds while any request is in flight; otherwise the status
/// reflects the last request to complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "data")]
pub enum GeoStatus {
    #[default]
    Idle,
    Requesting,
    Resolved,
    Failed(String),
}

/// Geolocation workflow state held in the app state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeoState {
    pub status: GeoStatus,
    /// Latest successful fix. A failed request leaves it untouched.
    pub fix: Option<GeoFix>,
    /// Requests issued but not yet completed.
    pub in_flight: Vec<RequestId>,
    next_request_id: RequestId,
}

impl GeoState {
    /// Records a new outgoing request and returns its id.
    pub fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let id = self.next_request_id;
        self.in_flight.push(id);
        self.status = GeoStatus::Requesting;
        id
    }

    /// Publishes a fix for a completed request. The latest completion wins.
    pub fn resolve(&mut self, request_id: RequestId, fix: GeoFix) {
        self.fix = Some(fix);
        self.finish(request_id, GeoStatus::Resolved);
    }

    /// Records a failed request. Any prior fix is kept.
    pub fn fail(&mut self, request_id: RequestId, reason: impl Into<String>) {
        self.finish(request_id, GeoStatus::Failed(reason.into()));
    }

    pub fn is_requesting(&self) -> bool {
        !self.in_flight.is_empty()
    }

    fn finish(&mut self, request_id: RequestId, outcome: GeoStatus) {
        self.in_flight.retain(|id| *id != request_id);
        self.status = if self.in_flight.is_empty() {
            outcome
        } else {
            GeoStatus::Requesting
        };
    }
}
