use serde::{Deserialize, Serialize};

use crate::error::AgriError;
use crate::geo::RequestId;
use crate::language::Language;
use crate::notice::Notice;
use crate::profile::ProfileField;
use crate::view::ActiveTab;
use crate::voice::Ticket;

/// Actions offered under the recommendations list. Acknowledged only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationAction {
    MarkDone,
    Save,
}

/// Everything that can change the dashboard state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    LoginSubmitted {
        username: String,
        password: String,
    },
    FieldEdited {
        field: ProfileField,
        value: String,
    },
    LanguageSelected {
        language: Language,
    },
    /// The host reports whether a location capability exists.
    LocationRequested {
        capability_available: bool,
    },
    GeoResolved {
        request_id: RequestId,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        imagery_ref: Option<String>,
    },
    GeoFailed {
        request_id: RequestId,
        error: AgriError,
    },
    VoiceToggled,
    VoiceDelayFired {
        ticket: Ticket,
    },
    TabSelected {
        tab: ActiveTab,
    },
    RecommendationAction {
        action: RecommendationAction,
    },
}

/// Side effects requested by the reducer, executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notice),
    /// Start an asynchronous position request tagged with `request_id`.
    RequestLocation { request_id: RequestId },
    /// Schedule `VoiceDelayFired { ticket }` after the listen delay.
    ScheduleVoiceDelay { ticket: Ticket },
    /// Cancel the outstanding voice delay, if any.
    CancelVoiceDelay,
}
