use super::event::{DashboardEvent, Effect, RecommendationAction};
use super::model::AppState;
use crate::error::AgriError;
use crate::geo::GeoFix;
use crate::notice::{Notice, NoticeKind};
use crate::voice::VoiceTransition;

/// Applies one event to the state and returns the effects to run.
///
/// Each call runs to completion before the next event is handled. Until the
/// session is authenticated, every event other than a login is dropped.
/// Logins are always validated, even on an open session.
pub fn reduce(state: &mut AppState, event: DashboardEvent) -> Vec<Effect> {
    if let DashboardEvent::LoginSubmitted { username, password } = &event {
        return reduce_login(state, username, password);
    }

    if !state.session.authenticated {
        tracing::info!("[Reducer] Dropping {} before login", event_name(&event));
        return Vec::new();
    }

    match event {
        DashboardEvent::LoginSubmitted { .. } => Vec::new(),
        DashboardEvent::FieldEdited { field, value } => {
            state.profile.set_field(field, value);
            Vec::new()
        }
        DashboardEvent::LanguageSelected { language } => {
            state.language = language;
            Vec::new()
        }
        DashboardEvent::LocationRequested {
            capability_available,
        } => {
            if !capability_available {
                tracing::warn!("[Geolocation] No location capability on this runtime");
                return vec![Effect::Notify(Notice::from_error(
                    &AgriError::CapabilityUnavailable,
                ))];
            }
            let request_id = state.geo.begin_request();
            tracing::info!("[Geolocation] Request {} issued", request_id);
            vec![Effect::RequestLocation { request_id }]
        }
        DashboardEvent::GeoResolved {
            request_id,
            latitude,
            longitude,
            imagery_ref,
        } => {
            tracing::info!(
                "[Geolocation] Request {} resolved at ({:.4}, {:.4})",
                request_id,
                latitude,
                longitude
            );
            state.geo.resolve(
                request_id,
                GeoFix {
                    latitude,
                    longitude,
                    imagery_ref,
                },
            );
            Vec::new()
        }
        DashboardEvent::GeoFailed { request_id, error } => {
            tracing::warn!("[Geolocation] Request {} failed: {}", request_id, error);
            state.geo.fail(request_id, error.to_string());
            vec![Effect::Notify(Notice::from_error(&error))]
        }
        DashboardEvent::VoiceToggled => match state.voice.toggle() {
            VoiceTransition::Started { ticket } => {
                tracing::debug!("[VoiceAssistant] Listening (ticket {})", ticket);
                vec![Effect::ScheduleVoiceDelay { ticket }]
            }
            VoiceTransition::Stopped => {
                tracing::debug!("[VoiceAssistant] Stopped by user");
                vec![Effect::CancelVoiceDelay]
            }
        },
        DashboardEvent::VoiceDelayFired { ticket } => {
            if !state.voice.delay_elapsed(ticket) {
                tracing::debug!("[VoiceAssistant] Ignoring stale delay (ticket {})", ticket);
            }
            Vec::new()
        }
        DashboardEvent::TabSelected { tab } => {
            state.active_tab = tab;
            Vec::new()
        }
        DashboardEvent::RecommendationAction { action } => {
            let message = match action {
                RecommendationAction::MarkDone => "Recommendations marked as done.",
                RecommendationAction::Save => "Recommendations saved.",
            };
            tracing::info!("[Recommendations] {:?} acknowledged", action);
            vec![Effect::Notify(Notice::info(
                NoticeKind::ActionAcknowledged,
                message,
            ))]
        }
    }
}

fn reduce_login(state: &mut AppState, username: &str, password: &str) -> Vec<Effect> {
    match state.session.login(username, password) {
        Ok(()) => Vec::new(),
        Err(err) => {
            tracing::info!("[SessionGate] Login rejected: {}", err);
            vec![Effect::Notify(Notice::from_error(&err))]
        }
    }
}

fn event_name(event: &DashboardEvent) -> &'static str {
    match event {
        DashboardEvent::LoginSubmitted { .. } => "login_submitted",
        DashboardEvent::FieldEdited { .. } => "field_edited",
        DashboardEvent::LanguageSelected { .. } => "language_selected",
        DashboardEvent::LocationRequested { .. } => "location_requested",
        DashboardEvent::GeoResolved { .. } => "geo_resolved",
        DashboardEvent::GeoFailed { .. } => "geo_failed",
        DashboardEvent::VoiceToggled => "voice_toggled",
        DashboardEvent::VoiceDelayFired { .. } => "voice_delay_fired",
        DashboardEvent::TabSelected { .. } => "tab_selected",
        DashboardEvent::RecommendationAction { .. } => "recommendation_action",
    }
}
