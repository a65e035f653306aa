//! Application state domain model.

use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::geo::GeoState;
use crate::language::Language;
use crate::profile::FarmProfile;
use crate::session::Session;
use crate::view::ActiveTab;
use crate::voice::VoiceState;

/// Everything the dashboard knows for one running session.
///
/// Nothing here is persisted; the state is discarded when the process ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub session: Session,
    pub profile: FarmProfile,
    pub language: Language,
    pub geo: GeoState,
    pub voice: VoiceState,
    pub active_tab: ActiveTab,
}

impl AppState {
    /// Creates a new AppState with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the start-up state from configuration.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            profile: config.profile.clone(),
            language: config.ui.language,
            voice: VoiceState::with_tip(config.voice.advisory_tip.clone()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoStatus;
    use crate::voice::VoiceMode;

    #[test]
    fn test_new() {
        let state = AppState::new();
        assert!(!state.session.authenticated);
        assert_eq!(state.profile, FarmProfile::default());
        assert_eq!(state.language, Language::English);
        assert_eq!(state.geo.status, GeoStatus::Idle);
        assert!(state.geo.fix.is_none());
        assert_eq!(state.voice.mode, VoiceMode::Idle);
        assert_eq!(state.active_tab, ActiveTab::Home);
    }

    #[test]
    fn test_from_config() {
        let mut config = DashboardConfig::default();
        config.profile.crop = "Rice".to_string();
        config.ui.language = Language::Bengali;
        config.voice.advisory_tip = "Tip".to_string();

        let state = AppState::from_config(&config);
        assert_eq!(state.profile.crop, "Rice");
        assert_eq!(state.language, Language::Bengali);
        assert_eq!(state.voice.advisory_tip, "Tip");
        assert!(!state.session.authenticated);
    }
}
