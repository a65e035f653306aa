//! Dashboard configuration model.
//!
//! Every field has a default so a partial (or missing) `config.toml` is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::geo::Coordinates;
use crate::language::Language;
use crate::profile::FarmProfile;
use crate::view::Layout;
use crate::voice::DEFAULT_ADVISORY_TIP;

/// Placeholder satellite image used until a real imagery provider is wired in.
pub const DEFAULT_IMAGERY_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/5/51/India_satellite_image.jpg/640px-India_satellite_image.jpg";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub voice: VoiceSettings,
    pub geolocation: GeolocationSettings,
    pub imagery: ImagerySettings,
    /// Initial farm profile.
    pub profile: FarmProfile,
    pub ui: UiSettings,
    pub logging: LogSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VoiceSettings {
    /// Delay before a listening period ends with the advisory tip.
    pub listen_delay_ms: u64,
    pub advisory_tip: String,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            listen_delay_ms: 2500,
            advisory_tip: DEFAULT_ADVISORY_TIP.to_string(),
        }
    }
}

impl VoiceSettings {
    pub fn listen_delay(&self) -> Duration {
        Duration::from_millis(self.listen_delay_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeolocationSettings {
    /// Upper bound on one position request before it fails with a timeout.
    pub timeout_ms: u64,
    /// Position reported by hosts without a platform location service.
    /// Unset means location is unavailable on such hosts.
    pub manual_position: Option<Coordinates>,
}

impl Default for GeolocationSettings {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            manual_position: None,
        }
    }
}

impl GeolocationSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ImagerySettings {
    pub placeholder_url: String,
}

impl Default for ImagerySettings {
    fn default() -> Self {
        Self {
            placeholder_url: DEFAULT_IMAGERY_URL.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct UiSettings {
    pub language: Language,
    pub layout: Layout,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config: DashboardConfig = toml::from_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.voice.listen_delay(), Duration::from_millis(2500));
        assert_eq!(config.profile.crop, "Wheat");
        assert_eq!(config.geolocation.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_document() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [voice]
            listen_delay_ms = 100

            [profile]
            crop = "Rice"
            soil_type = "Clay"

            [geolocation]
            manual_position = { latitude = 30.901, longitude = 75.8573 }

            [ui]
            language = "hindi"
            layout = "narrow"
            "#,
        )
        .unwrap();

        assert_eq!(config.voice.listen_delay_ms, 100);
        assert_eq!(config.voice.advisory_tip, DEFAULT_ADVISORY_TIP);
        assert_eq!(config.profile.crop, "Rice");
        assert_eq!(config.profile.soil_type, "Clay");
        assert_eq!(config.profile.area, "1.5 acres");
        assert_eq!(config.geolocation.timeout_ms, 10_000);
        assert_eq!(
            config.geolocation.manual_position,
            Some(Coordinates::new(30.901, 75.8573))
        );
        assert_eq!(config.ui.language, Language::Hindi);
        assert_eq!(config.ui.layout, Layout::Narrow);
        assert_eq!(config.logging.level, "info");
    }
}
