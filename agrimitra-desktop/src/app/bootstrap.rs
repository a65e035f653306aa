use std::sync::Arc;

use agrimitra_application::{DashboardServices, DashboardUseCase};
use agrimitra_core::config::DashboardConfig;
use agrimitra_core::geo::GeolocationProvider;
use agrimitra_core::metrics::RuleBasedAdvisor;
use agrimitra_core::notice::Notice;
use agrimitra_infrastructure::{
    ConfigService, FixedGeolocationProvider, PlaceholderImageryProvider, StaticChartFeed,
    UnavailableGeolocationProvider,
};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::app::AppState;

pub struct AppBootstrap {
    pub app_state: AppState,
    /// Every notice the dashboard publishes, in order.
    pub notices: UnboundedReceiver<Notice>,
}

/// Picks the location capability for this host.
///
/// The headless host has no platform location service, so a configured
/// manual position is the only way to resolve a fix.
fn geolocation_provider(config: &DashboardConfig) -> Arc<dyn GeolocationProvider> {
    match config.geolocation.manual_position {
        Some(position) => {
            tracing::info!(
                "[Bootstrap] Using manual position ({:.4}, {:.4})",
                position.latitude,
                position.longitude
            );
            Arc::new(FixedGeolocationProvider::new(
                position.latitude,
                position.longitude,
            ))
        }
        None => {
            tracing::info!("[Bootstrap] No manual position configured; location unavailable");
            Arc::new(UnavailableGeolocationProvider)
        }
    }
}

/// Composition root: wires adapters into the dashboard use case.
///
/// Must run inside a tokio runtime.
pub async fn bootstrap(config_service: ConfigService) -> AppBootstrap {
    let config = config_service.get_config();
    let (notice_tx, notice_rx) = mpsc::unbounded_channel();

    let services = DashboardServices {
        geolocation: geolocation_provider(&config),
        imagery: Arc::new(PlaceholderImageryProvider::from_settings(&config.imagery)),
        advisor: Arc::new(RuleBasedAdvisor),
        chart_feed: Arc::new(StaticChartFeed),
        notice_sender: Some(notice_tx),
    };
    let dashboard = DashboardUseCase::from_config(&config, services);

    tracing::info!(
        "[Bootstrap] Dashboard ready (layout: {}, language: {})",
        config.ui.layout,
        config.ui.language
    );

    AppBootstrap {
        app_state: AppState {
            dashboard,
            config_service: Arc::new(config_service),
            default_layout: config.ui.layout,
        },
        notices: notice_rx,
    }
}
