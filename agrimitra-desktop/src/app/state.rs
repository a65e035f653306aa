use std::sync::Arc;

use agrimitra_application::DashboardUseCase;
use agrimitra_core::view::Layout;
use agrimitra_infrastructure::ConfigService;

/// Application state shared across host commands.
pub struct AppState {
    pub dashboard: Arc<DashboardUseCase>,
    pub config_service: Arc<ConfigService>,
    /// Layout used when a command does not name one.
    pub default_layout: Layout,
}
