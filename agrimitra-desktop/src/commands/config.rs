use agrimitra_core::config::DashboardConfig;

use crate::app::AppState;

/// Gets the configuration the host was started with.
pub async fn get_config(state: &AppState) -> Result<DashboardConfig, String> {
    Ok(state.config_service.get_config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::app_with_config;

    #[tokio::test]
    async fn test_reports_loaded_config() {
        let (app, _notices) = app_with_config("[voice]\nlisten_delay_ms = 900\n").await;
        let config = get_config(&app).await.unwrap();
        assert_eq!(config.voice.listen_delay_ms, 900);
        assert_eq!(config.geolocation.timeout_ms, 10_000);
    }
}
