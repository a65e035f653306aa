use crate::app::AppState;

/// Starts a location lookup.
///
/// Returns once the request is issued; the fix (or failure notice) arrives
/// asynchronously and shows up in later screens.
pub async fn request_location(state: &AppState) -> Result<(), String> {
    state
        .dashboard
        .request_location()
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{app_with_config, logged_in_app};
    use agrimitra_core::notice::NoticeKind;
    use std::time::Duration;

    #[tokio::test]
    async fn test_refused_before_login() {
        let (app, _notices) = app_with_config(
            "[geolocation]\nmanual_position = { latitude = 1.0, longitude = 2.0 }\n",
        )
        .await;
        assert_eq!(
            request_location(&app).await.unwrap_err(),
            "Please log in first"
        );
    }

    #[tokio::test]
    async fn test_without_manual_position() {
        let (app, mut notices) = logged_in_app("").await;
        let err = request_location(&app).await.unwrap_err();
        assert_eq!(err, "Geolocation is not supported on this device.");
        assert_eq!(
            notices.recv().await.unwrap().kind,
            NoticeKind::CapabilityUnavailable
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_with_manual_position() {
        let (app, _notices) = logged_in_app(
            "[geolocation]\nmanual_position = { latitude = 30.901, longitude = 75.8573 }\n",
        )
        .await;

        request_location(&app).await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        let fix = app.dashboard.snapshot().await.geo.fix.unwrap();
        assert_eq!(fix.display_coordinates(), "Lat: 30.9010, Lon: 75.8573");
        assert!(fix.imagery_ref.is_some());
    }
}
