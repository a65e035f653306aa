use agrimitra_core::voice::VoiceMode;

use crate::app::AppState;

/// Starts or stops the voice assistant and returns the new mode.
pub async fn toggle_voice(state: &AppState) -> Result<VoiceMode, String> {
    Ok(state.dashboard.toggle_voice().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::logged_in_app;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_configured_delay_and_tip() {
        let (app, _notices) =
            logged_in_app("[voice]\nlisten_delay_ms = 100\nadvisory_tip = \"Sow early.\"\n").await;

        assert_eq!(toggle_voice(&app).await.unwrap(), VoiceMode::Listening);
        tokio::time::sleep(Duration::from_millis(150)).await;

        let voice = app.dashboard.snapshot().await.voice;
        assert_eq!(voice.mode, VoiceMode::Idle);
        assert_eq!(voice.message, "Sow early.");
    }
}
