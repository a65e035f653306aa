use agrimitra_core::notice::Notice;

use crate::app::AppState;

/// Most recent notices, oldest first.
pub async fn recent_notices(state: &AppState) -> Result<Vec<Notice>, String> {
    Ok(state.dashboard.recent_notices().await)
}
