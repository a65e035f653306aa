use agrimitra_core::notice::Notice;
use agrimitra_core::state::RecommendationAction;

use crate::app::AppState;

pub async fn mark_done(state: &AppState) -> Result<Vec<Notice>, String> {
    Ok(state
        .dashboard
        .recommendation_action(RecommendationAction::MarkDone)
        .await)
}

pub async fn save_recommendations(state: &AppState) -> Result<Vec<Notice>, String> {
    Ok(state
        .dashboard
        .recommendation_action(RecommendationAction::Save)
        .await)
}
