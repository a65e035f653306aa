use std::str::FromStr;

use agrimitra_core::state::AppState as CoreAppState;
use agrimitra_core::view::{ActiveTab, Layout, Screen};

use crate::app::AppState;

/// Switches the narrow-layout tab.
pub async fn select_tab(state: &AppState, tab: String) -> Result<ActiveTab, String> {
    let tab = ActiveTab::from_str(&tab).map_err(|_| format!("Unknown tab: {}", tab))?;
    state.dashboard.select_tab(tab).await;
    Ok(state.dashboard.snapshot().await.active_tab)
}

/// Composes the screen for `layout`, or the configured layout when `None`.
pub async fn get_screen(state: &AppState, layout: Option<String>) -> Result<Screen, String> {
    let layout = match layout {
        Some(name) => Layout::from_str(&name).map_err(|_| format!("Unknown layout: {}", name))?,
        None => state.default_layout,
    };
    Ok(state.dashboard.screen(layout).await)
}

/// Gets the current AppState snapshot.
pub async fn get_app_state(state: &AppState) -> Result<CoreAppState, String> {
    Ok(state.dashboard.snapshot().await)
}
