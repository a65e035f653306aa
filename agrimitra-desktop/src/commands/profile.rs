use std::str::FromStr;

use agrimitra_core::language::Language;
use agrimitra_core::profile::{FarmProfile, ProfileField};

use crate::app::AppState;

/// Sets one farm profile field and returns the updated profile.
///
/// `field` is `crop`, `soilType` or `area`.
pub async fn edit_field(
    state: &AppState,
    field: String,
    value: String,
) -> Result<FarmProfile, String> {
    let field = ProfileField::from_str(&field).map_err(|_| format!("Unknown field: {}", field))?;
    state.dashboard.set_field(field, value).await;
    Ok(state.dashboard.snapshot().await.profile)
}

/// Stores the selected display language.
pub async fn select_language(state: &AppState, language: String) -> Result<Language, String> {
    let language =
        Language::from_str(&language).map_err(|_| format!("Unknown language: {}", language))?;
    state.dashboard.select_language(language).await;
    Ok(state.dashboard.snapshot().await.language)
}
