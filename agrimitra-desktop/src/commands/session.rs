use crate::app::AppState;

/// Submits the login form.
///
/// Any non-empty username and password are accepted.
pub async fn login(state: &AppState, username: String, password: String) -> Result<(), String> {
    state
        .dashboard
        .login(&username, &password)
        .await
        .map_err(|e| e.to_string())
}
