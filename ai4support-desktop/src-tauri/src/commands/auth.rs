use ai4support_core::auth::{Role, RouteDecision};
use serde::Serialize;
use tauri::State;

use crate::app::AppState;

/// Successful login payload: the granted role and where to navigate.
#[derive(Serialize)]
pub struct LoginResponse {
    pub role: Role,
    pub route: &'static str,
}

/// Attempts a login for the given role tab.
#[tauri::command]
pub async fn login(
    role: Role,
    email: String,
    password: String,
    state: State<'_, AppState>,
) -> Result<LoginResponse, String> {
    let role = state
        .auth_usecase
        .login(role, &email, &password)
        .await
        .map_err(|e| e.to_string())?;

    Ok(LoginResponse {
        role,
        route: role.route(),
    })
}

/// Clears the stored session role.
#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<(), String> {
    state.auth_usecase.logout().await.map_err(|e| e.to_string())
}

/// Gets the currently stored role, if any.
#[tauri::command]
pub async fn current_role(state: State<'_, AppState>) -> Result<Option<Role>, String> {
    Ok(state.auth_usecase.current_role().await)
}

/// Route guard: decides whether a protected view may render.
#[tauri::command]
pub async fn check_route(
    required: Role,
    state: State<'_, AppState>,
) -> Result<RouteDecision, String> {
    Ok(state.auth_usecase.guard(required).await)
}
