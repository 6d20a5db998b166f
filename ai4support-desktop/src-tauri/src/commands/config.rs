use ai4support_infrastructure::AppConfig;
use tauri::State;

use crate::app::AppState;

/// Gets the current application configuration.
#[tauri::command]
pub async fn get_app_config(state: State<'_, AppState>) -> Result<AppConfig, String> {
    Ok(state.config_service.get_config())
}

/// Drops the cached configuration so the next read hits the file.
///
/// Services built at startup keep the settings they were constructed with;
/// the reload takes full effect on the next launch.
#[tauri::command]
pub async fn reload_app_config(state: State<'_, AppState>) -> Result<AppConfig, String> {
    state.config_service.invalidate_cache();
    Ok(state.config_service.get_config())
}
