use ai4support_application::Toast;
use tauri::{AppHandle, Emitter, State};

use crate::app::AppState;

/// Shows a toast and wires up its auto-dismiss.
///
/// The frontend listens for `toast:show` and `toast:dismiss`; replacement
/// of a visible toast is implicit in the next `toast:show`.
pub(crate) async fn show_toast(
    app: &AppHandle,
    state: &State<'_, AppState>,
    message: &str,
) -> Result<(), String> {
    let dismiss_app = app.clone();
    let toast = state
        .toast_service
        .show(message, move |dismissed| {
            if let Err(e) = dismiss_app.emit("toast:dismiss", &dismissed) {
                tracing::warn!("Failed to emit toast:dismiss: {}", e);
            }
        })
        .await;

    app.emit("toast:show", &toast)
        .map_err(|e| format!("Failed to emit toast:show: {}", e))
}

/// Gets the currently visible toast, if any.
#[tauri::command]
pub async fn get_current_toast(state: State<'_, AppState>) -> Result<Option<Toast>, String> {
    Ok(state.toast_service.current().await)
}
