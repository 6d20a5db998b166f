use std::sync::Arc;

use ai4support_core::environment::{EnvironmentNode, FlatEnvironment};
use ai4support_core::knowledge::KnowledgeBase;
use tauri::{AppHandle, State};

use crate::app::AppState;
use crate::commands::toasts::show_toast;

/// Creates a root environment in the knowledge base.
#[tauri::command]
pub async fn add_environment(
    name: String,
    state: State<'_, AppState>,
) -> Result<Arc<EnvironmentNode>, String> {
    state
        .knowledge_usecase
        .add_environment(&name)
        .await
        .map_err(|e| e.to_string())
}

/// Creates a sub-environment under an existing one.
#[tauri::command]
pub async fn add_child_environment(
    parent_id: String,
    name: String,
    state: State<'_, AppState>,
) -> Result<Arc<EnvironmentNode>, String> {
    state
        .knowledge_usecase
        .add_child_environment(&parent_id, &name)
        .await
        .map_err(|e| e.to_string())
}

/// Toggles an environment's expanded/collapsed state in the sidebar.
#[tauri::command]
pub async fn toggle_environment(id: String, state: State<'_, AppState>) -> Result<(), String> {
    state
        .knowledge_usecase
        .toggle_environment(&id)
        .await
        .map_err(|e| e.to_string())
}

/// Replaces an environment's assigned users from a comma-separated draft
/// and shows the confirmation toast.
#[tauri::command]
pub async fn assign_environment_users(
    env_id: String,
    users: String,
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let message = state
        .knowledge_usecase
        .assign_users(&env_id, &users)
        .await
        .map_err(|e| e.to_string())?;

    show_toast(&app, &state, &message).await
}

/// Gets the whole knowledge base (default documents plus the tree).
#[tauri::command]
pub async fn list_knowledge_base(state: State<'_, AppState>) -> Result<KnowledgeBase, String> {
    Ok(state.knowledge_usecase.snapshot().await)
}

/// Gets the pre-order, depth-annotated environment list for the upload
/// modal's selection checkboxes.
#[tauri::command]
pub async fn flatten_environments(
    state: State<'_, AppState>,
) -> Result<Vec<FlatEnvironment>, String> {
    Ok(state.knowledge_usecase.flatten().await)
}
