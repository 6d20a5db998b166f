use ai4support_application::StagedUpload;
use ai4support_core::environment::DocumentRef;
use ai4support_infrastructure::DocumentPreview;
use tauri::{AppHandle, State};

use crate::app::AppState;
use crate::commands::toasts::show_toast;

/// Uploads files to the selected environments (the upload modal flow) and
/// shows the confirmation toast.
#[tauri::command]
pub async fn upload_documents(
    env_ids: Vec<String>,
    files: Vec<StagedUpload>,
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<Vec<DocumentRef>, String> {
    let outcome = state
        .knowledge_usecase
        .upload_to_environments(&env_ids, &files)
        .await
        .map_err(|e| e.to_string())?;

    show_toast(&app, &state, &outcome.toast_message).await?;
    Ok(outcome.documents)
}

/// Uploads files to the default documents list, with a toast.
#[tauri::command]
pub async fn upload_default_documents(
    files: Vec<StagedUpload>,
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<Vec<DocumentRef>, String> {
    let outcome = state
        .knowledge_usecase
        .upload_to_default(&files)
        .await
        .map_err(|e| e.to_string())?;

    show_toast(&app, &state, &outcome.toast_message).await?;
    Ok(outcome.documents)
}

/// Uploads files straight into a single environment (the sidebar "+"
/// button). No toast for this path.
#[tauri::command]
pub async fn upload_to_environment(
    env_id: String,
    files: Vec<StagedUpload>,
    state: State<'_, AppState>,
) -> Result<Vec<DocumentRef>, String> {
    state
        .knowledge_usecase
        .upload_to_environment(&env_id, &files)
        .await
        .map_err(|e| e.to_string())
}

/// Gets the preview payload for a staged document.
#[tauri::command]
pub async fn get_document_preview(
    document_id: String,
    state: State<'_, AppState>,
) -> Result<DocumentPreview, String> {
    state
        .knowledge_usecase
        .preview_document(&document_id)
        .await
        .map_err(|e| e.to_string())
}
