use ai4support_core::chat::{ChatMessage, ChatPhase};
use tauri::{AppHandle, Emitter, State};

use crate::app::AppState;

/// Sends a human message and schedules the assistant reply.
///
/// The sent message is returned immediately; the reply lands later as a
/// `chat:reply` event once its delay elapses.
#[tauri::command]
pub async fn send_chat_message(
    message: String,
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<ChatMessage, String> {
    state
        .chat_service
        .send(&message, move |reply| {
            if let Err(e) = app.emit("chat:reply", &reply) {
                tracing::warn!("Failed to emit chat:reply: {}", e);
            }
        })
        .await
        .map_err(|e| e.to_string())
}

/// Lists every message in the conversation, oldest first.
#[tauri::command]
pub async fn list_chat_messages(state: State<'_, AppState>) -> Result<Vec<ChatMessage>, String> {
    Ok(state.chat_service.messages().await)
}

/// Gets the chat phase (drives the typing indicator).
#[tauri::command]
pub async fn get_chat_phase(state: State<'_, AppState>) -> Result<ChatPhase, String> {
    Ok(state.chat_service.phase().await)
}
