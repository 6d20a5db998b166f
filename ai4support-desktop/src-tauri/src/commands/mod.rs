pub mod auth;
pub mod chat;
pub mod config;
pub mod documents;
pub mod environments;
pub mod toasts;

pub use auth::*;
pub use chat::*;
pub use config::*;
pub use documents::*;
pub use environments::*;
pub use toasts::*;

pub fn handlers() -> impl Fn(tauri::ipc::Invoke<tauri::Wry>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![
        auth::login,
        auth::logout,
        auth::current_role,
        auth::check_route,
        chat::send_chat_message,
        chat::list_chat_messages,
        chat::get_chat_phase,
        environments::add_environment,
        environments::add_child_environment,
        environments::toggle_environment,
        environments::assign_environment_users,
        environments::list_knowledge_base,
        environments::flatten_environments,
        documents::upload_documents,
        documents::upload_default_documents,
        documents::upload_to_environment,
        documents::get_document_preview,
        toasts::get_current_toast,
        config::get_app_config,
        config::reload_app_config,
    ]
}
