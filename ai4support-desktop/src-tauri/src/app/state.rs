use std::sync::Arc;

use ai4support_application::{AuthUseCase, ChatService, KnowledgeUseCase, ToastService};
use ai4support_infrastructure::{AppConfig, ConfigService};

/// Application state shared across Tauri commands.
pub struct AppState {
    pub auth_usecase: Arc<AuthUseCase>,
    pub chat_service: Arc<ChatService>,
    pub knowledge_usecase: Arc<KnowledgeUseCase>,
    pub toast_service: Arc<ToastService>,
    pub config_service: Arc<ConfigService>,
    /// The config snapshot the services were built from.
    pub config: AppConfig,
}
