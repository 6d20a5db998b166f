use std::sync::Arc;
use std::time::Duration;

use ai4support_application::{AuthUseCase, ChatService, KnowledgeUseCase, ToastService};
use ai4support_core::session::RoleRepository;
use ai4support_infrastructure::{ConfigService, FileDocumentStore, FileRoleStore};

use crate::app::AppState;

pub struct AppBootstrap {
    pub app_state: AppState,
}

pub async fn bootstrap() -> AppBootstrap {
    // Composition Root: Create the concrete repository instances
    let config_service = Arc::new(
        ConfigService::new(None).expect("Failed to initialize config service"),
    );
    let config = config_service.get_config();
    tracing::info!(
        "[Bootstrap] Config loaded (reply delay {}ms, toast dismiss {}ms)",
        config.chat.reply_delay_ms,
        config.toast.dismiss_ms
    );

    let role_store_concrete =
        Arc::new(FileRoleStore::new(None).expect("Failed to initialize role store"));
    let role_store: Arc<dyn RoleRepository> = role_store_concrete.clone();
    if let Some(role) = role_store.get_role().await {
        tracing::info!("[Bootstrap] Restored session role: {}", role);
    }

    let document_store =
        Arc::new(FileDocumentStore::new().expect("Failed to initialize document store"));

    let auth_usecase = Arc::new(AuthUseCase::new(role_store));
    let chat_service = Arc::new(ChatService::new(
        &config.chat.greeting,
        &config.chat.canned_reply,
        Duration::from_millis(config.chat.reply_delay_ms),
    ));
    let knowledge_usecase = Arc::new(KnowledgeUseCase::new(document_store));
    let toast_service = Arc::new(ToastService::new(Duration::from_millis(
        config.toast.dismiss_ms,
    )));

    let app_state = AppState {
        auth_usecase,
        chat_service,
        knowledge_usecase,
        toast_service,
        config_service,
        config,
    };

    AppBootstrap { app_state }
}
