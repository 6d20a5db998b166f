//! Application layer for Ai4Support.
//!
//! This crate provides use case implementations that coordinate between
//! domain and infrastructure layers to implement application-level
//! business logic.

pub mod auth_usecase;
pub mod chat_service;
pub mod knowledge_usecase;
pub mod toast_service;

pub use auth_usecase::AuthUseCase;
pub use chat_service::ChatService;
pub use knowledge_usecase::{KnowledgeUseCase, StagedUpload, UploadOutcome};
pub use toast_service::{Toast, ToastService};
