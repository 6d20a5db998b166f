//! Infrastructure layer for Ai4Support.
//!
//! Storage adapters and platform plumbing: the file-backed role store, the
//! per-run document store, configuration loading, and path management.

pub mod config_service;
pub mod document_store;
pub mod paths;
pub mod role_store;
pub mod storage;

pub use config_service::{AppConfig, ChatSettings, ConfigService, ToastSettings};
pub use document_store::{DocumentPreview, FileDocumentStore};
pub use paths::SupportPaths;
pub use role_store::FileRoleStore;
