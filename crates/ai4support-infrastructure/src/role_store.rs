//! File-backed implementation of the role repository.
//!
//! The stored role is a single TOML value under the config dir, cached in
//! memory so reads never touch the disk. Matches the browser-storage
//! semantics of the original: absent or unreadable values are simply
//! "not logged in".

use std::path::PathBuf;
use std::sync::Arc;

use ai4support_core::auth::Role;
use ai4support_core::error::{Result, SupportError};
use ai4support_core::session::{RoleRepository, SessionState};
use tokio::sync::Mutex;

use crate::paths::SupportPaths;
use crate::storage::AtomicTomlStore;

/// Role store persisting to `session.toml`.
#[derive(Clone)]
pub struct FileRoleStore {
    /// Cached session state.
    state: Arc<Mutex<SessionState>>,
    store: AtomicTomlStore<SessionState>,
}

impl FileRoleStore {
    /// Creates a store rooted at `base_dir`, or at the default config dir
    /// when `None`.
    ///
    /// An unparseable session file (for example a hand-edited role value)
    /// is logged and treated as a logged-out state rather than an error.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => SupportPaths::config_dir()
                .map_err(|e| SupportError::config(e.to_string()))?,
        };
        let store = AtomicTomlStore::new(dir.join("session.toml"));

        let initial = match store.load() {
            Ok(Some(state)) => state,
            Ok(None) => SessionState::default(),
            Err(e) => {
                tracing::warn!("Unreadable session file, treating as logged out: {}", e);
                SessionState::default()
            }
        };

        Ok(Self {
            state: Arc::new(Mutex::new(initial)),
            store,
        })
    }

    async fn persist(&self, state: SessionState) -> Result<()> {
        {
            let mut cached = self.state.lock().await;
            *cached = state.clone();
        }

        // File IO stays off the async runtime threads.
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.save(&state))
            .await
            .map_err(|e| SupportError::internal(format!("failed to join save task: {e}")))?
    }
}

#[async_trait::async_trait]
impl RoleRepository for FileRoleStore {
    async fn get_role(&self) -> Option<Role> {
        self.state.lock().await.role
    }

    async fn set_role(&self, role: Role) -> Result<()> {
        self.persist(SessionState::with_role(role)).await
    }

    async fn clear(&self) -> Result<()> {
        self.persist(SessionState::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fresh_store_is_logged_out() {
        let dir = TempDir::new().unwrap();
        let store = FileRoleStore::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(store.get_role().await.is_none());
    }

    #[tokio::test]
    async fn test_set_get_clear_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileRoleStore::new(Some(dir.path().to_path_buf())).unwrap();

        store.set_role(Role::Admin).await.unwrap();
        assert_eq!(store.get_role().await, Some(Role::Admin));

        store.clear().await.unwrap();
        assert!(store.get_role().await.is_none());
    }

    #[tokio::test]
    async fn test_role_survives_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileRoleStore::new(Some(dir.path().to_path_buf())).unwrap();
            store.set_role(Role::User).await.unwrap();
        }

        let reopened = FileRoleStore::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(reopened.get_role().await, Some(Role::User));
    }

    #[tokio::test]
    async fn test_invalid_stored_value_reads_as_none() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("session.toml"), "role = \"superuser\"\n").unwrap();

        let store = FileRoleStore::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(store.get_role().await.is_none());
    }
}
