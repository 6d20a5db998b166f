//! Configuration service.
//!
//! Loads the application configuration from `config.toml`, writing the
//! defaults out on first run so users have a file to edit. The parsed
//! config is cached behind an `RwLock`.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use ai4support_core::chat::{DEFAULT_CANNED_REPLY, DEFAULT_GREETING};
use ai4support_core::error::{Result, SupportError};
use serde::{Deserialize, Serialize};

use crate::paths::SupportPaths;
use crate::storage::AtomicTomlStore;

/// Chat tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// Delay before the canned assistant reply lands, in milliseconds.
    pub reply_delay_ms: u64,
    /// Greeting seeded into a fresh conversation.
    pub greeting: String,
    /// The fixed assistant reply.
    pub canned_reply: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: 250,
            greeting: DEFAULT_GREETING.to_string(),
            canned_reply: DEFAULT_CANNED_REPLY.to_string(),
        }
    }
}

/// Toast tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
    /// Auto-dismiss delay, in milliseconds.
    pub dismiss_ms: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self { dismiss_ms: 3500 }
    }
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub chat: ChatSettings,
    pub toast: ToastSettings,
}

/// Loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config: Arc<RwLock<Option<AppConfig>>>,
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service reading from `base_dir/config.toml`, or the
    /// default config dir when `None`. Loading is lazy.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => SupportPaths::config_dir()
                .map_err(|e| SupportError::config(e.to_string()))?,
        };
        Ok(Self {
            config: Arc::new(RwLock::new(None)),
            path: dir.join("config.toml"),
        })
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// A missing file is created with defaults; a broken file falls back to
    /// defaults without overwriting it.
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().expect("config lock poisoned");
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let mut write_lock = self.config.write().expect("config lock poisoned");
        *write_lock = Some(loaded.clone());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().expect("config lock poisoned");
        *write_lock = None;
    }

    fn load_config(&self) -> Result<AppConfig> {
        let store = AtomicTomlStore::<AppConfig>::new(self.path.clone());
        match store.load()? {
            Some(config) => Ok(config),
            None => {
                let config = AppConfig::default();
                store.save(&config)?;
                Ok(config)
            }
        }
    }
}
