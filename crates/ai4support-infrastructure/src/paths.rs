//! Unified path management for Ai4Support files.
//!
//! All configuration and session data live under a single per-user
//! directory so every storage adapter agrees on locations.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/ai4support/        # Config directory
//! ├── config.toml              # Application configuration
//! ├── session.toml             # Stored role
//! └── logs/                    # Application logs
//!     └── ai4support-desktop.log.YYYY-MM-DD
//! ```
//!
//! Uploaded documents deliberately do NOT live here; they go into a per-run
//! temporary directory owned by the document store.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Ai4Support.
pub struct SupportPaths;

impl SupportPaths {
    /// Returns the Ai4Support configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/ai4support/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("ai4support"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the stored-role session file.
    pub fn session_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("session.toml"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = SupportPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("ai4support"));
    }

    #[test]
    fn test_config_file() {
        let config_file = SupportPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = SupportPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_session_file() {
        let session_file = SupportPaths::session_file().unwrap();
        assert!(session_file.ends_with("session.toml"));
        let config_dir = SupportPaths::config_dir().unwrap();
        assert!(session_file.starts_with(&config_dir));
    }

    #[test]
    fn test_logs_dir() {
        let logs_dir = SupportPaths::logs_dir().unwrap();
        assert!(logs_dir.ends_with("logs"));
        let config_dir = SupportPaths::config_dir().unwrap();
        assert!(logs_dir.starts_with(&config_dir));
    }
}
