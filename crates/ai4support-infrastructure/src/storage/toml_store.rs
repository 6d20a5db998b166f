//! Atomic TOML file persistence.
//!
//! Writes go to a temporary file in the same directory, are fsynced, then
//! renamed over the target, so readers never observe a torn file. A
//! sidecar `.lock` file with an fs2 exclusive lock serializes updates
//! across processes.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use ai4support_core::error::{Result, SupportError};
use serde::{Serialize, de::DeserializeOwned};

/// A handle to a single TOML-serialized value on disk.
#[derive(Debug, Clone)]
pub struct AtomicTomlStore<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a store handle for the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// A missing or empty file is `Ok(None)`; a present but unparseable
    /// file is an error so callers can decide whether to fall back.
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves the value atomically (tmp file + fsync + rename).
    pub fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let rendered = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(rendered.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Read-modify-write under an exclusive lock.
    ///
    /// Starts from `default_value` when the file does not exist yet.
    pub fn update(&self, default_value: T, f: impl FnOnce(&mut T) -> Result<()>) -> Result<()> {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| SupportError::io("store path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| SupportError::io("store path has no file name"))?;
        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Guard holding an exclusive lock on the store's sidecar lock file.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| SupportError::io(format!("failed to acquire lock: {e}")))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock happens when the handle closes; removing the sidecar is
        // best effort.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestState {
        label: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = AtomicTomlStore::<TestState>::new(temp_dir.path().join("state.toml"));

        let state = TestState {
            label: "hello".to_string(),
            count: 7,
        };
        store.save(&state).unwrap();

        assert_eq!(store.load().unwrap().unwrap(), state);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = AtomicTomlStore::<TestState>::new(temp_dir.path().join("missing.toml"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_garbage_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.toml");
        fs::write(&path, "not = [valid").unwrap();
        let store = AtomicTomlStore::<TestState>::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_update_starts_from_default_and_accumulates() {
        let temp_dir = TempDir::new().unwrap();
        let store = AtomicTomlStore::<TestState>::new(temp_dir.path().join("state.toml"));
        let default = TestState {
            label: "d".to_string(),
            count: 0,
        };

        store
            .update(default.clone(), |state| {
                state.count += 10;
                Ok(())
            })
            .unwrap();
        store
            .update(default, |state| {
                state.count += 5;
                Ok(())
            })
            .unwrap();

        assert_eq!(store.load().unwrap().unwrap().count, 15);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.toml");
        let store = AtomicTomlStore::<TestState>::new(path.clone());
        store
            .save(&TestState {
                label: "x".to_string(),
                count: 1,
            })
            .unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".state.toml.tmp").exists());
    }
}
