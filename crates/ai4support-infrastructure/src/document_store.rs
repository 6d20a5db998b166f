//! Per-run document storage.
//!
//! Uploaded bytes are staged into a temporary directory owned by the store;
//! when the process exits the directory (and every staged document) goes
//! with it. This mirrors the blob-URL lifetime of the original prototype:
//! documents are reachable for the session only.

use std::path::Path;

use ai4support_core::environment::DocumentRef;
use ai4support_core::error::{Result, SupportError};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use uuid::Uuid;

/// Preview payload for the frontend's view/download buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPreview {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    /// Base64-encoded file content.
    pub data: String,
}

/// Stages uploaded files in a per-run temporary directory.
pub struct FileDocumentStore {
    /// Owns the directory; dropping the store deletes every staged file.
    dir: TempDir,
}

impl FileDocumentStore {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("ai4support-docs-")
            .tempdir()?;
        tracing::debug!("Document store at {:?}", dir.path());
        Ok(Self { dir })
    }

    /// Writes `bytes` into the store and returns a reference to them.
    ///
    /// The display name is preserved verbatim in the returned ref; on disk
    /// the file is keyed by id so identical names never collide.
    pub fn stage(&self, name: &str, bytes: &[u8]) -> Result<DocumentRef> {
        let id = Uuid::new_v4().to_string();
        let path = self.dir.path().join(&id);
        std::fs::write(&path, bytes)?;

        let mut doc = DocumentRef::new(name, path);
        doc.id = id;
        Ok(doc)
    }

    /// Reads a staged document's raw bytes.
    pub fn read(&self, doc: &DocumentRef) -> Result<Vec<u8>> {
        self.read_guarded(&doc.path)
    }

    /// Builds the preview payload (name, MIME type, size, base64 data).
    pub fn preview(&self, doc: &DocumentRef) -> Result<DocumentPreview> {
        let bytes = self.read_guarded(&doc.path)?;
        let mime_type = mime_guess::from_path(&doc.name)
            .first_or_octet_stream()
            .to_string();

        Ok(DocumentPreview {
            name: doc.name.clone(),
            mime_type,
            size: bytes.len() as u64,
            data: BASE64_STANDARD.encode(&bytes),
        })
    }

    fn read_guarded(&self, path: &Path) -> Result<Vec<u8>> {
        // Refs are constructed by this store, but a stale ref from a
        // previous run must not read arbitrary paths.
        if !path.starts_with(self.dir.path()) {
            return Err(SupportError::not_found(
                "document",
                path.to_string_lossy().to_string(),
            ));
        }
        Ok(std::fs::read(path)?)
    }
}
