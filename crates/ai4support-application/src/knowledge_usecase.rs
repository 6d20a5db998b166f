//! Knowledge base use case: environment management and document uploads.
//!
//! Wraps the in-memory [`KnowledgeBase`] behind a mutex and pairs it with
//! the document store, so every upload stages bytes on disk before the
//! reference is attached to the tree.

use std::sync::Arc;

use ai4support_core::environment::{DocumentRef, EnvironmentNode, FlatEnvironment};
use ai4support_core::error::{Result, SupportError};
use ai4support_core::knowledge::{KnowledgeBase, upload_toast_message};
use ai4support_infrastructure::{DocumentPreview, FileDocumentStore};
use serde::Deserialize;
use tokio::sync::Mutex;

/// A file picked for upload: display name plus raw bytes.
#[derive(Debug, Clone, Deserialize)]
pub struct StagedUpload {
    pub name: String,
    pub data: Vec<u8>,
}

/// Result of an upload: the staged refs plus the confirmation toast text.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub documents: Vec<DocumentRef>,
    pub toast_message: String,
}

/// Use case over the admin knowledge base.
pub struct KnowledgeUseCase {
    base: Mutex<KnowledgeBase>,
    document_store: Arc<FileDocumentStore>,
}

impl KnowledgeUseCase {
    pub fn new(document_store: Arc<FileDocumentStore>) -> Self {
        Self {
            base: Mutex::new(KnowledgeBase::new()),
            document_store,
        }
    }

    /// Adds a root environment.
    pub async fn add_environment(&self, name: &str) -> Result<Arc<EnvironmentNode>> {
        let mut base = self.base.lock().await;
        let node = base.environments.add_root(name)?;
        tracing::info!("Added environment '{}'", node.name);
        Ok(node)
    }

    /// Adds a sub-environment under `parent_id`.
    pub async fn add_child_environment(
        &self,
        parent_id: &str,
        name: &str,
    ) -> Result<Arc<EnvironmentNode>> {
        let mut base = self.base.lock().await;
        let node = base.environments.add_child(parent_id, name)?;
        tracing::info!("Added sub-environment '{}'", node.name);
        Ok(node)
    }

    /// Toggles an environment's expanded state.
    pub async fn toggle_environment(&self, id: &str) -> Result<()> {
        self.base.lock().await.environments.toggle_open(id)
    }

    /// Replaces the assigned users of an environment from a comma-separated
    /// draft, returning the confirmation toast text.
    ///
    /// Entries are trimmed, empties dropped, and duplicates collapse to the
    /// first occurrence.
    pub async fn assign_users(&self, env_id: &str, draft: &str) -> Result<String> {
        let users: Vec<String> = draft
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect();

        let mut base = self.base.lock().await;
        base.environments.assign_users(env_id, &users)?;
        let name = base
            .environments
            .find(env_id)
            .map(|node| node.name.clone())
            .ok_or_else(|| SupportError::not_found("environment", env_id))?;
        Ok(format!("Assigned users updated for \"{name}\""))
    }

    /// Uploads files to one or more environments (the upload modal flow).
    ///
    /// At least one file and one environment are required; every target id
    /// is validated before any attachment, so a bad id leaves the tree
    /// untouched.
    pub async fn upload_to_environments(
        &self,
        env_ids: &[String],
        files: &[StagedUpload],
    ) -> Result<UploadOutcome> {
        if env_ids.is_empty() {
            return Err(SupportError::validation("no environments selected"));
        }
        let documents = self.stage_all(files)?;

        let mut base = self.base.lock().await;
        base.environments.attach_documents_many(env_ids, &documents)?;

        let env_names: Vec<String> = env_ids
            .iter()
            .filter_map(|id| base.environments.find(id))
            .map(|node| node.name.clone())
            .collect();
        let toast_message = toast_for(&documents, &env_names);
        tracing::info!(
            "Uploaded {} file(s) to {} environment(s)",
            documents.len(),
            env_ids.len()
        );

        Ok(UploadOutcome {
            documents,
            toast_message,
        })
    }

    /// Uploads files to the default documents list.
    pub async fn upload_to_default(&self, files: &[StagedUpload]) -> Result<UploadOutcome> {
        let documents = self.stage_all(files)?;

        let mut base = self.base.lock().await;
        base.add_default_documents(&documents);

        let toast_message = toast_for(&documents, &["Default Documents".to_string()]);
        Ok(UploadOutcome {
            documents,
            toast_message,
        })
    }

    /// Uploads files straight into a single environment (the sidebar "+"
    /// flow). No toast is produced for this path.
    pub async fn upload_to_environment(
        &self,
        env_id: &str,
        files: &[StagedUpload],
    ) -> Result<Vec<DocumentRef>> {
        let documents = self.stage_all(files)?;
        let mut base = self.base.lock().await;
        base.environments.attach_documents(env_id, &documents)?;
        Ok(documents)
    }

    /// A point-in-time copy of the whole knowledge base.
    pub async fn snapshot(&self) -> KnowledgeBase {
        self.base.lock().await.clone()
    }

    /// Pre-order, depth-annotated environment list for selection UIs.
    pub async fn flatten(&self) -> Vec<FlatEnvironment> {
        self.base.lock().await.environments.flatten()
    }

    /// Builds the preview payload for a staged document.
    pub async fn preview_document(&self, document_id: &str) -> Result<DocumentPreview> {
        let doc = self
            .base
            .lock()
            .await
            .find_document(document_id)
            .ok_or_else(|| SupportError::not_found("document", document_id))?;
        self.document_store.preview(&doc)
    }

    fn stage_all(&self, files: &[StagedUpload]) -> Result<Vec<DocumentRef>> {
        if files.is_empty() {
            return Err(SupportError::validation("no files selected"));
        }
        files
            .iter()
            .map(|file| self.document_store.stage(&file.name, &file.data))
            .collect()
    }
}

fn toast_for(documents: &[DocumentRef], env_names: &[String]) -> String {
    let file_names: Vec<&str> = documents.iter().map(|d| d.name.as_str()).collect();
    let env_names: Vec<&str> = env_names.iter().map(String::as_str).collect();
    upload_toast_message(&file_names, &env_names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usecase() -> KnowledgeUseCase {
        KnowledgeUseCase::new(Arc::new(FileDocumentStore::new().unwrap()))
    }

    fn upload(name: &str) -> StagedUpload {
        StagedUpload {
            name: name.to_string(),
            data: format!("contents of {name}").into_bytes(),
        }
    }

    #[tokio::test]
    async fn test_environment_tree_building() {
        let kb = usecase();
        let root = kb.add_environment("Billing").await.unwrap();
        let child = kb.add_child_environment(&root.id, "Refunds").await.unwrap();

        let flat = kb.flatten().await;
        let names: Vec<&str> = flat.iter().map(|f| f.environment.name.as_str()).collect();
        assert_eq!(names, ["Billing", "Refunds"]);
        assert_eq!(flat[1].depth, 1);
        assert_eq!(flat[1].environment.id, child.id);
    }

    #[tokio::test]
    async fn test_upload_to_environments_stages_attaches_and_toasts() {
        let kb = usecase();
        let root = kb.add_environment("Billing").await.unwrap();

        let outcome = kb
            .upload_to_environments(&[root.id.clone()], &[upload("faq.pdf")])
            .await
            .unwrap();
        assert_eq!(outcome.toast_message, "Uploaded \"faq.pdf\" to \"Billing\"");

        let snapshot = kb.snapshot().await;
        let node = snapshot.environments.find(&root.id).unwrap();
        assert_eq!(node.documents.len(), 1);
        assert_eq!(node.documents[0].name, "faq.pdf");
    }

    #[tokio::test]
    async fn test_upload_requires_a_selection_and_files() {
        let kb = usecase();
        let root = kb.add_environment("Billing").await.unwrap();

        let err = kb
            .upload_to_environments(&[], &[upload("a.txt")])
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let err = kb
            .upload_to_environments(&[root.id.clone()], &[])
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_upload_to_missing_environment_stages_nothing_in_the_tree() {
        let kb = usecase();
        let root = kb.add_environment("Billing").await.unwrap();

        let err = kb
            .upload_to_environments(
                &[root.id.clone(), "missing".to_string()],
                &[upload("a.txt")],
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        let snapshot = kb.snapshot().await;
        assert!(snapshot.environments.find(&root.id).unwrap().documents.is_empty());
    }

    #[tokio::test]
    async fn test_default_upload_lands_outside_the_tree() {
        let kb = usecase();
        let outcome = kb
            .upload_to_default(&[upload("a.txt"), upload("b.txt")])
            .await
            .unwrap();
        assert_eq!(
            outcome.toast_message,
            "Uploaded 2 files to \"Default Documents\""
        );

        let snapshot = kb.snapshot().await;
        assert_eq!(snapshot.default_documents.len(), 2);
        assert!(snapshot.environments.is_empty());
    }

    #[tokio::test]
    async fn test_sidebar_upload_attaches_without_a_toast() {
        let kb = usecase();
        let root = kb.add_environment("Billing").await.unwrap();

        let docs = kb
            .upload_to_environment(&root.id, &[upload("direct.txt")])
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);

        let snapshot = kb.snapshot().await;
        assert_eq!(
            snapshot.environments.find(&root.id).unwrap().documents[0].name,
            "direct.txt"
        );
    }

    #[tokio::test]
    async fn test_assign_users_parses_the_draft() {
        let kb = usecase();
        let root = kb.add_environment("Billing").await.unwrap();

        let toast = kb
            .assign_users(&root.id, " alice , bob ,, alice ")
            .await
            .unwrap();
        assert_eq!(toast, "Assigned users updated for \"Billing\"");

        let snapshot = kb.snapshot().await;
        assert_eq!(
            snapshot.environments.find(&root.id).unwrap().assigned_users,
            ["alice", "bob"]
        );
    }

    #[tokio::test]
    async fn test_preview_round_trips_through_the_store() {
        let kb = usecase();
        let outcome = kb.upload_to_default(&[upload("notes.txt")]).await.unwrap();

        let preview = kb
            .preview_document(&outcome.documents[0].id)
            .await
            .unwrap();
        assert_eq!(preview.name, "notes.txt");
        assert_eq!(preview.mime_type, "text/plain");

        assert!(kb.preview_document("missing").await.unwrap_err().is_not_found());
    }
}
