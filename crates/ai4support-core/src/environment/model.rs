use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Reference to an uploaded document.
///
/// The file itself lives in the per-run document store; `path` points into
/// that store and becomes dangling when the application exits. Nothing here
/// is durable by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Unique identifier for the document.
    pub id: String,
    /// Display name, kept verbatim from the picked file.
    pub name: String,
    /// Location of the staged bytes inside the document store.
    pub path: PathBuf,
    /// Timestamp when the file was uploaded.
    pub uploaded_at: i64,
}

impl DocumentRef {
    /// Creates a new reference with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            path,
            uploaded_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// A single environment: a named folder in the knowledge base.
///
/// Forms an ordered forest. Children are always listed (and rendered)
/// before the node's own documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentNode {
    /// Unique identifier, unique across the entire forest.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the node is expanded in the sidebar.
    pub is_open: bool,
    /// Palette color assigned at creation time.
    pub color: String,
    /// Users assigned to this environment, deduplicated, order preserved.
    pub assigned_users: Vec<String>,
    /// Documents attached to this environment, in upload order.
    pub documents: Vec<DocumentRef>,
    /// Nested environments. Shared by reference with previous versions of
    /// the forest when untouched by a mutation.
    pub children: Vec<Arc<EnvironmentNode>>,
}

impl EnvironmentNode {
    /// Creates a new, open, empty environment with a fresh id.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            is_open: true,
            color: color.into(),
            assigned_users: Vec::new(),
            documents: Vec::new(),
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_open_and_empty() {
        let node = EnvironmentNode::new("Billing", "#F87171");
        assert!(node.is_open);
        assert!(node.assigned_users.is_empty());
        assert!(node.documents.is_empty());
        assert!(node.children.is_empty());
        assert_eq!(node.color, "#F87171");
    }

    #[test]
    fn test_document_name_kept_verbatim() {
        let doc = DocumentRef::new("Quarterly Report (final) v2.PDF", PathBuf::from("/tmp/x"));
        assert_eq!(doc.name, "Quarterly Report (final) v2.PDF");
    }
}
