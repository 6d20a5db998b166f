use serde::{Deserialize, Serialize};

use crate::environment::{DocumentRef, EnvironmentForest, EnvironmentNode};
use std::sync::Arc;

/// The admin knowledge base.
///
/// Documents uploaded without an environment target land in
/// `default_documents`, which renders above the environment tree in the
/// sidebar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Root-level documents outside any environment.
    pub default_documents: Vec<DocumentRef>,
    /// The environment forest.
    pub environments: EnvironmentForest,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends documents to the default list.
    pub fn add_default_documents(&mut self, documents: &[DocumentRef]) {
        self.default_documents.extend_from_slice(documents);
    }

    /// Looks up a document by id, checking the default list first and then
    /// every environment in pre-order.
    pub fn find_document(&self, document_id: &str) -> Option<DocumentRef> {
        if let Some(doc) = self.default_documents.iter().find(|d| d.id == document_id) {
            return Some(doc.clone());
        }
        fn walk(nodes: &[Arc<EnvironmentNode>], id: &str) -> Option<DocumentRef> {
            for node in nodes {
                if let Some(doc) = node.documents.iter().find(|d| d.id == id) {
                    return Some(doc.clone());
                }
                if let Some(doc) = walk(&node.children, id) {
                    return Some(doc);
                }
            }
            None
        }
        walk(self.environments.roots(), document_id)
    }
}

/// Builds the confirmation toast for an upload.
///
/// Destination text: a single environment is quoted by name, up to five are
/// quoted and comma-joined, and beyond that the count collapses to
/// `5+ environments`. A single file is named; multiple files become a count.
pub fn upload_toast_message(file_names: &[&str], env_names: &[&str]) -> String {
    let destination = match env_names.len() {
        1 => format!("\"{}\"", env_names[0]),
        n if n <= 5 => env_names
            .iter()
            .map(|name| format!("\"{name}\""))
            .collect::<Vec<_>>()
            .join(", "),
        _ => "5+ environments".to_string(),
    };

    if file_names.len() == 1 {
        format!("Uploaded \"{}\" to {}", file_names[0], destination)
    } else {
        format!("Uploaded {} files to {}", file_names.len(), destination)
    }
}
