//! Copy-on-write operations over the environment forest.
//!
//! Every mutation rebuilds only the path from the affected node to its
//! root; sibling subtrees keep their `Arc`s. A missing target id is a real
//! error (`SupportError::NotFound`), never a silent no-op.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::environment::color::pick_next_color;
use crate::environment::model::{DocumentRef, EnvironmentNode};
use crate::error::{Result, SupportError};

/// An ordered forest of environment roots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentForest {
    roots: Vec<Arc<EnvironmentNode>>,
}

/// A node paired with its depth, produced by [`EnvironmentForest::flatten`].
#[derive(Debug, Clone, Serialize)]
pub struct FlatEnvironment {
    pub environment: Arc<EnvironmentNode>,
    pub depth: usize,
}

/// Rebuilds the path to the node with `id`, applying `f` to a copy of it.
///
/// Returns the new sibling list when the node was found somewhere below,
/// `None` otherwise. Only the spine from the target up is cloned; every
/// other `Arc` is reused.
fn rebuild_path(
    nodes: &[Arc<EnvironmentNode>],
    id: &str,
    f: &mut dyn FnMut(&mut EnvironmentNode),
) -> Option<Vec<Arc<EnvironmentNode>>> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == id {
            let mut updated = (**node).clone();
            f(&mut updated);
            let mut out = nodes.to_vec();
            out[index] = Arc::new(updated);
            return Some(out);
        }
        if let Some(children) = rebuild_path(&node.children, id, f) {
            let mut updated = (**node).clone();
            updated.children = children;
            let mut out = nodes.to_vec();
            out[index] = Arc::new(updated);
            return Some(out);
        }
    }
    None
}

impl EnvironmentForest {
    /// Creates an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root environments, in order.
    pub fn roots(&self) -> &[Arc<EnvironmentNode>] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Appends a new root environment and returns it.
    ///
    /// The color is picked from the fixed palette, preferring one not used
    /// anywhere in the forest.
    pub fn add_root(&mut self, name: &str) -> Result<Arc<EnvironmentNode>> {
        let name = Self::validated_name(name)?;
        let color = pick_next_color(&self.used_colors());
        let node = Arc::new(EnvironmentNode::new(name, color));
        self.roots.push(node.clone());
        Ok(node)
    }

    /// Creates a child under `parent_id` and returns it.
    ///
    /// The child is prepended ahead of existing children so that
    /// sub-environments always stay above the parent's documents, and the
    /// parent is re-opened so the new child is visible.
    pub fn add_child(&mut self, parent_id: &str, name: &str) -> Result<Arc<EnvironmentNode>> {
        let name = Self::validated_name(name)?;
        let color = pick_next_color(&self.used_colors());
        let child = Arc::new(EnvironmentNode::new(name, color));

        let inserted = child.clone();
        self.update(parent_id, |parent| {
            parent.is_open = true;
            parent.children.insert(0, inserted.clone());
        })?;
        Ok(child)
    }

    /// Flips the `is_open` flag of the node with `id`.
    pub fn toggle_open(&mut self, id: &str) -> Result<()> {
        self.update(id, |node| node.is_open = !node.is_open)
    }

    /// Appends documents to the node with `id`.
    ///
    /// Prior documents are never removed or reordered; names are not
    /// deduplicated.
    pub fn attach_documents(&mut self, id: &str, documents: &[DocumentRef]) -> Result<()> {
        self.update(id, |node| {
            node.documents.extend_from_slice(documents);
        })
    }

    /// Appends the same documents to every node in `ids`.
    ///
    /// All targets are validated up front so a missing id cannot leave the
    /// forest half-updated.
    pub fn attach_documents_many(&mut self, ids: &[String], documents: &[DocumentRef]) -> Result<()> {
        for id in ids {
            if self.find(id).is_none() {
                return Err(SupportError::not_found("environment", id));
            }
        }
        for id in ids {
            self.attach_documents(id, documents)?;
        }
        Ok(())
    }

    /// Replaces the assigned-user list of the node with `id`.
    ///
    /// The input is deduplicated, keeping the first occurrence of each user.
    pub fn assign_users(&mut self, id: &str, users: &[String]) -> Result<()> {
        let mut seen = HashSet::new();
        let unique: Vec<String> = users
            .iter()
            .filter(|user| seen.insert(user.as_str().to_string()))
            .cloned()
            .collect();
        self.update(id, |node| node.assigned_users = unique.clone())
    }

    /// Depth-first search for the node with `id`, first match wins.
    pub fn find(&self, id: &str) -> Option<Arc<EnvironmentNode>> {
        fn walk(nodes: &[Arc<EnvironmentNode>], id: &str) -> Option<Arc<EnvironmentNode>> {
            for node in nodes {
                if node.id == id {
                    return Some(node.clone());
                }
                if let Some(found) = walk(&node.children, id) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.roots, id)
    }

    /// Pre-order, depth-annotated view of the forest.
    ///
    /// Parents come strictly before their descendants and sibling order is
    /// preserved; this feeds the flat selection list in the upload modal.
    pub fn flatten(&self) -> Vec<FlatEnvironment> {
        fn walk(nodes: &[Arc<EnvironmentNode>], depth: usize, out: &mut Vec<FlatEnvironment>) {
            for node in nodes {
                out.push(FlatEnvironment {
                    environment: node.clone(),
                    depth,
                });
                walk(&node.children, depth + 1, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.roots, 0, &mut out);
        out
    }

    /// Every color currently used anywhere in the forest.
    pub fn used_colors(&self) -> HashSet<String> {
        fn walk(nodes: &[Arc<EnvironmentNode>], out: &mut HashSet<String>) {
            for node in nodes {
                out.insert(node.color.clone());
                walk(&node.children, out);
            }
        }
        let mut out = HashSet::new();
        walk(&self.roots, &mut out);
        out
    }

    fn update(&mut self, id: &str, mut f: impl FnMut(&mut EnvironmentNode)) -> Result<()> {
        match rebuild_path(&self.roots, id, &mut f) {
            Some(roots) => {
                self.roots = roots;
                Ok(())
            }
            None => Err(SupportError::not_found("environment", id)),
        }
    }

    fn validated_name(name: &str) -> Result<&str> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SupportError::validation("environment name is empty"));
        }
        Ok(trimmed)
    }
}
