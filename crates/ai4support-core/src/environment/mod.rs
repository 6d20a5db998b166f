//! Environment tree: a forest of named, nestable folders holding uploaded
//! documents and assigned users.
//!
//! All mutations are structural copy-on-write: the path from the affected
//! node up to its root is rebuilt and every untouched subtree is shared via
//! `Arc`. No node is ever mutated in place.

pub mod color;
pub mod model;
pub mod tree;

pub use color::{ENV_COLORS, pick_next_color};
pub use model::{DocumentRef, EnvironmentNode};
pub use tree::{EnvironmentForest, FlatEnvironment};
