//! Knowledge base: the default document list plus the environment forest,
//! and the toast text rules for upload confirmations.

pub mod model;

pub use model::{KnowledgeBase, upload_toast_message};
