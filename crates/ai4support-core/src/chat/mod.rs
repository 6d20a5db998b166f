//! Chat domain: message types and the append-only conversation log.

pub mod log;
pub mod model;

pub use log::{ChatLog, ChatPhase, DEFAULT_CANNED_REPLY, DEFAULT_GREETING};
pub use model::{ChatMessage, Sender};
