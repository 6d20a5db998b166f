//! Chat message types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message typed by the person at the keyboard.
    Human,
    /// Message produced by the (canned) assistant.
    Assistant,
}

/// A single message in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier for the message.
    pub id: String,
    /// Who authored the message.
    pub sender: Sender,
    /// The message text.
    pub text: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates a human-authored message.
    pub fn human(text: impl Into<String>) -> Self {
        Self::new(Sender::Human, text)
    }

    /// Creates an assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_get_unique_ids() {
        let a = ChatMessage::human("one");
        let b = ChatMessage::human("one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&Sender::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
