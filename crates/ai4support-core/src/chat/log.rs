//! The append-only conversation log.
//!
//! Messages are never mutated or removed once appended. The log also tracks
//! how many assistant replies are still pending, which is what distinguishes
//! the two observable chat phases.

use crate::chat::model::{ChatMessage, Sender};
use crate::error::{Result, SupportError};
use serde::{Deserialize, Serialize};

/// Greeting seeded into every fresh log.
pub const DEFAULT_GREETING: &str = "Hi! How can I help you today?";

/// The fixed assistant reply.
pub const DEFAULT_CANNED_REPLY: &str = "Thanks — noted. (UI-only prototype)";

/// Observable state of the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatPhase {
    /// No reply pending.
    Idle,
    /// At least one human message sent whose reply has not landed yet.
    AwaitingReply,
}

/// Append-only message log.
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    pending_replies: usize,
}

impl ChatLog {
    /// Creates a log seeded with the given greeting.
    pub fn new(greeting: &str) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
            pending_replies: 0,
        }
    }

    /// Appends a human message.
    ///
    /// The draft is trimmed first; a whitespace-only draft is rejected
    /// without touching the log. On success the reply counter goes up and
    /// the caller is expected to schedule exactly one `append_reply`.
    pub fn append_human(&mut self, draft: &str) -> Result<&ChatMessage> {
        let text = draft.trim();
        if text.is_empty() {
            return Err(SupportError::validation("message draft is empty"));
        }

        self.messages.push(ChatMessage::human(text));
        self.pending_replies += 1;
        Ok(self.messages.last().expect("just pushed"))
    }

    /// Appends an assistant reply and settles one pending send.
    pub fn append_reply(&mut self, text: &str) -> &ChatMessage {
        self.messages.push(ChatMessage::assistant(text));
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.messages.last().expect("just pushed")
    }

    /// All messages, in append order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The current phase.
    pub fn phase(&self) -> ChatPhase {
        if self.pending_replies > 0 {
            ChatPhase::AwaitingReply
        } else {
            ChatPhase::Idle
        }
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new(DEFAULT_GREETING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_log_contains_only_the_greeting() {
        let log = ChatLog::default();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].sender, Sender::Assistant);
        assert_eq!(log.messages()[0].text, DEFAULT_GREETING);
        assert_eq!(log.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_whitespace_draft_is_rejected() {
        let mut log = ChatLog::default();
        assert!(log.append_human("   ").is_err());
        assert!(log.append_human("").is_err());
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_send_appends_trimmed_text_and_awaits_reply() {
        let mut log = ChatLog::default();
        let message = log.append_human("  hello  ").unwrap();
        assert_eq!(message.text, "hello");
        assert_eq!(message.sender, Sender::Human);
        assert_eq!(log.phase(), ChatPhase::AwaitingReply);
    }

    #[test]
    fn test_reply_settles_the_pending_send() {
        let mut log = ChatLog::default();
        log.append_human("hello").unwrap();
        let reply = log.append_reply(DEFAULT_CANNED_REPLY);
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, DEFAULT_CANNED_REPLY);
        assert_eq!(log.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_overlapping_sends_queue_independently() {
        let mut log = ChatLog::default();
        log.append_human("first").unwrap();
        log.append_human("second").unwrap();
        assert_eq!(log.phase(), ChatPhase::AwaitingReply);
        log.append_reply(DEFAULT_CANNED_REPLY);
        assert_eq!(log.phase(), ChatPhase::AwaitingReply);
        log.append_reply(DEFAULT_CANNED_REPLY);
        assert_eq!(log.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_log_is_append_only() {
        let mut log = ChatLog::default();
        log.append_human("hello").unwrap();
        let before: Vec<String> = log.messages().iter().map(|m| m.id.clone()).collect();
        log.append_reply("reply");
        let after: Vec<String> = log.messages().iter().map(|m| m.id.clone()).collect();
        assert_eq!(&after[..before.len()], &before[..]);
    }
}
