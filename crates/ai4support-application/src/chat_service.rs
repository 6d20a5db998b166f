//! Chat use case: the shared conversation log plus the delayed canned
//! reply.
//!
//! Every send schedules exactly one reply task. The tasks are tracked so
//! shutdown can abort anything still pending; a reply must never land on a
//! log nobody is looking at anymore.

use std::sync::Arc;
use std::time::Duration;

use ai4support_core::chat::{ChatLog, ChatMessage, ChatPhase};
use ai4support_core::error::Result;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Shared chat state and reply scheduling.
pub struct ChatService {
    log: Arc<Mutex<ChatLog>>,
    reply_delay: Duration,
    canned_reply: String,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl ChatService {
    /// Creates a service with the given greeting, reply text, and delay.
    pub fn new(greeting: &str, canned_reply: &str, reply_delay: Duration) -> Self {
        Self {
            log: Arc::new(Mutex::new(ChatLog::new(greeting))),
            reply_delay,
            canned_reply: canned_reply.to_string(),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Sends a human message.
    ///
    /// The message is appended immediately and returned; the canned reply
    /// is scheduled and handed to `on_reply` once it lands. Overlapping
    /// sends each get their own timer, so replies interleave in append
    /// order.
    pub async fn send<F>(&self, draft: &str, on_reply: F) -> Result<ChatMessage>
    where
        F: FnOnce(ChatMessage) + Send + 'static,
    {
        let message = {
            let mut log = self.log.lock().await;
            log.append_human(draft)?.clone()
        };

        let log = self.log.clone();
        let delay = self.reply_delay;
        let text = self.canned_reply.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let reply = {
                let mut log = log.lock().await;
                log.append_reply(&text).clone()
            };
            on_reply(reply);
        });
        self.track(handle).await;

        Ok(message)
    }

    /// All messages in append order.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.log.lock().await.messages().to_vec()
    }

    /// `Idle` or `AwaitingReply`.
    pub async fn phase(&self) -> ChatPhase {
        self.log.lock().await.phase()
    }

    /// Aborts every pending reply timer.
    pub async fn shutdown(&self) {
        let mut pending = self.pending.lock().await;
        for handle in pending.drain(..) {
            handle.abort();
        }
    }

    async fn track(&self, handle: JoinHandle<()>) {
        let mut pending = self.pending.lock().await;
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }
}
