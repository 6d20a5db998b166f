//! Singleton toast with auto-dismiss.
//!
//! Only one toast is visible at a time; showing a new one replaces the
//! current toast and restarts the dismiss timer. The timer handle is kept
//! so a superseded or shut-down toast never fires a stale dismiss.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// A visible toast notification.
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub id: String,
    pub message: String,
}

impl Toast {
    fn new(message: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.to_string(),
        }
    }
}

/// Manages the single toast slot and its dismiss timer.
pub struct ToastService {
    current: Arc<Mutex<Option<Toast>>>,
    dismiss_delay: Duration,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl ToastService {
    pub fn new(dismiss_delay: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            dismiss_delay,
            timer: Mutex::new(None),
        }
    }

    /// Shows a toast, replacing any visible one.
    ///
    /// The previous dismiss timer is cancelled before the new toast goes
    /// up. `on_dismiss` fires once, when this toast times out; it does not
    /// fire if the toast is replaced first.
    pub async fn show<F>(&self, message: &str, on_dismiss: F) -> Toast
    where
        F: FnOnce(Toast) + Send + 'static,
    {
        let toast = Toast::new(message);

        {
            let mut timer = self.timer.lock().await;
            if let Some(handle) = timer.take() {
                handle.abort();
            }
        }
        *self.current.lock().await = Some(toast.clone());

        let current = self.current.clone();
        let delay = self.dismiss_delay;
        let dismissed = toast.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut slot = current.lock().await;
            // Replacement aborts this task, but guard against a race where
            // the swap lands between the sleep and the lock.
            if slot.as_ref().is_some_and(|t| t.id == dismissed.id) {
                *slot = None;
                drop(slot);
                on_dismiss(dismissed);
            }
        });
        *self.timer.lock().await = Some(handle);

        toast
    }

    /// The currently visible toast, if any.
    pub async fn current(&self) -> Option<Toast> {
        self.current.lock().await.clone()
    }

    /// Cancels the pending dismiss timer.
    pub async fn shutdown(&self) {
        if let Some(handle) = self.timer.lock().await.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_toast_auto_dismisses() {
        let toasts = ToastService::new(Duration::from_millis(10));
        let (tx, rx) = tokio::sync::oneshot::channel();

        let shown = toasts
            .show("Uploaded \"faq.pdf\" to \"Billing\"", move |t| {
                let _ = tx.send(t);
            })
            .await;
        assert_eq!(toasts.current().await.unwrap().id, shown.id);

        let dismissed = rx.await.unwrap();
        assert_eq!(dismissed.id, shown.id);
        assert!(toasts.current().await.is_none());
    }

    #[tokio::test]
    async fn test_new_toast_replaces_and_cancels_the_old_timer() {
        let toasts = ToastService::new(Duration::from_millis(30));

        toasts
            .show("first", |_| panic!("superseded toast dismissed"))
            .await;
        let second = toasts.show("second", |_| {}).await;

        tokio::time::sleep(Duration::from_millis(15)).await;
        // The replacement is still up; the first timer never fired.
        assert_eq!(toasts.current().await.unwrap().id, second.id);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(toasts.current().await.is_none());
    }

    #[tokio::test]
    async fn test_shutdown_cancels_the_pending_dismiss() {
        let toasts = ToastService::new(Duration::from_millis(10));
        toasts
            .show("sticking around", |_| panic!("dismissed after shutdown"))
            .await;
        toasts.shutdown().await;

        tokio::time::sleep(Duration::from_millis(40)).await;
        // The toast stays up; nothing clears it anymore.
        assert!(toasts.current().await.is_some());
    }
}
