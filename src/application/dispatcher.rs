use crate::domain::account::AccountId;
use crate::domain::ports::NotificationServiceArc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A post-transfer message addressed to one account holder.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub account_id: AccountId,
    pub message: String,
}

/// Fire-and-forget notification dispatch.
///
/// Owns an unbounded channel and a single worker task that drains it into the
/// injected `NotificationService`. `dispatch` never blocks and never fails the
/// caller: the transfer's critical section is already over by the time a
/// notification is queued, and delivery problems stay behind the port.
pub struct NotificationDispatcher {
    tx: mpsc::UnboundedSender<Notification>,
    worker: JoinHandle<()>,
}

impl NotificationDispatcher {
    /// Spawns the worker. Must be called from within a tokio runtime.
    pub fn new(service: NotificationServiceArc) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
        let worker = tokio::spawn(async move {
            while let Some(notification) = rx.recv().await {
                service
                    .notify_about_transfer(&notification.account_id, &notification.message)
                    .await;
            }
        });
        Self { tx, worker }
    }

    /// Queues a notification without waiting for delivery.
    pub fn dispatch(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            tracing::warn!("notification worker stopped, dropping notification");
        }
    }

    /// Closes the channel and waits for queued notifications to drain.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.worker.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NotificationService;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingNotifier {
        delivered: Mutex<Vec<Notification>>,
    }

    #[async_trait]
    impl NotificationService for RecordingNotifier {
        async fn notify_about_transfer(&self, account_id: &str, message: &str) {
            self.delivered.lock().unwrap().push(Notification {
                account_id: account_id.to_string(),
                message: message.to_string(),
            });
        }
    }

    #[tokio::test]
    async fn test_dispatch_delivers_in_order() {
        let notifier = Arc::new(RecordingNotifier::default());
        let dispatcher = NotificationDispatcher::new(notifier.clone());

        for i in 0..5 {
            dispatcher.dispatch(Notification {
                account_id: "Id-1".to_string(),
                message: format!("message {i}"),
            });
        }
        dispatcher.shutdown().await;

        let delivered = notifier.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 5);
        assert_eq!(delivered[0].message, "message 0");
        assert_eq!(delivered[4].message, "message 4");
    }

    #[tokio::test]
    async fn test_shutdown_drains_pending_notifications() {
        let notifier = Arc::new(RecordingNotifier::default());
        let dispatcher = NotificationDispatcher::new(notifier.clone());

        dispatcher.dispatch(Notification {
            account_id: "Id-1".to_string(),
            message: "queued".to_string(),
        });
        dispatcher.shutdown().await;

        assert_eq!(notifier.delivered.lock().unwrap().len(), 1);
    }
}
