use async_trait::async_trait;
use ledger_engine::application::dispatcher::NotificationDispatcher;
use ledger_engine::application::engine::LedgerEngine;
use ledger_engine::domain::ports::NotificationService;
use ledger_engine::infrastructure::in_memory::InMemoryAccountStore;
use std::sync::{Arc, Mutex};

/// Test double standing in for a real notification channel.
#[derive(Default)]
pub struct RecordingNotifier {
    delivered: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn delivered(&self) -> Vec<(String, String)> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationService for RecordingNotifier {
    async fn notify_about_transfer(&self, account_id: &str, message: &str) {
        self.delivered
            .lock()
            .unwrap()
            .push((account_id.to_string(), message.to_string()));
    }
}

/// In-memory engine wired to a recording notifier.
pub fn engine() -> (LedgerEngine, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let dispatcher = NotificationDispatcher::new(notifier.clone());
    let engine = LedgerEngine::new(Box::new(InMemoryAccountStore::new()), dispatcher);
    (engine, notifier)
}
