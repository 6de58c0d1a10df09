use crate::domain::ports::NotificationService;
use async_trait::async_trait;

/// Log-only notification delivery.
///
/// Stands in for a real delivery channel (email, push); the engine neither
/// knows nor cares which implementation sits behind the port.
#[derive(Default, Clone)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationService for ConsoleNotifier {
    async fn notify_about_transfer(&self, account_id: &str, message: &str) {
        tracing::info!(account = %account_id, %message, "sending notification");
    }
}
