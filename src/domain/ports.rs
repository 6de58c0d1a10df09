use super::account::Account;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Keyed store of live account records.
///
/// Implementations must be safe for concurrent `create`/`get` from multiple
/// tasks; this locking is independent from the per-account balance locks the
/// transfer engine takes.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Inserts a new account. Fails with `DuplicateAccount` if the id is taken.
    async fn create(&self, account: Account) -> Result<()>;

    /// Returns the live account record, shared, or `None` if absent.
    async fn get(&self, id: &str) -> Result<Option<Arc<Account>>>;

    /// Returns every account, for final-state reporting.
    async fn all_accounts(&self) -> Result<Vec<Arc<Account>>>;
}

/// Delivers a post-transfer notification to an account holder.
///
/// Fire-and-forget: the engine never consumes a return value and delivery
/// failures are the implementation's concern (observe them internally, e.g.
/// by logging). Retries, if any, also live behind this trait.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify_about_transfer(&self, account_id: &str, message: &str);
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type NotificationServiceArc = Arc<dyn NotificationService>;
