use crate::domain::account::{Account, AccountId};
use crate::domain::ports::AccountStore;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for account records.
///
/// Uses `Arc<RwLock<HashMap<AccountId, Arc<Account>>>>` to allow shared
/// concurrent access. Values are `Arc<Account>` so `get` hands out the live
/// record; callers mutate balances only through the transfer engine's
/// per-account locks. The map's own lock covers insertion and lookup only and
/// is never held across a balance mutation.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Arc<Account>>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.id()) {
            return Err(LedgerError::DuplicateAccount {
                id: account.id().to_string(),
            });
        }
        accounts.insert(account.id().to_string(), Arc::new(account));
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Arc<Account>>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id).cloned())
    }

    async fn all_accounts(&self) -> Result<Vec<Arc<Account>>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().cloned().collect())
    }
}
