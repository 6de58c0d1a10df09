use crate::application::dispatcher::{Notification, NotificationDispatcher};
use crate::domain::account::{Account, Amount, Balance};
use crate::domain::ports::AccountStoreBox;
use crate::domain::transfer::TransferRequest;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use std::sync::Arc;

/// The main entry point of the ledger.
///
/// `LedgerEngine` owns the account store and the notification dispatcher, both
/// injected at construction. All methods take `&self`; callers share the
/// engine across tasks and invoke `transfer` concurrently.
///
/// Transfers touching a common account are serialized by that account's own
/// balance lock; transfers on disjoint pairs run fully in parallel. Deadlock
/// between opposite-direction transfers on the same pair is precluded by
/// always locking the lexicographically smaller account id first.
pub struct LedgerEngine {
    accounts: AccountStoreBox,
    notifications: NotificationDispatcher,
}

impl LedgerEngine {
    pub fn new(accounts: AccountStoreBox, notifications: NotificationDispatcher) -> Self {
        Self {
            accounts,
            notifications,
        }
    }

    /// Creates an account with the given opening balance.
    ///
    /// Fails with `DuplicateAccount` if the id is already taken and with
    /// `NegativeOpeningBalance` if the opening balance is below zero.
    pub async fn create_account(&self, id: &str, opening_balance: Decimal) -> Result<()> {
        let account = Account::new(id, Balance::new(opening_balance))?;
        self.accounts.create(account).await
    }

    /// Looks up the live account record.
    pub async fn get_account(&self, id: &str) -> Result<Arc<Account>> {
        self.accounts
            .get(id)
            .await?
            .ok_or_else(|| LedgerError::not_found([id]))
    }

    /// Returns every account, for final-state reporting.
    pub async fn all_accounts(&self) -> Result<Vec<Arc<Account>>> {
        self.accounts.all_accounts().await
    }

    /// Moves `amount` from one account to another.
    ///
    /// Validation happens before any lock is taken: the amount must be
    /// strictly positive and both accounts must exist. The two balance locks
    /// are then acquired in lexicographic id order, sufficient funds are
    /// re-checked under both locks (the pre-lock view may be stale), and the
    /// debit and credit are applied as one atomic unit. Both account holders
    /// are notified after the locks are released; returns the source-side
    /// notification message.
    ///
    /// Any failure leaves both balances exactly as they were.
    pub async fn transfer(&self, from_id: &str, to_id: &str, amount: Decimal) -> Result<String> {
        let amount = Amount::new(amount)?;

        if from_id == to_id {
            return Err(LedgerError::SameAccount {
                id: from_id.to_string(),
            });
        }

        let from = self.accounts.get(from_id).await?;
        let to = self.accounts.get(to_id).await?;
        let (from, to) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            (from, to) => {
                let mut missing = Vec::new();
                if from.is_none() {
                    missing.push(from_id);
                }
                if to.is_none() {
                    missing.push(to_id);
                }
                return Err(LedgerError::not_found(missing));
            }
        };

        // Ordered-pair locking: the lexicographically smaller id is always
        // locked first, whichever direction the transfer runs. Opposite
        // transfers on the same pair therefore contend on the same first
        // lock instead of waiting on each other.
        let (mut from_balance, mut to_balance) = if from.id() < to.id() {
            let from_guard = from.lock_balance().await;
            let to_guard = to.lock_balance().await;
            (from_guard, to_guard)
        } else {
            let to_guard = to.lock_balance().await;
            let from_guard = from.lock_balance().await;
            (from_guard, to_guard)
        };

        // Authoritative funds check: a concurrent transfer may have drained
        // the source between lookup and lock acquisition.
        if *from_balance < Balance::from(amount) {
            return Err(LedgerError::InsufficientFunds {
                account: from.id().to_string(),
                available: from_balance.0,
                requested: amount.value(),
            });
        }

        *from_balance -= Balance::from(amount);
        *to_balance += Balance::from(amount);
        drop(from_balance);
        drop(to_balance);

        let outgoing = format!("Transferred ${} to Account {}", amount.value(), to.id());
        let incoming = format!("Received ${} from Account {}", amount.value(), from.id());
        self.notifications.dispatch(Notification {
            account_id: from.id().to_string(),
            message: outgoing.clone(),
        });
        self.notifications.dispatch(Notification {
            account_id: to.id().to_string(),
            message: incoming,
        });

        Ok(outgoing)
    }

    /// Executes a transfer request coming from an interface layer.
    pub async fn execute(&self, request: &TransferRequest) -> Result<String> {
        self.transfer(
            &request.account_from_id,
            &request.account_to_id,
            request.amount,
        )
        .await
    }

    /// Consumes the engine and drains in-flight notifications.
    pub async fn shutdown(self) {
        self.notifications.shutdown().await;
    }
}
