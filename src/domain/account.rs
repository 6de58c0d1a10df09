use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use tokio::sync::{Mutex, MutexGuard};

/// Unique, immutable account identifier.
pub type AccountId = String;

/// Represents a monetary balance.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific
/// rules and provide type safety for financial calculations. Exact decimal
/// arithmetic, no floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// Represents a positive monetary amount for transfers.
///
/// Ensures that transfer amounts are always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LedgerError::InvalidAmount { amount: value })
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// A live account record.
///
/// The balance sits behind its own `tokio::sync::Mutex`: that mutex is the
/// per-account mutation lock the transfer engine acquires in ordered pairs.
/// Accounts are shared as `Arc<Account>`; the store hands out the live record,
/// never a snapshot copy. Balance mutation outside the engine's locking
/// protocol is not possible because the guard is crate-private.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    balance: Mutex<Balance>,
}

impl Account {
    /// Creates an account with the given opening balance.
    ///
    /// The opening balance must not be negative; the balance ≥ 0 invariant
    /// holds from creation onwards.
    pub fn new(id: impl Into<AccountId>, opening_balance: Balance) -> Result<Self> {
        if opening_balance < Balance::ZERO {
            return Err(LedgerError::NegativeOpeningBalance {
                amount: opening_balance.0,
            });
        }
        Ok(Self {
            id: id.into(),
            balance: Mutex::new(opening_balance),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Snapshot of the current balance.
    pub async fn balance(&self) -> Balance {
        *self.balance.lock().await
    }

    /// Acquires this account's mutation lock.
    ///
    /// Only the transfer engine takes this guard, always in lexicographic id
    /// order when two accounts are involved.
    pub(crate) async fn lock_balance(&self) -> MutexGuard<'_, Balance> {
        self.balance.lock().await
    }

    /// Serializable snapshot for reporting.
    pub async fn view(&self) -> AccountView {
        AccountView {
            account_id: self.id.clone(),
            balance: self.balance().await.0,
        }
    }
}

/// Point-in-time account snapshot used for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub account_id: AccountId,
    pub balance: Decimal,
}
