use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T, E = LedgerError> = std::result::Result<T, E>;

/// Errors produced by the ledger.
///
/// Every failure is a returned value; the engine never panics on bad input and
/// guarantees that a failed transfer leaves both accounts untouched.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Transfer amount was zero or negative. Detected before any lookup or lock.
    #[error("Amount to transfer must be a positive number, got {amount}")]
    InvalidAmount { amount: Decimal },

    /// One or both transfer sides could not be resolved. No state touched.
    #[error("Account(s) not found: {}", ids.join(", "))]
    AccountNotFound { ids: Vec<String> },

    /// Source balance below the requested amount at the authoritative
    /// (post-lock) check.
    #[error(
        "Insufficient funds in account {account}: available {available}, requested {requested}"
    )]
    InsufficientFunds {
        account: String,
        available: Decimal,
        requested: Decimal,
    },

    /// Source and destination are the same account.
    #[error("Cannot transfer from account {id} to itself")]
    SameAccount { id: String },

    /// Account creation with an identifier that is already taken.
    #[error("Account id {id} already exists!")]
    DuplicateAccount { id: String },

    /// Account creation with a negative opening balance.
    #[error("Opening balance must not be negative, got {amount}")]
    NegativeOpeningBalance { amount: Decimal },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    /// Builds an `AccountNotFound` from the ids that failed to resolve.
    pub fn not_found<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LedgerError::AccountNotFound {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}
