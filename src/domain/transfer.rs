use crate::domain::account::AccountId;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A request to move funds between two accounts.
///
/// Ephemeral per-call value; validation happens in the engine, not here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub account_from_id: AccountId,
    pub account_to_id: AccountId,
    pub amount: Decimal,
}
