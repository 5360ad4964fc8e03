use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{AccountId, Symbol};

/// A dividend event in canonical form, one per qualifying activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendRecord {
    pub account_id: AccountId,
    /// Resolved display name, or the account id when no account matched.
    pub account_name: String,
    pub symbol: Symbol,
    /// The date exactly as supplied; parsed during aggregation.
    pub date: String,
    pub amount: Decimal,
    pub currency: String
}
