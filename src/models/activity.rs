use serde::Deserialize;

use crate::models::ACTIVITY_TYPE_DIVIDEND;

/// Represents a single activity row as supplied by the host.
///
/// Everything except the kind tag is optional because the activity stream mixes
/// trades, cash movements and income, and not every kind carries every field.
/// The symbol may arrive under either `assetSymbol` or `symbol`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActivity {
    /// The activity kind, e.g. `DIVIDEND`, `BUY`, `SELL`.
    pub activity_type: String,
    pub account_id: Option<String>,
    /// ISO-8601 date or timestamp.
    pub date: Option<String>,
    /// Monetary amount as text; coerced during extraction.
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub asset_symbol: Option<String>,
    pub symbol: Option<String>
}

impl RawActivity {
    pub fn is_dividend(&self) -> bool {
        self.activity_type == ACTIVITY_TYPE_DIVIDEND
    }
}
