use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{Account, DividendRecord, RawActivity};
use crate::types::Symbol;

pub const UNKNOWN_SYMBOL: &str = "UNKNOWN";
pub const DEFAULT_CURRENCY: &str = "USD";

/// Counts gathered while filtering the activity stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub total_activities: usize,
    /// Distinct activity kinds seen, sorted.
    pub activity_types: BTreeSet<String>,
    pub dividend_activities: usize,
    pub extracted: usize
}

/// Selects dividend activities and maps each one to a `DividendRecord`.
///
/// Dividends without a date or account id are dropped without error. Input
/// order is preserved.
pub fn extract(activities: &[RawActivity], accounts: &[Account]) -> Vec<DividendRecord> {
    let account_names: HashMap<&str, &str> = accounts.iter()
        .map(|account| (account.id.as_str(), account.name.as_str()))
        .collect();

    activities.iter()
        .filter(|activity| activity.is_dividend())
        .filter_map(|activity| {
            let account_id = present(activity.account_id.as_deref())?;
            let date = present(activity.date.as_deref())?;

            let account_name = present(account_names.get(account_id).copied())
                .unwrap_or(account_id);

            Some(DividendRecord {
                account_id: account_id.to_string(),
                account_name: account_name.to_string(),
                symbol: normalize_symbol(activity),
                date: date.to_string(),
                amount: normalize_amount(activity.amount.as_deref()),
                currency: normalize_currency(activity.currency.as_deref())
            })
        })
        .collect()
}

/// Same as [`extract`], also reporting how the stream was filtered.
pub fn extract_with_stats(activities: &[RawActivity], accounts: &[Account]) -> (Vec<DividendRecord>, ExtractionStats) {
    let records = extract(activities, accounts);

    let stats = ExtractionStats {
        total_activities: activities.len(),
        activity_types: activities.iter().map(|activity| activity.activity_type.clone()).collect(),
        dividend_activities: activities.iter().filter(|activity| activity.is_dividend()).count(),
        extracted: records.len()
    };

    (records, stats)
}

/// `assetSymbol` wins over `symbol`; neither present means `UNKNOWN`.
pub(crate) fn normalize_symbol(activity: &RawActivity) -> Symbol {
    present(activity.asset_symbol.as_deref())
        .or_else(|| present(activity.symbol.as_deref()))
        .unwrap_or(UNKNOWN_SYMBOL)
        .to_string()
}

/// Missing or non-numeric amounts count as zero.
pub(crate) fn normalize_amount(amount: Option<&str>) -> Decimal {
    let Some(amount) = present(amount).map(str::trim) else {
        return Decimal::ZERO;
    };

    Decimal::from_str(amount)
        .or_else(|_| Decimal::from_scientific(amount))
        .unwrap_or(Decimal::ZERO)
}

pub(crate) fn normalize_currency(currency: Option<&str>) -> String {
    present(currency).unwrap_or(DEFAULT_CURRENCY).to_string()
}

/// Blank values count as missing; present values are passed through untouched.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
