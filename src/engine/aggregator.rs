use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{
    AggregateError, DividendRecord, DividendSummary, MonthlyDividendSummary, SecurityDividendSummary,
    YearlyDividendSummary
};
use crate::types::{parse_date, AccountId, MonthKey, SecurityKey};

/// Group counts of a finished aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationStats {
    pub records: usize,
    pub years: usize,
    pub months: usize,
    pub securities: usize
}

impl AggregationStats {
    pub fn of(records: usize, summary: &DividendSummary) -> Self {
        Self {
            records,
            years: summary.by_year.len(),
            months: summary.by_month.len(),
            securities: summary.by_security_and_account.len()
        }
    }
}

/// Running totals for one group, overall and per sub-key.
struct GroupTotals<K> {
    total: Decimal,
    by_key: BTreeMap<K, Decimal>
}

impl<K: Ord> GroupTotals<K> {
    fn new() -> Self {
        Self {
            total: Decimal::ZERO,
            by_key: BTreeMap::new()
        }
    }

    /// Adds `amount` under `key`; `None` on overflow, leaving the totals untouched.
    fn add(&mut self, key: K, amount: Decimal) -> Option<()> {
        let total = self.total.checked_add(amount)?;
        let entry = self.by_key.entry(key).or_insert(Decimal::ZERO);

        *entry = entry.checked_add(amount)?;
        self.total = total;

        Some(())
    }
}

struct SecurityAccumulator {
    account_name: String,
    by_month: GroupTotals<MonthKey>
}

/// Groups dividend records by year, by month, and by (account, security).
///
/// All three groupings are built in one pass over `records`. A date that does
/// not parse as ISO-8601 fails the whole aggregation, as does a total that
/// overflows.
pub fn aggregate(records: &[DividendRecord]) -> Result<DividendSummary, AggregateError> {
    let mut years: BTreeMap<i32, GroupTotals<AccountId>> = BTreeMap::new();
    let mut months: BTreeMap<MonthKey, GroupTotals<AccountId>> = BTreeMap::new();
    let mut securities: BTreeMap<SecurityKey, SecurityAccumulator> = BTreeMap::new();

    for record in records {
        let date = parse_date(&record.date).map_err(|_| AggregateError::invalid_date(record))?;
        let month_key = MonthKey::from_date(date);

        years.entry(month_key.year()).or_insert_with(GroupTotals::new)
            .add(record.account_id.clone(), record.amount)
            .ok_or_else(|| AggregateError::overflow(record))?;

        months.entry(month_key).or_insert_with(GroupTotals::new)
            .add(record.account_id.clone(), record.amount)
            .ok_or_else(|| AggregateError::overflow(record))?;

        securities.entry(SecurityKey::new(&record.account_id, &record.symbol))
            .or_insert_with(|| SecurityAccumulator {
                account_name: record.account_name.clone(),
                by_month: GroupTotals::new()
            })
            .by_month
            .add(month_key, record.amount)
            .ok_or_else(|| AggregateError::overflow(record))?;
    }

    let by_year = years.into_iter()
        .map(|(year, totals)| YearlyDividendSummary {
            year,
            total: totals.total,
            by_account: totals.by_key
        })
        .collect();

    let by_month = months.into_iter()
        .map(|(month_key, totals)| MonthlyDividendSummary {
            year: month_key.year(),
            month: month_key.month(),
            month_key,
            total: totals.total,
            by_account: totals.by_key
        })
        .collect();

    let by_security_and_account = securities.into_iter()
        .map(|(key, security)| SecurityDividendSummary {
            symbol: key.symbol,
            account_id: key.account_id,
            account_name: security.account_name,
            total: security.by_month.total,
            by_month: security.by_month.by_key
        })
        .collect();

    Ok(DividendSummary {
        by_year,
        by_month,
        by_security_and_account
    })
}
