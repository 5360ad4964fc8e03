use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::AggregateError;
use crate::types::{AccountId, MonthKey, Symbol};

/// Dividends received in one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyDividendSummary {
    pub year: i32,
    /// Sum of every amount in `by_account`.
    pub total: Decimal,
    pub by_account: BTreeMap<AccountId, Decimal>
}

/// Dividends received in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyDividendSummary {
    pub year: i32,
    /// Calendar month, 1 to 12.
    pub month: u32,
    pub month_key: MonthKey,
    pub total: Decimal,
    pub by_account: BTreeMap<AccountId, Decimal>
}

/// Dividends paid by one security into one account, broken down per month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityDividendSummary {
    pub symbol: Symbol,
    pub account_id: AccountId,
    pub account_name: String,
    pub by_month: BTreeMap<MonthKey, Decimal>,
    pub total: Decimal
}

/// The three aggregated views over a set of dividend records.
///
/// Produced in one piece by the aggregator and never mutated afterwards. The
/// query methods below are read-only slices used when reporting a single year.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendSummary {
    /// Ascending by year.
    pub by_year: Vec<YearlyDividendSummary>,
    /// Ascending by month key.
    pub by_month: Vec<MonthlyDividendSummary>,
    /// Emitted in (account id, symbol) order; consumers re-sort as they need.
    pub by_security_and_account: Vec<SecurityDividendSummary>
}

impl DividendSummary {
    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    /// Distinct years with monthly data, newest first.
    pub fn available_years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.by_month.iter().map(|month| month.year).collect();
        years.into_iter().rev().collect()
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.by_year.iter().map(|year| year.year).max()
    }

    pub fn months_in_year(&self, year: i32) -> Vec<&MonthlyDividendSummary> {
        self.by_month.iter().filter(|month| month.year == year).collect()
    }

    /// Month keys in `year` that carry security level data, ascending.
    pub fn month_keys_in_year(&self, year: i32) -> Vec<MonthKey> {
        let keys: BTreeSet<MonthKey> = self.by_security_and_account.iter()
            .flat_map(|security| security.by_month.keys())
            .filter(|key| key.year() == year)
            .copied()
            .collect();

        keys.into_iter().collect()
    }

    /// Securities that paid in `year`, grouped by account and sorted by symbol.
    ///
    /// Each entry's `by_month` is narrowed to `year` and its `total` recomputed
    /// over those months. Securities with no payment in `year` are left out.
    ///
    /// # Errors
    /// Returns `AggregateError::Overflow` if a recomputed total overflows.
    pub fn securities_in_year(&self, year: i32) -> Result<BTreeMap<AccountId, Vec<SecurityDividendSummary>>, AggregateError> {
        let mut grouped: BTreeMap<AccountId, Vec<SecurityDividendSummary>> = BTreeMap::new();

        for security in &self.by_security_and_account {
            let by_month: BTreeMap<MonthKey, Decimal> = security.by_month.iter()
                .filter(|(key, _)| key.year() == year)
                .map(|(key, amount)| (*key, *amount))
                .collect();

            if by_month.is_empty() {
                continue;
            }

            let total = by_month.values()
                .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount))
                .ok_or_else(|| AggregateError::security_overflow(security))?;

            grouped.entry(security.account_id.clone()).or_default().push(SecurityDividendSummary {
                symbol: security.symbol.clone(),
                account_id: security.account_id.clone(),
                account_name: security.account_name.clone(),
                by_month,
                total
            });
        }

        for securities in grouped.values_mut() {
            securities.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        }

        Ok(grouped)
    }

    /// Accounts with positive dividend income, largest total first.
    ///
    /// With `Some(year)` only that year counts. Ties fall back to account id.
    ///
    /// # Errors
    /// Returns `AggregateError::AccountOverflow` if an account total overflows.
    pub fn account_totals(&self, year: Option<i32>) -> Result<Vec<(AccountId, Decimal)>, AggregateError> {
        let mut totals: BTreeMap<&AccountId, Decimal> = BTreeMap::new();

        for summary in self.by_year.iter().filter(|summary| year.is_none_or(|year| summary.year == year)) {
            for (account_id, amount) in &summary.by_account {
                let total = totals.entry(account_id).or_insert(Decimal::ZERO);
                *total = total.checked_add(*amount)
                    .ok_or_else(|| AggregateError::account_overflow(account_id))?;
            }
        }

        let mut ranked: Vec<(AccountId, Decimal)> = totals.into_iter()
            .filter(|(_, total)| *total > Decimal::ZERO)
            .map(|(account_id, total)| (account_id.clone(), total))
            .collect();

        ranked.sort_by_key(|(account_id, total)| (Reverse(*total), account_id.clone()));

        Ok(ranked)
    }
}
