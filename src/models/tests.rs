use super::{AggregateError, DividendRecord, DividendSummary, RawActivity, SecurityDividendSummary};

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use std::collections::BTreeMap;

use crate::engine::aggregate;
use crate::types::MonthKey;

fn create_record(account_id: &str, account_name: &str, date: &str, amount: Decimal, symbol: &str) -> DividendRecord {
    DividendRecord {
        account_id: account_id.to_string(),
        account_name: account_name.to_string(),
        symbol: symbol.to_string(),
        date: date.to_string(),
        amount,
        currency: "USD".to_string()
    }
}

fn create_summary() -> Result<DividendSummary> {
    Ok(aggregate(&[
        create_record("A1", "Brokerage", "2022-03-15", dec!(10), "KO"),
        create_record("A1", "Brokerage", "2023-03-15", dec!(11), "KO"),
        create_record("A1", "Brokerage", "2023-06-15", dec!(5), "AAPL"),
        create_record("A2", "Retirement", "2023-06-20", dec!(40), "VTI"),
        create_record("A2", "Retirement", "2023-09-20", dec!(42), "VTI"),
        create_record("A3", "Empty", "2023-01-01", Decimal::ZERO, "NONE"),
    ])?)
}

#[test]
fn test_raw_activity_recognizes_dividend_kind() {
    let padded = RawActivity { activity_type: " DIVIDEND ".to_string(), ..RawActivity::default() };
    let interest = RawActivity { activity_type: "INTEREST".to_string(), ..RawActivity::default() };
    let lowercase = RawActivity { activity_type: "dividend".to_string(), ..RawActivity::default() };
    let exact = RawActivity { activity_type: "DIVIDEND".to_string(), ..RawActivity::default() };

    assert!(exact.is_dividend());
    assert!(!padded.is_dividend());
    assert!(!interest.is_dividend());
    assert!(!lowercase.is_dividend());
}

#[test]
fn test_available_years_are_newest_first() -> Result<()> {
    let summary = create_summary()?;

    assert_eq!(summary.available_years(), vec![2023, 2022]);
    assert_eq!(summary.latest_year(), Some(2023));

    Ok(())
}

#[test]
fn test_empty_summary_has_no_years() -> Result<()> {
    let summary = DividendSummary::default();

    assert!(summary.is_empty());
    assert!(summary.available_years().is_empty());
    assert_eq!(summary.latest_year(), None);
    assert!(summary.securities_in_year(2023)?.is_empty());
    assert!(summary.account_totals(None)?.is_empty());

    Ok(())
}

#[test]
fn test_months_in_year_filters_by_year() -> Result<()> {
    let summary = create_summary()?;

    let months: Vec<u32> = summary.months_in_year(2023).iter().map(|month| month.month).collect();

    assert_eq!(months, vec![1, 3, 6, 9]);
    assert_eq!(summary.months_in_year(2022).len(), 1);
    assert!(summary.months_in_year(2019).is_empty());

    Ok(())
}

#[test]
fn test_month_keys_in_year_are_sorted_and_distinct() -> Result<()> {
    let summary = create_summary()?;

    let keys: Vec<String> = summary.month_keys_in_year(2023).iter().map(MonthKey::to_string).collect();

    assert_eq!(keys, vec!["2023-01", "2023-03", "2023-06", "2023-09"]);

    Ok(())
}

#[test]
fn test_securities_in_year_narrows_months_and_recomputes_totals() -> Result<()> {
    let summary = create_summary()?;

    let grouped = summary.securities_in_year(2023)?;
    let brokerage = grouped.get("A1").ok_or_else(|| anyhow!("A1 missing"))?;
    let symbols: Vec<&str> = brokerage.iter().map(|security| security.symbol.as_str()).collect();

    assert_eq!(symbols, vec!["AAPL", "KO"]);

    let ko = &brokerage[1];

    assert_eq!(ko.by_month.len(), 1);
    assert_eq!(ko.total, dec!(11));
    assert_eq!(ko.account_name, "Brokerage");

    let retirement = grouped.get("A2").ok_or_else(|| anyhow!("A2 missing"))?;

    assert_eq!(retirement[0].total, dec!(82));

    let earlier = summary.securities_in_year(2022)?;

    assert_eq!(earlier.len(), 1);
    assert_eq!(earlier.get("A1").map(Vec::len), Some(1));

    Ok(())
}

#[test]
fn test_account_totals_rank_largest_first_and_skip_non_positive() -> Result<()> {
    let summary = create_summary()?;

    assert_eq!(summary.account_totals(None)?, vec![
        ("A2".to_string(), dec!(82)),
        ("A1".to_string(), dec!(26)),
    ]);

    assert_eq!(summary.account_totals(Some(2022))?, vec![("A1".to_string(), dec!(10))]);
    assert!(summary.account_totals(Some(2019))?.is_empty());

    Ok(())
}

#[test]
fn test_account_totals_break_ties_by_account_id() -> Result<()> {
    let summary = aggregate(&[
        create_record("B", "B", "2023-01-01", dec!(5), "X"),
        create_record("A", "A", "2023-01-01", dec!(5), "X"),
    ])?;

    let ranked: Vec<String> = summary.account_totals(None)?.into_iter().map(|(account_id, _)| account_id).collect();

    assert_eq!(ranked, vec!["A", "B"]);

    Ok(())
}

#[test]
fn test_summary_serializes_with_camel_case_and_month_keys() -> Result<()> {
    let summary = aggregate(&[
        create_record("A1", "Brokerage", "2023-03-15", dec!(50), "AAPL"),
        create_record("A1", "Brokerage", "2023-06-10", dec!(30), "AAPL"),
    ])?;

    let value = serde_json::to_value(&summary)?;

    assert_eq!(value, json!({
        "byYear": [
            { "year": 2023, "total": 80.0, "byAccount": { "A1": 80.0 } }
        ],
        "byMonth": [
            { "year": 2023, "month": 3, "monthKey": "2023-03", "total": 50.0, "byAccount": { "A1": 50.0 } },
            { "year": 2023, "month": 6, "monthKey": "2023-06", "total": 30.0, "byAccount": { "A1": 30.0 } }
        ],
        "bySecurityAndAccount": [
            {
                "symbol": "AAPL",
                "accountId": "A1",
                "accountName": "Brokerage",
                "byMonth": { "2023-03": 50.0, "2023-06": 30.0 },
                "total": 80.0
            }
        ]
    }));

    Ok(())
}

#[test]
fn test_empty_summary_serializes_to_empty_arrays() -> Result<()> {
    let value = serde_json::to_value(DividendSummary::default())?;

    assert_eq!(value, json!({ "byYear": [], "byMonth": [], "bySecurityAndAccount": [] }));

    Ok(())
}

#[test]
fn test_account_totals_exclude_negative_totals() -> Result<()> {
    let summary = aggregate(&[
        create_record("A1", "Brokerage", "2023-01-01", dec!(5), "X"),
        create_record("A2", "Reversal", "2023-01-01", dec!(-3), "Y"),
        create_record("A3", "Netted", "2023-01-01", dec!(2), "Z"),
        create_record("A3", "Netted", "2023-02-01", dec!(-2), "Z"),
    ])?;

    assert_eq!(summary.account_totals(None)?, vec![("A1".to_string(), dec!(5))]);

    Ok(())
}

#[test]
fn test_securities_in_year_reports_overflowing_totals() -> Result<()> {
    let summary = DividendSummary {
        by_security_and_account: vec![SecurityDividendSummary {
            symbol: "BIG".to_string(),
            account_id: "A1".to_string(),
            account_name: "Brokerage".to_string(),
            by_month: BTreeMap::from([
                (MonthKey::new(2023, 1)?, Decimal::MAX),
                (MonthKey::new(2023, 2)?, Decimal::MAX),
            ]),
            total: Decimal::MAX
        }],
        ..DividendSummary::default()
    };

    let result = summary.securities_in_year(2023);

    assert!(matches!(result, Err(AggregateError::Overflow { ref symbol, .. }) if symbol == "BIG"));

    Ok(())
}

#[test]
fn test_account_totals_report_overflow_across_years() -> Result<()> {
    let summary = aggregate(&[
        create_record("A1", "Brokerage", "2022-01-01", Decimal::MAX, "X"),
        create_record("A1", "Brokerage", "2023-01-01", Decimal::MAX, "Y"),
    ])?;

    let result = summary.account_totals(None);

    assert!(matches!(result, Err(AggregateError::AccountOverflow { ref account_id }) if account_id == "A1"));
    assert_eq!(summary.account_totals(Some(2023))?, vec![("A1".to_string(), Decimal::MAX)]);

    Ok(())
}
