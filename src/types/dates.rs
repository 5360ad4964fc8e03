use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::errors::DateError;
use crate::types::MonthKey;

const OFFSET_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y%m%dT%H%M%S%#z",
];
const NAIVE_TIMESTAMP_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S",
    "%Y%m%dT%H%M",
];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Parses an ISO-8601 date or timestamp into its calendar date.
///
/// Timestamps carrying an offset keep the calendar date in that offset, so
/// `2023-12-31T23:30:00-05:00` belongs to 2023 regardless of the machine's zone.
/// Reduced precision dates resolve to their first day: `2023-03` is March 1st
/// and `2023` is January 1st.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }

    let zulu = value.strip_suffix(['Z', 'z']).map(|stripped| format!("{stripped}+00:00"));
    let offset_value = zulu.as_deref().unwrap_or(value);

    for format in OFFSET_TIMESTAMP_FORMATS {
        if let Ok(timestamp) = DateTime::parse_from_str(offset_value, format) {
            return Ok(timestamp.date_naive());
        }
    }

    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(timestamp.date());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }

    parse_reduced_precision(value).ok_or_else(|| DateError::InvalidFormat(value.to_string()))
}

fn parse_reduced_precision(value: &str) -> Option<NaiveDate> {
    if let Ok(month_key) = MonthKey::from_str(value) {
        return NaiveDate::from_ymd_opt(month_key.year(), month_key.month(), 1);
    }

    if value.len() == 4 && value.bytes().all(|byte| byte.is_ascii_digit()) {
        return NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1);
    }

    None
}
