use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::types::errors::KeyError;
use crate::types::{AccountId, Symbol};

/// A calendar month, rendered as `YYYY-MM`.
///
/// Ordering is chronological, which matches the lexicographic order of the
/// zero-padded string form for four digit years.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, KeyError> {
        if !(1..=12).contains(&month) {
            return Err(KeyError::MonthOutOfRange(month));
        }

        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month()
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl Display for MonthKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = KeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        let Some((year, month)) = value.split_once('-') else {
            return Err(KeyError::InvalidFormat(format!("Value [{value}] is missing the '-' separator")));
        };

        if year.len() != 4 || month.len() != 2 {
            return Err(KeyError::InvalidFormat(format!("Value [{value}] is not in YYYY-MM form")));
        }

        MonthKey::new(year.parse()?, month.parse()?)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        MonthKey::from_str(&value).map_err(de::Error::custom)
    }
}

/// Groups dividends paid by one security into one account.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SecurityKey {
    pub account_id: AccountId,
    pub symbol: Symbol
}

impl SecurityKey {
    pub fn new(account_id: impl Into<AccountId>, symbol: impl Into<Symbol>) -> Self {
        Self {
            account_id: account_id.into(),
            symbol: symbol.into()
        }
    }
}
