use crate::models::{DividendRecord, SecurityDividendSummary};
use crate::types::{AccountId, Symbol};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("Invalid date [{date}] on dividend for symbol [{symbol}] in account [{account_id}]")]
    InvalidDate {
        account_id: AccountId,
        symbol: Symbol,
        date: String
    },
    #[error("Numeric overflow occurred totaling dividends for symbol [{symbol}] in account [{account_id}]")]
    Overflow {
        account_id: AccountId,
        symbol: Symbol
    },
    #[error("Numeric overflow occurred totaling dividends for account [{account_id}]")]
    AccountOverflow {
        account_id: AccountId
    }
}

impl AggregateError {
    pub fn invalid_date(record: &DividendRecord) -> Self {
        Self::InvalidDate {
            account_id: record.account_id.clone(),
            symbol: record.symbol.clone(),
            date: record.date.clone()
        }
    }

    pub fn overflow(record: &DividendRecord) -> Self {
        Self::Overflow {
            account_id: record.account_id.clone(),
            symbol: record.symbol.clone()
        }
    }

    pub fn security_overflow(security: &SecurityDividendSummary) -> Self {
        Self::Overflow {
            account_id: security.account_id.clone(),
            symbol: security.symbol.clone()
        }
    }

    pub fn account_overflow(account_id: &AccountId) -> Self {
        Self::AccountOverflow {
            account_id: account_id.clone()
        }
    }
}
