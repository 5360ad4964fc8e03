use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("Month key error: {0}")]
    InvalidFormat(String),
    #[error("Month key error: {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("Month key error: month [{0}] is out of range")]
    MonthOutOfRange(u32)
}

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Date error: [{0}] is not an ISO-8601 date")]
    InvalidFormat(String)
}
