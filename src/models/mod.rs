mod account;
mod activity;
mod dividend;
mod errors;
mod summary;
#[cfg(test)]
mod tests;

pub use account::Account;
pub use activity::RawActivity;
pub use dividend::DividendRecord;
pub use errors::AggregateError;
pub use summary::{DividendSummary, MonthlyDividendSummary, SecurityDividendSummary, YearlyDividendSummary};

/// Activity kind tag that marks a dividend payment.
pub const ACTIVITY_TYPE_DIVIDEND: &str = "DIVIDEND";
