mod dates;
mod errors;
mod keys;

pub use dates::parse_date;
pub use errors::{DateError, KeyError};
pub use keys::{MonthKey, SecurityKey};

pub type AccountId = String;
pub type Symbol = String;
