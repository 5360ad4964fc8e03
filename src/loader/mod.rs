mod csv_loader;
mod errors;

pub use csv_loader::CsvLoader;
pub use errors::LoadError;
