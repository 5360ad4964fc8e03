use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not open CSV at path [{path}]: {source}")]
    Open {
        path: String,
        source: std::io::Error
    },
    #[error("Could not read CSV headers at path [{path}]: {source}")]
    Headers {
        path: String,
        source: csv::Error
    },
    #[error("CSV reader task failed: {0}")]
    Join(#[from] JoinError)
}
