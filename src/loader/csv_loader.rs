use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, warn};

use crate::loader::LoadError;
use crate::models::{Account, RawActivity};

/// Loads the host inputs (activities and accounts) from CSV files.
///
/// Parsing runs on a blocking task and rows are streamed back over a bounded
/// channel. Rows that fail to deserialize are logged and skipped; a file that
/// cannot be opened or has unreadable headers fails the load.
pub struct CsvLoader {
    backpressure: usize
}

impl CsvLoader {
    pub fn new() -> Self {
        Self {
            backpressure: 256
        }
    }

    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    pub async fn load_activities(&self, path: impl AsRef<Path>) -> Result<Vec<RawActivity>, LoadError> {
        self.load(path.as_ref()).await
    }

    pub async fn load_accounts(&self, path: impl AsRef<Path>) -> Result<Vec<Account>, LoadError> {
        self.load(path.as_ref()).await
    }

    async fn load<T>(&self, path: &Path) -> Result<Vec<T>, LoadError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let path = path.display().to_string();
        let (sender, mut receiver) = mpsc::channel::<T>(self.backpressure);
        let reader_handle = Self::spawn_csv_reader(path.clone(), sender);

        let mut rows = Vec::new();

        while let Some(row) = receiver.recv().await {
            rows.push(row);
        }

        reader_handle.await??;

        debug!("Loaded [{}] rows from [{path}]", rows.len());

        Ok(rows)
    }

    fn spawn_csv_reader<T>(path: String, sender: mpsc::Sender<T>) -> JoinHandle<Result<(), LoadError>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        spawn_blocking(move || {
            let file = File::open(&path).map_err(|source| LoadError::Open { path: path.clone(), source })?;

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            reader.headers().map_err(|source| LoadError::Headers { path: path.clone(), source })?;

            for result in reader.deserialize::<T>() {
                match result {
                    Ok(row) => {
                        if sender.blocking_send(row).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!("Skipping malformed CSV row in [{path}]: {error}");
                    }
                }
            }

            Ok(())
        })
    }
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}
