mod aggregator;
mod extractor;
mod instrumentation;
mod tracker;

pub use aggregator::{aggregate, AggregationStats};
pub use extractor::{extract, extract_with_stats, ExtractionStats, DEFAULT_CURRENCY, UNKNOWN_SYMBOL};
pub use instrumentation::{Instrumentation, NoopInstrumentation, TracingInstrumentation};
pub use tracker::DividendTracker;
