use tracing::{debug, info};

use crate::engine::{AggregationStats, ExtractionStats};

/// Observer for the counts produced while summarizing dividends.
///
/// Both methods default to doing nothing so implementors only override what
/// they care about. The extractor and aggregator themselves never log.
pub trait Instrumentation {
    fn extracted(&self, _stats: &ExtractionStats) {}

    fn aggregated(&self, _stats: &AggregationStats) {}
}

pub struct NoopInstrumentation;

impl Instrumentation for NoopInstrumentation {}

/// Reports counts as `tracing` events.
pub struct TracingInstrumentation;

impl Instrumentation for TracingInstrumentation {
    fn extracted(&self, stats: &ExtractionStats) {
        debug!("Activity types seen: {:?}", stats.activity_types);
        info!(
            "Extracted [{}] dividend records from [{}] dividend activities out of [{}] activities",
            stats.extracted, stats.dividend_activities, stats.total_activities
        );
    }

    fn aggregated(&self, stats: &AggregationStats) {
        info!(
            "Aggregated [{}] records into [{}] years, [{}] months and [{}] security/account pairs",
            stats.records, stats.years, stats.months, stats.securities
        );
    }
}
