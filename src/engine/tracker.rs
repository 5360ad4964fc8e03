use crate::engine::{aggregate, extract_with_stats, AggregationStats, Instrumentation, NoopInstrumentation};
use crate::models::{Account, AggregateError, DividendSummary, RawActivity};

/// Runs extraction then aggregation, reporting counts to an instrumentation hook.
pub struct DividendTracker<I: Instrumentation = NoopInstrumentation> {
    instrumentation: I
}

impl DividendTracker<NoopInstrumentation> {
    pub fn new() -> Self {
        Self::with_instrumentation(NoopInstrumentation)
    }
}

impl Default for DividendTracker<NoopInstrumentation> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Instrumentation> DividendTracker<I> {
    pub fn with_instrumentation(instrumentation: I) -> Self {
        Self { instrumentation }
    }

    pub fn instrumentation(&self) -> &I {
        &self.instrumentation
    }

    /// Builds the dividend summary for the given activities and accounts.
    ///
    /// # Errors
    /// Returns `AggregateError::InvalidDate` if an extracted dividend carries a
    /// date that is not ISO-8601. No partial summary is produced in that case.
    pub fn summarize(&self, activities: &[RawActivity], accounts: &[Account]) -> Result<DividendSummary, AggregateError> {
        let (records, extraction) = extract_with_stats(activities, accounts);
        self.instrumentation.extracted(&extraction);

        let summary = aggregate(&records)?;
        self.instrumentation.aggregated(&AggregationStats::of(records.len(), &summary));

        Ok(summary)
    }
}
