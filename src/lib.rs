//! Dividend income summaries built from a host's activity stream.
//!
//! The pipeline is [`engine::extract`] followed by [`engine::aggregate`], or
//! [`engine::DividendTracker::summarize`] for both with instrumentation. The
//! [`loader`] module is the CSV host used by the `dividend-tracker` binary.

pub mod engine;
pub mod loader;
pub mod models;
pub mod types;
