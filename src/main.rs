use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use dividend_tracker::engine::{DividendTracker, TracingInstrumentation};
use dividend_tracker::loader::CsvLoader;
use dividend_tracker::models::DividendSummary;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: dividend-tracker [activities].csv [accounts].csv [log_level:optional] > [summary].json");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let activities_path = &args[1];
    let accounts_path = &args[2];
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let loader = CsvLoader::new();
    let (activities, accounts) = tokio::try_join!(
        loader.load_activities(activities_path),
        loader.load_accounts(accounts_path)
    )?;

    let tracker = DividendTracker::with_instrumentation(TracingInstrumentation);

    let timer = Instant::now();
    let summary = tracker.summarize(&activities, &accounts)
        .context("Failed to summarize dividend activities")?;
    let duration = timer.elapsed();

    info!("Summarized dividends in: {duration:?}");

    if let Some(year) = summary.latest_year() {
        for (account_id, total) in summary.account_totals(Some(year))? {
            info!("[{year}] account [{account_id}] received [{total}]");
        }
    }

    write_summary_to_stdout(&summary)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the JSON summary, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_summary_to_stdout(summary: &DividendSummary) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, summary)?;
    writeln!(output)?;

    output.flush()?;

    Ok(())
}
