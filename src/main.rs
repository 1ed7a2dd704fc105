//! # F&O News Digest
//!
//! A news digest pipeline for NSE derivatives-eligible (F&O) stocks:
//! scrapes the exchange's underlying list for ticker symbols, queries
//! Google News RSS per symbol scoped to a small set of publishers,
//! filters headlines by a user-selected lookback window, and renders the
//! surviving rows as a table with optional CSV and JSON exports.
//!
//! ## Usage
//!
//! ```sh
//! fno_news_digest --timeframe one-month --stocks 25 --csv-output news.csv
//! ```
//!
//! ## Architecture
//!
//! The application follows a strictly sequential pipeline:
//! 1. **Symbols**: Scrape the F&O underlying list (memoized, with a
//!    static fallback when every listing URL fails)
//! 2. **Window**: Resolve the selected timeframe to a lower-bound
//!    timestamp
//! 3. **Fetch + filter**: For each symbol in turn, query the news feed
//!    and keep headlines inside the window
//! 4. **Present**: Render the table on stdout and write the optional
//!    CSV/JSON exports
//!
//! No step is fatal: scrape failures degrade to the fallback list, and a
//! failed news fetch only costs that symbol's rows.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod filter;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod timeframe;
mod utils;

use cli::Cli;
use config::Config;
use models::NewsDigest;
use scrapers::gnews::GoogleNewsClient;
use scrapers::listing::{HttpListing, SymbolSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("fno_news_digest starting up");

    let args = Cli::parse();
    debug!(?args.timeframe, args.stocks, args.max_headlines, "Parsed CLI arguments");

    let config = Config::load(args.config.as_deref())?;

    // ---- Symbol list (scraped or fallback, memoized) ----
    let fetcher = HttpListing::new(Duration::from_secs(config.request_timeout_secs))?;
    let mut symbol_source = SymbolSource::new(fetcher, &config);
    let symbols = symbol_source.symbols().await;
    info!(count = symbols.len(), "Resolved F&O symbol list");

    // ---- Date window ----
    let window = args.timeframe.window();
    info!(
        timeframe = args.timeframe.label(),
        since = %window.since,
        "Resolved lookback window"
    );

    // ---- Per-symbol news run ----
    let news = GoogleNewsClient::new(&config)?;
    let rows = pipeline::run(
        &news,
        &symbols,
        &window,
        args.max_headlines as usize,
        args.stocks,
        |fraction| info!(percent = (fraction * 100.0).round() as u32, "Fetch progress"),
    )
    .await;

    let digest = NewsDigest::new(
        Local::now().date_naive().to_string(),
        args.timeframe.label(),
        rows,
    );
    if digest.is_empty() {
        warn!(
            timeframe = digest.timeframe.as_str(),
            "No rows survived filtering"
        );
    }

    // ---- Present ----
    outputs::table::print_digest(&digest);

    if let Some(path) = args.csv_output.as_deref() {
        if let Err(e) = outputs::csv::write_rows(&digest.rows, path).await {
            error!(path, error = %e, "Failed to write CSV export");
        }
    }
    if let Some(path) = args.json_output.as_deref() {
        if let Err(e) = outputs::json::write_digest(&digest, path).await {
            error!(path, error = %e, "Failed to write JSON digest");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        rows = digest.rows.len(),
        "Execution complete"
    );

    Ok(())
}
