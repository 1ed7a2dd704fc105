//! The sequential fetch-filter-accumulate driver.
//!
//! One run processes each symbol fully (fetch, parse, filter) before
//! starting the next; there is no fan-out and no shared state beyond the
//! accumulator. Per-symbol failures are logged and contribute zero rows;
//! nothing aborts the run. Progress is the only externally observable
//! signal: `(index + 1) / total` after each symbol, monotonically
//! non-decreasing, reaching 1.0 on completion.

use crate::filter::normalize;
use crate::models::NewsRow;
use crate::scrapers::gnews::SearchNews;
use crate::timeframe::TimeWindow;
use tracing::{debug, info, instrument, warn};

/// Run the pipeline over `symbols`, truncated to `limit` entries
/// (`0` means no truncation), fetching up to `max_per_symbol` headlines
/// each, keeping those inside `window`.
#[instrument(level = "info", skip_all, fields(total = symbols.len(), limit = limit))]
pub async fn run<S, P>(
    news: &S,
    symbols: &[String],
    window: &TimeWindow,
    max_per_symbol: usize,
    limit: usize,
    mut progress: P,
) -> Vec<NewsRow>
where
    S: SearchNews,
    P: FnMut(f64),
{
    let picked: &[String] = if limit == 0 || limit >= symbols.len() {
        symbols
    } else {
        &symbols[..limit]
    };
    let total = picked.len();
    info!(total, "Starting news run");

    let mut rows: Vec<NewsRow> = Vec::new();
    for (index, symbol) in picked.iter().enumerate() {
        match news.fetch(symbol, max_per_symbol).await {
            Ok(items) => {
                let kept = normalize(symbol, &items, window);
                debug!(%symbol, fetched = items.len(), kept = kept.len(), "Processed symbol");
                rows.extend(kept);
            }
            Err(e) => {
                warn!(%symbol, error = %e, "News fetch failed; symbol contributes no rows");
            }
        }
        progress((index + 1) as f64 / total as f64);
    }

    info!(rows = rows.len(), "News run complete");
    rows
}
