//! F&O symbol list scraper with a time-bounded in-memory cache.
//!
//! The exchange publishes the derivatives-eligible underlying list as a
//! plain HTML table. [`extract_symbols`] pulls the `SYMBOL` column out of
//! the first table on the page; [`SymbolSource`] tries each configured
//! listing URL in order, memoizes whatever it ends up with (scraped or
//! fallback) for the configured duration, and never fails: when every
//! candidate URL is unusable it degrades to the fallback list.

use crate::config::Config;
use crate::utils::normalize_ws;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("th, td").unwrap());

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Transport seam for fetching a listing page body.
pub trait FetchListing {
    /// Fetch `url` and return its body, or an error for any non-usable
    /// response (network failure, timeout, non-200 status).
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// [`FetchListing`] over HTTP with a browser-like `User-Agent`.
pub struct HttpListing {
    client: reqwest::Client,
}

impl HttpListing {
    pub fn new(timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl FetchListing for HttpListing {
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(format!("listing page returned status {}", response.status()).into());
        }
        Ok(response.text().await?)
    }
}

/// Extract the `SYMBOL` column from the first HTML table in `html`.
///
/// The header match is lenient about case and surrounding whitespace.
/// Values are trimmed, empty cells skipped, and duplicates removed while
/// preserving first-seen order. Returns `None` when the page has no
/// table, no `SYMBOL` column, or no values.
pub fn extract_symbols(html: &str) -> Option<Vec<String>> {
    let document = Html::parse_document(html);
    let table = document.select(&TABLE).next()?;

    let mut rows = table.select(&ROW);
    let header = rows.next()?;
    let symbol_column = header
        .select(&CELL)
        .position(|cell| normalize_ws(&cell.text().collect::<Vec<_>>().join(" ")).to_uppercase() == "SYMBOL")?;

    let symbols: Vec<String> = rows
        .filter_map(|row| row.select(&CELL).nth(symbol_column))
        .map(|cell| normalize_ws(&cell.text().collect::<Vec<_>>().join(" ")))
        .filter(|value| !value.is_empty())
        .unique()
        .collect();

    if symbols.is_empty() { None } else { Some(symbols) }
}

struct CachedSymbols {
    symbols: Vec<String>,
    fetched_at: Instant,
}

/// The memoized symbol source.
///
/// One cache entry, keyed by nothing: repeated calls inside the TTL
/// return the previous list without touching the network. The clock
/// instant is passed explicitly on the internal path so tests can move
/// time instead of sleeping.
pub struct SymbolSource<F> {
    fetcher: F,
    urls: Vec<String>,
    fallback: Vec<String>,
    ttl: Duration,
    cached: Option<CachedSymbols>,
}

impl<F: FetchListing> SymbolSource<F> {
    pub fn new(fetcher: F, config: &Config) -> Self {
        Self {
            fetcher,
            urls: config.listing_urls.clone(),
            fallback: config.fallback_symbols.clone(),
            ttl: Duration::from_secs(config.symbol_cache_secs),
            cached: None,
        }
    }

    /// Return the F&O symbol list. Never fails: every fetch or parse
    /// problem degrades to the fallback list.
    pub async fn symbols(&mut self) -> Vec<String> {
        self.symbols_at(Instant::now()).await
    }

    pub(crate) async fn symbols_at(&mut self, now: Instant) -> Vec<String> {
        if let Some(cached) = &self.cached {
            if now.duration_since(cached.fetched_at) < self.ttl {
                debug!(count = cached.symbols.len(), "Symbol cache hit");
                return cached.symbols.clone();
            }
        }

        let symbols = match self.scrape().await {
            Some(symbols) => symbols,
            None => {
                warn!(
                    count = self.fallback.len(),
                    "All listing URLs failed; using fallback symbol list"
                );
                self.fallback.clone()
            }
        };

        self.cached = Some(CachedSymbols {
            symbols: symbols.clone(),
            fetched_at: now,
        });
        symbols
    }

    #[instrument(level = "info", skip_all)]
    async fn scrape(&self) -> Option<Vec<String>> {
        for url in &self.urls {
            match self.fetcher.fetch(url).await {
                Ok(body) => match extract_symbols(&body) {
                    Some(symbols) => {
                        info!(count = symbols.len(), %url, "Scraped F&O symbol list");
                        return Some(symbols);
                    }
                    None => warn!(%url, "Listing page has no usable SYMBOL table"),
                },
                Err(e) => warn!(%url, error = %e, "Listing fetch failed"),
            }
        }
        None
    }
}
