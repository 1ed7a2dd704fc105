//! Runtime configuration, loaded from an optional YAML file.
//!
//! Every field has a default, so the binary runs with no config file at
//! all; a file only needs to name the fields it overrides.
//!
//! ```yaml
//! listing_urls:
//!   - https://www1.nseindia.com/content/fo/fo_underlyinglist.htm
//! fallback_symbols: [RELIANCE, INFY, TCS]
//! symbol_cache_secs: 1800
//! ```

use serde::{Deserialize, Serialize};
use std::error::Error;
use tracing::info;

/// Application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Candidate exchange listing pages, tried in order. The first one
    /// that yields a parseable symbol table wins.
    pub listing_urls: Vec<String>,
    /// Symbols returned when every listing URL fails. Must stay non-empty.
    pub fallback_symbols: Vec<String>,
    /// Publisher domains the news query is restricted to (`site:` clauses).
    pub publisher_sites: Vec<String>,
    /// Free-text publisher names OR-ed into the query alongside the sites.
    pub publisher_names: Vec<String>,
    /// How long a fetched symbol list stays memoized, in seconds.
    pub symbol_cache_secs: u64,
    /// Per-request HTTP timeout, in seconds.
    pub request_timeout_secs: u64,
    /// News search language code.
    pub language: String,
    /// News search region code.
    pub country: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_urls: vec![
                "https://www1.nseindia.com/content/fo/fo_underlyinglist.htm".to_string(),
                "https://www.nseindia.com/products-services/equity-derivatives-list-underlyings-information"
                    .to_string(),
            ],
            fallback_symbols: vec![
                "RELIANCE".to_string(),
                "INFY".to_string(),
                "TCS".to_string(),
                "HDFCBANK".to_string(),
                "ICICIBANK".to_string(),
            ],
            publisher_sites: vec![
                "etnownews.com".to_string(),
                "economictimes.indiatimes.com".to_string(),
            ],
            publisher_names: vec!["ET Now".to_string(), "ET Markets".to_string()],
            symbol_cache_secs: 3600,
            request_timeout_secs: 10,
            language: "en".to_string(),
            country: "IN".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, or the defaults when no path
    /// is given.
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&raw)?;
                info!(path, "Loaded configuration");
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_usable() {
        let config = Config::default();
        assert!(!config.listing_urls.is_empty());
        assert!(config.fallback_symbols.len() >= 5);
        assert!(!config.publisher_sites.is_empty());
        assert_eq!(config.symbol_cache_secs, 3600);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.country, "IN");
    }

    #[test]
    fn test_partial_yaml_overrides_defaults() {
        let yaml = "symbol_cache_secs: 120\nfallback_symbols: [AAA, BBB]\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.symbol_cache_secs, 120);
        assert_eq!(config.fallback_symbols, vec!["AAA", "BBB"]);
        // untouched fields keep their defaults
        assert_eq!(config.language, "en");
        assert!(!config.listing_urls.is_empty());
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.country, Config::default().country);
    }
}
