//! Data models for fetched headlines and the assembled digest.
//!
//! This module defines the core data structures used throughout the
//! application:
//! - [`RawNewsItem`]: A headline as it comes off the Google News feed,
//!   publish date still a string
//! - [`NewsRow`]: A normalized, date-filtered row ready for presentation
//! - [`NewsDigest`]: The full result set of one run plus its metadata
//!
//! `NewsRow` fields carry serde renames matching the output column names,
//! so the same struct drives the table, the CSV export, and the JSON
//! export without a separate wire type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A raw headline returned by the news search, before date filtering.
///
/// Field values come straight from the feed; anything the feed omitted is
/// an empty string rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNewsItem {
    /// Headline text, usually suffixed `" - Publisher"` by Google News.
    pub title: String,
    /// Article URL.
    pub link: String,
    /// Publisher name from the feed's `<source>` element, if present.
    pub publisher: String,
    /// Publish date string; format varies by feed and item.
    pub published: String,
}

/// A normalized headline row that survived the date window filter.
///
/// Rows are only ever constructed for items whose parsed publish date is
/// inside the window, so holding one implies the invariant already holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRow {
    /// The stock symbol this headline was fetched for.
    #[serde(rename = "Stock")]
    pub stock: String,
    /// Headline text.
    #[serde(rename = "Title")]
    pub title: String,
    /// Publisher name.
    #[serde(rename = "Publisher")]
    pub publisher: String,
    /// Publish date, calendar precision. Serializes as `YYYY-MM-DD`.
    #[serde(rename = "Published Date")]
    pub published: NaiveDate,
    /// Article URL.
    #[serde(rename = "Link")]
    pub link: String,
}

/// The result set of one pipeline run.
///
/// Rows keep insertion order: grouped by the order symbols were processed,
/// then feed order within a symbol. Duplicates from overlapping queries are
/// not collapsed.
#[derive(Debug, Deserialize, Serialize)]
pub struct NewsDigest {
    /// The date the digest was generated, `YYYY-MM-DD`.
    pub generated_date: String,
    /// Human-readable timeframe label, e.g. "1 Month".
    pub timeframe: String,
    /// The accumulated rows.
    pub rows: Vec<NewsRow>,
}

impl NewsDigest {
    pub fn new(generated_date: String, timeframe: &str, rows: Vec<NewsRow>) -> Self {
        Self {
            generated_date,
            timeframe: timeframe.to_string(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Derive a publisher name from an article URL's host.
/// For example: "https://www.etnownews.com/markets/..." -> "etnownews"
///
/// Used when the feed item carries neither a `<source>` element nor a
/// recognizable title suffix.
pub fn publisher_from_link(link: &str) -> Option<String> {
    let parsed = url::Url::parse(link).ok()?;
    let host = parsed.host_str()?;
    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() >= 2 {
        Some(parts[parts.len() - 2].to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> NewsRow {
        NewsRow {
            stock: "RELIANCE".to_string(),
            title: "Reliance announces results".to_string(),
            publisher: "ET Now".to_string(),
            published: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            link: "https://www.etnownews.com/markets/reliance".to_string(),
        }
    }

    #[test]
    fn test_row_serializes_with_output_column_names() {
        let json = serde_json::to_string(&sample_row()).unwrap();
        assert!(json.contains("\"Stock\":\"RELIANCE\""));
        assert!(json.contains("\"Published Date\":\"2025-08-01\""));
        assert!(json.contains("\"Link\""));
    }

    #[test]
    fn test_row_round_trips() {
        let row = sample_row();
        let json = serde_json::to_string(&row).unwrap();
        let back: NewsRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_digest_serialization() {
        let digest = NewsDigest::new("2025-08-06".to_string(), "1 Week", vec![sample_row()]);
        let json = serde_json::to_string(&digest).unwrap();
        assert!(json.contains("2025-08-06"));
        assert!(json.contains("1 Week"));
        assert!(!digest.is_empty());
    }

    #[test]
    fn test_empty_digest() {
        let digest = NewsDigest::new("2025-08-06".to_string(), "3 Months", vec![]);
        assert!(digest.is_empty());
    }

    #[test]
    fn test_publisher_from_link() {
        assert_eq!(
            publisher_from_link("https://www.etnownews.com/markets/story"),
            Some("etnownews".to_string())
        );
        assert_eq!(
            publisher_from_link("https://economictimes.indiatimes.com/markets"),
            Some("indiatimes".to_string())
        );
        assert_eq!(publisher_from_link("not a url"), None);
    }

    #[test]
    fn test_raw_item_defaults_to_empty_fields() {
        let raw = RawNewsItem::default();
        assert_eq!(raw.title, "");
        assert_eq!(raw.publisher, "");
    }
}
