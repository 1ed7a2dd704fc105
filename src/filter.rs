//! Publish-date filtering and row normalization.
//!
//! Raw feed items carry publish dates as strings whose format is not
//! guaranteed consistent across items or feed versions. [`parse_published`]
//! tries the formats seen in the wild; items whose date cannot be parsed
//! are dropped silently (a single bad date is an expected, recoverable
//! condition, not a fault). Surviving items older than the window lower
//! bound are dropped before a [`NewsRow`] is ever constructed.

use crate::models::{NewsRow, RawNewsItem};
use crate::timeframe::TimeWindow;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Datetime layouts tried after the RFC parsers, most specific first.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Date-only layouts; parsed values get a midnight time component.
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y", "%d %B %Y"];

/// Leniently parse a publish-date string.
///
/// Accepts RFC-2822 (the Google News feed format, `Mon, 04 Aug 2025
/// 10:30:00 GMT`), RFC-3339, and the common ISO-like layouts above.
/// Zone-aware inputs are normalized to UTC before the zone is dropped.
pub fn parse_published(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(at) = DateTime::parse_from_rfc2822(raw) {
        return Some(at.naive_utc());
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.naive_utc());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(at);
        }
    }
    for format in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Filter raw items against the window and map survivors to rows.
///
/// Items with unparsable dates or dates before the window lower bound
/// contribute nothing; the lower bound itself is inclusive.
pub fn normalize(symbol: &str, items: &[RawNewsItem], window: &TimeWindow) -> Vec<NewsRow> {
    let mut rows = Vec::new();
    for item in items {
        let Some(published) = parse_published(&item.published) else {
            debug!(%symbol, published = %item.published, "Unparsable publish date; dropping item");
            continue;
        };
        if !window.contains(published) {
            debug!(%symbol, %published, "Item outside window; dropping");
            continue;
        }
        rows.push(NewsRow {
            stock: symbol.to_string(),
            title: item.title.clone(),
            publisher: item.publisher.clone(),
            published: published.date(),
            link: item.link.clone(),
        });
    }
    rows
}
