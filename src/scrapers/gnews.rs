//! Google News RSS fetcher, scoped to the configured publishers.
//!
//! The query combines the stock symbol with a disjunction of `site:`
//! operators over the publisher domain allow-list, plus quoted free-text
//! publisher names, e.g.
//!
//! ```text
//! RELIANCE site:etnownews.com OR site:economictimes.indiatimes.com OR "ET Now"
//! ```
//!
//! The feed endpoint is `https://news.google.com/rss/search` with `hl`,
//! `gl` and `ceid` locale parameters. Responses are standard RSS 2.0;
//! each `<item>` exposes title, link, `pubDate` and a `<source>` element
//! naming the publisher.

use crate::config::Config;
use crate::models::{RawNewsItem, publisher_from_link};
use crate::utils::truncate_for_log;
use itertools::Itertools;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, instrument};

const GOOGLE_NEWS_RSS: &str = "https://news.google.com/rss/search";

/// Seam for the per-symbol news search, so the pipeline can run against
/// scripted results in tests.
pub trait SearchNews {
    /// Fetch up to `max_results` raw headlines for `symbol`.
    ///
    /// Any fetch-level problem (network failure, non-success status,
    /// malformed feed) is an `Err`; the caller decides how to surface it.
    async fn fetch(&self, symbol: &str, max_results: usize)
    -> Result<Vec<RawNewsItem>, Box<dyn Error>>;
}

/// [`SearchNews`] against the Google News RSS endpoint.
pub struct GoogleNewsClient {
    client: reqwest::Client,
    base_url: String,
    language: String,
    country: String,
    sites: Vec<String>,
    names: Vec<String>,
}

impl GoogleNewsClient {
    pub fn new(config: &Config) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent("Mozilla/5.0")
            .build()?;
        Ok(Self {
            client,
            base_url: GOOGLE_NEWS_RSS.to_string(),
            language: config.language.clone(),
            country: config.country.clone(),
            sites: config.publisher_sites.clone(),
            names: config.publisher_names.clone(),
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&hl={}&gl={}&ceid={}:{}",
            self.base_url,
            urlencoding::encode(query),
            self.language,
            self.country,
            self.country,
            self.language
        )
    }
}

/// Build the search query for one symbol: the symbol followed by the
/// OR-joined site restrictions and quoted publisher names.
pub fn build_query(symbol: &str, sites: &[String], names: &[String]) -> String {
    let clauses = sites
        .iter()
        .map(|site| format!("site:{site}"))
        .chain(names.iter().map(|name| format!("\"{name}\"")))
        .join(" OR ");
    if clauses.is_empty() {
        symbol.to_string()
    } else {
        format!("{symbol} {clauses}")
    }
}

#[derive(Debug, Deserialize)]
struct Feed {
    channel: FeedChannel,
}

#[derive(Debug, Default, Deserialize)]
struct FeedChannel {
    #[serde(rename = "item", default)]
    items: Vec<FeedItem>,
}

#[derive(Debug, Default, Deserialize)]
struct FeedItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(rename = "pubDate", default)]
    pub_date: Option<String>,
    #[serde(default)]
    source: Option<FeedSource>,
}

#[derive(Debug, Default, Deserialize)]
struct FeedSource {
    #[serde(rename = "$text", default)]
    name: Option<String>,
}

/// Parse an RSS 2.0 feed body into raw items. Missing fields become
/// empty strings; the publisher falls back from the `<source>` element
/// to the `Title - Publisher` suffix, then to the link host.
pub fn parse_feed(xml: &str) -> Result<Vec<RawNewsItem>, Box<dyn Error>> {
    let feed: Feed = quick_xml::de::from_str(xml)?;
    Ok(feed
        .channel
        .items
        .into_iter()
        .map(|item| {
            let title = item.title.clone().unwrap_or_default();
            let link = item.link.clone().unwrap_or_default();
            let publisher = resolve_publisher(&item, &title, &link);
            RawNewsItem {
                title,
                link,
                publisher,
                published: item.pub_date.unwrap_or_default(),
            }
        })
        .collect())
}

fn resolve_publisher(item: &FeedItem, title: &str, link: &str) -> String {
    if let Some(name) = item.source.as_ref().and_then(|s| s.name.as_deref()) {
        if !name.is_empty() {
            return name.to_string();
        }
    }
    // Google News titles carry an "Article Title - Source Name" suffix
    if let Some(pos) = title.rfind(" - ") {
        let tail = title[pos + 3..].trim();
        if !tail.is_empty() {
            return tail.to_string();
        }
    }
    publisher_from_link(link).unwrap_or_default()
}

impl SearchNews for GoogleNewsClient {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(
        &self,
        symbol: &str,
        max_results: usize,
    ) -> Result<Vec<RawNewsItem>, Box<dyn Error>> {
        let query = build_query(symbol, &self.sites, &self.names);
        let url = self.search_url(&query);
        debug!(%symbol, %url, "Fetching news feed");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(format!("news feed returned status {}", response.status()).into());
        }
        let body = response.text().await?;
        let mut items = match parse_feed(&body) {
            Ok(items) => items,
            Err(e) => {
                return Err(format!(
                    "malformed news feed: {e}; body: {}",
                    truncate_for_log(&body, 200)
                )
                .into());
            }
        };
        items.truncate(max_results);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>"RELIANCE" - Google News</title>
    <link>https://news.google.com</link>
    <item>
      <title>Reliance Q1 results beat estimates - ET Now</title>
      <link>https://news.google.com/rss/articles/abc123</link>
      <guid isPermaLink="false">abc123</guid>
      <pubDate>Mon, 04 Aug 2025 10:30:00 GMT</pubDate>
      <source url="https://www.etnownews.com">ET Now</source>
    </item>
    <item>
      <title><![CDATA[Analysts stay bullish on Reliance - ET Markets]]></title>
      <link>https://news.google.com/rss/articles/def456</link>
      <pubDate>Sun, 03 Aug 2025 08:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_query_sites_and_names() {
        let query = build_query(
            "RELIANCE",
            &strings(&["etnownews.com", "economictimes.indiatimes.com"]),
            &strings(&["ET Now"]),
        );
        assert_eq!(
            query,
            "RELIANCE site:etnownews.com OR site:economictimes.indiatimes.com OR \"ET Now\""
        );
    }

    #[test]
    fn test_build_query_bare_symbol() {
        assert_eq!(build_query("TCS", &[], &[]), "TCS");
    }

    #[test]
    fn test_search_url_encodes_query_and_locale() {
        let client = GoogleNewsClient::new(&Config::default()).unwrap();
        let url = client.search_url("RELIANCE site:etnownews.com OR \"ET Now\"");
        assert!(url.starts_with("https://news.google.com/rss/search?q="));
        assert!(url.contains("RELIANCE%20site%3Aetnownews.com"));
        assert!(url.ends_with("&hl=en&gl=IN&ceid=IN:en"));
    }

    #[test]
    fn test_parse_feed() {
        let items = parse_feed(SAMPLE_FEED).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Reliance Q1 results beat estimates - ET Now");
        assert_eq!(items[0].publisher, "ET Now");
        assert_eq!(items[0].published, "Mon, 04 Aug 2025 10:30:00 GMT");
        assert_eq!(items[0].link, "https://news.google.com/rss/articles/abc123");
    }

    #[test]
    fn test_publisher_falls_back_to_title_suffix() {
        let items = parse_feed(SAMPLE_FEED).unwrap();
        // second item has no <source>, so the title suffix is used
        assert_eq!(items[1].publisher, "ET Markets");
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(parse_feed("this is not xml").is_err());
    }

    #[test]
    fn test_parse_feed_empty_channel() {
        let xml = r#"<rss version="2.0"><channel><title>empty</title></channel></rss>"#;
        let items = parse_feed(xml).unwrap();
        assert!(items.is_empty());
    }
}
