//! Data acquisition: the exchange listing scrape and the news feed fetch.
//!
//! Both modules expose their transport behind a small trait so the
//! pipeline and the symbol cache can be exercised with scripted fakes:
//!
//! - [`listing`]: scrapes the F&O underlying list from the exchange site
//!   and memoizes it, falling back to a static list when scraping fails
//! - [`gnews`]: queries Google News RSS per symbol, scoped to the
//!   configured publisher domains
//!
//! Failures on either path are recoverable by design: the listing scrape
//! degrades to the fallback list, and a failed news fetch means the
//! symbol contributes zero rows. Errors reach the operator through the
//! log, never through the data model.

pub mod gnews;
pub mod listing;
