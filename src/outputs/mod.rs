//! Presentation of the accumulated result set.
//!
//! The pipeline hands the digest over by value and nothing here mutates
//! it. Three renderings of the same rows:
//!
//! - [`table`]: Markdown-style table on stdout (or a "no results" notice)
//! - [`csv`]: CSV byte stream / file, header row always present
//! - [`json`]: the full digest with run metadata as a JSON file

pub mod csv;
pub mod json;
pub mod table;
