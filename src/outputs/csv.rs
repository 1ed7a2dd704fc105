//! CSV export of the result set.
//!
//! The header row matches the output column names exactly and is always
//! written, even when no rows survived filtering, so downstream tooling
//! sees a well-formed file either way.

use crate::models::NewsRow;
use csv::WriterBuilder;
use std::error::Error;
use tracing::info;

const HEADER: [&str; 5] = ["Stock", "Title", "Publisher", "Published Date", "Link"];

/// Serialize rows to CSV bytes, header row first.
pub fn to_csv_bytes(rows: &[NewsRow]) -> Result<Vec<u8>, Box<dyn Error>> {
    // header written explicitly so it is present even for zero rows
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(writer.into_inner()?)
}

/// Write the CSV export to `path`.
pub async fn write_rows(rows: &[NewsRow], path: &str) -> Result<(), Box<dyn Error>> {
    let bytes = to_csv_bytes(rows)?;
    tokio::fs::write(path, bytes).await?;
    info!(path, count = rows.len(), "Wrote CSV export");
    Ok(())
}
