//! JSON export of the digest, run metadata included.

use crate::models::NewsDigest;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize the digest and write it to `path`.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_digest(digest: &NewsDigest, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(digest)?;
    fs::write(path, json).await?;
    info!(path, rows = digest.rows.len(), "Wrote JSON digest");
    Ok(())
}
