//! Stdout table rendering.

use crate::models::{NewsDigest, NewsRow};
use std::fmt::Write;

const COLUMNS: [&str; 5] = ["Stock", "Title", "Publisher", "Published Date", "Link"];

/// Render rows as a Markdown-style table, header first, one line per row
/// in insertion order.
pub fn render_table(rows: &[NewsRow]) -> String {
    let mut out = String::new();
    writeln!(out, "| {} |", COLUMNS.join(" | ")).unwrap();
    writeln!(out, "|{}", "---|".repeat(COLUMNS.len())).unwrap();
    for row in rows {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            escape_cell(&row.stock),
            escape_cell(&row.title),
            escape_cell(&row.publisher),
            row.published.format("%Y-%m-%d"),
            escape_cell(&row.link)
        )
        .unwrap();
    }
    out
}

/// Print the digest: a title line, then the table, or a notice when no
/// rows survived filtering.
pub fn print_digest(digest: &NewsDigest) {
    println!(
        "# F&O stock news — {} ({})",
        digest.generated_date, digest.timeframe
    );
    println!();
    if digest.is_empty() {
        println!("No recent news found from the configured publishers for the selected timeframe.");
    } else {
        print!("{}", render_table(&digest.rows));
    }
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
