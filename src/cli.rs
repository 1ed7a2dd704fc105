//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap`
//! crate. The timeframe is a closed enum, so an out-of-range lookback
//! label cannot reach the window resolver.

use crate::timeframe::Timeframe;
use clap::Parser;

/// Command-line arguments for the F&O news digest.
///
/// # Examples
///
/// ```sh
/// # Default: 10 stocks, 3 headlines each, one-week lookback
/// fno_news_digest
///
/// # Month lookback over every F&O stock, with a CSV export
/// fno_news_digest --timeframe one-month --stocks 0 --csv-output news.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Lookback window for news filtering
    #[arg(short, long, value_enum, default_value = "one-week")]
    pub timeframe: Timeframe,

    /// How many F&O stocks to process (0 = all)
    #[arg(short, long, default_value_t = 10)]
    pub stocks: usize,

    /// Maximum headlines requested per stock
    #[arg(short = 'n', long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub max_headlines: u8,

    /// Write the result set as CSV to this path
    #[arg(long)]
    pub csv_output: Option<String>,

    /// Write the digest (rows plus run metadata) as JSON to this path
    #[arg(long)]
    pub json_output: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["fno_news_digest"]);
        assert_eq!(cli.timeframe, Timeframe::OneWeek);
        assert_eq!(cli.stocks, 10);
        assert_eq!(cli.max_headlines, 3);
        assert!(cli.csv_output.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_full_invocation() {
        let cli = Cli::parse_from([
            "fno_news_digest",
            "--timeframe",
            "three-months",
            "--stocks",
            "0",
            "--max-headlines",
            "10",
            "--csv-output",
            "/tmp/news.csv",
            "--json-output",
            "/tmp/news.json",
        ]);
        assert_eq!(cli.timeframe, Timeframe::ThreeMonths);
        assert_eq!(cli.stocks, 0);
        assert_eq!(cli.max_headlines, 10);
        assert_eq!(cli.csv_output.as_deref(), Some("/tmp/news.csv"));
        assert_eq!(cli.json_output.as_deref(), Some("/tmp/news.json"));
    }

    #[test]
    fn test_cli_rejects_out_of_range_headline_count() {
        assert!(Cli::try_parse_from(["fno_news_digest", "--max-headlines", "11"]).is_err());
        assert!(Cli::try_parse_from(["fno_news_digest", "--max-headlines", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_timeframe() {
        assert!(Cli::try_parse_from(["fno_news_digest", "--timeframe", "2-weeks"]).is_err());
    }
}
