//! CLI argument definitions using clap
//!
//! Usage:
//! - flightdb -i flights.csv [-o db.json]
//! - flightdb -q queries.json [-o db.json]
//! - flightdb -i flights.csv -q queries.json

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// flightdb - validate flight records, store them, and filter them
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "flightdb")]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(true)
        .args(["input", "queries"])
))]
pub struct Cli {
    /// CSV file of flight rows to ingest
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Document store path [default: db.json]
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// JSON file holding an array of queries
    #[arg(short = 'q', long = "queries")]
    pub queries: Option<PathBuf>,

    /// Path to a JSON run configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Identity token embedded in response file names
    #[arg(long)]
    pub response_id: Option<String>,

    /// Minimum log severity (trace, info, warn, error, fatal)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["flightdb", "-i", "f.csv", "-o", "out.json", "-q", "q.json"])
            .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("f.csv")));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.queries, Some(PathBuf::from("q.json")));
    }

    #[test]
    fn test_mode_required() {
        assert!(Cli::try_parse_from(["flightdb", "-o", "db.json"]).is_err());
    }

    #[test]
    fn test_query_only() {
        let cli = Cli::try_parse_from(["flightdb", "--queries", "q.json", "--response-id", "ops"])
            .unwrap();
        assert!(cli.input.is_none());
        assert_eq!(cli.response_id.as_deref(), Some("ops"));
    }
}
