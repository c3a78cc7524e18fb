//! CLI command implementations
//!
//! A run is ingest (optional) followed by query (optional), in that order:
//! 1. Ingest: validate the CSV, replace the store, write the rejection log
//! 2. Query: use the records ingested in this run, else reload the store,
//!    else an empty set; write one response document
//!
//! Any error aborts the run. Row-level rejections never do.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::ingest::{ingest_path, IngestOutcome};
use crate::observability::{log_event_with_fields, Event, Logger, ObservationScope};
use crate::query::QueryEngine;
use crate::record::FlightRecord;
use crate::storage::{read_queries, write_lines, write_response, DocumentStore};

use super::args::Cli;
use super::config::RunConfig;
use super::errors::CliResult;

/// What a run produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// `(valid, invalid)` row counts, when ingestion ran
    pub ingested: Option<(usize, usize)>,
    /// Response document path, when queries ran
    pub response_path: Option<PathBuf>,
}

/// Main CLI entry point
///
/// Parses arguments and runs them against the local clock.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(&cli, Local::now().naive_local()).map(|_| ()).map_err(|e| {
        log_event_with_fields(Event::RunFailed, &[("error", &e.to_string())]);
        e
    })
}

/// Runs one invocation; `now` stamps the response file name.
pub fn run_command(cli: &Cli, now: NaiveDateTime) -> CliResult<RunReport> {
    let config = RunConfig::resolve(cli)?;
    Logger::set_min_severity(config.severity()?);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("response_id", &config.response_id),
            ("store_path", &config.store_path.display().to_string()),
        ],
    );

    let mut report = RunReport::default();
    let mut ingested: Option<Vec<FlightRecord>> = None;

    if let Some(input) = &cli.input {
        let outcome = ingest(&config, input)?;
        println!("{}", outcome.summary());
        println!(
            "Written to {} & {}",
            config.store_path.display(),
            config.rejection_log.display()
        );
        report.ingested = Some((outcome.valid_count(), outcome.invalid_count()));
        ingested = Some(outcome.accepted);
    }

    if let Some(queries) = &cli.queries {
        let records = match ingested {
            Some(records) => records,
            None => DocumentStore::new(&config.store_path).load_or_empty()?,
        };
        let path = query(&config, &records, queries, now)?;
        println!("Saved query results to {}", path.display());
        report.response_path = Some(path);
    }

    Ok(report)
}

/// Ingests a CSV file, replaces the store, and writes the rejection log.
pub fn ingest(config: &RunConfig, input: &Path) -> CliResult<IngestOutcome> {
    let outcome = ingest_path(input)?;

    DocumentStore::new(&config.store_path).persist(&outcome.accepted)?;

    write_lines(&config.rejection_log, &outcome.rejections)?;
    log_event_with_fields(
        Event::RejectionLogWritten,
        &[
            ("path", &config.rejection_log.display().to_string()),
            ("rejections", &outcome.invalid_count().to_string()),
        ],
    );

    Ok(outcome)
}

/// Runs every query in `queries_path` over `records` and writes the response.
///
/// Returns the response document path.
pub fn query(
    config: &RunConfig,
    records: &[FlightRecord],
    queries_path: &Path,
    now: NaiveDateTime,
) -> CliResult<PathBuf> {
    let scope = ObservationScope::with_fields(
        "QUERY",
        &[("queries", queries_path.to_str().unwrap_or("<non-utf8 path>"))],
    );

    match run_queries(config, records, queries_path, now) {
        Ok(path) => {
            scope.complete_with_fields(&[("response", &path.display().to_string())]);
            Ok(path)
        }
        Err(e) => {
            scope.fail(&e.to_string());
            Err(e)
        }
    }
}

fn run_queries(
    config: &RunConfig,
    records: &[FlightRecord],
    queries_path: &Path,
    now: NaiveDateTime,
) -> CliResult<PathBuf> {
    let queries = read_queries(queries_path)?;
    let results = QueryEngine::new(records).run_batch(&queries)?;
    let path = write_response(&config.output_dir, &config.response_id, now, &results)?;
    Ok(path)
}
