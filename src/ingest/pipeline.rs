//! Ingestion pipeline
//!
//! Reads header-driven CSV, validates each row, and partitions rows into
//! accepted records and rejection reports.
//!
//! Rows map to records by column name. Cells missing from a short row count
//! as missing fields; cells beyond the header are ignored. Line numbers start
//! at 2 and advance once per data row, valid or not.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::errors::{IngestError, IngestResult};
use super::report::RejectionReport;
use crate::observability::{log_event_with_fields, Event, ObservationScope};
use crate::record::{FlightRecord, RawFlightRecord};
use crate::validation::FlightValidator;

/// Line number of the first data row (the header is line 1)
pub const FIRST_DATA_LINE: usize = 2;

/// Accepted records and rejections from one source, both in row order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestOutcome {
    pub accepted: Vec<FlightRecord>,
    pub rejections: Vec<RejectionReport>,
}

impl IngestOutcome {
    pub fn valid_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.rejections.len()
    }

    /// Console summary line: `Valid: X, Invalid: Y`
    pub fn summary(&self) -> String {
        format!("Valid: {}, Invalid: {}", self.valid_count(), self.invalid_count())
    }
}

/// Ingests a CSV file, using its path as the source identifier.
pub fn ingest_path(path: &Path) -> IngestResult<IngestOutcome> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| IngestError::read_failed(&source, e))?;
    ingest_reader(&source, BufReader::new(file))
}

/// Ingests CSV from any reader.
///
/// # Errors
///
/// Fails only when the source itself cannot be read or parsed; invalid rows
/// are reported in the outcome.
pub fn ingest_reader<R: Read>(source: &str, reader: R) -> IngestResult<IngestOutcome> {
    let scope = ObservationScope::with_fields("INGEST", &[("source", source)]);

    match ingest_rows(source, reader) {
        Ok(outcome) => {
            scope.complete_with_fields(&[
                ("valid", &outcome.valid_count().to_string()),
                ("invalid", &outcome.invalid_count().to_string()),
            ]);
            Ok(outcome)
        }
        Err(e) => {
            scope.fail(&e.to_string());
            Err(e)
        }
    }
}

fn ingest_rows<R: Read>(source: &str, reader: R) -> IngestResult<IngestOutcome> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| IngestError::from_csv(source, e).at_line(1))?
        .clone();

    let mut outcome = IngestOutcome::default();

    for (offset, row) in csv_reader.records().enumerate() {
        let line = FIRST_DATA_LINE + offset;
        let row = row.map_err(|e| {
            // quoted cells may span lines, so prefer the reader's own position
            let physical = e.position().map_or(line, |pos| pos.line() as usize);
            IngestError::from_csv(source, e).at_line(physical)
        })?;

        let raw = RawFlightRecord::from_pairs(
            headers
                .iter()
                .zip(row.iter())
                .filter(|(column, _)| !column.is_empty()),
        );

        match FlightValidator::validate(&raw) {
            Ok(record) => outcome.accepted.push(record),
            Err(rejection) => {
                let report = RejectionReport::new(source, line, rejection);
                log_event_with_fields(
                    Event::RowRejected,
                    &[
                        ("line", &line.to_string()),
                        ("reason", &report.reason()),
                        ("source", source),
                    ],
                );
                outcome.rejections.push(report);
            }
        }
    }

    Ok(outcome)
}
