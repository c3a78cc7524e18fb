//! Ingestion subsystem for flightdb
//!
//! Turns a header-driven CSV source into accepted `FlightRecord`s and
//! line-numbered `RejectionReport`s.
//!
//! # Invariants
//!
//! - Row order is preserved in the accepted sequence
//! - Row-level failures never abort ingestion
//! - Unreadable or unparseable sources always do

mod errors;
mod pipeline;
mod report;

pub use errors::{IngestError, IngestErrorCode, IngestResult};
pub use pipeline::{ingest_path, ingest_reader, IngestOutcome, FIRST_DATA_LINE};
pub use report::RejectionReport;
