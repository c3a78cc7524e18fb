//! Ingestion error types
//!
//! Error codes:
//! - FLIGHT_INGEST_READ_FAILED (FATAL)
//! - FLIGHT_INGEST_MALFORMED (FATAL)
//!
//! Row-level validation failures are not errors here; they become
//! `RejectionReport`s. These codes cover sources that cannot be read at all.

use std::fmt;

/// Ingestion-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestErrorCode {
    /// Source could not be opened or read
    FlightIngestReadFailed,
    /// Source is not parseable as delimited text
    FlightIngestMalformed,
}

impl IngestErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            IngestErrorCode::FlightIngestReadFailed => "FLIGHT_INGEST_READ_FAILED",
            IngestErrorCode::FlightIngestMalformed => "FLIGHT_INGEST_MALFORMED",
        }
    }
}

impl fmt::Display for IngestErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Ingestion error type with full context
#[derive(Debug)]
pub struct IngestError {
    code: IngestErrorCode,
    message: String,
    source_id: String,
    line: Option<usize>,
}

impl IngestError {
    /// Create a read failed error
    pub fn read_failed(source_id: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            code: IngestErrorCode::FlightIngestReadFailed,
            message: reason.to_string(),
            source_id: source_id.into(),
            line: None,
        }
    }

    /// Create a malformed source error
    pub fn malformed(source_id: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            code: IngestErrorCode::FlightIngestMalformed,
            message: reason.to_string(),
            source_id: source_id.into(),
            line: None,
        }
    }

    /// Classifies a csv error as a read failure or a malformed source
    pub fn from_csv(source_id: impl Into<String>, err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::read_failed(source_id, err)
        } else {
            Self::malformed(source_id, err)
        }
    }

    /// Attach the source line where the failure happened
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn code(&self) -> IngestErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FATAL] {}: {}", self.code.code(), self.source_id)?;
        if let Some(line) = self.line {
            write!(f, "-line {}", line)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for IngestError {}

/// Result type for ingestion
pub type IngestResult<T> = Result<T, IngestError>;
