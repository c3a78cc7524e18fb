//! Observable events for flightdb
//!
//! Events are explicit and typed; each maps to a stable upper-case name.

use std::fmt;

/// Observable events in a flightdb run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Run configuration loaded and validated
    ConfigLoaded,

    // Ingestion
    /// A row failed validation
    RowRejected,
    /// Rejection log written
    RejectionLogWritten,

    // Document store
    /// Store written to disk
    StorePersisted,
    /// Store read back from disk
    StoreLoaded,
    /// No store on disk; an empty record set is used
    StoreMissing,

    // Query
    /// One query evaluated against the record set
    QueryEvaluated,
    /// A query carried an unusable price bound
    QueryRejected,
    /// Response document written
    ResponseWritten,

    // Run
    /// Run aborted with a fatal error
    RunFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RowRejected => "ROW_REJECTED",
            Event::RejectionLogWritten => "REJECTION_LOG_WRITTEN",
            Event::StorePersisted => "STORE_PERSISTED",
            Event::StoreLoaded => "STORE_LOADED",
            Event::StoreMissing => "STORE_MISSING",
            Event::QueryEvaluated => "QUERY_EVALUATED",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::ResponseWritten => "RESPONSE_WRITTEN",
            Event::RunFailed => "RUN_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::RunFailed)
    }

    /// Returns true for high-volume events emitted per row or per query
    pub fn is_detail(&self) -> bool {
        matches!(self, Event::RowRejected | Event::QueryEvaluated)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
