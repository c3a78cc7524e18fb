//! Query error types
//!
//! Error codes:
//! - FLIGHT_QUERY_INVALID_BOUND (FATAL)
//!
//! A malformed query document is not a per-row condition; every query error
//! aborts the batch.

use std::fmt;

/// Query-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// `price` bound is not numeric
    FlightQueryInvalidBound,
}

impl QueryErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::FlightQueryInvalidBound => "FLIGHT_QUERY_INVALID_BOUND",
        }
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query error type with full context
#[derive(Debug)]
pub struct QueryError {
    code: QueryErrorCode,
    message: String,
    /// Position of the offending query in its batch
    query_index: Option<usize>,
}

impl QueryError {
    /// Create an invalid price bound error
    pub fn invalid_bound(value: &serde_json::Value) -> Self {
        Self {
            code: QueryErrorCode::FlightQueryInvalidBound,
            message: format!("price bound {} is not a number", value),
            query_index: None,
        }
    }

    /// Attach the position of the query within its batch
    pub fn at_query(mut self, index: usize) -> Self {
        self.query_index = Some(index);
        self
    }

    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn query_index(&self) -> Option<usize> {
        self.query_index
    }

    /// Query errors always abort the run
    pub fn is_fatal(&self) -> bool {
        true
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FATAL] {}: {}", self.code.code(), self.message)?;
        if let Some(index) = self.query_index {
            write!(f, " (query #{})", index)?;
        }
        Ok(())
    }
}

impl std::error::Error for QueryError {}

/// Result type for query operations
pub type QueryOpResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_code() {
        let err = QueryError::invalid_bound(&json!("cheap"));
        assert_eq!(err.code().code(), "FLIGHT_QUERY_INVALID_BOUND");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::invalid_bound(&json!("cheap")).at_query(2);
        let display = err.to_string();
        assert!(display.contains("FATAL"));
        assert!(display.contains("\"cheap\""));
        assert!(display.contains("#2"));
    }
}
