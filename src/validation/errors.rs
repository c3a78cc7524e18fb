//! Validation issue types
//!
//! Each issue renders as the human-readable reason written to the rejection
//! log. A rejected row carries every issue found, in rule order.

use std::fmt;

use thiserror::Error;

/// A single rule violation found in a flight row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Required field absent or empty
    #[error("missing {0}")]
    MissingField(&'static str),
    /// Field present but not in the expected shape
    #[error("invalid {0}")]
    InvalidFormat(&'static str),
    /// Arrival is not strictly after departure
    #[error("arrival <= departure")]
    ChronologyViolation,
    /// Price parsed but is zero or negative
    #[error("price <= 0")]
    NonPositivePrice,
}

impl ValidationIssue {
    /// Returns the field the issue is about, if it names one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationIssue::MissingField(f) | ValidationIssue::InvalidFormat(f) => Some(*f),
            ValidationIssue::ChronologyViolation => None,
            ValidationIssue::NonPositivePrice => Some("price"),
        }
    }
}

/// Why a row was rejected: one or more issues in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    issues: Vec<ValidationIssue>,
}

impl Rejection {
    pub(crate) fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Returns each reason as a separate string.
    pub fn reasons(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// Returns the `"; "`-joined reason string.
    pub fn reason(&self) -> String {
        self.reasons().join("; ")
    }

    /// True when the row was short-circuited on missing fields.
    pub fn is_missing_fields(&self) -> bool {
        self.issues
            .iter()
            .all(|i| matches!(i, ValidationIssue::MissingField(_)))
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason())
    }
}

impl std::error::Error for Rejection {}

/// Result type for validation
pub type ValidationResult<T> = Result<T, Rejection>;
