//! Rejection reports

use std::fmt;

use crate::validation::Rejection;

/// A rejected row: where it came from and why it was rejected.
///
/// Renders as `<source>-line <n>: <reason1>; <reason2>; ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionReport {
    source: String,
    line: usize,
    rejection: Rejection,
}

impl RejectionReport {
    pub fn new(source: impl Into<String>, line: usize, rejection: Rejection) -> Self {
        Self {
            source: source.into(),
            line,
            rejection,
        }
    }

    /// Source identifier (usually the input path)
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 1-based line number; the header is line 1
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn rejection(&self) -> &Rejection {
        &self.rejection
    }

    /// The `"; "`-joined reasons
    pub fn reason(&self) -> String {
        self.rejection.reason()
    }
}

impl fmt::Display for RejectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-line {}: {}", self.source, self.line, self.rejection)
    }
}
