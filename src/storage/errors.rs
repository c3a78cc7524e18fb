//! Storage error types
//!
//! Error codes:
//! - FLIGHT_STORAGE_READ_FAILED (ERROR severity)
//! - FLIGHT_STORAGE_WRITE_FAILED (ERROR severity)
//! - FLIGHT_STORAGE_MALFORMED (FATAL severity)

use std::fmt;
use std::io;
use std::path::Path;

/// Severity levels for storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// I/O failed; the file on disk is unchanged
    Error,
    /// A document on disk cannot be trusted
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Storage-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// File could not be opened or read
    FlightStorageReadFailed,
    /// File could not be written or committed
    FlightStorageWriteFailed,
    /// File read but its JSON is not the expected shape
    FlightStorageMalformed,
}

impl StorageErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StorageErrorCode::FlightStorageReadFailed => "FLIGHT_STORAGE_READ_FAILED",
            StorageErrorCode::FlightStorageWriteFailed => "FLIGHT_STORAGE_WRITE_FAILED",
            StorageErrorCode::FlightStorageMalformed => "FLIGHT_STORAGE_MALFORMED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            StorageErrorCode::FlightStorageMalformed => Severity::Fatal,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error type with full context
#[derive(Debug)]
pub struct StorageError {
    code: StorageErrorCode,
    message: String,
    /// Path of the file involved
    path: String,
    source: Option<io::Error>,
}

impl StorageError {
    /// Create a read failed error
    pub fn read_failed(path: &Path, source: io::Error) -> Self {
        Self {
            code: StorageErrorCode::FlightStorageReadFailed,
            message: format!("failed to read: {}", source),
            path: path.display().to_string(),
            source: Some(source),
        }
    }

    /// Create a write failed error
    pub fn write_failed(path: &Path, message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StorageErrorCode::FlightStorageWriteFailed,
            message: format!("{}: {}", message.into(), source),
            path: path.display().to_string(),
            source: Some(source),
        }
    }

    /// Create a malformed document error
    pub fn malformed(path: &Path, reason: impl fmt::Display) -> Self {
        Self {
            code: StorageErrorCode::FlightStorageMalformed,
            message: format!("malformed JSON document: {}", reason),
            path: path.display().to_string(),
            source: None,
        }
    }

    pub fn code(&self) -> StorageErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the path of the file involved
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.code.severity(),
            self.code.code(),
            self.message,
            self.path
        )
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
