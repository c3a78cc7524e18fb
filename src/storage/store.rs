//! Flat JSON document store
//!
//! The store is a single JSON array of accepted flight records. Every persist
//! replaces the whole file; there is no append, update or delete.

use std::path::{Path, PathBuf};

use super::errors::StorageResult;
use super::reader::read_json_document;
use super::writer::write_json_document;
use crate::observability::{log_event_with_fields, Event};
use crate::record::FlightRecord;

/// Handle to the document store file
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if a store file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Replaces the store with `records`, in order.
    pub fn persist(&self, records: &[FlightRecord]) -> StorageResult<()> {
        write_json_document(&self.path, records)?;
        log_event_with_fields(
            Event::StorePersisted,
            &[
                ("path", &self.path.display().to_string()),
                ("records", &records.len().to_string()),
            ],
        );
        Ok(())
    }

    /// Loads every record, in stored order.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing, unreadable, or not an array of records.
    pub fn load(&self) -> StorageResult<Vec<FlightRecord>> {
        let records: Vec<FlightRecord> = read_json_document(&self.path)?;
        log_event_with_fields(
            Event::StoreLoaded,
            &[
                ("path", &self.path.display().to_string()),
                ("records", &records.len().to_string()),
            ],
        );
        Ok(records)
    }

    /// Loads the store, treating a missing file as an empty record set.
    pub fn load_or_empty(&self) -> StorageResult<Vec<FlightRecord>> {
        if !self.exists() {
            log_event_with_fields(
                Event::StoreMissing,
                &[("path", &self.path.display().to_string())],
            );
            return Ok(Vec::new());
        }
        self.load()
    }
}
