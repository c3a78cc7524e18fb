//! Document Storage subsystem for flightdb
//!
//! Holds every on-disk artifact of a run:
//! - the document store (JSON array of accepted records)
//! - the rejection log (one line per rejected row)
//! - query documents (read) and response documents (written)
//!
//! # Design Principles
//!
//! - Full-document writes only (temp file + fsync + rename)
//! - Indent width 4 for every JSON document
//! - Malformed documents fail loudly

mod errors;
mod reader;
mod response;
mod store;
mod writer;

pub use errors::{Severity, StorageError, StorageErrorCode, StorageResult};
pub use reader::{read_json_document, read_queries};
pub use response::{next_response_path, response_filename, write_response, RESPONSE_TIMESTAMP_FORMAT};
pub use store::DocumentStore;
pub use writer::{write_json_document, write_lines, JSON_INDENT};
