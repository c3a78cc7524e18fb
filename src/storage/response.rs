//! Query response documents
//!
//! File name: `response_<identity>_<YYYYMMDD_HHMM>.json`. When that name is
//! already taken, `_<n>` is appended before the extension.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use super::errors::StorageResult;
use super::writer::write_json_document;
use crate::observability::{log_event_with_fields, Event};
use crate::query::QueryResult;

/// chrono format of the run timestamp embedded in response file names
pub const RESPONSE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Builds the base response file name for a run.
pub fn response_filename(identity: &str, at: NaiveDateTime) -> String {
    format!("response_{}_{}.json", identity, at.format(RESPONSE_TIMESTAMP_FORMAT))
}

/// Returns the first free response path in `dir` for this run.
pub fn next_response_path(dir: &Path, identity: &str, at: NaiveDateTime) -> PathBuf {
    let base = dir.join(response_filename(identity, at));
    if !base.exists() {
        return base;
    }

    let stamp = at.format(RESPONSE_TIMESTAMP_FORMAT);
    (1u32..)
        .map(|n| dir.join(format!("response_{}_{}_{}.json", identity, stamp, n)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(base)
}

/// Writes query results to a fresh response document and returns its path.
pub fn write_response(
    dir: &Path,
    identity: &str,
    at: NaiveDateTime,
    results: &[QueryResult],
) -> StorageResult<PathBuf> {
    let path = next_response_path(dir, identity, at);
    write_json_document(&path, results)?;
    log_event_with_fields(
        Event::ResponseWritten,
        &[
            ("path", &path.display().to_string()),
            ("queries", &results.len().to_string()),
        ],
    );
    Ok(path)
}
