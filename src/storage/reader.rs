//! JSON document reader
//!
//! Documents are read whole. Any shape mismatch is reported as malformed,
//! never silently skipped.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::errors::{StorageError, StorageResult};
use crate::query::QuerySpec;

/// Reads and deserializes a whole JSON document.
pub fn read_json_document<T: DeserializeOwned>(path: &Path) -> StorageResult<T> {
    let file = File::open(path).map_err(|e| StorageError::read_failed(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            StorageError::read_failed(path, e.into())
        } else {
            StorageError::malformed(path, e)
        }
    })
}

/// Reads a query document: a JSON array of query objects.
pub fn read_queries(path: &Path) -> StorageResult<Vec<QuerySpec>> {
    read_json_document(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_queries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("queries.json");
        fs::write(&path, r#"[{"origin": "JFK", "price": 200}, {}]"#).unwrap();

        let queries = read_queries(&path).unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].get("origin"), Some(&serde_json::json!("JFK")));
        assert!(queries[1].is_empty());
    }

    #[test]
    fn test_queries_must_be_objects() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("queries.json");
        fs::write(&path, r#"["origin=JFK"]"#).unwrap();

        let err = read_queries(&path).unwrap_err();
        assert_eq!(err.code().code(), "FLIGHT_STORAGE_MALFORMED");
    }

    #[test]
    fn test_missing_file_is_read_failure() {
        let dir = TempDir::new().unwrap();
        let err = read_queries(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code().code(), "FLIGHT_STORAGE_READ_FAILED");
    }
}
