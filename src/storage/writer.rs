//! Full-document writers
//!
//! Every artifact is written as a full replacement: content goes to a hidden
//! sibling temp file, is fsynced, then renamed over the target. A failed write
//! leaves the previous file untouched.

use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::errors::{StorageError, StorageResult};

/// Indentation used for every JSON document
pub const JSON_INDENT: &[u8] = b"    ";

/// Writes `value` as pretty JSON (indent width 4), replacing `path`.
pub fn write_json_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> StorageResult<()> {
    write_atomically(path, |writer| {
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
        value.serialize(&mut serializer).map_err(io::Error::from)
    })
}

/// Writes one line per item, each terminated by `\n`, replacing `path`.
pub fn write_lines<I, L>(path: &Path, lines: I) -> StorageResult<()>
where
    I: IntoIterator<Item = L>,
    L: Display,
{
    write_atomically(path, |writer| {
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    })
}

fn write_atomically<F>(path: &Path, write: F) -> StorageResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let temp_path = temp_path_for(path);
    let result = write_and_commit(path, &temp_path, write);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_commit<F>(path: &Path, temp_path: &Path, write: F) -> StorageResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| StorageError::write_failed(path, "failed to create temp file", e))?;

    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(|e| StorageError::write_failed(path, "failed to write", e))?;

    let file = writer
        .into_inner()
        .map_err(|e| StorageError::write_failed(path, "failed to flush", e.into_error()))?;
    file.sync_all()
        .map_err(|e| StorageError::write_failed(path, "failed to fsync", e))?;

    fs::rename(temp_path, path)
        .map_err(|e| StorageError::write_failed(path, "failed to commit", e))?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_json_indent_width_four() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");

        write_json_document(&path, &json!([{"a": 1}])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[\n    {\n        \"a\": 1\n    }\n]");
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");

        write_json_document(&path, &json!([1, 2, 3])).unwrap();
        write_json_document(&path, &json!([])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_write_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("errors.txt");

        write_lines(&path, ["first", "second"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");

        write_lines(&path, Vec::<String>::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("doc.json");
        let err = write_json_document(&path, &json!([])).unwrap_err();
        assert_eq!(err.code().code(), "FLIGHT_STORAGE_WRITE_FAILED");
    }
}
