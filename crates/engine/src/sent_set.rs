//! Durable record of which page ids have already been delivered.
//!
//! The whole process state is one JSON array of opaque string ids, rewritten
//! wholesale after each successful dispatch. The set grows monotonically and
//! is never pruned; volumes are expected to stay small. The file is not
//! locked — overlapping runs of the process are unsafe.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use tugas_common::error::AppError;

/// File-backed store for the sent-id sequence.
pub struct SentIdStore {
    path: PathBuf,
}

impl SentIdStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted id sequence. A missing file means first run and
    /// yields an empty sequence; an unreadable or corrupt file is an error
    /// the caller absorbs.
    pub fn load(&self) -> Result<Vec<String>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Overwrite the persisted state wholesale with the current sequence.
    ///
    /// Pretty-printed with 4-space indentation for hand inspection. Written
    /// to a sibling temp file and renamed into place, so a crash mid-write
    /// leaves the previous state intact rather than a truncated file.
    pub fn save(&self, ids: &[String]) -> Result<(), AppError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        ids.serialize(&mut ser)?;

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&buf)?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SentIdStore::new(dir.path().join("id_sent.json"));
        assert_eq!(store.load().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SentIdStore::new(dir.path().join("id_sent.json"));

        let ids = vec!["page-a".to_string(), "page-b".to_string()];
        store.save(&ids).unwrap();
        assert_eq!(store.load().unwrap(), ids);
    }

    #[test]
    fn test_save_uses_four_space_indentation() {
        let dir = tempfile::tempdir().unwrap();
        let store = SentIdStore::new(dir.path().join("id_sent.json"));

        store.save(&["page-a".to_string()]).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "[\n    \"page-a\"\n]");
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = SentIdStore::new(dir.path().join("id_sent.json"));

        store.save(&["page-a".to_string()]).unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["id_sent.json"]);
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id_sent.json");
        std::fs::write(&path, "[ \"page-a\",").unwrap();

        let store = SentIdStore::new(path);
        assert!(store.load().is_err());
    }
}
