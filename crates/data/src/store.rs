//! File-backed stores for the snapshot and history documents.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use maxpain_core::types::{LogEntry, Snapshot};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from document store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error reading/writing file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn ensure_parent(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Writes the current-state document.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Saves the snapshot, creating parent directories if needed.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        ensure_parent(&self.path)?;

        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, snapshot)?;

        debug!(
            path = %self.path.display(),
            records = snapshot.data.len(),
            "Saved snapshot"
        );
        Ok(())
    }
}

/// Owns the history-log file. The only external mutator of the log.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads the history log.
    ///
    /// - Missing file: empty log (first run).
    /// - Unreadable or malformed file: warn and return an empty log —
    ///   lossy but available beats failing the whole run.
    #[must_use]
    pub fn load(&self) -> Vec<LogEntry> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No history log found, starting fresh");
            return Vec::new();
        }

        match self.read() {
            Ok(log) => {
                debug!(path = %self.path.display(), entries = log.len(), "Loaded history log");
                log
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to load history log, starting fresh"
                );
                Vec::new()
            }
        }
    }

    /// Saves the log, creating parent directories if needed.
    pub fn save(&self, log: &[LogEntry]) -> Result<(), StoreError> {
        ensure_parent(&self.path)?;

        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, log)?;

        debug!(path = %self.path.display(), entries = log.len(), "Saved history log");
        Ok(())
    }

    fn read(&self) -> Result<Vec<LogEntry>, StoreError> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let log: Vec<LogEntry> = serde_json::from_reader(reader)?;
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use maxpain_core::types::{MergedExpiryRecord, Phase};
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::TempDir;

    fn temp_path(name: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        (dir, path)
    }

    fn entry(day: u32) -> LogEntry {
        LogEntry {
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            spot: dec!(165.50),
            primary_pain: Some(dec!(170)),
            score: Some(4),
        }
    }

    #[test]
    fn history_roundtrip() {
        let (_dir, path) = temp_path("history_log.json");
        let store = HistoryStore::new(path);

        let log = vec![entry(5), entry(6)];
        store.save(&log).unwrap();

        assert_eq!(store.load(), log);
    }

    #[test]
    fn missing_history_file_is_empty_log() {
        let (_dir, path) = temp_path("history_log.json");
        let store = HistoryStore::new(path);

        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_history_file_is_empty_log() {
        let (_dir, path) = temp_path("history_log.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"not valid json {{{").unwrap();

        let store = HistoryStore::new(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn wrong_shape_history_file_is_empty_log() {
        let (_dir, path) = temp_path("history_log.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"{\"foo\": \"bar\"}").unwrap();

        let store = HistoryStore::new(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn history_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("history_log.json");
        let store = HistoryStore::new(path.clone());

        store.save(&[entry(5)]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn history_document_shape() {
        let (_dir, path) = temp_path("history_log.json");
        let store = HistoryStore::new(path.clone());
        store.save(&[entry(5)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["date"], "2026-01-05");
        assert!(json[0]["spot"].is_number());
        assert!(json[0]["score"].is_i64());
    }

    #[test]
    fn snapshot_document_shape() {
        let (_dir, path) = temp_path("snapshot.json");
        let store = SnapshotStore::new(path.clone());

        let snapshot = Snapshot {
            last_update: Utc::now(),
            spot: dec!(165.50),
            secondary_spot: Some(dec!(97000)),
            phase: Some(Phase::AbovePain),
            data: vec![MergedExpiryRecord {
                date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
                primary_pain: dec!(180),
                secondary_pain: None,
                is_monthly: true,
            }],
        };
        store.save(&snapshot).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert!(json["last_update"].is_string());
        assert!(json["spot"].is_number());
        assert_eq!(json["phase"], "above_pain");
        assert_eq!(json["data"][0]["date"], "2026-01-16");
        assert!(json["data"][0]["secondary_pain"].is_null());
    }

    #[test]
    fn snapshot_overwrites_previous_document() {
        let (_dir, path) = temp_path("snapshot.json");
        let store = SnapshotStore::new(path.clone());

        let mut snapshot = Snapshot {
            last_update: Utc::now(),
            spot: dec!(100),
            secondary_spot: None,
            phase: None,
            data: vec![],
        };
        store.save(&snapshot).unwrap();

        snapshot.spot = dec!(200);
        store.save(&snapshot).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["spot"], 200.0);
    }
}
