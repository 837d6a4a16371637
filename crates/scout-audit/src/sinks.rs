//! Audit sinks: a JSON-lines file and an in-memory buffer.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use scout_core::errors::AuditError;
use scout_core::models::AuditLogEntry;
use scout_core::traits::IAuditSink;

/// Appends one JSON line per entry and syncs it before returning.
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every entry written to `path`, skipping blank lines.
    pub fn read_entries(path: impl AsRef<Path>) -> Result<Vec<AuditLogEntry>, AuditError> {
        let path = path.as_ref();
        let load_failed = |reason: String| AuditError::LoadFailed {
            path: path.display().to_string(),
            reason,
        };
        let file = std::fs::File::open(path).map_err(|e| load_failed(e.to_string()))?;
        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| load_failed(e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }
        Ok(entries)
    }
}

impl IAuditSink for JsonLinesSink {
    fn write(&self, entry: &AuditLogEntry) -> Result<(), AuditError> {
        let write_failed = |reason: String| AuditError::WriteFailed {
            sequence_number: entry.sequence_number,
            reason,
        };
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let _guard = self
            .lock
            .lock()
            .map_err(|_| write_failed("sink lock poisoned".to_string()))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| write_failed(e.to_string()))?;
        file.write_all(line.as_bytes())
            .map_err(|e| write_failed(e.to_string()))?;
        file.sync_data().map_err(|e| write_failed(e.to_string()))?;
        Ok(())
    }
}

/// Keeps written entries in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<AuditLogEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<AuditLogEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IAuditSink for MemorySink {
    fn write(&self, entry: &AuditLogEntry) -> Result<(), AuditError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AuditError::WriteFailed {
                sequence_number: entry.sequence_number,
                reason: "sink lock poisoned".to_string(),
            })?;
        entries.push(entry.clone());
        Ok(())
    }
}
