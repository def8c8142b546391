//! Log sinks that persist operation log entries.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::LogEntry;
use crate::error::{CacheControlError, Result};

/// Destination for operation log entries.
pub trait LogSink: Send + Sync {
    /// Append an entry to the named log.
    fn append(&self, log_name: &str, entry: &LogEntry) -> Result<()>;
}

/// Append-only text log, one entry per line.
#[derive(Debug)]
pub struct FileLogSink {
    path: PathBuf,
}

impl FileLogSink {
    /// Create a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileLogSink {
    fn append(&self, log_name: &str, entry: &LogEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| CacheControlError::file_system(parent, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CacheControlError::file_system(&self.path, e))?;

        writeln!(
            file,
            "{}\t{}\t{}",
            entry.timestamp.to_rfc3339(),
            log_name,
            entry.message
        )
        .map_err(|e| CacheControlError::file_system(&self.path, e))
    }
}

/// Sink that keeps entries in memory.
///
/// Clones share the same buffer, so a test can hand one clone to an
/// [`OperationLog`](super::OperationLog) and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<(String, LogEntry)>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries appended so far, with their log name.
    pub fn entries(&self) -> Vec<(String, LogEntry)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Messages appended so far.
    pub fn messages(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(_, entry)| entry.message)
            .collect()
    }
}

impl LogSink for MemorySink {
    fn append(&self, log_name: &str, entry: &LogEntry) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((log_name.to_string(), entry.clone()));
        Ok(())
    }
}
