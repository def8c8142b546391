//! Operation log for cache-control actions.
//!
//! Every completed action leaves one human-readable message in the log so
//! an operator can see what a "clear" actually did. One [`OperationLog`] is
//! created per operation (one CLI invocation, one admin request); its
//! [`new_messages`](OperationLog::new_messages) are the messages to show the
//! operator right after the action ran.

pub mod sink;

pub use sink::{FileLogSink, LogSink, MemorySink};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::error::Result;

/// Default name of the operation log.
pub const DEFAULT_LOG_NAME: &str = "cache-control";

/// Whether routine actions write log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// Log every completed action.
    #[default]
    Verbose,
    /// Only log messages written explicitly via [`OperationLog::log_message`].
    Silent,
}

impl Verbosity {
    /// Check if routine messages are suppressed.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Silent)
    }
}

/// A single log message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Human-readable message.
    pub message: String,
    /// When the message was recorded.
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Create an entry stamped now.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Log of one cache-control operation.
pub struct OperationLog {
    name: String,
    sink: Box<dyn LogSink>,
    entries: Mutex<Vec<LogEntry>>,
}

impl OperationLog {
    /// Create a log writing to `sink` under [`DEFAULT_LOG_NAME`].
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            name: DEFAULT_LOG_NAME.to_string(),
            sink: Box::new(sink),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Use a different log name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the log name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a message regardless of verbosity.
    pub fn log_message(&self, message: impl Into<String>) -> Result<()> {
        let entry = LogEntry::new(message);
        tracing::info!(log = %self.name, "{}", entry.message);
        self.sink.append(&self.name, &entry)?;
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(entry);
        Ok(())
    }

    /// Append a message unless `verbosity` is silent.
    pub fn log_message_if_not_silent(
        &self,
        verbosity: Verbosity,
        message: impl Into<String>,
    ) -> Result<()> {
        if verbosity.is_silent() {
            tracing::debug!("suppressed log message: {}", message.into());
            return Ok(());
        }
        self.log_message(message)
    }

    /// Entries recorded since this log was created.
    pub fn new_messages(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
