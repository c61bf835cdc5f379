//! Append-only session journal.
//!
//! Each timer event becomes one durable, grep-friendly line:
//!
//! ```text
//! 2026-08-28 T=14:05 - START: Write the report
//! 2026-08-28 T=14:30 - END: Write the report
//! ```
//!
//! Entries are immutable once written; nothing in this system ever rewrites,
//! reformats, or rotates the file. Every `append` call opens, writes, and
//! flushes before returning, so there is no in-memory buffering to lose on a
//! crash.

mod error;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub use error::JournalError;

use crate::types::SessionEvent;

/// Timestamp layout shared by every log line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d T=%H:%M";

// ============================================================================
// SessionLog
// ============================================================================

/// Sink for session lifecycle events.
///
/// The timer engine writes through this trait so tests can capture entries
/// in memory instead of touching the filesystem.
pub trait SessionLog {
    /// Appends one event line for the given task.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry could not be durably written. Callers
    /// treat this as a non-fatal warning.
    fn append(&mut self, event: SessionEvent, task_description: &str) -> Result<(), JournalError>;
}

// ============================================================================
// FileSessionLog
// ============================================================================

/// File-backed [`SessionLog`] appending to a plain-text log.
#[derive(Debug, Clone)]
pub struct FileSessionLog {
    path: PathBuf,
}

impl FileSessionLog {
    /// Creates a log backed by the given file path.
    ///
    /// The file is created on first append, not here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionLog for FileSessionLog {
    fn append(&mut self, event: SessionEvent, task_description: &str) -> Result<(), JournalError> {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| JournalError::Open {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{timestamp} - {}: {task_description}", event.as_str())
            .and_then(|()| file.flush())
            .map_err(|source| JournalError::Append {
                path: self.path.clone(),
                source,
            })?;
        Ok(())
    }
}

// ============================================================================
// MemorySessionLog
// ============================================================================

/// In-memory [`SessionLog`] for tests.
#[derive(Debug, Default)]
pub struct MemorySessionLog {
    /// Captured `(event, task)` pairs in append order
    pub entries: Vec<(SessionEvent, String)>,
}

impl MemorySessionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionLog for MemorySessionLog {
    fn append(&mut self, event: SessionEvent, task_description: &str) -> Result<(), JournalError> {
        self.entries.push((event, task_description.to_string()));
        Ok(())
    }
}

// ============================================================================
// Reading
// ============================================================================

/// Reads all log lines for the viewer.
///
/// The viewer is a read-only consumer, independent of the append path.
/// A missing file is the fresh-install case and yields no lines.
pub fn read_log_lines(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(contents) => contents.lines().map(str::to_string).collect(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "session log unreadable");
            vec!["[Error reading log file]".to_string()]
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
