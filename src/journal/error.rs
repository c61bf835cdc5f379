//! Session journal error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while appending to the session log.
///
/// Journal errors are always recoverable: a failed write is surfaced to the
/// controller as a warning and the active timer keeps running.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The log file could not be opened for appending.
    #[error("failed to open session log {path}: {source}")]
    Open {
        /// Log file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An entry could not be written or flushed.
    #[error("failed to append to session log {path}: {source}")]
    Append {
        /// Log file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
