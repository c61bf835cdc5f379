//! Config store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when persisting settings.
///
/// Load failures never surface through this type: a missing or corrupt
/// config file silently falls back to defaults. Only `save` reports errors,
/// so the Settings screen can show a visible failure instead of silently
/// dropping an edit.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings record could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The config file could not be written.
    #[error("failed to write config file {path}: {source}")]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_display() {
        let err = ConfigError::Write {
            path: PathBuf::from("/nonexistent/config.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/nonexistent/config.json"));
        assert!(message.contains("denied"));
    }
}
