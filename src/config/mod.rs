//! Persisted settings storage.
//!
//! The config store owns the JSON settings file:
//! - `load` fails softly: missing, unreadable, or malformed files yield the
//!   default settings and never raise to the caller
//! - `save` fails loudly so the UI can show a visible error
//!
//! The file path is injected at construction; nothing here touches ambient
//! global state.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

pub use error::ConfigError;

use crate::types::Settings;

/// Loads and saves [`Settings`] from a JSON file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not opened or created here; it may not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings, falling back to defaults on any failure.
    ///
    /// Out-of-range values in an otherwise well-formed file are clamped
    /// rather than rejected, matching the file's tolerant read semantics.
    pub fn load(&self) -> Settings {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %err, "config unreadable, using defaults");
                }
                return Settings::default();
            }
        };

        match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => settings.clamped(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "config malformed, using defaults");
                Settings::default()
            }
        }
    }

    /// Writes the full settings record, overwriting prior contents.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the destination cannot be
    /// written. Callers surface this as a visible, non-fatal message.
    pub fn save(&self, settings: Settings) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(&settings)?;
        fs::write(&self.path, json).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
