//! Home-directory file locations.
//!
//! Both paths are resolved once at startup and passed explicitly into the
//! config store and session journal; nothing else in the crate touches the
//! filesystem layout.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Config file name, a dotfile in the user's home directory.
const CONFIG_FILE_NAME: &str = ".pomocli_config.json";
/// Session log file name in the user's home directory.
const LOG_FILE_NAME: &str = "pomocli_log.txt";

/// Resolved data file locations.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Settings JSON file
    pub config: PathBuf,
    /// Append-only session log
    pub log: PathBuf,
}

impl Paths {
    /// Resolves both paths under the user's home directory.
    ///
    /// # Errors
    ///
    /// Fails if the home directory cannot be determined; this is a fatal
    /// startup error.
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().context("could not determine home directory")?;
        Ok(Self::in_dir(&home))
    }

    /// Places both files under an arbitrary directory.
    pub fn in_dir(dir: &std::path::Path) -> Self {
        Self {
            config: dir.join(CONFIG_FILE_NAME),
            log: dir.join(LOG_FILE_NAME),
        }
    }
}
