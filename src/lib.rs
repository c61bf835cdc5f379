//! PomoCLI - a terminal Pomodoro timer
//!
//! This library provides the core functionality for the PomoCLI binary.
//! It includes:
//! - Timer engine with drift-corrected countdown and session journaling
//! - Append-only plain-text session log
//! - JSON settings persistence with validation and soft-fail loading
//! - Terminal UI screens (menu, task prompt, timer, settings, log viewer)
//! - File path resolution for the config and log files

pub mod config;
pub mod journal;
pub mod paths;
pub mod timer;
pub mod types;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigStore};
pub use journal::{FileSessionLog, JournalError, MemorySessionLog, SessionLog};
pub use paths::Paths;
pub use timer::{TickOutcome, TimerEngine};
pub use types::{Session, SessionEvent, SessionStatus, Settings, TimerPhase};
pub use ui::App;
