//! Core data types for the Pomodoro timer.
//!
//! This module defines the data structures used for:
//! - Session state management (phase, countdown, terminal status)
//! - Persisted settings with validation
//! - Journal event vocabulary

use serde::{Deserialize, Serialize};

/// Default work duration in minutes.
pub const DEFAULT_WORK_MINUTES: u32 = 25;
/// Default break duration in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;
/// Upper bound for the work duration setting.
pub const WORK_MINUTES_MAX: u32 = 180;
/// Upper bound for the break duration setting.
pub const BREAK_MINUTES_MAX: u32 = 60;

// ============================================================================
// TimerPhase
// ============================================================================

/// The interval kind within a Pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// A focused work interval
    Work,
    /// A rest interval following a completed work interval
    Break,
}

impl TimerPhase {
    /// Returns the label used on the timer screen.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Work => "WORK",
            TimerPhase::Break => "BREAK",
        }
    }
}

// ============================================================================
// SessionStatus
// ============================================================================

/// Lifecycle status of a session.
///
/// `Completed` and `Aborted` are terminal: once reached, neither ticks nor
/// abort requests mutate the session any further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Countdown in progress
    Running,
    /// Countdown reached zero
    Completed,
    /// User aborted before the countdown reached zero
    Aborted,
}

impl SessionStatus {
    /// Returns true once the session can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Aborted)
    }
}

// ============================================================================
// Session
// ============================================================================

/// Ephemeral state of one phase's countdown, from start to terminal status.
///
/// A session is created when the user confirms a task, mutated only by the
/// timer engine, and discarded when the controller returns to the main menu.
#[derive(Debug, Clone)]
pub struct Session {
    /// Free-text task description, set once at session start
    pub task_description: String,
    /// Which interval this session counts down
    pub phase: TimerPhase,
    /// Seconds left; always within `0..=phase duration`
    pub remaining_seconds: u32,
    /// Lifecycle status
    status: SessionStatus,
}

impl Session {
    /// Creates a running session for the given phase and duration.
    pub fn new(phase: TimerPhase, duration_minutes: u32, task_description: String) -> Self {
        Self {
            task_description,
            phase,
            remaining_seconds: duration_minutes * 60,
            status: SessionStatus::Running,
        }
    }

    /// Returns the current lifecycle status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns true while the countdown is active.
    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Updates the countdown from a drift-corrected remaining value.
    ///
    /// No-op once the session is terminal.
    pub fn set_remaining(&mut self, seconds: u32) {
        if self.is_running() {
            self.remaining_seconds = seconds;
        }
    }

    /// Transitions to `Completed`. No-op unless running.
    pub fn complete(&mut self) {
        if self.is_running() {
            self.remaining_seconds = 0;
            self.status = SessionStatus::Completed;
        }
    }

    /// Transitions to `Aborted`. No-op unless running.
    pub fn abort(&mut self) {
        if self.is_running() {
            self.status = SessionStatus::Aborted;
        }
    }
}

// ============================================================================
// SessionEvent
// ============================================================================

/// Journal event vocabulary.
///
/// Both WORK and BREAK phases log the same START/END bracketing so the log
/// format stays singular and grep-friendly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A session began
    Start,
    /// A session ran to completion
    End,
    /// A session was aborted before completion
    Abort,
}

impl SessionEvent {
    /// Returns the tag written to the log file.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEvent::Start => "START",
            SessionEvent::End => "END",
            SessionEvent::Abort => "ABORT",
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

fn default_work_minutes() -> u32 {
    DEFAULT_WORK_MINUTES
}

fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

/// Persisted user-configurable durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Work duration in minutes (1-180)
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Break duration in minutes (1-60)
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl Settings {
    /// Validates both durations.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.work_minutes < 1 || self.work_minutes > WORK_MINUTES_MAX {
            return Err(format!(
                "work minutes must be between 1 and {WORK_MINUTES_MAX}"
            ));
        }
        if self.break_minutes < 1 || self.break_minutes > BREAK_MINUTES_MAX {
            return Err(format!(
                "break minutes must be between 1 and {BREAK_MINUTES_MAX}"
            ));
        }
        Ok(())
    }

    /// Clamps both durations into their valid ranges.
    ///
    /// Used when loading a config file whose values fall outside the ranges;
    /// the Settings editor rejects such input instead of clamping.
    pub fn clamped(self) -> Self {
        Self {
            work_minutes: self.work_minutes.clamp(1, WORK_MINUTES_MAX),
            break_minutes: self.break_minutes.clamp(1, BREAK_MINUTES_MAX),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // TimerPhase Tests
    // ------------------------------------------------------------------------

    mod timer_phase_tests {
        use super::*;

        #[test]
        fn test_as_str() {
            assert_eq!(TimerPhase::Work.as_str(), "WORK");
            assert_eq!(TimerPhase::Break.as_str(), "BREAK");
        }

        #[test]
        fn test_clone_and_copy() {
            let phase = TimerPhase::Work;
            let copied = phase;
            assert_eq!(phase, copied);
        }
    }

    // ------------------------------------------------------------------------
    // SessionStatus Tests
    // ------------------------------------------------------------------------

    mod session_status_tests {
        use super::*;

        #[test]
        fn test_is_terminal() {
            assert!(!SessionStatus::Running.is_terminal());
            assert!(SessionStatus::Completed.is_terminal());
            assert!(SessionStatus::Aborted.is_terminal());
        }
    }

    // ------------------------------------------------------------------------
    // Session Tests
    // ------------------------------------------------------------------------

    mod session_tests {
        use super::*;

        #[test]
        fn test_new_session() {
            let session = Session::new(TimerPhase::Work, 25, "Write spec".to_string());

            assert_eq!(session.phase, TimerPhase::Work);
            assert_eq!(session.remaining_seconds, 25 * 60);
            assert_eq!(session.task_description, "Write spec");
            assert_eq!(session.status(), SessionStatus::Running);
            assert!(session.is_running());
        }

        #[test]
        fn test_set_remaining() {
            let mut session = Session::new(TimerPhase::Work, 25, "Task".to_string());
            session.set_remaining(100);
            assert_eq!(session.remaining_seconds, 100);
        }

        #[test]
        fn test_complete() {
            let mut session = Session::new(TimerPhase::Work, 1, "Task".to_string());
            session.complete();

            assert_eq!(session.status(), SessionStatus::Completed);
            assert_eq!(session.remaining_seconds, 0);
            assert!(!session.is_running());
        }

        #[test]
        fn test_abort_keeps_remaining() {
            let mut session = Session::new(TimerPhase::Work, 25, "Task".to_string());
            session.set_remaining(1200);
            session.abort();

            assert_eq!(session.status(), SessionStatus::Aborted);
            assert_eq!(session.remaining_seconds, 1200);
        }

        #[test]
        fn test_terminal_state_absorbs_mutation() {
            let mut session = Session::new(TimerPhase::Break, 5, "Task".to_string());
            session.complete();

            session.set_remaining(42);
            assert_eq!(session.remaining_seconds, 0);

            session.abort();
            assert_eq!(session.status(), SessionStatus::Completed);
        }

        #[test]
        fn test_abort_then_complete_is_noop() {
            let mut session = Session::new(TimerPhase::Work, 25, "Task".to_string());
            session.abort();
            session.complete();
            assert_eq!(session.status(), SessionStatus::Aborted);
        }
    }

    // ------------------------------------------------------------------------
    // SessionEvent Tests
    // ------------------------------------------------------------------------

    mod session_event_tests {
        use super::*;

        #[test]
        fn test_as_str() {
            assert_eq!(SessionEvent::Start.as_str(), "START");
            assert_eq!(SessionEvent::End.as_str(), "END");
            assert_eq!(SessionEvent::Abort.as_str(), "ABORT");
        }
    }

    // ------------------------------------------------------------------------
    // Settings Tests
    // ------------------------------------------------------------------------

    mod settings_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let settings = Settings::default();
            assert_eq!(settings.work_minutes, 25);
            assert_eq!(settings.break_minutes, 5);
        }

        #[test]
        fn test_validate_success() {
            let settings = Settings {
                work_minutes: 30,
                break_minutes: 10,
            };
            assert!(settings.validate().is_ok());
        }

        #[test]
        fn test_validate_boundary_values() {
            let settings = Settings {
                work_minutes: 1,
                break_minutes: 1,
            };
            assert!(settings.validate().is_ok());

            let settings = Settings {
                work_minutes: 180,
                break_minutes: 60,
            };
            assert!(settings.validate().is_ok());
        }

        #[test]
        fn test_validate_work_minutes_zero() {
            let settings = Settings {
                work_minutes: 0,
                ..Default::default()
            };
            assert!(settings.validate().is_err());
        }

        #[test]
        fn test_validate_work_minutes_too_high() {
            let settings = Settings {
                work_minutes: 181,
                ..Default::default()
            };
            assert!(settings.validate().is_err());
        }

        #[test]
        fn test_validate_break_minutes_zero() {
            let settings = Settings {
                break_minutes: 0,
                ..Default::default()
            };
            assert!(settings.validate().is_err());
        }

        #[test]
        fn test_validate_break_minutes_too_high() {
            let settings = Settings {
                break_minutes: 61,
                ..Default::default()
            };
            assert!(settings.validate().is_err());
        }

        #[test]
        fn test_clamped() {
            let settings = Settings {
                work_minutes: 0,
                break_minutes: 999,
            };
            let clamped = settings.clamped();
            assert_eq!(clamped.work_minutes, 1);
            assert_eq!(clamped.break_minutes, 60);
        }

        #[test]
        fn test_clamped_in_range_unchanged() {
            let settings = Settings {
                work_minutes: 45,
                break_minutes: 10,
            };
            assert_eq!(settings.clamped(), settings);
        }

        #[test]
        fn test_serialize_deserialize() {
            let settings = Settings {
                work_minutes: 30,
                break_minutes: 10,
            };

            let json = serde_json::to_string(&settings).unwrap();
            let deserialized: Settings = serde_json::from_str(&json).unwrap();
            assert_eq!(settings, deserialized);
        }

        #[test]
        fn test_deserialize_missing_fields_use_defaults() {
            let settings: Settings = serde_json::from_str("{}").unwrap();
            assert_eq!(settings, Settings::default());

            let settings: Settings = serde_json::from_str(r#"{"work_minutes": 50}"#).unwrap();
            assert_eq!(settings.work_minutes, 50);
            assert_eq!(settings.break_minutes, 5);
        }
    }
}
