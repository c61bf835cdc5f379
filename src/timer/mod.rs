//! Timer engine.
//!
//! This module owns the countdown state machine:
//! - State transitions (Running → Completed / Aborted, both terminal)
//! - Drift-corrected ticking: remaining time is re-derived from the captured
//!   start instant plus elapsed wall-clock, never decremented per iteration,
//!   so render and input latency cannot accumulate into timing drift
//! - START/END/ABORT journal writes for both WORK and BREAK phases
//!
//! Journal failures never stop the countdown; they are parked in a warning
//! slot the controller drains and displays.

use std::time::{Duration, Instant};

use crate::journal::{JournalError, SessionLog};
use crate::types::{Session, SessionEvent, TimerPhase};

// ============================================================================
// TickOutcome
// ============================================================================

/// Result of one engine tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No running session; nothing happened
    Idle,
    /// The countdown advanced and is still running
    Running,
    /// The countdown just reached zero; emitted exactly once per session
    Completed,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Drives the active [`Session`] and writes its lifecycle to the journal.
pub struct TimerEngine<L: SessionLog> {
    journal: L,
    session: Option<Session>,
    started_at: Option<Instant>,
    duration: Duration,
    last_warning: Option<JournalError>,
}

impl<L: SessionLog> TimerEngine<L> {
    /// Creates an idle engine writing through the given journal.
    pub fn new(journal: L) -> Self {
        Self {
            journal,
            session: None,
            started_at: None,
            duration: Duration::ZERO,
            last_warning: None,
        }
    }

    /// Returns the current session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the full duration of the current session's phase.
    pub fn duration_seconds(&self) -> u64 {
        self.duration.as_secs()
    }

    /// Takes the most recent journal warning, if one is pending.
    ///
    /// The controller drains this after each engine call and shows it as a
    /// dismissible notice; the countdown itself is unaffected.
    pub fn take_warning(&mut self) -> Option<JournalError> {
        self.last_warning.take()
    }

    /// Discards a terminal session when the controller returns to the menu.
    pub fn clear_session(&mut self) {
        if self.session.as_ref().is_some_and(|s| !s.is_running()) {
            self.session = None;
            self.started_at = None;
        }
    }

    /// Starts a new session, capturing `now` as the drift-correction anchor.
    ///
    /// Emits a START journal entry. Ignored while a session is running.
    pub fn start(
        &mut self,
        phase: TimerPhase,
        duration_minutes: u32,
        task_description: String,
        now: Instant,
    ) {
        if self.session.as_ref().is_some_and(Session::is_running) {
            tracing::warn!("start requested while a session is running; ignored");
            return;
        }

        self.record(SessionEvent::Start, &task_description);
        self.session = Some(Session::new(phase, duration_minutes, task_description));
        self.started_at = Some(now);
        self.duration = Duration::from_secs(u64::from(duration_minutes) * 60);
        tracing::info!(phase = phase.as_str(), duration_minutes, "session started");
    }

    /// Advances the countdown to `now`.
    ///
    /// Remaining time is `duration - elapsed`, so calling this more or less
    /// often than once per second cannot skew the total. Returns
    /// [`TickOutcome::Completed`] exactly once, emitting an END entry; after
    /// that (or after an abort) every call is a no-op.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let (Some(session), Some(started_at)) = (self.session.as_mut(), self.started_at) else {
            return TickOutcome::Idle;
        };
        if !session.is_running() {
            return TickOutcome::Idle;
        }

        let elapsed = now.saturating_duration_since(started_at);
        let remaining = self.duration.as_secs().saturating_sub(elapsed.as_secs());
        session.set_remaining(remaining as u32);

        if remaining > 0 {
            return TickOutcome::Running;
        }

        session.complete();
        let task = session.task_description.clone();
        self.record(SessionEvent::End, &task);
        tracing::info!("session completed");
        TickOutcome::Completed
    }

    /// Aborts the running session.
    ///
    /// Emits an ABORT entry (never an END) and stops further ticking. The
    /// completion alert is never triggered for an aborted session. No-op
    /// unless a session is running.
    pub fn abort(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.is_running() {
            return;
        }

        session.abort();
        let task = session.task_description.clone();
        self.record(SessionEvent::Abort, &task);
        tracing::info!("session aborted");
    }

    fn record(&mut self, event: SessionEvent, task_description: &str) {
        if let Err(err) = self.journal.append(event, task_description) {
            tracing::warn!(error = %err, "session log write failed; timer continues");
            self.last_warning = Some(err);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::MemorySessionLog;
    use crate::types::SessionStatus;

    fn engine() -> TimerEngine<MemorySessionLog> {
        TimerEngine::new(MemorySessionLog::new())
    }

    fn events(engine: &TimerEngine<MemorySessionLog>) -> Vec<SessionEvent> {
        engine.journal.entries.iter().map(|(e, _)| *e).collect()
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    // ------------------------------------------------------------------------
    // Start Tests
    // ------------------------------------------------------------------------

    mod start_tests {
        use super::*;

        #[test]
        fn test_start_emits_start_entry() {
            let mut engine = engine();
            engine.start(TimerPhase::Work, 25, "Write spec".to_string(), Instant::now());

            assert_eq!(events(&engine), vec![SessionEvent::Start]);
            let session = engine.session().unwrap();
            assert_eq!(session.remaining_seconds, 25 * 60);
            assert!(session.is_running());
        }

        #[test]
        fn test_start_break_uses_same_vocabulary() {
            let mut engine = engine();
            engine.start(TimerPhase::Break, 5, "Write spec".to_string(), Instant::now());

            assert_eq!(events(&engine), vec![SessionEvent::Start]);
            assert_eq!(engine.session().unwrap().phase, TimerPhase::Break);
            assert_eq!(engine.session().unwrap().remaining_seconds, 5 * 60);
        }

        #[test]
        fn test_start_ignored_while_running() {
            let mut engine = engine();
            let now = Instant::now();
            engine.start(TimerPhase::Work, 25, "first".to_string(), now);
            engine.start(TimerPhase::Work, 10, "second".to_string(), now);

            assert_eq!(engine.session().unwrap().task_description, "first");
            assert_eq!(events(&engine), vec![SessionEvent::Start]);
        }

        #[test]
        fn test_start_replaces_terminal_session() {
            let mut engine = engine();
            let now = Instant::now();
            engine.start(TimerPhase::Work, 1, "first".to_string(), now);
            engine.abort();
            engine.start(TimerPhase::Work, 2, "second".to_string(), now);

            assert_eq!(engine.session().unwrap().task_description, "second");
            assert!(engine.session().unwrap().is_running());
        }
    }

    // ------------------------------------------------------------------------
    // Tick Tests
    // ------------------------------------------------------------------------

    mod tick_tests {
        use super::*;

        #[test]
        fn test_tick_idle_without_session() {
            let mut engine = engine();
            assert_eq!(engine.tick(Instant::now()), TickOutcome::Idle);
        }

        #[test]
        fn test_tick_derives_remaining_from_elapsed() {
            let mut engine = engine();
            let start = Instant::now();
            engine.start(TimerPhase::Work, 25, "Task".to_string(), start);

            assert_eq!(engine.tick(start + secs(1)), TickOutcome::Running);
            assert_eq!(engine.session().unwrap().remaining_seconds, 25 * 60 - 1);

            // A jump in wall-clock is reflected exactly, not one step at a time
            assert_eq!(engine.tick(start + secs(300)), TickOutcome::Running);
            assert_eq!(engine.session().unwrap().remaining_seconds, 25 * 60 - 300);
        }

        #[test]
        fn test_repeated_ticks_at_same_instant_do_not_drift() {
            let mut engine = engine();
            let start = Instant::now();
            engine.start(TimerPhase::Work, 25, "Task".to_string(), start);

            for _ in 0..50 {
                engine.tick(start + secs(10));
            }
            assert_eq!(engine.session().unwrap().remaining_seconds, 25 * 60 - 10);
        }

        #[test]
        fn test_tick_completes_at_full_duration() {
            let mut engine = engine();
            let start = Instant::now();
            engine.start(TimerPhase::Work, 25, "Write spec".to_string(), start);

            assert_eq!(engine.tick(start + secs(25 * 60 - 1)), TickOutcome::Running);
            assert_eq!(engine.tick(start + secs(25 * 60)), TickOutcome::Completed);

            let session = engine.session().unwrap();
            assert_eq!(session.status(), SessionStatus::Completed);
            assert_eq!(session.remaining_seconds, 0);
            assert_eq!(events(&engine), vec![SessionEvent::Start, SessionEvent::End]);
        }

        #[test]
        fn test_completed_emitted_exactly_once() {
            let mut engine = engine();
            let start = Instant::now();
            engine.start(TimerPhase::Work, 1, "Task".to_string(), start);

            assert_eq!(engine.tick(start + secs(60)), TickOutcome::Completed);
            assert_eq!(engine.tick(start + secs(61)), TickOutcome::Idle);
            assert_eq!(engine.tick(start + secs(120)), TickOutcome::Idle);

            assert_eq!(events(&engine), vec![SessionEvent::Start, SessionEvent::End]);
        }

        #[test]
        fn test_tick_after_abort_is_noop() {
            let mut engine = engine();
            let start = Instant::now();
            engine.start(TimerPhase::Work, 25, "Task".to_string(), start);
            engine.tick(start + secs(300));
            engine.abort();

            let remaining = engine.session().unwrap().remaining_seconds;
            assert_eq!(engine.tick(start + secs(400)), TickOutcome::Idle);
            assert_eq!(engine.session().unwrap().remaining_seconds, remaining);
            assert_eq!(
                events(&engine),
                vec![SessionEvent::Start, SessionEvent::Abort]
            );
        }
    }

    // ------------------------------------------------------------------------
    // Abort Tests
    // ------------------------------------------------------------------------

    mod abort_tests {
        use super::*;

        #[test]
        fn test_abort_emits_abort_never_end() {
            let mut engine = engine();
            let start = Instant::now();
            engine.start(TimerPhase::Work, 25, "Task".to_string(), start);
            engine.tick(start + secs(300));
            engine.abort();

            assert_eq!(
                events(&engine),
                vec![SessionEvent::Start, SessionEvent::Abort]
            );
            assert_eq!(engine.session().unwrap().status(), SessionStatus::Aborted);
        }

        #[test]
        fn test_abort_is_idempotent() {
            let mut engine = engine();
            engine.start(TimerPhase::Work, 25, "Task".to_string(), Instant::now());
            engine.abort();
            engine.abort();
            engine.abort();

            assert_eq!(
                events(&engine),
                vec![SessionEvent::Start, SessionEvent::Abort]
            );
        }

        #[test]
        fn test_abort_after_completion_is_noop() {
            let mut engine = engine();
            let start = Instant::now();
            engine.start(TimerPhase::Work, 1, "Task".to_string(), start);
            engine.tick(start + secs(60));
            engine.abort();

            assert_eq!(engine.session().unwrap().status(), SessionStatus::Completed);
            assert_eq!(events(&engine), vec![SessionEvent::Start, SessionEvent::End]);
        }

        #[test]
        fn test_abort_without_session_is_noop() {
            let mut engine = engine();
            engine.abort();
            assert!(events(&engine).is_empty());
        }
    }

    // ------------------------------------------------------------------------
    // Session Lifecycle Tests
    // ------------------------------------------------------------------------

    mod lifecycle_tests {
        use super::*;

        #[test]
        fn test_clear_session_discards_terminal_session() {
            let mut engine = engine();
            engine.start(TimerPhase::Work, 25, "Task".to_string(), Instant::now());
            engine.abort();
            engine.clear_session();
            assert!(engine.session().is_none());
        }

        #[test]
        fn test_clear_session_keeps_running_session() {
            let mut engine = engine();
            engine.start(TimerPhase::Work, 25, "Task".to_string(), Instant::now());
            engine.clear_session();
            assert!(engine.session().is_some());
        }
    }

    // ------------------------------------------------------------------------
    // Journal Failure Tests
    // ------------------------------------------------------------------------

    mod journal_failure_tests {
        use super::*;
        use crate::journal::JournalError;

        /// A journal that rejects every write.
        struct FailingLog;

        impl SessionLog for FailingLog {
            fn append(&mut self, _: SessionEvent, _: &str) -> Result<(), JournalError> {
                Err(JournalError::Open {
                    path: "/full/disk.txt".into(),
                    source: std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full"),
                })
            }
        }

        #[test]
        fn test_journal_failure_never_stops_the_timer() {
            let mut engine = TimerEngine::new(FailingLog);
            let start = Instant::now();
            engine.start(TimerPhase::Work, 25, "Task".to_string(), start);

            assert!(engine.take_warning().is_some());
            assert!(engine.session().unwrap().is_running());
            assert_eq!(engine.tick(start + secs(1)), TickOutcome::Running);
        }

        #[test]
        fn test_warning_is_drained_once() {
            let mut engine = TimerEngine::new(FailingLog);
            engine.start(TimerPhase::Work, 25, "Task".to_string(), Instant::now());

            assert!(engine.take_warning().is_some());
            assert!(engine.take_warning().is_none());
        }
    }
}
