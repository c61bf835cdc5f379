//! Active-timer screen.
//!
//! Renders the task line, a live MM:SS countdown, and a progress gauge.
//! On completion it runs the alert sequence inline: the bell rings and the
//! banner flashes reverse-video exactly five times, with a fixed delay
//! between repeats. The sequence is cooperative (driven by the event loop,
//! no sleeping) so a quit keystroke can always cut it short.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::types::Session;

/// Number of bell-and-flash repeats on completion.
pub const ALERT_REPEATS: u8 = 5;
/// Delay between flash toggles.
const ALERT_INTERVAL: Duration = Duration::from_millis(120);

// ============================================================================
// Alert state machine
// ============================================================================

/// One step of alert progress, reported back to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertProgress {
    /// Nothing due yet
    Idle,
    /// A flash just turned on; the caller should ring the terminal bell
    Flashed,
    /// All repeats done; the controller moves the session along
    Finished,
}

#[derive(Debug)]
struct AlertState {
    repeats_left: u8,
    flash_on: bool,
    next_toggle: Instant,
}

// ============================================================================
// TimerScreen
// ============================================================================

/// Outcome of a keystroke on the timer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Nothing to do
    None,
    /// Abort the running session and return to the menu
    Abort,
    /// Cut the alert short and proceed
    SkipAlert,
}

/// Timer screen state: just the optional in-progress alert.
#[derive(Debug, Default)]
pub struct TimerScreen {
    alert: Option<AlertState>,
}

impl TimerScreen {
    /// Creates a counting-down timer screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the completion alert is playing.
    pub fn alert_active(&self) -> bool {
        self.alert.is_some()
    }

    /// Begins the completion alert sequence.
    pub fn begin_alert(&mut self, now: Instant) {
        self.alert = Some(AlertState {
            repeats_left: ALERT_REPEATS,
            flash_on: false,
            next_toggle: now,
        });
    }

    /// Advances the alert sequence to `now`.
    ///
    /// Each repeat is one bell with the flash held on for the fixed
    /// interval, then off for the same interval.
    pub fn advance_alert(&mut self, now: Instant) -> AlertProgress {
        let Some(alert) = self.alert.as_mut() else {
            return AlertProgress::Idle;
        };
        if now < alert.next_toggle {
            return AlertProgress::Idle;
        }

        if alert.flash_on {
            alert.flash_on = false;
            alert.repeats_left -= 1;
            alert.next_toggle = now + ALERT_INTERVAL;
            if alert.repeats_left == 0 {
                self.alert = None;
                return AlertProgress::Finished;
            }
            AlertProgress::Idle
        } else {
            alert.flash_on = true;
            alert.next_toggle = now + ALERT_INTERVAL;
            AlertProgress::Flashed
        }
    }

    /// Handles one keystroke.
    ///
    /// While counting, `q` aborts. During the alert, `q` skips the remaining
    /// repeats; all other keys are drained so they cannot leak into the next
    /// screen.
    pub fn handle_key(&mut self, key: KeyCode) -> TimerAction {
        if self.alert.is_some() {
            if key == KeyCode::Char('q') {
                self.alert = None;
                return TimerAction::SkipAlert;
            }
            return TimerAction::None;
        }
        match key {
            KeyCode::Char('q') => TimerAction::Abort,
            _ => TimerAction::None,
        }
    }

    /// Renders the countdown (or the flashing completion banner).
    pub fn render(&self, frame: &mut Frame, area: Rect, session: &Session, total_seconds: u64) {
        let [_, banner, task_area, clock, gauge_area, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        let phase = session.phase.as_str();
        if let Some(alert) = &self.alert {
            let mut style = Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD);
            if alert.flash_on {
                style = style.add_modifier(Modifier::REVERSED);
            }
            frame.render_widget(
                Paragraph::new(Line::styled(format!("{phase} complete!"), style)).centered(),
                banner,
            );
        } else {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    phase,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
                .centered(),
                banner,
            );
        }

        frame.render_widget(
            Paragraph::new(format!("Task: {}", session.task_description)),
            task_area,
        );

        let remaining = session.remaining_seconds;
        frame.render_widget(
            Paragraph::new(format!("{:02}:{:02} remaining", remaining / 60, remaining % 60))
                .centered(),
            clock,
        );

        let ratio = if total_seconds > 0 {
            1.0 - f64::from(remaining) / total_seconds as f64
        } else {
            1.0
        };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio.clamp(0.0, 1.0));
        frame.render_widget(gauge, gauge_area);
    }
}

// ============================================================================
// Tests
// ============================================================================
