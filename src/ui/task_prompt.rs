//! Task entry prompt shown before a work session starts.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::frame::hint_style;

/// Task used when the user submits an empty prompt.
const UNTITLED_TASK: &str = "Untitled task";

/// Outcome of a keystroke in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Keep editing
    None,
    /// Start the session with this task description
    Submit(String),
    /// Return to the main menu without starting
    Cancel,
}

/// Free-text input buffer for the task description.
#[derive(Debug, Default)]
pub struct TaskPrompt {
    input: String,
}

impl TaskPrompt {
    /// Creates an empty prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one keystroke.
    ///
    /// Printable characters append, Backspace deletes, Enter submits (an
    /// empty submission becomes "Untitled task"), Esc cancels.
    pub fn handle_key(&mut self, key: KeyCode) -> PromptAction {
        match key {
            KeyCode::Char(c) => {
                self.input.push(c);
                PromptAction::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                PromptAction::None
            }
            KeyCode::Enter => {
                let task = self.input.trim();
                let task = if task.is_empty() {
                    UNTITLED_TASK.to_string()
                } else {
                    task.to_string()
                };
                PromptAction::Submit(task)
            }
            KeyCode::Esc => PromptAction::Cancel,
            _ => PromptAction::None,
        }
    }

    /// Renders the prompt and the input buffer with a cursor marker.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::raw(""),
            Line::styled("Esc to cancel", hint_style()),
            Line::raw(""),
            Line::raw("What task are you working on?"),
            Line::raw(""),
            Line::raw(format!("> {}_", self.input)),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

// ============================================================================
// Tests
// ============================================================================
