//! Settings editor screen.
//!
//! Edits a draft copy of the settings; nothing is persisted until the user
//! picks "Save and return". Invalid input (non-numeric or out of range) is
//! rejected with an inline error and the field re-prompts. `q` cancels and
//! discards the draft.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::frame::{hint_style, selection_style};
use crate::types::Settings;

/// Outcome of a keystroke in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Keep editing
    None,
    /// Persist these settings and return to the menu
    Save(Settings),
    /// Discard the draft and return to the menu
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    WorkMinutes,
    BreakMinutes,
    Save,
}

const ROWS: [Row; 3] = [Row::WorkMinutes, Row::BreakMinutes, Row::Save];

/// Settings editor state.
#[derive(Debug)]
pub struct SettingsScreen {
    draft: Settings,
    selected: usize,
    /// Input buffer while a duration row is being edited
    editing: Option<String>,
    error: Option<String>,
}

impl SettingsScreen {
    /// Opens the editor over a draft copy of the current settings.
    pub fn new(current: Settings) -> Self {
        Self {
            draft: current,
            selected: 0,
            editing: None,
            error: None,
        }
    }

    /// Handles one keystroke.
    pub fn handle_key(&mut self, key: KeyCode) -> SettingsAction {
        if self.editing.is_some() {
            self.handle_editing_key(key);
            return SettingsAction::None;
        }

        match key {
            KeyCode::Up => {
                self.selected = (self.selected + ROWS.len() - 1) % ROWS.len();
                SettingsAction::None
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1) % ROWS.len();
                SettingsAction::None
            }
            KeyCode::Enter => match ROWS[self.selected] {
                Row::WorkMinutes => {
                    self.editing = Some(self.draft.work_minutes.to_string());
                    self.error = None;
                    SettingsAction::None
                }
                Row::BreakMinutes => {
                    self.editing = Some(self.draft.break_minutes.to_string());
                    self.error = None;
                    SettingsAction::None
                }
                Row::Save => SettingsAction::Save(self.draft),
            },
            KeyCode::Char('q') | KeyCode::Esc => SettingsAction::Cancel,
            _ => SettingsAction::None,
        }
    }

    /// Returns the draft under edit.
    pub fn draft(&self) -> Settings {
        self.draft
    }

    fn handle_editing_key(&mut self, key: KeyCode) {
        let Some(buffer) = self.editing.as_mut() else {
            return;
        };
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Esc => {
                self.editing = None;
                self.error = None;
            }
            KeyCode::Enter => self.commit_field(),
            _ => {}
        }
    }

    /// Validates the buffer against the edited field; on failure the field
    /// stays in editing mode with an inline error (the re-prompt loop).
    fn commit_field(&mut self) {
        let Some(buffer) = self.editing.as_ref() else {
            return;
        };
        let Ok(value) = buffer.parse::<u32>() else {
            self.error = Some("Invalid number.".to_string());
            return;
        };

        let mut candidate = self.draft;
        match ROWS[self.selected] {
            Row::WorkMinutes => candidate.work_minutes = value,
            Row::BreakMinutes => candidate.break_minutes = value,
            Row::Save => return,
        }
        match candidate.validate() {
            Ok(()) => {
                self.draft = candidate;
                self.editing = None;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Renders the three rows plus any active edit buffer or error.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let labels = [
            format!("Work duration (minutes):  {}", self.draft.work_minutes),
            format!("Break duration (minutes): {}", self.draft.break_minutes),
            "Save and return".to_string(),
        ];

        let mut lines = vec![Line::raw("")];
        for (i, label) in labels.iter().enumerate() {
            let style = if i == self.selected {
                selection_style()
            } else {
                Style::default()
            };
            lines.push(Line::styled(format!("  {label}  "), style));
        }

        if let Some(buffer) = &self.editing {
            lines.push(Line::raw(""));
            lines.push(Line::styled("Enter a new value, Esc cancels", hint_style()));
            lines.push(Line::raw(format!("> {buffer}_")));
        }
        if let Some(error) = &self.error {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

// ============================================================================
// Tests
// ============================================================================
