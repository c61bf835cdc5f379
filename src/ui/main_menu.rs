//! Main menu screen.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::frame::selection_style;

/// A main menu entry chosen with Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Prompt for a task and start the work timer
    StartPomodoro,
    /// Open the log viewer
    ViewLog,
    /// Open the settings editor
    Settings,
    /// Exit the program
    Quit,
}

const OPTIONS: [(&str, MenuChoice); 4] = [
    ("Start Pomodoro", MenuChoice::StartPomodoro),
    ("View previous pomodoros", MenuChoice::ViewLog),
    ("Settings", MenuChoice::Settings),
    ("Quit", MenuChoice::Quit),
];

/// Main menu state: the selected row.
#[derive(Debug, Default)]
pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    /// Creates a menu with the first entry selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one keystroke; returns the activated choice, if any.
    ///
    /// Up/Down move the selection cyclically: moving up from the first item
    /// wraps to the last and vice versa. Unrecognized keys are no-ops.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<MenuChoice> {
        match key {
            KeyCode::Up => {
                self.selected = (self.selected + OPTIONS.len() - 1) % OPTIONS.len();
                None
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1) % OPTIONS.len();
                None
            }
            KeyCode::Enter => Some(OPTIONS[self.selected].1),
            KeyCode::Char('q') => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    /// Renders the option list into the content area.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::raw("")];
        for (i, (label, _)) in OPTIONS.iter().enumerate() {
            let style = if i == self.selected {
                selection_style()
            } else {
                Style::default()
            };
            lines.push(Line::styled(format!("  {label}  "), style));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

// ============================================================================
// Tests
// ============================================================================
