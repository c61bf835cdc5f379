//! Read-only, paginated viewer over the session log.
//!
//! The viewer loads the file once when opened and never writes it. Entries
//! are shown newest-first.

use std::path::Path;

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::frame::hint_style;
use crate::journal::read_log_lines;

/// Lines scrolled by PageUp/PageDown.
const PAGE_LINES: usize = 20;

/// Log viewer state: the loaded lines and the scroll position.
#[derive(Debug)]
pub struct LogViewer {
    path_display: String,
    /// Log lines, newest-first
    lines: Vec<String>,
    offset: usize,
}

impl LogViewer {
    /// Opens the viewer over the log file at `path`.
    ///
    /// A missing file is not an error; the viewer shows an empty state.
    pub fn open(path: &Path) -> Self {
        let mut lines = read_log_lines(path);
        lines.reverse();
        Self {
            path_display: path.display().to_string(),
            lines,
            offset: 0,
        }
    }

    /// Handles one keystroke; returns true when the viewer should close.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let max_offset = self.lines.len().saturating_sub(1);
        let page_floor = self.lines.len().saturating_sub(PAGE_LINES);
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.offset = self.offset.saturating_sub(1),
            KeyCode::Down => self.offset = (self.offset + 1).min(max_offset),
            KeyCode::PageUp => self.offset = self.offset.saturating_sub(PAGE_LINES),
            KeyCode::PageDown => self.offset = (self.offset + PAGE_LINES).min(page_floor),
            KeyCode::Home => self.offset = 0,
            KeyCode::End => self.offset = page_floor,
            _ => {}
        }
        false
    }

    /// Renders the visible window of log lines.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.lines.is_empty() {
            let lines = vec![
                Line::raw(""),
                Line::styled(
                    "No sessions logged yet.",
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            frame.render_widget(Paragraph::new(lines), area);
            return;
        }

        let mut lines = vec![
            Line::styled(format!("Log file: {}", self.path_display), hint_style()),
            Line::raw(""),
        ];
        let visible = (area.height as usize).saturating_sub(lines.len());
        for entry in self.lines.iter().skip(self.offset).take(visible) {
            lines.push(Line::raw(entry.clone()));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

// ============================================================================
// Tests
// ============================================================================
