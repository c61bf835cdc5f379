//! Shared screen chrome.
//!
//! Every screen draws inside the same rounded border with a centered title
//! and a key-hint footer line.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// Style for titles.
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for key-hint footers and inline notices.
pub fn hint_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Style for the highlighted row of a menu.
pub fn selection_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Draws the outer border, title, and footer; returns the content area.
pub fn chrome(frame: &mut Frame, title: &str, footer: &str) -> Rect {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::styled(format!(" {title} "), title_style()).centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    frame.render_widget(Paragraph::new(footer).style(hint_style()), footer_area);
    content
}
