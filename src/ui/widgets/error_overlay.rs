// src/ui/widgets/error_overlay.rs
//! Fallback overlay shown in place of the visualizer while a track is in
//! the Errored state.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::audio::fallback::FallbackState;

/// Render the centered fallback panel. Only call while Errored.
pub fn render_error_overlay(f: &mut Frame<'_>, area: Rect, state: &FallbackState) {
    let FallbackState::Errored {
        kind,
        message,
        deadline,
        ..
    } = state
    else {
        return;
    };

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Center a small message box vertically.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(inner);

    let skipping = if deadline.is_some() {
        "skipping to the next track..."
    } else {
        "nothing else queued"
    };

    let lines = vec![
        Line::from(Span::styled("⚠", Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            kind.headline(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(message.as_str()),
        Line::from(Span::styled(
            skipping,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rows[1],
    );
}
