// src/ui/widgets/player_panel.rs
//! Player information panel widget.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::library::{History, Queue, RepeatMode, Track};

pub struct PlayerPanelState<'a> {
    pub current: Option<&'a Track>,
    pub artist: Option<&'a str>,
    pub elapsed: u64,
    pub is_playing: bool,
    pub is_paused: bool,
    pub volume: f32,
    pub repeat: RepeatMode,
    pub theme_name: &'a str,
    pub history: &'a History,
    pub queue: &'a Queue,
    /// Set when the audio graph failed to bind; playback still works but
    /// the EQ and visualizer are inert.
    pub graph_error: Option<&'a str>,
}

/// Render the player information panel.
pub fn render_player_panel(f: &mut Frame<'_>, area: Rect, state: &PlayerPanelState<'_>) {
    f.render_widget(
        Block::default().borders(Borders::ALL).title("2: Player"),
        area,
    );

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let duration = state
        .current
        .and_then(|t| t.duration_secs)
        .unwrap_or(0)
        .max(1);

    if let Some(track) = state.current {
        let repeat = match state.repeat {
            RepeatMode::Off => "off",
            RepeatMode::All => "all",
        };
        let mut lines = vec![
            format!("Track: {}", track.name),
            format!("Kind: {}", track.kind),
        ];
        if let Some(artist) = state.artist {
            lines.push(format!("Artist: {artist}"));
        }
        lines.push(format!(
            "Volume: {:.0}%  Repeat: {repeat}  Theme: {}",
            state.volume * 100.0,
            state.theme_name
        ));
        lines.push(format!("History: {} played", state.history.len()));
        if let Some(cause) = state.graph_error {
            lines.push(format!("Audio graph unavailable: {cause}"));
        }
        f.render_widget(
            Paragraph::new(lines.join("\n")).wrap(Wrap { trim: true }),
            inner[0],
        );
    } else {
        let hint = if state.queue.is_empty() {
            "Queue is empty — start retrodeck with media files as arguments"
        } else {
            "No track playing — press Enter on a queue entry"
        };
        f.render_widget(Paragraph::new(hint).wrap(Wrap { trim: true }), inner[0]);
    }

    let play_pause_icon = if !state.is_playing {
        Span::styled(" ⏵ ", Style::default().fg(Color::Gray))
    } else if state.is_paused {
        Span::styled(" ⏵ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ⏸ ", Style::default().fg(Color::Green))
    };

    let controls = Line::from(vec![
        Span::styled(" ⏮ ", Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(" ⏹ ", Style::default().fg(Color::Red)),
        Span::raw(" "),
        play_pause_icon,
        Span::raw(" "),
        Span::styled(" ⏭ ", Style::default().fg(Color::Cyan)),
    ]);

    f.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        inner[1],
    );

    let ratio = (state.elapsed as f64 / duration as f64).clamp(0.0, 1.0);
    let time_label = format!(
        "{:02}:{:02} / {:02}:{:02}",
        state.elapsed / 60,
        state.elapsed % 60,
        duration / 60,
        duration % 60
    );

    f.render_widget(
        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::ITALIC),
            )
            .ratio(ratio)
            .label(time_label),
        inner[2],
    );
}
