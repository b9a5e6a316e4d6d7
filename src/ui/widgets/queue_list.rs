// src/ui/widgets/queue_list.rs
//! Queue list widget: the active track order with a now-playing marker.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::library::Queue;

/// Render the playback queue.
pub fn render_queue_list(
    f: &mut Frame<'_>,
    area: Rect,
    queue: &Queue,
    playlist_count: usize,
    state: &mut ListState,
) {
    let items: Vec<ListItem> = queue
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = if queue.current_index() == Some(i) {
                "▶ "
            } else {
                "  "
            };
            let label = format!("{marker}{} [{}]", track.name, track.kind);
            let item = ListItem::new(label);
            if queue.current_index() == Some(i) {
                item.style(Style::default().fg(Color::Green))
            } else {
                item
            }
        })
        .collect();

    let title = format!("1: Queue ({} tracks, {playlist_count} playlists)", queue.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
