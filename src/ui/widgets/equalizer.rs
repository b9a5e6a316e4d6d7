// src/ui/widgets/equalizer.rs
//! Equalizer panel: one mini-gauge per band plus the preset label.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::audio::eq::{Equalizer, BAND_FREQUENCIES, GAIN_MAX_DB, GAIN_MIN_DB};

fn band_label(freq: f32) -> String {
    if freq >= 1_000.0 {
        format!("{:>3}k", (freq / 1_000.0) as u32)
    } else {
        format!("{:>4}", freq as u32)
    }
}

/// Render the 10-band EQ with the selected band highlighted.
pub fn render_equalizer(
    f: &mut Frame<'_>,
    area: Rect,
    equalizer: &Equalizer,
    selected_band: usize,
) {
    let title = format!("3: Equalizer [{}]", equalizer.label());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let mut constraints = vec![Constraint::Length(1); BAND_FREQUENCIES.len()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (&freq, &gain)) in BAND_FREQUENCIES
        .iter()
        .zip(equalizer.gains().iter())
        .enumerate()
    {
        if i >= rows.len().saturating_sub(1) {
            break;
        }
        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(5), Constraint::Min(1)])
            .split(rows[i]);

        let label_style = if i == selected_band {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        f.render_widget(
            Paragraph::new(band_label(freq)).style(label_style),
            row[0],
        );

        let ratio = f64::from((gain - GAIN_MIN_DB) / (GAIN_MAX_DB - GAIN_MIN_DB));
        let color = if gain > 0.0 {
            Color::Green
        } else if gain < 0.0 {
            Color::Red
        } else {
            Color::DarkGray
        };
        f.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(color))
                .ratio(ratio.clamp(0.0, 1.0))
                .label(format!("{gain:+.0} dB")),
            row[1],
        );
    }
}
