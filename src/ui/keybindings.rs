// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map digit/shifted-digit keys to section number (1..4).
pub fn map_key_to_digit(k: &KeyEvent) -> Option<usize> {
    if let KeyCode::Char(c) = k.code {
        match c {
            '1' | '!' => Some(1),
            '2' | '@' => Some(2),
            '3' | '#' => Some(3),
            '4' | '$' => Some(4),
            _ => None,
        }
    } else {
        None
    }
}

fn is_shifted_symbol(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('!') | KeyCode::Char('@') | KeyCode::Char('#') | KeyCode::Char('$')
    )
}

/// Actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Up,
    Down,
    PlaySelected,
    TogglePause,
    Stop,
    NextTrack,
    PreviousTrack,
    SeekForward,
    SeekBackward,
    VolumeUp,
    VolumeDown,
    CycleVisualization,
    CycleTheme,
    CyclePreset,
    ToggleRepeat,
    ToggleVisualizer,
    BandNext,
    BandPrevious,
    BandGainUp,
    BandGainDown,
    CreatePlaylist,
    AddToPlaylist,
    LoadPlaylist,
    ToggleSection(usize),
    Quit,
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: &KeyEvent) -> Action {
    if let Some(d) = map_key_to_digit(key) {
        if key.modifiers.contains(KeyModifiers::SHIFT) || is_shifted_symbol(key) {
            return Action::ToggleSection(d);
        }
    }

    match key.code {
        KeyCode::Down => Action::Down,
        KeyCode::Up => Action::Up,
        KeyCode::Enter => Action::PlaySelected,
        KeyCode::Char(' ') => Action::TogglePause,
        KeyCode::Char('s') => Action::Stop,
        KeyCode::Char('n') | KeyCode::Char('>') => Action::NextTrack,
        KeyCode::Char('p') | KeyCode::Char('<') => Action::PreviousTrack,
        KeyCode::Right => Action::SeekForward,
        KeyCode::Left => Action::SeekBackward,
        KeyCode::Char('0') => Action::VolumeUp,
        KeyCode::Char('9') => Action::VolumeDown,
        KeyCode::Char('v') => Action::CycleVisualization,
        KeyCode::Char('t') => Action::CycleTheme,
        KeyCode::Char('e') => Action::CyclePreset,
        KeyCode::Char('r') => Action::ToggleRepeat,
        KeyCode::Char('m') => Action::ToggleVisualizer,
        KeyCode::Char(']') => Action::BandNext,
        KeyCode::Char('[') => Action::BandPrevious,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::BandGainUp,
        KeyCode::Char('-') => Action::BandGainDown,
        KeyCode::Char('c') => Action::CreatePlaylist,
        KeyCode::Char('a') => Action::AddToPlaylist,
        KeyCode::Char('l') => Action::LoadPlaylist,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}
