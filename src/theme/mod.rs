// src/theme/mod.rs
//! Retro theme palettes. Each theme supplies the visualizer colors plus
//! the rendering flags the draw modes consult every frame.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeId {
    /// Winamp-style skin: blocky green-to-red bars on black.
    Amp,
    /// Console/terminal skin: blocky monochrome green, thin waveform.
    Console,
    /// CRT amber skin.
    Cathode,
    /// Glossy blue desktop skin.
    Aqua,
    /// Light grey desktop skin.
    Daylight,
}

impl ThemeId {
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Amp,
        ThemeId::Console,
        ThemeId::Cathode,
        ThemeId::Aqua,
        ThemeId::Daylight,
    ];

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeId::Amp => Palette {
                name: "Amp",
                start: Color::Rgb(0, 216, 0),
                mid: Color::Rgb(216, 216, 0),
                end: Color::Rgb(216, 40, 40),
                line: Color::Rgb(0, 216, 0),
                highlight: Color::White,
                mirror: Color::Rgb(0, 96, 0),
                blocky: true,
                dark_background: true,
                thin_waveform: false,
            },
            ThemeId::Console => Palette {
                name: "Console",
                start: Color::Rgb(60, 200, 60),
                mid: Color::Rgb(120, 230, 120),
                end: Color::Rgb(200, 255, 200),
                line: Color::Rgb(60, 200, 60),
                highlight: Color::White,
                mirror: Color::Rgb(30, 90, 30),
                blocky: true,
                dark_background: true,
                thin_waveform: true,
            },
            ThemeId::Cathode => Palette {
                name: "Cathode",
                start: Color::Rgb(255, 140, 0),
                mid: Color::Rgb(255, 180, 60),
                end: Color::Rgb(255, 220, 140),
                line: Color::Rgb(255, 160, 30),
                highlight: Color::White,
                mirror: Color::Rgb(120, 70, 0),
                blocky: false,
                dark_background: true,
                thin_waveform: false,
            },
            ThemeId::Aqua => Palette {
                name: "Aqua",
                start: Color::Rgb(40, 120, 230),
                mid: Color::Rgb(80, 170, 250),
                end: Color::Rgb(150, 220, 255),
                line: Color::Rgb(60, 140, 240),
                highlight: Color::White,
                mirror: Color::Rgb(20, 60, 120),
                blocky: false,
                dark_background: false,
                thin_waveform: false,
            },
            ThemeId::Daylight => Palette {
                name: "Daylight",
                start: Color::Rgb(90, 90, 110),
                mid: Color::Rgb(130, 130, 160),
                end: Color::Rgb(70, 70, 200),
                line: Color::Rgb(70, 70, 200),
                highlight: Color::Rgb(30, 30, 30),
                mirror: Color::Rgb(180, 180, 190),
                blocky: false,
                dark_background: false,
                thin_waveform: false,
            },
        }
    }
}

/// Colors and flags one theme hands to the visualizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    /// Bar gradient bottom / low blocks.
    pub start: Color,
    /// Bar gradient middle / mid blocks.
    pub mid: Color,
    /// Bar gradient top / high blocks.
    pub end: Color,
    /// Circular segments and reference lines.
    pub line: Color,
    /// Highlight block atop blocky bars.
    pub highlight: Color,
    /// Dimmed color for the mirrored reflection.
    pub mirror: Color,
    /// Render bars as discrete stacked blocks.
    pub blocky: bool,
    /// Fill the canvas black before drawing.
    pub dark_background: bool,
    /// Waveform polyline width 1 instead of 2.
    pub thin_waveform: bool,
}
