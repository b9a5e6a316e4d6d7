// src/audio/eq/presets.rs
//! Built-in equalizer presets: name -> 10 gains in dB, low band to high.

pub const PRESETS: &[(&str, [f32; 10])] = &[
    ("Flat", [0.0; 10]),
    ("Rock", [5.0, 4.0, 3.0, 1.0, -1.0, -1.0, 1.0, 3.0, 4.0, 5.0]),
    ("Pop", [-1.0, 2.0, 4.0, 5.0, 4.0, 2.0, 0.0, -1.0, -2.0, -2.0]),
    ("Jazz", [4.0, 3.0, 1.0, 2.0, -1.0, -1.0, 0.0, 1.0, 3.0, 4.0]),
    ("Techno", [6.0, 5.0, 0.0, -2.0, -1.0, 0.0, 4.0, 6.0, 6.0, 5.0]),
    ("Hip-Hop", [5.0, 4.0, 1.0, 3.0, -1.0, -1.0, 1.0, -1.0, 2.0, 3.0]),
    ("Classical", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -2.0, -2.0, -2.0, -4.0]),
    ("Metal", [6.0, 5.0, 0.0, 2.0, 0.0, 2.0, 4.0, 6.0, 6.0, 6.0]),
    ("Dance", [6.0, 5.0, 2.0, 0.0, 0.0, -2.0, -3.0, -3.0, 0.0, 0.0]),
    ("Live", [-2.0, 0.0, 2.0, 3.0, 3.0, 3.0, 2.0, 1.0, 1.0, 1.0]),
];

/// Look up a preset's gain vector by name.
pub fn preset(name: &str) -> Option<[f32; 10]> {
    PRESETS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, gains)| *gains)
}

/// Preset names in table order, for cycling through them in the UI.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(n, _)| *n)
}
