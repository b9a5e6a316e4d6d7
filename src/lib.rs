// src/lib.rs
//! Retrodeck - a themeable terminal media player with a live 10-band
//! equalizer and spectrum visualizer.

pub mod app;
pub mod audio;
pub mod library;
pub mod theme;
pub mod ui;
