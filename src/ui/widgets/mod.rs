// src/ui/widgets/mod.rs
//! Custom widgets for the retrodeck UI.

pub mod equalizer;
pub mod error_overlay;
pub mod player_panel;
pub mod queue_list;

// Re-export widget rendering functions
pub use equalizer::render_equalizer;
pub use error_overlay::render_error_overlay;
pub use player_panel::{render_player_panel, PlayerPanelState};
pub use queue_list::render_queue_list;
