//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`scoreboard`]: Team cards, scoring buttons, and the undo/redo bar
//! - [`settings`]: How-to-play text, haptics switch, and theme choice
//! - [`status`]: Status bar with keybindings and history position
//!
//! Each module exports a stateless `render_*` function that draws from
//! borrowed app state and the active [`Theme`](crate::ui::theme::Theme).

pub mod scoreboard;
pub mod settings;
pub mod status;

pub use scoreboard::render_scoreboard;
pub use settings::render_settings;
pub use status::{render_status_bar, StatusRenderData};
