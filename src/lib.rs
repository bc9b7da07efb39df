//! # Introduction
//!
//! buncotty keeps score for a game of Bunco in the terminal: two team
//! scores, fixed-increment scoring keys, and linear undo/redo over every
//! change, drawn with [ratatui](https://docs.rs/ratatui).
//!
//! ## Layout
//!
//! ```text
//! key press → App → Scoreboard → History → GameState → panes
//!                 ↘ Preferences → background writer → prefs.json
//! ```
//!
//! 1. [`game`] — score snapshots, the undo/redo [`game::History`], and the
//!    team selector. Session-only; never persisted.
//! 2. [`prefs`] — the haptics and forced-theme preferences, cached once at
//!    startup and written back in the background.
//! 3. [`feedback`] — the haptics boundary (the terminal bell).
//! 4. [`config`] — command-line options and data directory resolution.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod feedback;
pub mod game;
pub mod prefs;
pub mod ui;
