//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, screen navigation
//! - **[`panes`]** — stateless render functions for the scoreboard, settings
//!   screen, and status bar
//! - **[`theme`]** — light and dark palettes plus system scheme detection
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Scoreboard`] and [`Preferences`] and call [`App::run`] to start the
//! event loop.
//!
//! [`Scoreboard`]: crate::game::Scoreboard
//! [`Preferences`]: crate::prefs::Preferences
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, Screen};
