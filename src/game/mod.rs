//! Session score keeping
//!
//! This module holds everything that changes while a game is being scored:
//! - [`state`]: [`GameState`] snapshots and the [`Team`] selector
//! - [`history`]: the linear undo/redo [`History`] over snapshots
//! - [`scoring`]: the fixed-increment [`ScoreButton`]s
//!
//! [`Scoreboard`] ties them together. It lives only in memory for the
//! length of a session; nothing here is persisted.

pub mod history;
pub mod scoring;
pub mod state;

pub use history::History;
pub use scoring::ScoreButton;
pub use state::{GameState, Team};

/// History, team selection, and the visible buttons for one session
#[derive(Debug, Clone)]
pub struct Scoreboard {
    history: History,
    selected: Team,
    buttons: Vec<ScoreButton>,
}

impl Scoreboard {
    pub fn new(show_five_button: bool) -> Self {
        Scoreboard {
            history: History::new(),
            selected: Team::default(),
            buttons: ScoreButton::layout(show_five_button),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current(&self) -> GameState {
        self.history.current()
    }

    pub fn selected(&self) -> Team {
        self.selected
    }

    pub fn buttons(&self) -> &[ScoreButton] {
        &self.buttons
    }

    pub fn select(&mut self, team: Team) {
        self.selected = team;
    }

    pub fn toggle_team(&mut self) {
        self.selected = self.selected.other();
    }

    /// Add the button's points to the selected team
    pub fn press(&mut self, button: ScoreButton) -> GameState {
        self.history.apply(button.points(), self.selected)
    }

    pub fn clear(&mut self) -> GameState {
        self.history.clear()
    }

    pub fn undo(&mut self) -> GameState {
        self.history.undo()
    }

    pub fn redo(&mut self) -> GameState {
        self.history.redo()
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(false)
    }
}
