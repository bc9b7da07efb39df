//! Linear undo/redo history over score snapshots
//!
//! [`History`] keeps every [`GameState`] the session has produced plus a
//! cursor into that list. The snapshot under the cursor is the one on screen.
//!
//! ```text
//! states:  [0-0] [1-0] [2-0] [12-0]
//!                              ^ index
//! ```
//!
//! Only [`History::apply`] and [`History::clear`] grow the list, and both
//! first drop everything after the cursor. [`History::undo`] and
//! [`History::redo`] only move the cursor. Moving past either end is a
//! silent no-op.

use super::state::{GameState, Team};
use tracing::debug;

/// Score history with a cursor
#[derive(Debug, Clone)]
pub struct History {
    states: Vec<GameState>,
    index: usize,
}

impl History {
    /// Create a history seeded with the zero state
    pub fn new() -> Self {
        History {
            states: vec![GameState::ZERO],
            index: 0,
        }
    }

    /// The currently displayed snapshot
    pub fn current(&self) -> GameState {
        self.states[self.index]
    }

    /// Add `points` to `team` and record the result
    pub fn apply(&mut self, points: i64, team: Team) -> GameState {
        let next = self.current().with_points(team, points);
        self.record(next)
    }

    /// Record a zeroed snapshot.
    ///
    /// The previous scores stay in the history, so a clear can be undone.
    pub fn clear(&mut self) -> GameState {
        self.record(GameState::ZERO)
    }

    pub fn undo(&mut self) -> GameState {
        if self.can_undo() {
            self.index -= 1;
            debug!(position = self.index, "undo");
        }
        self.current()
    }

    pub fn redo(&mut self) -> GameState {
        if self.can_redo() {
            self.index += 1;
            debug!(position = self.index, "redo");
        }
        self.current()
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.states.len()
    }

    /// Cursor position (0-based)
    pub fn position(&self) -> usize {
        self.index
    }

    /// Number of recorded snapshots, including any redo tail
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false; the seed state is never removed
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[GameState] {
        &self.states
    }

    fn record(&mut self, state: GameState) -> GameState {
        let discarded = self.states.len() - (self.index + 1);
        self.states.truncate(self.index + 1);
        self.states.push(state);
        self.index = self.states.len() - 1;
        debug!(
            position = self.index,
            discarded,
            team1 = state.team1_score,
            team2 = state.team2_score,
            "recorded snapshot"
        );
        state
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
