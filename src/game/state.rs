// Score snapshots and team selection

use std::fmt;

/// Which team a point increment applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Team {
    #[default]
    Team1,
    Team2,
}

impl Team {
    /// The opposite team
    pub fn other(self) -> Self {
        match self {
            Team::Team1 => Team::Team2,
            Team::Team2 => Team::Team1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Team::Team1 => "Team 1",
            Team::Team2 => "Team 2",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable snapshot of both teams' scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    pub team1_score: i64,
    pub team2_score: i64,
}

impl GameState {
    /// The state every game starts from, and the target of a clear
    pub const ZERO: GameState = GameState {
        team1_score: 0,
        team2_score: 0,
    };

    pub const fn new(team1_score: i64, team2_score: i64) -> Self {
        GameState {
            team1_score,
            team2_score,
        }
    }

    pub fn score(&self, team: Team) -> i64 {
        match team {
            Team::Team1 => self.team1_score,
            Team::Team2 => self.team2_score,
        }
    }

    /// Copy of this snapshot with `points` added to `team`.
    ///
    /// The sign of `points` is not checked; arithmetic saturates at the
    /// bounds of `i64`.
    pub fn with_points(&self, team: Team, points: i64) -> Self {
        match team {
            Team::Team1 => GameState {
                team1_score: self.team1_score.saturating_add(points),
                ..*self
            },
            Team::Team2 => GameState {
                team2_score: self.team2_score.saturating_add(points),
                ..*self
            },
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.team1_score, self.team2_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_points_only_touches_selected_team() {
        let state = GameState::new(5, 3);
        assert_eq!(state.with_points(Team::Team1, 11), GameState::new(16, 3));
        assert_eq!(state.with_points(Team::Team2, 21), GameState::new(5, 24));
        // original is untouched
        assert_eq!(state, GameState::new(5, 3));
    }

    #[test]
    fn test_negative_adjustment_is_allowed() {
        let state = GameState::new(5, 0);
        assert_eq!(state.with_points(Team::Team1, -7).team1_score, -2);
    }

    #[test]
    fn test_team_toggle() {
        assert_eq!(Team::Team1.other(), Team::Team2);
        assert_eq!(Team::Team2.other().other(), Team::Team2);
        assert_eq!(Team::default(), Team::Team1);
    }
}
