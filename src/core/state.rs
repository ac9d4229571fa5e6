//! Game status.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Where the game stands after the most recent move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// A player completed a line.
    Won(PlayerId),
    /// Both inventories ran out with no line completed.
    Draw,
}

impl GameStatus {
    /// Check if no further moves will be accepted.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if there is one.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(p) => Some(p),
            _ => None,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(p) => write!(f, "{} won", p),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_queries() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Draw.is_over());
        assert!(GameStatus::Won(PlayerId::P2).is_over());

        assert_eq!(GameStatus::Won(PlayerId::P2).winner(), Some(PlayerId::P2));
        assert_eq!(GameStatus::Draw.winner(), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Won(PlayerId::P1).to_string(), "Player 1 won");
        assert_eq!(GameStatus::Draw.to_string(), "draw");
    }
}
