//! Moves and move history.
//!
//! The only action in the game is "place a doll of size S on cell C".
//! A `MoveRecord` keeps what happened so a renderer or replay can follow
//! the game without diffing boards.

use serde::{Deserialize, Serialize};

use super::piece::{Piece, Size};
use super::player::PlayerId;

/// Place a piece of `size` from the active player's inventory on `cell`.
///
/// ## Example
///
/// ```
/// use matryoshka_ttt::core::{Move, Size};
///
/// let mv = Move::new(4, Size::new(5).unwrap());
/// assert_eq!(mv.cell, 4);
/// assert_eq!(mv.to_string(), "5@4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Target cell, 0..=8 row-major.
    pub cell: usize,
    /// Size of the piece to place.
    pub size: Size,
}

impl Move {
    #[must_use]
    pub const fn new(cell: usize, size: Size) -> Self {
        Self { cell, size }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.size, self.cell)
    }
}

/// A successfully applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move itself.
    pub mv: Move,

    /// The piece that was covered, if the cell was occupied.
    pub covered: Option<Piece>,

    /// 1-based move number within the game.
    pub ply: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, covered: Option<Piece>, ply: u32) -> Self {
        Self {
            player,
            mv,
            covered,
            ply,
        }
    }

    /// The piece this move put on the board.
    #[must_use]
    pub fn placed(&self) -> Piece {
        Piece::new(self.player, self.mv.size)
    }
}
