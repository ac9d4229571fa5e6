use thiserror::Error;

use crate::core::{GameStatus, PlayerId, Size};

/// A move the rules do not allow. Nothing changes when one is returned.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("game is already over ({0})")]
    GameOver(GameStatus),

    #[error("cell {0} is not on the board")]
    CellOutOfRange(usize),

    #[error("there is no piece of size {0}")]
    SizeOutOfRange(u8),

    #[error("{player} has already used size {size}")]
    SizeUnavailable { player: PlayerId, size: Size },

    #[error("size {size} cannot cover size {occupant} on cell {cell}")]
    CannotCover { cell: usize, size: Size, occupant: Size },

    #[error("{player} may not cover their own piece on cell {cell}")]
    OwnPiece { player: PlayerId, cell: usize },
}

/// A stored snapshot that cannot be decoded or does not describe a
/// reachable game.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("board must have {expected} cells, found {found}")]
    BoardShape { expected: usize, found: usize },

    #[error("expected {expected} inventories, found {found}")]
    InventoryCount { expected: usize, found: usize },

    #[error("{player} inventory lists {found} sizes, at most {max} allowed")]
    InventoryShape { player: PlayerId, found: usize, max: usize },

    #[error("{player} inventory holds invalid size {size}")]
    InvalidSize { player: PlayerId, size: u8 },

    #[error("{player} inventory lists size {size} twice")]
    DuplicateSize { player: PlayerId, size: Size },

    #[error("{player} size {size} is on cell {cell} and still in inventory")]
    PlacedAndHeld { player: PlayerId, size: Size, cell: usize },

    #[error("both players own a completed line")]
    TwoWinners,

    #[error("{winner} has won but {active} is to move")]
    TurnAfterWin { winner: PlayerId, active: PlayerId },

    #[error("stored status ({stored}) disagrees with the board ({derived})")]
    StatusMismatch { stored: GameStatus, derived: GameStatus },

    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot binary: {0}")]
    Binary(#[from] bincode::Error),
}

/// Failure while driving a game with strategies.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatchError {
    #[error("{player} strategy chose no move while {available} were legal")]
    NoMoveChosen { player: PlayerId, available: usize },

    #[error("{player} strategy chose an illegal move: {source}")]
    Illegal {
        player: PlayerId,
        #[source]
        source: IllegalMove,
    },

    #[error("{player} holds {held} pieces but none can be placed")]
    Blocked { player: PlayerId, held: usize },

    #[error("game still running after {limit} plies")]
    PlyLimit { limit: u32 },
}

/// Convenience result for engine moves.
pub type Result<T> = std::result::Result<T, IllegalMove>;
