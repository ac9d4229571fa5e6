//! Serializable game snapshots.
//!
//! A `Snapshot` is the read-only view handed to renderers and the payload a
//! caller stores to resume a session later. The wire shape uses plain lists
//! so that any key-value string store can hold it:
//!
//! ```json
//! {
//!   "board": [{"owner":"P1","size":5}, null, null, null, null, null, null, null, null],
//!   "inventories": [[1,2,3,4], [1,2,3,4,5]],
//!   "active_player": "P2",
//!   "status": "InProgress"
//! }
//! ```
//!
//! Because lengths are not fixed on the wire, `validate` checks the shape
//! and internal consistency before the engine accepts a snapshot.

use serde::{Deserialize, Serialize};

use super::board::{Board, CELL_COUNT};
use super::piece::{Inventory, Piece, Size};
use super::player::{PlayerId, PlayerMap};
use super::state::GameStatus;
use crate::error::SnapshotError;

/// Board, inventories, turn and status at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Nine cells, row-major. Only the top piece of each cell.
    pub board: Vec<Option<Piece>>,

    /// Remaining sizes per player, in seat order.
    pub inventories: Vec<Vec<u8>>,

    /// Player to move (or the winner, once the game is won).
    pub active_player: PlayerId,

    /// Status at capture time. Optional on input; derived when absent.
    #[serde(default)]
    pub status: Option<GameStatus>,
}

/// A snapshot that passed validation, ready to load into an engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedSnapshot {
    pub board: Board,
    pub inventories: PlayerMap<Inventory>,
    pub active_player: PlayerId,
    pub status: GameStatus,
}

impl Snapshot {
    /// Capture engine parts into a snapshot.
    #[must_use]
    pub fn capture(
        board: &Board,
        inventories: &PlayerMap<Inventory>,
        active_player: PlayerId,
        status: GameStatus,
    ) -> Self {
        Self {
            board: board.cells().to_vec(),
            inventories: inventories
                .values()
                .map(|inv| inv.iter().map(u8::from).collect())
                .collect(),
            active_player,
            status: Some(status),
        }
    }

    /// Encode as a JSON string.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from a JSON string. Structural checks happen in `validate`.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode in the compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from the compact binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check shape and consistency, deriving the game status.
    ///
    /// Rejects a wrong board length, anything but two inventories, invalid
    /// or repeated sizes, a piece that is both on the board and still in
    /// its owner's hand, lines owned by both players, a won game whose
    /// winner is not the active player, and a stored status that disagrees
    /// with the derived one.
    pub fn validate(&self) -> Result<ValidatedSnapshot, SnapshotError> {
        let cells: [Option<Piece>; CELL_COUNT] =
            self.board
                .as_slice()
                .try_into()
                .map_err(|_| SnapshotError::BoardShape {
                    expected: CELL_COUNT,
                    found: self.board.len(),
                })?;
        let board = Board::from_cells(cells);

        if self.inventories.len() != PlayerId::ALL.len() {
            return Err(SnapshotError::InventoryCount {
                expected: PlayerId::ALL.len(),
                found: self.inventories.len(),
            });
        }

        let mut inventories = PlayerMap::with_value(Inventory::empty());
        for (player, raw) in PlayerId::all().zip(&self.inventories) {
            if raw.len() > Size::COUNT {
                return Err(SnapshotError::InventoryShape {
                    player,
                    found: raw.len(),
                    max: Size::COUNT,
                });
            }
            for &value in raw {
                let size = Size::new(value)
                    .ok_or(SnapshotError::InvalidSize { player, size: value })?;
                if !inventories[player].insert(size) {
                    return Err(SnapshotError::DuplicateSize { player, size });
                }
            }
        }

        for (cell, piece) in board.cells().iter().enumerate() {
            if let Some(piece) = piece {
                if inventories[piece.owner].contains(piece.size) {
                    return Err(SnapshotError::PlacedAndHeld {
                        player: piece.owner,
                        size: piece.size,
                        cell,
                    });
                }
            }
        }

        let owners = board.line_owners();
        let derived = match owners.as_slice() {
            [] if inventories.values().all(|inv| inv.is_empty()) => GameStatus::Draw,
            [] => GameStatus::InProgress,
            [winner] => GameStatus::Won(*winner),
            _ => return Err(SnapshotError::TwoWinners),
        };

        // The turn never passes after a winning move.
        if let GameStatus::Won(winner) = derived {
            if self.active_player != winner {
                return Err(SnapshotError::TurnAfterWin {
                    winner,
                    active: self.active_player,
                });
            }
        }

        if let Some(stored) = self.status {
            if stored != derived {
                return Err(SnapshotError::StatusMismatch { stored, derived });
            }
        }

        Ok(ValidatedSnapshot {
            board,
            inventories,
            active_player: self.active_player,
            status: derived,
        })
    }
}
