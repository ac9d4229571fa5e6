//! The 3x3 board and its eight winning lines.
//!
//! Cell indices are row-major:
//!
//! ```text
//!   0 1 2
//!   3 4 5
//!   6 7 8
//! ```
//!
//! Each cell tracks only its topmost piece. A covered piece is gone for good.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::{Inventory, Piece};
use super::player::PlayerId;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Board contents: one optional piece per cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Piece>; CELL_COUNT],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a board from exactly nine cells.
    #[must_use]
    pub const fn from_cells(cells: [Option<Piece>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Check whether `cell` names a position on the board.
    #[must_use]
    pub const fn in_range(cell: usize) -> bool {
        cell < CELL_COUNT
    }

    /// Get the top piece at `cell`. Out-of-range cells read as empty.
    #[must_use]
    pub fn get(&self, cell: usize) -> Option<Piece> {
        self.cells.get(cell).copied().flatten()
    }

    /// Put `piece` on `cell`, returning the piece it covered.
    ///
    /// Panics if `cell` is out of range; callers validate first.
    pub fn place(&mut self, cell: usize, piece: Piece) -> Option<Piece> {
        self.cells[cell].replace(piece)
    }

    /// All nine cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Piece>; CELL_COUNT] {
        &self.cells
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Check whether `piece` may go on `cell`: the cell is empty, or holds a
    /// strictly smaller piece (of the opponent's, unless `allow_self_cover`).
    #[must_use]
    pub fn accepts(&self, cell: usize, piece: Piece, allow_self_cover: bool) -> bool {
        match self.cells.get(cell) {
            None => false,
            Some(None) => true,
            Some(Some(occupant)) => {
                (allow_self_cover || occupant.owner != piece.owner)
                    && piece.size.covers(occupant.size)
            }
        }
    }

    /// Check whether `player` can place any size from `inventory` anywhere.
    #[must_use]
    pub fn has_placement(&self, player: PlayerId, inventory: Inventory, allow_self_cover: bool) -> bool {
        inventory.iter().any(|size| {
            (0..CELL_COUNT).any(|cell| self.accepts(cell, Piece::new(player, size), allow_self_cover))
        })
    }

    /// The owner of `line` if all three of its cells belong to one player.
    ///
    /// A line naming a cell off the board has no owner.
    #[must_use]
    pub fn line_owner(&self, line: &[usize; 3]) -> Option<PlayerId> {
        let owner = self.get(line[0])?.owner;
        line[1..]
            .iter()
            .all(|&i| self.get(i).map(|p| p.owner) == Some(owner))
            .then_some(owner)
    }

    /// Check whether `player` owns any complete line.
    #[must_use]
    pub fn has_line(&self, player: PlayerId) -> bool {
        LINES.iter().any(|line| self.line_owner(line) == Some(player))
    }

    /// Every player owning at least one complete line, in seat order.
    #[must_use]
    pub fn line_owners(&self) -> SmallVec<[PlayerId; 2]> {
        PlayerId::all().filter(|&p| self.has_line(p)).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(piece) => write!(f, "{}", piece)?,
                    None => write!(f, "..")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::Size;

    fn piece(owner: PlayerId, size: u8) -> Piece {
        Piece::new(owner, Size::new(size).unwrap())
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.occupied(), 0);
        assert!(board.line_owners().is_empty());
        assert_eq!(board.get(0), None);
        assert_eq!(board.get(42), None);
    }

    #[test]
    fn test_place_returns_covered_piece() {
        let mut board = Board::new();
        assert_eq!(board.place(4, piece(PlayerId::P1, 2)), None);
        assert_eq!(
            board.place(4, piece(PlayerId::P2, 3)),
            Some(piece(PlayerId::P1, 2))
        );
        assert_eq!(board.get(4), Some(piece(PlayerId::P2, 3)));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in &LINES {
            let mut board = Board::new();
            for (i, &cell) in line.iter().enumerate() {
                board.place(cell, piece(PlayerId::P2, i as u8 + 1));
            }
            assert_eq!(board.line_owner(line), Some(PlayerId::P2));
            assert!(board.has_line(PlayerId::P2));
            assert!(!board.has_line(PlayerId::P1));
        }
    }

    #[test]
    fn test_mixed_line_has_no_owner() {
        let mut board = Board::new();
        board.place(0, piece(PlayerId::P1, 1));
        board.place(1, piece(PlayerId::P1, 2));
        board.place(2, piece(PlayerId::P2, 3));
        assert_eq!(board.line_owner(&LINES[0]), None);
        assert!(board.line_owners().is_empty());
    }

    #[test]
    fn test_off_board_line_has_no_owner() {
        let mut board = Board::new();
        for cell in 0..CELL_COUNT {
            board.place(cell, piece(PlayerId::P1, 1));
        }
        assert_eq!(board.line_owner(&[0, 1, 9]), None);
        assert_eq!(board.line_owner(&[42, 0, 1]), None);
        assert_eq!(board.line_owner(&[0, 1, 2]), Some(PlayerId::P1));
    }

    #[test]
    fn test_accepts() {
        let mut board = Board::new();
        board.place(0, piece(PlayerId::P1, 3));

        assert!(board.accepts(1, piece(PlayerId::P1, 1), true));
        assert!(board.accepts(0, piece(PlayerId::P2, 4), true));
        assert!(!board.accepts(0, piece(PlayerId::P2, 3), true));
        assert!(board.accepts(0, piece(PlayerId::P1, 4), true));
        assert!(!board.accepts(0, piece(PlayerId::P1, 4), false));
        assert!(board.accepts(0, piece(PlayerId::P2, 4), false));
        assert!(!board.accepts(CELL_COUNT, piece(PlayerId::P2, 5), true));
    }

    #[test]
    fn test_full_board_can_block_small_pieces() {
        let mut board = Board::new();
        for cell in 0..CELL_COUNT {
            board.place(cell, piece(PlayerId::P1, 2));
        }
        let only_one: Inventory = [Size::new(1).unwrap()].into_iter().collect();
        let only_three: Inventory = [Size::new(3).unwrap()].into_iter().collect();

        assert!(!board.has_placement(PlayerId::P2, only_one, true));
        assert!(board.has_placement(PlayerId::P2, only_three, true));
        assert!(!board.has_placement(PlayerId::P1, only_three, false));
        assert!(!board.has_placement(PlayerId::P2, Inventory::empty(), true));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, piece(PlayerId::P1, 5));
        board.place(4, piece(PlayerId::P2, 2));
        assert_eq!(board.to_string(), "A5 .. ..\n.. B2 ..\n.. .. ..");
    }
}
