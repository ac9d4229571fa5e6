//! The Matryoshka tic-tac-toe rules engine.
//!
//! Owns the board, both inventories, the turn and the status:
//! - `apply_move` validates and applies a placement, then checks for a win,
//!   then a draw, then passes the turn
//! - a player left holding pieces that fit nowhere (only possible on a full
//!   board) keeps the game `InProgress` with no legal moves; `is_blocked`
//!   reports it
//! - `legal_moves` enumerates what the active player may do
//! - `snapshot` / `restore` move state in and out for renderers and storage
//!
//! Every mutating operation is all-or-nothing: an error leaves the engine
//! exactly as it was.

use im::Vector;
use log::{debug, trace};

use crate::core::{
    Board, EngineConfig, GameStatus, Inventory, Move, MoveRecord, Piece, PlayerId, PlayerMap,
    Size, Snapshot, CELL_COUNT,
};
use crate::error::{IllegalMove, Result, SnapshotError};

/// One game session.
///
/// Create one per game, drive it with `apply_move`, and `reset` it to
/// start over. The move history uses a persistent vector so clones (for
/// look-ahead or undo stacks kept by a caller) stay cheap.
///
/// ## Example
///
/// ```
/// use matryoshka_ttt::{GameStatus, PlayerId, RulesEngine};
///
/// let mut engine = RulesEngine::new();
/// assert_eq!(engine.apply_move(4, 5).unwrap(), GameStatus::InProgress);
/// assert_eq!(engine.active_player(), PlayerId::P2);
///
/// // Size 5 cannot be covered.
/// assert!(engine.apply_move(4, 4).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct RulesEngine {
    config: EngineConfig,
    board: Board,
    inventories: PlayerMap<Inventory>,
    active: PlayerId,
    status: GameStatus,
    history: Vector<MoveRecord>,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine {
    /// Create an engine with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom rules.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let active = config.first_player;
        Self {
            config,
            board: Board::new(),
            inventories: PlayerMap::with_value(Inventory::full()),
            active,
            status: GameStatus::InProgress,
            history: Vector::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Sizes `player` has not placed yet.
    #[must_use]
    pub fn inventory(&self, player: PlayerId) -> Inventory {
        self.inventories[player]
    }

    /// The player to move. Once the game is won this stays on the winner.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Moves applied since the last `reset` or `restore`, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Total pieces left across both inventories.
    #[must_use]
    pub fn remaining_pieces(&self) -> usize {
        self.inventories.values().map(|inv| inv.len()).sum()
    }

    /// Check whether the game is running but the active player holds only
    /// pieces that fit nowhere.
    ///
    /// Only a full board with no cover left for the mover's remaining sizes
    /// gets here. `legal_moves()` is then empty although the game is not
    /// over; there is no pass, so a driver has to stop.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        !self.status.is_over()
            && !self.board.has_placement(
                self.active,
                self.inventories[self.active],
                self.config.allow_self_cover,
            )
    }

    /// Check a move against the rules without applying it.
    pub fn check_move(&self, mv: Move) -> Result<()> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver(self.status));
        }
        if !Board::in_range(mv.cell) {
            return Err(IllegalMove::CellOutOfRange(mv.cell));
        }
        if !self.inventories[self.active].contains(mv.size) {
            return Err(IllegalMove::SizeUnavailable {
                player: self.active,
                size: mv.size,
            });
        }
        if let Some(occupant) = self.board.get(mv.cell) {
            if !self.config.allow_self_cover && occupant.owner == self.active {
                return Err(IllegalMove::OwnPiece {
                    player: self.active,
                    cell: mv.cell,
                });
            }
            if !mv.size.covers(occupant.size) {
                return Err(IllegalMove::CannotCover {
                    cell: mv.cell,
                    size: mv.size,
                    occupant: occupant.size,
                });
            }
        }
        Ok(())
    }

    /// Check whether a move is currently legal.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Every legal move for the active player, cell-major then by size.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_over() {
            return Vec::new();
        }

        let sizes = self.inventories[self.active].sizes();
        (0..CELL_COUNT)
            .flat_map(|cell| sizes.iter().map(move |&size| Move::new(cell, size)))
            .filter(|&mv| self.is_legal(mv))
            .collect()
    }

    /// Read-only view for rendering or persistence.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.board, &self.inventories, self.active, self.status)
    }

    // === Mutations ===

    /// Place a piece of `size` on `cell` for the active player.
    ///
    /// Takes raw integers as a UI would supply them; see [`play`](Self::play)
    /// for the typed form.
    pub fn apply_move(&mut self, cell: usize, size: u8) -> Result<GameStatus> {
        let size = Size::new(size).ok_or(IllegalMove::SizeOutOfRange(size))?;
        self.play(Move::new(cell, size))
    }

    /// Apply a typed move.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus> {
        if let Err(err) = self.check_move(mv) {
            trace!("rejected {} by {}: {}", mv, self.active, err);
            return Err(err);
        }

        let player = self.active;
        self.inventories[player].remove(mv.size);
        let covered = self.board.place(mv.cell, Piece::new(player, mv.size));
        let ply = self.history.len() as u32 + 1;
        self.history.push_back(MoveRecord::new(player, mv, covered, ply));

        debug!(
            "ply {}: {} placed {}{}",
            ply,
            player,
            mv,
            covered.map(|p| format!(" over {}", p)).unwrap_or_default()
        );

        self.status = if self.board.has_line(player) {
            GameStatus::Won(player)
        } else if self.inventories.values().all(|inv| inv.is_empty()) {
            GameStatus::Draw
        } else {
            self.active = player.opponent();
            GameStatus::InProgress
        };

        if self.status.is_over() {
            debug!("game over after ply {}: {}", ply, self.status);
        } else if self.is_blocked() {
            debug!("{} has pieces left but nowhere to place them", self.active);
        }
        Ok(self.status)
    }

    /// Start a fresh game with the same rules.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config.clone());
        debug!("reset; {} to move", self.active);
    }

    /// Replace the current game with a stored snapshot.
    ///
    /// The snapshot is validated first; on error the engine is unchanged.
    /// History restarts empty since snapshots do not carry it.
    pub fn restore(&mut self, snapshot: &Snapshot) -> std::result::Result<(), SnapshotError> {
        let valid = snapshot.validate()?;

        self.board = valid.board;
        self.inventories = valid.inventories;
        self.active = valid.active_player;
        self.status = valid.status;
        self.history = Vector::new();

        debug!(
            "restored game: {} to move, {} pieces left, {}",
            self.active,
            self.remaining_pieces(),
            self.status
        );
        Ok(())
    }
}
