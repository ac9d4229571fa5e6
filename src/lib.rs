//! # matryoshka-ttt
//!
//! Rules engine for Matryoshka tic-tac-toe: two players, a 3x3 board, and
//! five nesting dolls each (sizes 1-5). A doll goes on an empty cell or on
//! top of a strictly smaller doll. Three of your dolls in a row wins; when
//! both players have placed every doll without a line, the game is drawn.
//! A player left holding dolls that fit nowhere on a full board has no
//! legal move; `RulesEngine::is_blocked` reports that position.
//!
//! ## Design Principles
//!
//! 1. **Explicit instance**: a game is a `RulesEngine` value. No global
//!    state; UI layers hold it by reference.
//!
//! 2. **All-or-nothing moves**: a rejected move leaves the engine untouched
//!    and says why (`IllegalMove`).
//!
//! 3. **Pluggable opponents**: computer players are `Strategy` values that
//!    pick from `legal_moves()`, so tests can inject fixed play.
//!
//! ## Modules
//!
//! - `core`: Players, pieces, inventories, board, moves, status, snapshots,
//!   RNG, configuration
//! - `rules`: The `RulesEngine`
//! - `strategy`: Random and deterministic move pickers
//! - `session`: Match runner driving an engine with two strategies
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use matryoshka_ttt::{GameStatus, PlayerId, RulesEngine};
//!
//! let mut engine = RulesEngine::new();
//! engine.apply_move(0, 5).unwrap(); // P1
//! engine.apply_move(3, 1).unwrap(); // P2
//! engine.apply_move(1, 4).unwrap(); // P1
//! engine.apply_move(4, 2).unwrap(); // P2
//! let status = engine.apply_move(2, 3).unwrap(); // P1 completes the top row
//!
//! assert_eq!(status, GameStatus::Won(PlayerId::P1));
//! ```

pub mod core;
pub mod rules;
pub mod strategy;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, EngineConfig, GameRng, GameRngState, GameStatus, Inventory, Move, MoveRecord, Piece,
    PlayerId, PlayerMap, Size, Snapshot, CELL_COUNT, LINES,
};

pub use crate::rules::RulesEngine;

pub use crate::strategy::{FirstLegal, RandomStrategy, Scripted, Strategy};

pub use crate::session::{Match, MatchOutcome, MatchTally};

pub use crate::error::{IllegalMove, MatchError, SnapshotError};
