//! Core game types: players, pieces, board, moves, status, snapshots, RNG,
//! configuration.
//!
//! Everything here is a plain value type. The rules that tie them together
//! live in [`crate::rules`].

pub mod player;
pub mod piece;
pub mod board;
pub mod action;
pub mod state;
pub mod snapshot;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerMap};
pub use piece::{InvalidSize, Inventory, Piece, Size};
pub use board::{Board, CELL_COUNT, LINES};
pub use action::{Move, MoveRecord};
pub use state::GameStatus;
pub use snapshot::{Snapshot, ValidatedSnapshot};
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
