//! Pluggable opponents.
//!
//! - `Strategy`: trait mapping legal moves to a chosen move
//! - `RandomStrategy`: seeded uniform choice
//! - `FirstLegal`, `Scripted`: deterministic choices for tests and replays

pub mod policy;

pub use policy::{FirstLegal, RandomStrategy, Scripted, Strategy};
