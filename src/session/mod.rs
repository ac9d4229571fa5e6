//! Playing whole games.
//!
//! `Match` pairs a `RulesEngine` with one `Strategy` per seat and plays it
//! out, reporting each move to an observer (typically a renderer).
//! `MatchTally` aggregates results over many matches.

pub mod runner;

pub use runner::{Match, MatchOutcome, MatchTally, MAX_PLIES};
