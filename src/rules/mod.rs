//! Game rules.
//!
//! `RulesEngine` is the single owner of a game's mutable state. UI layers,
//! strategies and the match runner all hold it by reference; there is no
//! global game.

pub mod engine;

pub use engine::RulesEngine;
