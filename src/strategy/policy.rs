//! Move-choosing strategies.
//!
//! A strategy sees only the list of legal moves and picks one. That keeps
//! computer opponents out of the engine and lets tests inject fixed play.

use std::collections::VecDeque;

use crate::core::{GameRng, GameRngState, Move, PlayerId};

/// Picks one move from the legal moves for the side to play.
///
/// Returning `None` means "no choice"; the match runner treats that as an
/// error unless the list was empty.
pub trait Strategy {
    fn choose(&mut self, legal: &[Move]) -> Option<Move>;
}

impl<F> Strategy for F
where
    F: FnMut(&[Move]) -> Option<Move>,
{
    fn choose(&mut self, legal: &[Move]) -> Option<Move> {
        self(legal)
    }
}

// =============================================================================
// Random
// =============================================================================

/// Uniformly random legal move from a seeded RNG.
///
/// Two strategies built from the same seed make the same choices given the
/// same positions.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// One stream per seat from a single game seed, so both computer
    /// players can share a seed without mirroring each other.
    #[must_use]
    pub fn for_seat(seed: u64, player: PlayerId) -> Self {
        Self::from_rng(GameRng::new(seed).for_context(&player.to_string()))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Capture the RNG position so a resumed game continues the same stream.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self::from_rng(GameRng::from_state(state))
    }
}

impl Strategy for RandomStrategy {
    fn choose(&mut self, legal: &[Move]) -> Option<Move> {
        self.rng.choose(legal).copied()
    }
}

// =============================================================================
// Deterministic
// =============================================================================

/// Always plays the first legal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl Strategy for FirstLegal {
    fn choose(&mut self, legal: &[Move]) -> Option<Move> {
        legal.first().copied()
    }
}

/// Plays a fixed sequence of moves, one per call, whether legal or not.
///
/// Returns `None` once the script is exhausted.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    moves: VecDeque<Move>,
}

impl Scripted {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not played yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Strategy for Scripted {
    fn choose(&mut self, _legal: &[Move]) -> Option<Move> {
        self.moves.pop_front()
    }
}
