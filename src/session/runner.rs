//! Drive a game to completion with one strategy per player.

use log::{debug, info, warn};

use crate::core::{GameStatus, MoveRecord, PlayerId, PlayerMap};
use crate::error::MatchError;
use crate::rules::RulesEngine;
use crate::strategy::Strategy;

/// Upper bound on plies in a game: every move spends one of ten pieces.
pub const MAX_PLIES: u32 = 10;

/// How a finished match ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Final status; never `InProgress`.
    pub status: GameStatus,

    /// Moves played by this runner.
    pub plies: u32,

    /// The engine's move history at the end of the match.
    pub history: Vec<MoveRecord>,
}

/// A game between two strategies.
///
/// The runner borrows nothing global: it owns the engine and hands it back
/// through [`engine`](Self::engine) / [`into_engine`](Self::into_engine).
///
/// ```
/// use matryoshka_ttt::session::Match;
/// use matryoshka_ttt::strategy::RandomStrategy;
/// use matryoshka_ttt::{MatchError, RulesEngine};
///
/// let mut game = Match::new(
///     RulesEngine::new(),
///     RandomStrategy::new(1),
///     RandomStrategy::new(2),
/// );
/// match game.run_silent() {
///     Ok(outcome) => assert!(outcome.status.is_over()),
///     Err(err) => assert!(matches!(err, MatchError::Blocked { .. })),
/// }
/// ```
pub struct Match<'a> {
    engine: RulesEngine,
    strategies: PlayerMap<Box<dyn Strategy + 'a>>,
    max_plies: u32,
}

impl<'a> Match<'a> {
    /// Pair an engine with a strategy for each seat.
    pub fn new(
        engine: RulesEngine,
        p1: impl Strategy + 'a,
        p2: impl Strategy + 'a,
    ) -> Self {
        let p1: Box<dyn Strategy + 'a> = Box::new(p1);
        let p2: Box<dyn Strategy + 'a> = Box::new(p2);
        Self {
            engine,
            strategies: PlayerMap::from_values(p1, p2),
            max_plies: MAX_PLIES,
        }
    }

    /// Stop with [`MatchError::PlyLimit`] after `limit` moves.
    pub fn with_max_plies(mut self, limit: u32) -> Self {
        self.max_plies = limit;
        self
    }

    #[must_use]
    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    #[must_use]
    pub fn into_engine(self) -> RulesEngine {
        self.engine
    }

    /// Play until the game ends, calling `observer` after every move.
    ///
    /// The observer sees the record of the move just made and the engine
    /// after it, which is all a renderer needs. A position where the player
    /// to move has pieces but no placement stops the match with
    /// [`MatchError::Blocked`].
    pub fn run(
        &mut self,
        mut observer: impl FnMut(&MoveRecord, &RulesEngine),
    ) -> Result<MatchOutcome, MatchError> {
        let mut plies = 0;

        while !self.engine.is_over() {
            if plies >= self.max_plies {
                return Err(MatchError::PlyLimit {
                    limit: self.max_plies,
                });
            }

            let player = self.engine.active_player();
            let legal = self.engine.legal_moves();
            if legal.is_empty() {
                let held = self.engine.inventory(player).len();
                warn!("{} is blocked with {} pieces in hand", player, held);
                return Err(MatchError::Blocked { player, held });
            }
            let mv = self.strategies[player]
                .choose(&legal)
                .ok_or(MatchError::NoMoveChosen {
                    player,
                    available: legal.len(),
                })?;

            self.engine
                .play(mv)
                .map_err(|source| MatchError::Illegal { player, source })?;
            plies += 1;

            if let Some(record) = self.engine.history().last() {
                observer(record, &self.engine);
            }
        }

        let status = self.engine.status();
        info!("match finished after {} plies: {}", plies, status);
        Ok(MatchOutcome {
            status,
            plies,
            history: self.engine.history().iter().copied().collect(),
        })
    }

    /// Play until the game ends without observing moves.
    pub fn run_silent(&mut self) -> Result<MatchOutcome, MatchError> {
        self.run(|record, _| debug!("{} played {}", record.player, record.mv))
    }
}

/// Tally of many matches between the same pair of strategies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub wins: PlayerMap<u32>,
    pub draws: u32,
}

impl MatchTally {
    /// Record one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(p) => self.wins[p] += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Total games recorded.
    #[must_use]
    pub fn games(&self) -> u32 {
        PlayerId::all().map(|p| self.wins[p]).sum::<u32>() + self.draws
    }
}
