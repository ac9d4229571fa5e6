//! Engine configuration.
//!
//! The rules are fixed (3x3 board, sizes 1..=5), but two house rules vary
//! between tables: who opens, and whether a player may cover their own
//! doll. `EngineConfig` captures both and is handed to the engine at
//! construction; `reset` keeps it.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Rule options for a [`RulesEngine`](crate::rules::RulesEngine).
///
/// ```
/// use matryoshka_ttt::core::{EngineConfig, PlayerId};
///
/// let config = EngineConfig::new()
///     .with_first_player(PlayerId::P2)
///     .with_self_cover(false);
///
/// assert_eq!(config.first_player, PlayerId::P2);
/// assert!(!config.allow_self_cover);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Player who moves first after construction or `reset`.
    pub first_player: PlayerId,

    /// Whether a player may cover their own smaller piece.
    ///
    /// When false, only the opponent's pieces can be covered.
    pub allow_self_cover: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            first_player: PlayerId::P1,
            allow_self_cover: true,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening player.
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Allow or forbid covering your own pieces.
    pub fn with_self_cover(mut self, allow: bool) -> Self {
        self.allow_self_cover = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.first_player, PlayerId::P1);
        assert!(config.allow_self_cover);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"allow_self_cover":false}"#).unwrap();
        assert_eq!(config.first_player, PlayerId::P1);
        assert!(!config.allow_self_cover);
    }
}
