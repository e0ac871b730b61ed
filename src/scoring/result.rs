//! Outcome of a scored round.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed round. Lowest score wins; equal lowest scores
/// share the win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied on the lowest score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Build from the list of lowest scorers, in seat order.
    ///
    /// Panics if `winners` is empty; every table has at least one player.
    #[must_use]
    pub fn from_winners(mut winners: Vec<PlayerId>) -> Self {
        assert!(!winners.is_empty(), "A round always has a winner");
        if winners.len() == 1 {
            GameResult::Winner(winners[0])
        } else {
            winners.sort_unstable();
            GameResult::Winners(winners)
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }

    /// Winning seats.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Winners(ps) => ps,
        }
    }

    /// True when more than one player shares the win.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, GameResult::Winners(_))
    }
}
