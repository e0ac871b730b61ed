//! Error taxonomy.
//!
//! Endgame triggers are not errors: they are reported as
//! [`crate::players::EndgameSignal`] values. `ParadeError` covers setup
//! mistakes and orchestration calls made out of sequence.

use thiserror::Error;

use crate::cards::Card;
use super::player::PlayerId;

/// Errors raised by configuration, setup and round orchestration.
#[derive(Debug, Error)]
pub enum ParadeError {
    #[error("configured player range {min}..={max} is invalid")]
    InvalidPlayerRange { min: usize, max: usize },

    #[error("{count} players cannot sit at a table for {min} to {max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("player name {0:?} is already taken")]
    DuplicatePlayerName(String),

    #[error("initial deal needs {needed} cards but only {available} are available")]
    NotEnoughCards { needed: usize, available: usize },

    #[error("{player} does not hold {card}")]
    CardNotInHand { player: PlayerId, card: Card },

    #[error("{player} has no cards left to choose from")]
    EmptyHand { player: PlayerId },

    #[error("the round is over; no further turns can be taken")]
    RoundOver,

    #[error("the round has not reached the {0} phase yet")]
    RoundNotFinished(&'static str),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}
