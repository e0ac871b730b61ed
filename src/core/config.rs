//! Table configuration.
//!
//! `ParadeConfig` carries the numbers that shape a round: hand size, the
//! size of the starting row, how many cards are discarded at the end and
//! how many players may sit at the table. The card set itself is fixed
//! (see [`crate::cards::Deck`]).

use serde::{Deserialize, Serialize};

use super::error::ParadeError;
use crate::cards::DECK_SIZE;

/// Round configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParadeConfig {
    /// Cards each player holds during normal play (default: 5).
    pub hand_size: usize,

    /// Cards dealt face-up to start the row (default: 6).
    pub row_size: usize,

    /// Cards each player discards before their hand joins the ledger
    /// (default: 2).
    pub discard_count: usize,

    /// Smallest table (default: 2).
    pub min_players: usize,

    /// Largest table (default: 6).
    pub max_players: usize,
}

impl Default for ParadeConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            row_size: 6,
            discard_count: 2,
            min_players: 2,
            max_players: 6,
        }
    }
}

impl ParadeConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the starting row size.
    #[must_use]
    pub fn with_row_size(mut self, size: usize) -> Self {
        self.row_size = size;
        self
    }

    /// Set the end-of-round discard count.
    #[must_use]
    pub fn with_discard_count(mut self, count: usize) -> Self {
        self.discard_count = count;
        self
    }

    /// Set the allowed player range.
    #[must_use]
    pub fn with_players(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Cards consumed from the deck by the initial deal.
    #[must_use]
    pub fn initial_deal(&self, player_count: usize) -> usize {
        self.row_size + self.hand_size * player_count
    }

    /// Check the configuration on its own.
    pub fn validate(&self) -> Result<(), ParadeError> {
        if self.min_players < 2 || self.min_players > self.max_players || self.max_players > 255 {
            return Err(ParadeError::InvalidPlayerRange {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if self.hand_size == 0 {
            return Err(ParadeError::InvalidConfig("hand size must be at least 1"));
        }
        if self.discard_count >= self.hand_size {
            return Err(ParadeError::InvalidConfig(
                "discard count must leave at least one card in hand",
            ));
        }
        if self.initial_deal(self.max_players) > DECK_SIZE {
            return Err(ParadeError::NotEnoughCards {
                needed: self.initial_deal(self.max_players),
                available: DECK_SIZE,
            });
        }
        Ok(())
    }

    /// Check the configuration against a concrete table size.
    pub fn validate_players(&self, player_count: usize) -> Result<(), ParadeError> {
        self.validate()?;
        if !(self.min_players..=self.max_players).contains(&player_count) {
            return Err(ParadeError::InvalidPlayerCount {
                count: player_count,
                min: self.min_players,
                max: self.max_players,
            });
        }
        Ok(())
    }
}
