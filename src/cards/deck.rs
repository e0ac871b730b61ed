//! The 66-card supply.
//!
//! A fresh deck holds every (value, colour) pair once, shuffled, and is
//! consumed front to back. Drawing from an empty deck yields `None`; the
//! caller decides what exhaustion means.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::card::{Card, Colour, MAX_VALUE};
use crate::core::GameRng;

/// Cards in a full deck.
pub const DECK_SIZE: usize = super::card::VALUE_COUNT * super::card::COLOUR_COUNT;

/// Every card in the game, unshuffled, colour-major.
#[must_use]
pub fn full_set() -> Vec<Card> {
    Colour::ALL
        .iter()
        .flat_map(|&colour| (0..=MAX_VALUE).map(move |value| Card::new(value, colour)))
        .collect()
}

/// Shuffled draw pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Build a full deck and shuffle it with `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = full_set();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into(),
        }
    }

    /// Build a full deck shuffled from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::shuffled(&mut GameRng::new(seed).for_context("deck"))
    }

    /// Build a deck that will be drawn in exactly the given order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Take the next card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop_front();
        trace!(?card, remaining = self.cards.len(), "deck draw");
        card
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when nothing is left to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
