//! A seated player: private hand, public ledger and win tally.
//!
//! `Player` only reports the two endgame triggers; tracking who still owes
//! a final turn is the round's job.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ledger::Ledger;
use crate::cards::Card;

/// Event that starts the final phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndgameSignal {
    /// A collection gave the player a card of every colour.
    AllColoursCollected,
    /// The player needed to draw but the deck was empty.
    DeckExhausted,
}

impl std::fmt::Display for EndgameSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndgameSignal::AllColoursCollected => f.write_str("all six colours collected"),
            EndgameSignal::DeckExhausted => f.write_str("deck exhausted"),
        }
    }
}

/// A player's hand, ledger and running win count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    ledger: Ledger,
    wins: u32,
}

impl Player {
    /// Create a player with an empty hand and ledger.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            ledger: Ledger::new(),
            wins: 0,
        }
    }

    /// Set the starting hand.
    #[must_use]
    pub fn with_hand(mut self, hand: impl IntoIterator<Item = Card>) -> Self {
        self.hand = hand.into_iter().collect();
        self
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in hand, in the order they were received.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Collected cards.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Rounds won so far.
    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Record a round win.
    pub fn increment_wins(&mut self) {
        self.wins += 1;
    }

    /// Remove `card` from the hand and hand it back.
    ///
    /// Returns `None` if the card is not held.
    pub fn play(&mut self, card: Card) -> Option<Card> {
        let index = self.hand.iter().position(|&c| c == card)?;
        Some(self.hand.remove(index))
    }

    /// Receive a replacement card.
    ///
    /// During the final phase nothing is drawn. Outside it, `None` means the
    /// deck ran dry and is reported as [`EndgameSignal::DeckExhausted`].
    pub fn draw(&mut self, card: Option<Card>, endgame: bool) -> Option<EndgameSignal> {
        if endgame {
            return None;
        }
        match card {
            Some(card) => {
                self.hand.push(card);
                debug!(player = %self.name, %card, hand = self.hand.len(), "drew card");
                None
            }
            None => {
                info!(player = %self.name, "deck exhausted on draw");
                Some(EndgameSignal::DeckExhausted)
            }
        }
    }

    /// Add a batch of cards to the ledger.
    ///
    /// The all-colours check runs once, after the whole batch, and only
    /// outside the final phase.
    pub fn collect(
        &mut self,
        cards: impl IntoIterator<Item = Card>,
        endgame: bool,
    ) -> Option<EndgameSignal> {
        let before = self.ledger.len();
        self.ledger.extend(cards);
        debug!(
            player = %self.name,
            taken = self.ledger.len() - before,
            colours = self.ledger.colour_count(),
            "collected cards"
        );

        if !endgame && self.ledger.has_all_colours() {
            info!(player = %self.name, "collected all six colours");
            return Some(EndgameSignal::AllColoursCollected);
        }
        None
    }

    /// Move every card left in hand into the ledger.
    ///
    /// Used once the discard phase has trimmed the hand; never signals.
    pub fn collect_hand(&mut self) {
        let hand = std::mem::take(&mut self.hand);
        self.collect(hand, true);
    }

    /// Empty hand and ledger for a fresh round. Name and wins are kept.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.ledger.clear();
    }
}
