//! Parade row state and the collection rule.
//!
//! The row is an ordered sequence, oldest card first. Playing a card of
//! value `v` onto a row of length `L` puts the oldest `L - v - 1` cards at
//! risk (none when that is not positive). Of those, every card that shares
//! the played colour or has a value no greater than `v` is collected.
//! Survivors keep their relative order and the played card joins the tail.
//!
//! ```
//! use parade_engine::cards::{Card, Colour};
//! use parade_engine::parade::ParadeRow;
//!
//! let mut row = ParadeRow::from_cards([
//!     Card::new(9, Colour::Red),
//!     Card::new(1, Colour::Blue),
//!     Card::new(8, Colour::Green),
//!     Card::new(4, Colour::Black),
//! ]);
//!
//! // 4 - 1 - 1 = 2 cards at risk: RED 9 (same colour) and BLUE 1 (1 <= 1).
//! let collected = row.insert_and_resolve(Card::new(1, Colour::Red));
//! assert_eq!(collected.as_slice(), &[Card::new(9, Colour::Red), Card::new(1, Colour::Blue)]);
//! assert_eq!(row.len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::cards::{Card, Deck};

/// Cards taken from the row by a single play.
pub type Collected = SmallVec<[Card; 8]>;

/// Number of oldest row entries at risk when `played` joins a row of
/// `row_len` cards.
#[must_use]
pub fn removable_count(row_len: usize, played: Card) -> usize {
    row_len.saturating_sub(played.value() as usize + 1)
}

/// Whether an at-risk `candidate` is collected by `played`.
#[must_use]
pub fn is_collected_by(candidate: Card, played: Card) -> bool {
    candidate.colour() == played.colour() || candidate.value() <= played.value()
}

/// The shared face-up row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParadeRow {
    cards: Vec<Card>,
}

impl ParadeRow {
    /// Deal a new row of up to `size` cards from the deck.
    ///
    /// Stops early if the deck runs out; round setup checks the deck is
    /// large enough beforehand.
    #[must_use]
    pub fn deal(deck: &mut Deck, size: usize) -> Self {
        let cards = std::iter::from_fn(|| deck.draw()).take(size).collect();
        Self { cards }
    }

    /// Build a row from cards, oldest first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Current row, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the row is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The at-risk prefix for a card about to be played.
    #[must_use]
    pub fn removable_zone(&self, played: Card) -> &[Card] {
        &self.cards[..removable_count(self.cards.len(), played)]
    }

    /// Cards `played` would collect, without touching the row.
    #[must_use]
    pub fn preview(&self, played: Card) -> Collected {
        self.removable_zone(played)
            .iter()
            .copied()
            .filter(|&c| is_collected_by(c, played))
            .collect()
    }

    /// Play a card: remove and return every collected card, then append
    /// `played` to the tail.
    pub fn insert_and_resolve(&mut self, played: Card) -> Collected {
        let zone = removable_count(self.cards.len(), played);
        let mut collected = Collected::new();
        let mut kept = 0;

        for i in 0..self.cards.len() {
            let card = self.cards[i];
            if i < zone && is_collected_by(card, played) {
                collected.push(card);
            } else {
                self.cards[kept] = card;
                kept += 1;
            }
        }

        self.cards.truncate(kept);
        self.cards.push(played);

        trace!(%played, zone, collected = collected.len(), row = self.cards.len(), "row resolved");
        collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Colour;

    fn c(value: u8, colour: Colour) -> Card {
        Card::new(value, colour)
    }

    fn sample_row() -> ParadeRow {
        ParadeRow::from_cards([
            c(3, Colour::Red),
            c(7, Colour::Blue),
            c(2, Colour::Green),
            c(9, Colour::Yellow),
            c(5, Colour::Black),
            c(6, Colour::Purple),
        ])
    }

    #[test]
    fn test_removable_count() {
        let card = c(2, Colour::Red);
        assert_eq!(removable_count(6, card), 3);
        assert_eq!(removable_count(3, card), 0);
        assert_eq!(removable_count(2, card), 0);
        assert_eq!(removable_count(0, card), 0);
        assert_eq!(removable_count(6, c(0, Colour::Red)), 5);
        assert_eq!(removable_count(6, c(10, Colour::Red)), 0);
    }

    #[test]
    fn test_is_collected_by() {
        let played = c(4, Colour::Green);
        assert!(is_collected_by(c(9, Colour::Green), played));
        assert!(is_collected_by(c(4, Colour::Red), played));
        assert!(is_collected_by(c(0, Colour::Blue), played));
        assert!(!is_collected_by(c(5, Colour::Red), played));
    }

    #[test]
    fn test_high_card_collects_nothing() {
        let mut row = sample_row();
        let collected = row.insert_and_resolve(c(10, Colour::Red));

        assert!(collected.is_empty());
        assert_eq!(row.len(), 7);
        assert_eq!(row.cards()[6], c(10, Colour::Red));
    }

    #[test]
    fn test_zero_collects_same_colour_and_zeros() {
        let mut row = ParadeRow::from_cards([
            c(0, Colour::Blue),
            c(8, Colour::Red),
            c(6, Colour::Green),
            c(1, Colour::Yellow),
        ]);

        // Zone is 4 - 0 - 1 = 3 cards; the newest card is always safe.
        let collected = row.insert_and_resolve(c(0, Colour::Green));

        assert_eq!(collected.as_slice(), &[c(0, Colour::Blue), c(6, Colour::Green)]);
        assert_eq!(
            row.cards(),
            &[c(8, Colour::Red), c(1, Colour::Yellow), c(0, Colour::Green)]
        );
    }

    #[test]
    fn test_only_zone_is_eligible() {
        let mut row = sample_row();

        // Zone = 6 - 2 - 1 = 3: RED 3, BLUE 7, GREEN 2.
        let played = c(2, Colour::Yellow);
        assert_eq!(row.removable_zone(played).len(), 3);

        let collected = row.insert_and_resolve(played);

        // GREEN 2 (value) is collected; YELLOW 9 is outside the zone.
        assert_eq!(collected.as_slice(), &[c(2, Colour::Green)]);
        assert_eq!(
            row.cards(),
            &[
                c(3, Colour::Red),
                c(7, Colour::Blue),
                c(9, Colour::Yellow),
                c(5, Colour::Black),
                c(6, Colour::Purple),
                c(2, Colour::Yellow),
            ]
        );
    }

    #[test]
    fn test_preview_matches_resolution() {
        let row = sample_row();
        let played = c(1, Colour::Blue);

        let preview = row.preview(played);
        let mut live = row.clone();
        let collected = live.insert_and_resolve(played);

        assert_eq!(preview, collected);
        assert_eq!(row, sample_row());
    }

    #[test]
    fn test_deal_takes_from_deck() {
        let mut deck = Deck::new(3);
        let row = ParadeRow::deal(&mut deck, 6);

        assert_eq!(row.len(), 6);
        assert_eq!(deck.len(), 60);
    }

    #[test]
    fn test_deal_stops_when_deck_runs_out() {
        let mut deck = Deck::from_cards([c(1, Colour::Red), c(2, Colour::Red)]);
        let row = ParadeRow::deal(&mut deck, 6);

        assert_eq!(row.len(), 2);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_empty_row() {
        let mut row = ParadeRow::default();
        assert!(row.is_empty());

        let collected = row.insert_and_resolve(c(0, Colour::Red));
        assert!(collected.is_empty());
        assert_eq!(row.len(), 1);
    }
}
