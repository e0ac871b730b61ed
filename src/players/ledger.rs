//! Per-player collection of cards taken from the row.
//!
//! Cards are grouped by colour in a fixed array indexed by [`Colour`], so
//! iteration order is always the canonical colour order. A colour counts
//! as "collected" once its bucket is non-empty.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Colour, COLOUR_COUNT};

/// Collected cards grouped by colour.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    buckets: [Vec<Card>; COLOUR_COUNT],
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one card to its colour bucket.
    pub fn add(&mut self, card: Card) {
        self.buckets[card.colour().index()].push(card);
    }

    /// Cards of one colour, in the order they were collected.
    #[must_use]
    pub fn cards_of(&self, colour: Colour) -> &[Card] {
        &self.buckets[colour.index()]
    }

    /// Number of cards of one colour.
    #[must_use]
    pub fn count(&self, colour: Colour) -> usize {
        self.buckets[colour.index()].len()
    }

    /// Sum of face values of one colour.
    #[must_use]
    pub fn value_sum(&self, colour: Colour) -> u32 {
        self.cards_of(colour).iter().map(|c| u32::from(c.value())).sum()
    }

    /// Whether at least one card of `colour` has been collected.
    #[must_use]
    pub fn has_colour(&self, colour: Colour) -> bool {
        !self.buckets[colour.index()].is_empty()
    }

    /// Colours present, in canonical order.
    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        Colour::ALL.into_iter().filter(|&c| self.has_colour(c))
    }

    /// Number of distinct colours present.
    #[must_use]
    pub fn colour_count(&self) -> usize {
        self.colours().count()
    }

    /// True once every colour has at least one card.
    #[must_use]
    pub fn has_all_colours(&self) -> bool {
        self.colour_count() == COLOUR_COUNT
    }

    /// Total cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// True if nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// All cards, grouped by colour in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.buckets.iter().flatten()
    }

    /// Drop every collected card.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
    }
}

impl Extend<Card> for Ledger {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.add(card);
        }
    }
}

impl FromIterator<Card> for Ledger {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut ledger = Self::new();
        ledger.extend(iter);
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.colour_count(), 0);
        assert_eq!(ledger.value_sum(Colour::Red), 0);
    }

    #[test]
    fn test_grouping_by_colour() {
        let ledger: Ledger = [
            Card::new(3, Colour::Red),
            Card::new(9, Colour::Blue),
            Card::new(1, Colour::Red),
        ]
        .into_iter()
        .collect();

        assert_eq!(ledger.count(Colour::Red), 2);
        assert_eq!(ledger.count(Colour::Blue), 1);
        assert_eq!(ledger.count(Colour::Green), 0);
        assert_eq!(ledger.value_sum(Colour::Red), 4);
        assert_eq!(
            ledger.cards_of(Colour::Red),
            &[Card::new(3, Colour::Red), Card::new(1, Colour::Red)]
        );
        assert_eq!(ledger.colours().collect::<Vec<_>>(), vec![Colour::Red, Colour::Blue]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_all_colours() {
        let mut ledger: Ledger = Colour::ALL[..5].iter().map(|&c| Card::new(0, c)).collect();
        assert!(!ledger.has_all_colours());

        ledger.add(Card::new(4, Colour::Blue));
        assert!(ledger.has_all_colours());
        assert_eq!(ledger.colour_count(), 6);
    }

    #[test]
    fn test_clear() {
        let mut ledger: Ledger = [Card::new(2, Colour::Black)].into_iter().collect();
        ledger.clear();
        assert!(ledger.is_empty());
        assert!(!ledger.has_colour(Colour::Black));
    }
}
