//! Cards and colours.
//!
//! A Parade card is a value from 0 to 10 in one of six colours. The full set
//! holds each (value, colour) pair exactly once, so the pair is the card's
//! identity: two `Card`s compare equal only when they are the same physical
//! card.

use serde::{Deserialize, Serialize};

/// Highest card value.
pub const MAX_VALUE: u8 = 10;

/// Number of distinct values per colour (0..=10).
pub const VALUE_COUNT: usize = MAX_VALUE as usize + 1;

/// Number of colours.
pub const COLOUR_COUNT: usize = 6;

/// The six card colours.
///
/// Declaration order is the canonical iteration order used by the deck
/// reference set, ledgers and scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    Yellow,
    Red,
    Green,
    Black,
    Purple,
    Blue,
}

impl Colour {
    /// All colours in canonical order.
    pub const ALL: [Colour; COLOUR_COUNT] = [
        Colour::Yellow,
        Colour::Red,
        Colour::Green,
        Colour::Black,
        Colour::Purple,
        Colour::Blue,
    ];

    /// Position of this colour in [`Colour::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper-case name, as printed on the table.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Colour::Yellow => "YELLOW",
            Colour::Red => "RED",
            Colour::Green => "GREEN",
            Colour::Black => "BLACK",
            Colour::Purple => "PURPLE",
            Colour::Blue => "BLUE",
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compact card identifier, `colour * 11 + value`, in `0..66`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// A single Parade card.
///
/// ```
/// use parade_engine::cards::{Card, Colour};
///
/// let card = Card::new(5, Colour::Red);
/// assert_eq!(card.value(), 5);
/// assert_eq!(card.to_string(), "RED 5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    colour: Colour,
    value: u8,
}

impl Card {
    /// Create a card.
    ///
    /// Panics if `value` is above 10; no such card exists.
    #[must_use]
    pub fn new(value: u8, colour: Colour) -> Self {
        assert!(value <= MAX_VALUE, "Card values range from 0 to 10");
        Self { colour, value }
    }

    /// Face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Colour.
    #[must_use]
    pub const fn colour(self) -> Colour {
        self.colour
    }

    /// Identity within the 66-card set.
    #[must_use]
    pub const fn id(self) -> CardId {
        CardId((self.colour.index() * VALUE_COUNT) as u8 + self.value)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.colour, self.value)
    }
}
