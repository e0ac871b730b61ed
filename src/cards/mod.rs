//! Card system: cards, colours and the deck.
//!
//! ## Key Types
//!
//! - `Colour`: The six fixed colours, in canonical order
//! - `Card`: Value 0..=10 plus colour; the pair is the card's identity
//! - `CardId`: Compact index of a card within the full set
//! - `Deck`: Shuffled 66-card supply drawn front to back

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Colour, COLOUR_COUNT, MAX_VALUE, VALUE_COUNT};
pub use deck::{full_set, Deck, DECK_SIZE};
