//! # parade-engine
//!
//! Rules engine for the card game Parade.
//!
//! Players add cards to a shared row ("the parade"). Each play may force the
//! player to collect older cards from the row. When someone collects all six
//! colours or the deck runs dry, everyone else takes one last turn, hands
//! are trimmed and merged, and collected cards are scored. Lowest score wins.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: Row resolution, ledgers and scoring are synchronous
//!    state transitions on in-memory data. No I/O.
//!
//! 2. **Deterministic**: Every shuffle and bot choice comes from a seeded
//!    `GameRng` stream, so any round can be replayed from its seed.
//!
//! 3. **Signals, not exceptions**: Endgame triggers come back as
//!    `EndgameSignal` values; only misuse produces `ParadeError`.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `cards`: Cards, colours, the 66-card deck
//! - `parade`: The row and its collection rule
//! - `players`: Hands, ledgers, endgame signals
//! - `scoring`: Majority scoring and winner selection
//! - `game`: Round and session orchestration, card choosers

pub mod core;
pub mod cards;
pub mod parade;
pub mod players;
pub mod scoring;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, ParadeConfig, ParadeError, PlayerId, PlayerMap};

pub use crate::cards::{full_set, Card, CardId, Colour, Deck, DECK_SIZE};

pub use crate::parade::{Collected, ParadeRow};

pub use crate::players::{EndgameSignal, Ledger, Player};

pub use crate::scoring::{ColourScore, GameResult, ScoreCalculator, ScoreSheet};

pub use crate::game::{
    CardChooser, ChoicePurpose, FirstCardChooser, RandomChooser,
    Round, RoundPhase, RoundSnapshot, TurnRecord,
    Session,
};
