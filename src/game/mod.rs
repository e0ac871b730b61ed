//! Round orchestration on top of the rules core.
//!
//! - `CardChooser`: Strategy seam for picking cards (random bots, scripts)
//! - `Round`: Deal, turns, endgame, discard and scoring for one round
//! - `Session`: Repeated rounds with the same players and win tallies

pub mod chooser;
pub mod round;
pub mod session;

pub use chooser::{CardChooser, ChoicePurpose, FirstCardChooser, RandomChooser};
pub use round::{Round, RoundPhase, RoundSnapshot, TurnRecord};
pub use session::Session;
