//! Players: hands, ledgers and the endgame triggers they raise.
//!
//! - `Ledger`: Collected cards bucketed by colour
//! - `Player`: Hand + ledger + win tally, with `play`/`draw`/`collect`
//! - `EndgameSignal`: `AllColoursCollected` or `DeckExhausted`

pub mod ledger;
pub mod player;

pub use ledger::Ledger;
pub use player::{EndgameSignal, Player};
