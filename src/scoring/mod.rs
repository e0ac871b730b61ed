//! End-of-round scoring: majority resolution, remainder valuation and
//! winner selection.

pub mod calculator;
pub mod result;

pub use calculator::{majority_holders, ColourScore, Holders, ScoreCalculator, ScoreSheet, TWO_PLAYER_MARGIN};
pub use result::GameResult;
