//! Two-pass majority scoring.
//!
//! ## Majority pass
//!
//! For each colour, find the majority holder(s):
//! - 3+ players: everyone tied on the highest non-zero count.
//! - 2 players: the larger holding only counts as a majority when it
//!   exceeds the other by at least 2; otherwise nobody holds it.
//!
//! A majority holder scores 1 point per card of that colour.
//!
//! ## Remainder pass
//!
//! Every other player with cards of that colour scores their face values.
//!
//! The lowest total wins; ties share the win. Scores are computed from the
//! ledgers alone, so repeated calls give identical sheets.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::info;

use super::result::GameResult;
use crate::cards::{Colour, COLOUR_COUNT};
use crate::core::{PlayerId, PlayerMap};
use crate::players::Ledger;

/// Lead a player needs over the only opponent to hold a majority.
pub const TWO_PLAYER_MARGIN: usize = 2;

/// Majority holders of a single colour, in seat order.
pub type Holders = SmallVec<[PlayerId; 6]>;

/// How one colour was scored for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColourScore {
    /// No cards of this colour.
    Empty,
    /// Majority holder: one point per card.
    Majority { count: usize },
    /// Face values summed.
    FaceValue { sum: u32 },
}

impl ColourScore {
    /// Points contributed to the total.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            ColourScore::Empty => 0,
            ColourScore::Majority { count } => count as u32,
            ColourScore::FaceValue { sum } => sum,
        }
    }
}

/// Full scoring breakdown for a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// Per-player, per-colour breakdown (indexed by `Colour::index`).
    pub breakdown: PlayerMap<[ColourScore; COLOUR_COUNT]>,
    /// Per-player totals.
    pub totals: PlayerMap<u32>,
    /// Majority holders per colour (indexed by `Colour::index`).
    pub majorities: [Holders; COLOUR_COUNT],
    /// Lowest scorer(s).
    pub result: GameResult,
}

impl ScoreSheet {
    /// Total for one player.
    #[must_use]
    pub fn total(&self, player: PlayerId) -> u32 {
        self.totals[player]
    }

    /// How `player` scored `colour`.
    #[must_use]
    pub fn colour_score(&self, player: PlayerId, colour: Colour) -> ColourScore {
        self.breakdown[player][colour.index()]
    }

    /// Majority holders of `colour`.
    #[must_use]
    pub fn majority_holders(&self, colour: Colour) -> &[PlayerId] {
        &self.majorities[colour.index()]
    }

    /// Winning seats.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        self.result.winners()
    }

    /// Lowest total.
    #[must_use]
    pub fn winning_score(&self) -> u32 {
        self.totals.values().copied().min().unwrap_or(0)
    }
}

/// Decide the majority holders from per-seat counts of one colour.
#[must_use]
pub fn majority_holders(counts: &[usize]) -> Holders {
    if let [a, b] = *counts {
        return if a >= b + TWO_PLAYER_MARGIN {
            Holders::from_slice(&[PlayerId::new(0)])
        } else if b >= a + TWO_PLAYER_MARGIN {
            Holders::from_slice(&[PlayerId::new(1)])
        } else {
            Holders::new()
        };
    }

    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return Holders::new();
    }
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n == max)
        .map(|(i, _)| PlayerId::new(i as u8))
        .collect()
}

/// Stateless scorer over a table's ledgers.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Create a calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Score every ledger, given in seat order.
    ///
    /// Panics if `ledgers` is empty.
    #[must_use]
    pub fn compute<'a>(&self, ledgers: impl IntoIterator<Item = &'a Ledger>) -> ScoreSheet {
        let ledgers = PlayerMap::from_vec(ledgers.into_iter().collect::<Vec<_>>());
        let player_count = ledgers.player_count();

        let mut breakdown = PlayerMap::new(player_count, |_| [ColourScore::Empty; COLOUR_COUNT]);
        let mut majorities: [Holders; COLOUR_COUNT] = Default::default();

        for colour in Colour::ALL {
            let counts: Vec<usize> = ledgers.values().map(|l| l.count(colour)).collect();
            let holders = majority_holders(&counts);

            for (player, ledger) in ledgers.iter() {
                let count = ledger.count(colour);
                breakdown[player][colour.index()] = if count == 0 {
                    ColourScore::Empty
                } else if holders.contains(&player) {
                    ColourScore::Majority { count }
                } else {
                    ColourScore::FaceValue {
                        sum: ledger.value_sum(colour),
                    }
                };
            }

            majorities[colour.index()] = holders;
        }

        let totals = breakdown.map(|_, row| row.iter().map(|s| s.points()).sum::<u32>());
        let best = totals.values().copied().min().unwrap_or(0);
        let winners = totals
            .iter()
            .filter(|&(_, &t)| t == best)
            .map(|(p, _)| p)
            .collect();
        let result = GameResult::from_winners(winners);

        info!(?totals, winners = ?result.winners(), "round scored");

        ScoreSheet {
            breakdown,
            totals,
            majorities,
            result,
        }
    }
}
