//! Card choice strategies.
//!
//! The round asks a `CardChooser` which card a player puts down, both for
//! normal turns and for the end-of-round discard. Humans, bots and scripted
//! test players all plug in here; closures work too.

use crate::cards::Card;
use crate::core::GameRng;
use crate::parade::ParadeRow;
use crate::players::Player;

/// Why a card is being chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChoicePurpose {
    /// Play onto the row.
    Play,
    /// Discard before the hand joins the ledger.
    Discard,
}

/// Picks a card from a player's hand.
///
/// Implementations must return a card from `player.hand()`, or `None` only
/// when the hand is empty.
pub trait CardChooser {
    fn choose(&mut self, player: &Player, row: &ParadeRow, purpose: ChoicePurpose) -> Option<Card>;
}

impl<F> CardChooser for F
where
    F: FnMut(&Player, &ParadeRow, ChoicePurpose) -> Option<Card>,
{
    fn choose(&mut self, player: &Player, row: &ParadeRow, purpose: ChoicePurpose) -> Option<Card> {
        self(player, row, purpose)
    }
}

/// Uniform random choice over the hand.
#[derive(Clone, Debug)]
pub struct RandomChooser {
    rng: GameRng,
}

impl RandomChooser {
    /// Create a chooser with its own "bots" stream derived from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("bots"),
        }
    }
}

impl CardChooser for RandomChooser {
    fn choose(&mut self, player: &Player, _row: &ParadeRow, _purpose: ChoicePurpose) -> Option<Card> {
        self.rng.choose(player.hand()).copied()
    }
}

/// Always takes the oldest card in hand. Deterministic; handy for replays.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstCardChooser;

impl CardChooser for FirstCardChooser {
    fn choose(&mut self, player: &Player, _row: &ParadeRow, _purpose: ChoicePurpose) -> Option<Card> {
        player.hand().first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Colour;

    fn hand() -> Player {
        Player::new("bot").with_hand([
            Card::new(1, Colour::Red),
            Card::new(2, Colour::Green),
            Card::new(3, Colour::Blue),
        ])
    }

    #[test]
    fn test_random_chooser_picks_from_hand() {
        let player = hand();
        let row = ParadeRow::default();
        let mut chooser = RandomChooser::new(42);

        for _ in 0..20 {
            let card = chooser.choose(&player, &row, ChoicePurpose::Play);
            assert!(card.is_some_and(|c| player.hand().contains(&c)));
        }
    }

    #[test]
    fn test_random_chooser_is_deterministic() {
        let player = hand();
        let row = ParadeRow::default();
        let mut a = RandomChooser::new(9);
        let mut b = RandomChooser::new(9);

        for _ in 0..10 {
            assert_eq!(
                a.choose(&player, &row, ChoicePurpose::Play),
                b.choose(&player, &row, ChoicePurpose::Play)
            );
        }
    }

    #[test]
    fn test_empty_hand_yields_none() {
        let player = Player::new("bot");
        let row = ParadeRow::default();

        assert_eq!(RandomChooser::new(1).choose(&player, &row, ChoicePurpose::Discard), None);
        assert_eq!(FirstCardChooser.choose(&player, &row, ChoicePurpose::Discard), None);
    }

    #[test]
    fn test_closure_chooser() {
        let player = hand();
        let row = ParadeRow::default();
        let mut highest = |p: &Player, _: &ParadeRow, _: ChoicePurpose| p.hand().iter().copied().max_by_key(|c| c.value());

        assert_eq!(
            highest.choose(&player, &row, ChoicePurpose::Play),
            Some(Card::new(3, Colour::Blue))
        );
    }
}
