//! One round of Parade, from the deal to the score sheet.
//!
//! ## Flow
//!
//! 1. Shuffle a fresh deck, deal the row, then deal hands one card at a time.
//! 2. Turns: play a card, resolve the row, collect, draw.
//! 3. The first [`EndgameSignal`] starts the final phase. The triggering
//!    player is done; every other player gets exactly one more turn, with
//!    no draws.
//! 4. Discard phase: each player discards, the rest of the hand joins the
//!    ledger.
//! 5. Scoring.
//!
//! A player who completes their sixth colour still draws on that turn.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::chooser::{CardChooser, ChoicePurpose};
use crate::cards::{Card, Deck};
use crate::core::{ParadeConfig, ParadeError, PlayerId, PlayerMap};
use crate::parade::{Collected, ParadeRow};
use crate::players::{EndgameSignal, Player};
use crate::scoring::{ScoreCalculator, ScoreSheet};

/// Where the round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Normal turns with draws.
    Main,
    /// Endgame triggered; remaining players take their last turn.
    FinalTurns,
    /// All turns done; waiting for discards.
    Discard,
    /// Hands merged; ready to score.
    Scoring,
    /// Scored.
    Complete,
}

/// One turn, as recorded in the round history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn index within the round (0-based).
    pub turn: u32,
    /// Who played.
    pub player: PlayerId,
    /// Card put on the row.
    pub played: Card,
    /// Cards taken from the row.
    pub collected: Collected,
    /// Endgame trigger raised during this turn, if any.
    pub signal: Option<EndgameSignal>,
}

/// A round in progress.
#[derive(Clone, Debug)]
pub struct Round {
    config: ParadeConfig,
    deck: Deck,
    row: ParadeRow,
    players: PlayerMap<Player>,
    discards: Vec<Card>,
    active: PlayerId,
    turn: u32,
    phase: RoundPhase,
    trigger: Option<(PlayerId, EndgameSignal)>,
    final_turns_left: usize,
    history: Vector<TurnRecord>,
}

impl Round {
    /// Start a round with a deck shuffled from `seed`.
    ///
    /// Hands and ledgers of `players` are cleared first. Seat order follows
    /// the order of `players`.
    pub fn new(players: Vec<Player>, config: ParadeConfig, seed: u64) -> Result<Self, ParadeError> {
        info!(players = players.len(), seed, "starting round");
        Self::with_deck(players, config, Deck::new(seed))
    }

    /// Start a round drawing from a prepared deck.
    pub fn with_deck(
        players: Vec<Player>,
        config: ParadeConfig,
        mut deck: Deck,
    ) -> Result<Self, ParadeError> {
        config.validate_players(players.len())?;

        let needed = config.initial_deal(players.len());
        if deck.len() < needed {
            return Err(ParadeError::NotEnoughCards {
                needed,
                available: deck.len(),
            });
        }

        let row = ParadeRow::deal(&mut deck, config.row_size);

        let mut players = PlayerMap::from_vec(players);
        for (_, player) in players.iter_mut() {
            player.clear();
        }
        for _ in 0..config.hand_size {
            for (_, player) in players.iter_mut() {
                player.draw(deck.draw(), false);
            }
        }

        debug!(deck = deck.len(), row = row.len(), "initial deal complete");

        Ok(Self {
            config,
            deck,
            row,
            players,
            discards: Vec::new(),
            active: PlayerId::new(0),
            turn: 0,
            phase: RoundPhase::Main,
            trigger: None,
            final_turns_left: 0,
            history: Vector::new(),
        })
    }

    /// Round configuration.
    #[must_use]
    pub fn config(&self) -> &ParadeConfig {
        &self.config
    }

    /// Draw pile.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The parade row.
    #[must_use]
    pub fn row(&self) -> &ParadeRow {
        &self.row
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// One player.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Cards thrown away in the discard phase.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Seat to act next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Turns taken so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Table round: every seat acting once is one table round, starting at 1.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.turn / self.player_count() as u32 + 1
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Whether the final phase has started.
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        self.trigger.is_some()
    }

    /// Who triggered the endgame, and how.
    #[must_use]
    pub fn trigger(&self) -> Option<(PlayerId, EndgameSignal)> {
        self.trigger
    }

    /// Every turn so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Cards accounted for across deck, hands, row, ledgers and discards.
    ///
    /// Always equals the size of the deck the round started from.
    #[must_use]
    pub fn card_total(&self) -> usize {
        let held: usize = self
            .players
            .values()
            .map(|p| p.hand_size() + p.ledger().len())
            .sum();
        self.deck.len() + self.row.len() + self.discards.len() + held
    }

    /// Whether turns are still being taken.
    #[must_use]
    pub fn in_play(&self) -> bool {
        matches!(self.phase, RoundPhase::Main | RoundPhase::FinalTurns)
    }

    /// Let the active player take a turn.
    pub fn take_turn(&mut self, chooser: &mut impl CardChooser) -> Result<TurnRecord, ParadeError> {
        if !self.in_play() {
            return Err(ParadeError::RoundOver);
        }

        let seat = self.active;
        let endgame = self.is_endgame();

        let card = chooser
            .choose(&self.players[seat], &self.row, ChoicePurpose::Play)
            .ok_or(ParadeError::EmptyHand { player: seat })?;
        let played = self.players[seat]
            .play(card)
            .ok_or(ParadeError::CardNotInHand { player: seat, card })?;

        let collected = self.row.insert_and_resolve(played);
        let player = &mut self.players[seat];
        let collect_signal = player.collect(collected.iter().copied(), endgame);
        let drawn = if endgame { None } else { self.deck.draw() };
        let draw_signal = player.draw(drawn, endgame);
        let signal = collect_signal.or(draw_signal);

        debug!(
            turn = self.turn,
            player = %seat,
            %played,
            collected = collected.len(),
            row = self.row.len(),
            deck = self.deck.len(),
            "turn taken"
        );

        if endgame {
            self.final_turns_left -= 1;
        } else if let Some(signal) = signal {
            info!(player = %seat, %signal, "final turns triggered");
            self.trigger = Some((seat, signal));
            self.final_turns_left = self.player_count() - 1;
            self.phase = RoundPhase::FinalTurns;
        }

        if self.phase == RoundPhase::FinalTurns && self.final_turns_left == 0 {
            self.phase = RoundPhase::Discard;
        }

        let record = TurnRecord {
            turn: self.turn,
            player: seat,
            played,
            collected,
            signal,
        };
        self.history.push_back(record.clone());
        self.turn += 1;
        self.active = seat.next(self.player_count());

        Ok(record)
    }

    /// Each player discards, then the rest of their hand joins their ledger.
    pub fn discard_phase(&mut self, chooser: &mut impl CardChooser) -> Result<(), ParadeError> {
        if self.phase != RoundPhase::Discard {
            return Err(ParadeError::RoundNotFinished("discard"));
        }

        info!(discard = self.config.discard_count, "discard phase");
        for seat in self.players.player_ids() {
            let count = self.config.discard_count.min(self.players[seat].hand_size());
            for _ in 0..count {
                let card = chooser
                    .choose(&self.players[seat], &self.row, ChoicePurpose::Discard)
                    .ok_or(ParadeError::EmptyHand { player: seat })?;
                let discarded = self.players[seat]
                    .play(card)
                    .ok_or(ParadeError::CardNotInHand { player: seat, card })?;
                self.discards.push(discarded);
            }
            self.players[seat].collect_hand();
        }

        self.phase = RoundPhase::Scoring;
        Ok(())
    }

    /// Score every ledger.
    ///
    /// May be called again once complete; the sheet is recomputed from the
    /// ledgers each time.
    pub fn score(&mut self) -> Result<ScoreSheet, ParadeError> {
        if !matches!(self.phase, RoundPhase::Scoring | RoundPhase::Complete) {
            return Err(ParadeError::RoundNotFinished("scoring"));
        }

        let sheet = ScoreCalculator::new().compute(self.players.values().map(Player::ledger));
        self.phase = RoundPhase::Complete;
        Ok(sheet)
    }

    /// Run the round to completion with one chooser for every seat.
    pub fn play_out(&mut self, chooser: &mut impl CardChooser) -> Result<ScoreSheet, ParadeError> {
        while self.in_play() {
            self.take_turn(chooser)?;
        }
        if self.phase == RoundPhase::Discard {
            self.discard_phase(chooser)?;
        }
        self.score()
    }

    /// Hand the players back, e.g. to seat them for another round.
    #[must_use]
    pub fn into_players(self) -> Vec<Player> {
        self.players.values().cloned().collect()
    }

    /// Capture the full round state.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            config: self.config.clone(),
            deck: self.deck.clone(),
            row: self.row.clone(),
            players: self.players.clone(),
            discards: self.discards.clone(),
            active: self.active,
            turn: self.turn,
            phase: self.phase,
            trigger: self.trigger,
            final_turns_left: self.final_turns_left,
            history: self.history.clone(),
        }
    }

    /// Resume a round from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: RoundSnapshot) -> Self {
        Self {
            config: snapshot.config,
            deck: snapshot.deck,
            row: snapshot.row,
            players: snapshot.players,
            discards: snapshot.discards,
            active: snapshot.active,
            turn: snapshot.turn,
            phase: snapshot.phase,
            trigger: snapshot.trigger,
            final_turns_left: snapshot.final_turns_left,
            history: snapshot.history,
        }
    }
}

/// Serializable round state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub config: ParadeConfig,
    pub deck: Deck,
    pub row: ParadeRow,
    pub players: PlayerMap<Player>,
    pub discards: Vec<Card>,
    pub active: PlayerId,
    pub turn: u32,
    pub phase: RoundPhase,
    pub trigger: Option<(PlayerId, EndgameSignal)>,
    pub final_turns_left: usize,
    pub history: Vector<TurnRecord>,
}

impl RoundSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ParadeError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParadeError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{full_set, Colour, DECK_SIZE};
    use crate::game::chooser::{FirstCardChooser, RandomChooser};

    fn two_players() -> Vec<Player> {
        vec![Player::new("ann"), Player::new("bo")]
    }

    fn c(value: u8, colour: Colour) -> Card {
        Card::new(value, colour)
    }

    #[test]
    fn test_setup_deals_row_then_hands() {
        let round = Round::new(two_players(), ParadeConfig::default(), 42).unwrap();

        assert_eq!(round.row().len(), 6);
        assert_eq!(round.player(PlayerId::new(0)).hand_size(), 5);
        assert_eq!(round.player(PlayerId::new(1)).hand_size(), 5);
        assert_eq!(round.deck().len(), 66 - 10 - 6);
        assert_eq!(round.phase(), RoundPhase::Main);
        assert_eq!(round.card_total(), DECK_SIZE);
    }

    #[test]
    fn test_setup_deals_round_robin() {
        let deck = Deck::from_cards(full_set());
        let round = Round::with_deck(two_players(), ParadeConfig::default(), deck).unwrap();

        let set = full_set();
        assert_eq!(round.row().cards(), &set[..6]);
        // Seat 0 receives cards 6, 8, 10, ...; seat 1 receives 7, 9, 11, ...
        assert_eq!(round.player(PlayerId::new(0)).hand()[0], set[6]);
        assert_eq!(round.player(PlayerId::new(1)).hand()[0], set[7]);
        assert_eq!(round.player(PlayerId::new(0)).hand()[1], set[8]);
    }

    #[test]
    fn test_rejects_bad_player_count() {
        let err = Round::new(vec![Player::new("solo")], ParadeConfig::default(), 1).unwrap_err();
        assert!(matches!(err, ParadeError::InvalidPlayerCount { count: 1, .. }));
    }

    #[test]
    fn test_rejects_short_deck() {
        let deck = Deck::from_cards(full_set().into_iter().take(10));
        let err = Round::with_deck(two_players(), ParadeConfig::default(), deck).unwrap_err();
        assert!(matches!(err, ParadeError::NotEnoughCards { needed: 16, available: 10 }));
    }

    #[test]
    fn test_setup_clears_previous_state() {
        let mut veteran = Player::new("ann").with_hand([c(1, Colour::Red)]);
        veteran.collect([c(2, Colour::Blue)], false);
        veteran.increment_wins();

        let round = Round::new(vec![veteran, Player::new("bo")], ParadeConfig::default(), 3).unwrap();
        let ann = round.player(PlayerId::new(0));

        assert!(ann.ledger().is_empty());
        assert_eq!(ann.hand_size(), 5);
        assert_eq!(ann.wins(), 1);
    }

    #[test]
    fn test_turn_rotates_and_records() {
        let mut round = Round::new(two_players(), ParadeConfig::default(), 5).unwrap();
        let mut chooser = FirstCardChooser;

        let first = round.take_turn(&mut chooser).unwrap();
        assert_eq!(first.player, PlayerId::new(0));
        assert_eq!(first.turn, 0);
        assert_eq!(round.active_player(), PlayerId::new(1));
        assert_eq!(round.player(PlayerId::new(0)).hand_size(), 5);
        assert_eq!(round.row().cards().last(), Some(&first.played));

        let second = round.take_turn(&mut chooser).unwrap();
        assert_eq!(second.player, PlayerId::new(1));
        assert_eq!(round.history().len(), 2);
        assert_eq!(round.round_number(), 2);
        assert_eq!(round.card_total(), DECK_SIZE);
    }

    #[test]
    fn test_chooser_must_pick_from_hand() {
        let mut round = Round::new(two_players(), ParadeConfig::default(), 5).unwrap();
        let held: Vec<Card> = round.player(PlayerId::new(0)).hand().to_vec();
        let outsider = full_set().into_iter().find(|c| !held.contains(c)).unwrap();

        let mut cheat = |_: &Player, _: &ParadeRow, _: ChoicePurpose| Some(outsider);
        let err = round.take_turn(&mut cheat).unwrap_err();

        assert!(matches!(err, ParadeError::CardNotInHand { .. }));
    }

    #[test]
    fn test_deck_exhaustion_gives_others_one_turn() {
        // Exactly enough cards for the deal plus one draw.
        let deck = Deck::from_cards(full_set().into_iter().take(17));
        let mut round = Round::with_deck(two_players(), ParadeConfig::default(), deck).unwrap();
        let mut chooser = FirstCardChooser;

        let t0 = round.take_turn(&mut chooser).unwrap();
        assert_eq!(t0.signal, None);
        assert!(round.deck().is_empty());

        let t1 = round.take_turn(&mut chooser).unwrap();
        assert_eq!(t1.signal, Some(EndgameSignal::DeckExhausted));
        assert_eq!(round.trigger(), Some((PlayerId::new(1), EndgameSignal::DeckExhausted)));
        assert_eq!(round.phase(), RoundPhase::FinalTurns);

        let t2 = round.take_turn(&mut chooser).unwrap();
        assert_eq!(t2.player, PlayerId::new(0));
        assert_eq!(round.phase(), RoundPhase::Discard);
        assert!(matches!(round.take_turn(&mut chooser), Err(ParadeError::RoundOver)));

        assert_eq!(round.player(PlayerId::new(0)).hand_size(), 4);
        assert_eq!(round.player(PlayerId::new(1)).hand_size(), 4);
    }

    #[test]
    fn test_scoring_requires_discard_phase() {
        let mut round = Round::new(two_players(), ParadeConfig::default(), 5).unwrap();
        assert!(matches!(round.score(), Err(ParadeError::RoundNotFinished("scoring"))));
        assert!(matches!(
            round.discard_phase(&mut FirstCardChooser),
            Err(ParadeError::RoundNotFinished("discard"))
        ));
    }

    #[test]
    fn test_play_out_completes_and_conserves_cards() {
        for seed in 0..20 {
            let players = (0..4).map(|i| Player::new(format!("p{i}"))).collect();
            let mut round = Round::new(players, ParadeConfig::default(), seed).unwrap();
            let mut chooser = RandomChooser::new(seed);

            let sheet = round.play_out(&mut chooser).unwrap();

            assert_eq!(round.phase(), RoundPhase::Complete);
            assert!(round.trigger().is_some());
            assert_eq!(round.card_total(), DECK_SIZE);
            assert!(round.players().values().all(|p| p.hand_size() == 0));
            assert!(!sheet.winners().is_empty());
            assert_eq!(round.score().unwrap(), sheet);
        }
    }

    #[test]
    fn test_snapshot_roundtrip_resumes_identically() {
        let mut round = Round::new(two_players(), ParadeConfig::default(), 11).unwrap();
        let mut chooser = FirstCardChooser;
        for _ in 0..6 {
            round.take_turn(&mut chooser).unwrap();
        }

        let bytes = round.snapshot().to_bytes().unwrap();
        let mut resumed = Round::from_snapshot(RoundSnapshot::from_bytes(&bytes).unwrap());
        assert_eq!(resumed.snapshot(), round.snapshot());

        let expected = round.play_out(&mut FirstCardChooser).unwrap();
        let actual = resumed.play_out(&mut FirstCardChooser).unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(matches!(
            RoundSnapshot::from_bytes(&[1, 2, 3]),
            Err(ParadeError::Snapshot(_))
        ));
    }
}
