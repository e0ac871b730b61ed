//! A sitting of several rounds with the same players.
//!
//! Seating is shuffled once when the session starts. Each round resets
//! hands and ledgers, and every winner of a round gains a win.

use rustc_hash::FxHashSet;
use tracing::info;

use super::chooser::CardChooser;
use super::round::Round;
use crate::core::{GameRng, ParadeConfig, ParadeError};
use crate::players::Player;
use crate::scoring::ScoreSheet;

/// Players who keep playing rounds together.
#[derive(Clone, Debug)]
pub struct Session {
    config: ParadeConfig,
    players: Vec<Player>,
    rng: GameRng,
    rounds_played: u32,
}

impl Session {
    /// Seat named players in a seeded random order.
    ///
    /// Names must be unique ignoring case.
    pub fn new<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        config: ParadeConfig,
        seed: u64,
    ) -> Result<Self, ParadeError> {
        let mut players: Vec<Player> = names.into_iter().map(Player::new).collect();
        config.validate_players(players.len())?;

        let mut seen = FxHashSet::default();
        for player in &players {
            if !seen.insert(player.name().to_lowercase()) {
                return Err(ParadeError::DuplicatePlayerName(player.name().to_string()));
            }
        }

        let root = GameRng::new(seed);
        root.for_context("seating").shuffle(&mut players);
        info!(players = ?players.iter().map(Player::name).collect::<Vec<_>>(), "session seated");

        Ok(Self {
            config,
            players,
            rng: root.for_context("rounds"),
            rounds_played: 0,
        })
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Rounds completed.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Names and win counts in seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<(&str, u32)> {
        self.players.iter().map(|p| (p.name(), p.wins())).collect()
    }

    /// Play one full round with fresh hands and ledgers.
    ///
    /// Players are returned to the session even when the chooser fails.
    pub fn play_round(&mut self, chooser: &mut impl CardChooser) -> Result<ScoreSheet, ParadeError> {
        let seed = self.rng.next_seed();
        let mut round = Round::new(std::mem::take(&mut self.players), self.config.clone(), seed)?;

        let outcome = round.play_out(chooser);
        self.players = round.into_players();
        let sheet = outcome?;

        for winner in sheet.winners() {
            self.players[winner.index()].increment_wins();
        }
        self.rounds_played += 1;

        info!(round = self.rounds_played, winners = ?sheet.winners(), "round finished");
        Ok(sheet)
    }
}
