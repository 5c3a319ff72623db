//! A game: rounds played at one table until a team passes the target score.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::error::RoundError;
use crate::observer::RoundObserver;
use crate::options::GameOptions;
use crate::player::{Player, SEATS, Seat};
use crate::result::{GameResult, RoundOutcome};
use crate::round::Round;
use crate::team::{Table, TeamId};

/// A Belote game engine that owns the table and sequences rounds.
///
/// Every round is shuffled with a seed drawn from the game's own ChaCha8
/// stream, so a game is reproducible from the seed passed to [`Game::new`]
/// and the strategies' decisions.
#[derive(Debug)]
pub struct Game {
    table: Table,
    options: GameOptions,
    rng: ChaCha8Rng,
    rounds_played: u32,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use belote::{FirstLegalCard, Game, GameOptions, NoopObserver, Player};
    ///
    /// let players = ["Alex", "Marie", "Thibaud", "Veltin"]
    ///     .map(|name| Player::new(name, FirstLegalCard));
    /// let mut game = Game::new(players, GameOptions::default(), 42);
    /// let result = game.play(&mut NoopObserver).unwrap();
    /// assert!(result.team_a > 1000 || result.team_b > 1000);
    /// ```
    #[must_use]
    pub fn new(players: [Player; SEATS], options: GameOptions, seed: u64) -> Self {
        Self {
            table: Table::new(players),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            rounds_played: 0,
        }
    }

    /// Creates a new game seeded from the thread-local generator.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_entropy(players: [Player; SEATS], options: GameOptions) -> Self {
        Self::new(players, options, rand::rng().next_u64())
    }

    /// Returns the table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of rounds played so far, abandoned ones included.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the seat that leads the next round.
    #[must_use]
    pub const fn next_leader(&self) -> Seat {
        self.options
            .first_leader
            .offset(self.rounds_played as usize)
    }

    /// Returns the team strictly above the target score, if any. With both
    /// teams above it, the higher total wins; a tie has no winner.
    #[must_use]
    pub fn winner(&self) -> Option<TeamId> {
        let teams = self.table.teams();
        let a = teams[TeamId::A].total_points();
        let b = teams[TeamId::B].total_points();
        if a.max(b) <= self.options.target_score || a == b {
            None
        } else if a > b {
            Some(TeamId::A)
        } else {
            Some(TeamId::B)
        }
    }

    /// Returns whether a team has passed the target or the round limit is
    /// reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        let target_passed = self
            .table
            .teams()
            .iter()
            .any(|team| team.total_points() > self.options.target_score);
        target_passed || self.rounds_played >= self.options.max_rounds
    }

    /// Plays one round led by [`Game::next_leader`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round fails; see [`Round::play`].
    pub fn play_round(
        &mut self,
        observer: &mut dyn RoundObserver,
    ) -> Result<RoundOutcome, RoundError> {
        let leader = self.next_leader();
        let seed = self.rng.next_u64();
        let outcome = Round::new(&mut self.table, self.rounds_played, leader, seed)
            .with_observer(observer)
            .play()?;
        self.rounds_played += 1;
        Ok(outcome)
    }

    /// Plays rounds until the game is finished.
    ///
    /// # Errors
    ///
    /// Returns an error if a round fails; the game stops at that round.
    pub fn play(&mut self, observer: &mut dyn RoundObserver) -> Result<GameResult, RoundError> {
        while !self.is_finished() {
            self.play_round(observer)?;
        }
        let result = self.result();
        info!(
            rounds = result.rounds_played,
            team_a = result.team_a,
            team_b = result.team_b,
            winner = ?result.winner,
            "Game finished"
        );
        Ok(result)
    }

    /// Returns the current standings.
    #[must_use]
    pub fn result(&self) -> GameResult {
        let teams = self.table.teams();
        GameResult {
            winner: self.winner(),
            team_a: teams[TeamId::A].total_points(),
            team_b: teams[TeamId::B].total_points(),
            rounds_played: self.rounds_played,
        }
    }
}
