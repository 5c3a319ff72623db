//! A single round: deal, bid for trump, eight tricks, scoring.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::card::{Card, Suit};
use crate::card_set::Stock;
use crate::error::RoundError;
use crate::observer::RoundObserver;
use crate::player::Seat;
use crate::result::{Declaration, RoundOutcome};
use crate::team::Table;

mod bidding;
mod dealer;
mod play;
pub mod state;

pub use state::RoundState;

/// Number of tricks in a round.
pub const TRICKS: u8 = 8;

/// One hand of Belote played at a [`Table`].
///
/// A round is single-use. Drive it with [`Round::play`], or step through
/// [`deal`](Round::deal), [`declare_trump`](Round::declare_trump),
/// [`play_trick`](Round::play_trick) eight times, [`score`](Round::score)
/// and [`close`](Round::close). Each step checks the current
/// [`RoundState`] and fails with [`RoundError::InvalidState`] when called
/// out of order. Any other failure moves the round to
/// [`RoundState::Aborted`], after which every step is refused.
pub struct Round<'a> {
    id: u32,
    table: &'a mut Table,
    observer: Option<&'a mut dyn RoundObserver>,
    stock: Stock,
    shuffle_seed: Option<u64>,
    state: RoundState,
    leader: Seat,
    trump: Option<Suit>,
    revealed: Option<Card>,
    declaration: Option<Declaration>,
}

impl<'a> Round<'a> {
    /// Creates a round whose full deck is shuffled with `seed` when dealt.
    ///
    /// `leader` is dealt to first, bids first and leads the first trick.
    pub fn new(table: &'a mut Table, id: u32, leader: Seat, seed: u64) -> Self {
        let mut round = Self::with_stock(table, id, leader, Stock::full_deck());
        round.shuffle_seed = Some(seed);
        round
    }

    /// Creates a round that deals `stock` front to back, without shuffling.
    ///
    /// Dealing fails with [`DealError::StockExhausted`](crate::DealError)
    /// if the stock holds fewer than 32 cards.
    pub const fn with_stock(table: &'a mut Table, id: u32, leader: Seat, stock: Stock) -> Self {
        Self {
            id,
            table,
            observer: None,
            stock,
            shuffle_seed: None,
            state: RoundState::Created,
            leader,
            trump: None,
            revealed: None,
            declaration: None,
        }
    }

    /// Sends round events to `observer`.
    #[must_use]
    pub fn with_observer(mut self, observer: &'a mut dyn RoundObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Returns the round id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the seat that leads the next trick.
    #[must_use]
    pub const fn leader(&self) -> Seat {
        self.leader
    }

    /// Returns the trump suit once declared.
    #[must_use]
    pub const fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// Returns the card revealed for bidding.
    #[must_use]
    pub const fn revealed(&self) -> Option<Card> {
        self.revealed
    }

    /// Returns who declared which trump.
    #[must_use]
    pub const fn declaration(&self) -> Option<Declaration> {
        self.declaration
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn stock(&self) -> &Stock {
        &self.stock
    }

    /// Returns the table the round is played at.
    #[must_use]
    pub fn table(&self) -> &Table {
        &*self.table
    }

    /// Plays the whole round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already started, the stock is
    /// short, or a strategy plays a card it does not hold.
    pub fn play(mut self) -> Result<RoundOutcome, RoundError> {
        self.deal()?;
        if self.declare_trump()?.is_none() {
            return Ok(RoundOutcome::Abandoned);
        }
        for _ in 0..TRICKS {
            self.play_trick()?;
        }
        let score = self.score()?;
        self.close()?;
        Ok(RoundOutcome::Scored(score))
    }

    /// Throws away the won cards. The round is finished afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the scored state.
    pub fn close(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::Scored {
            return Err(RoundError::InvalidState);
        }
        for team in self.table.teams_mut().iter_mut() {
            team.reset_round();
        }
        self.transition(RoundState::Closed);
        Ok(())
    }

    fn seed_stock(&mut self) {
        if let Some(seed) = self.shuffle_seed {
            self.stock.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
            debug!(round = self.id, seed, "Stock shuffled");
        }
    }

    fn transition(&mut self, next: RoundState) {
        debug!(round = self.id, "Transition: {} -> {}", self.state, next);
        self.state = next;
    }

    fn abort(&mut self, error: RoundError) -> RoundError {
        warn!(round = self.id, %error, "Round aborted");
        self.transition(RoundState::Aborted);
        error
    }

    fn abandon(&mut self) {
        info!(round = self.id, "Nobody declared trump, round abandoned");
        self.transition(RoundState::Abandoned);
        if let Some(observer) = self.observer.as_mut() {
            observer.round_abandoned(&*self.table, self.id);
        }
    }
}
