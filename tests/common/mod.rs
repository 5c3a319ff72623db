//! Shared test helpers.

#![allow(dead_code)]

use std::sync::Once;

use belote::{Card, Hand, Player, Rank, Strategy, Suit, Trick};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Installs a test-captured `tracing` subscriber, filtered by `RUST_LOG`
/// (quiet by default).
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

pub fn parse(code: &str) -> Card {
    code.parse().unwrap()
}

/// Scripted bidding answers; plays the first card in hand.
#[derive(Debug, Clone, Copy)]
pub struct Bidder {
    pub accept: bool,
    pub nominate: Option<Suit>,
}

impl Bidder {
    pub const PASS: Self = Self {
        accept: false,
        nominate: None,
    };

    pub const fn nominating(suit: Suit) -> Self {
        Self {
            accept: false,
            nominate: Some(suit),
        }
    }
}

impl Strategy for Bidder {
    fn decide_start(&mut self, _hand: &Hand, _revealed: Card) -> bool {
        self.accept
    }

    fn decide_trump_nomination(&mut self, _hand: &Hand, _revealed: Card) -> Option<Suit> {
        self.nominate
    }

    fn choose_card(&mut self, hand: &Hand, _trick: &Trick, _trump: Suit) -> Card {
        hand.cards()[0]
    }
}

pub fn players<S: Strategy + Copy + 'static>(strategy: S) -> [Player; 4] {
    ["Alex", "Marie", "Thibaud", "Veltin"].map(|name| Player::new(name, strategy))
}
