//! A Belote rules engine with optional `no_std` support.
//!
//! The crate ranks cards against a trump suit, resolves tricks, settles
//! points under the contract rule and drives a full round: deal, two-pass
//! trump bidding, eight tricks, scoring. Player decisions come from a
//! [`Strategy`] supplied per player; commentary goes through a
//! [`RoundObserver`].
//!
//! # Example
//!
//! ```no_run
//! use belote::{FirstLegalCard, Game, GameOptions, NoopObserver, Player};
//!
//! let players = ["Alex", "Marie", "Thibaud", "Veltin"].map(|name| Player::new(name, FirstLegalCard));
//! let mut game = Game::new(players, GameOptions::default(), 42);
//! let _ = game.play(&mut NoopObserver);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod card_set;
pub mod error;
pub mod game;
pub mod observer;
pub mod options;
pub mod player;
pub mod result;
pub mod round;
pub mod score;
pub mod team;
pub mod trick;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, RankedCard, Suit};
pub use card_set::{CardSet, HAND_CAPACITY, Hand, Stock, TRICK_CAPACITY, Trick, WonCards};
pub use error::{CardError, CardSetError, DealError, RoundError, TrickError};
pub use game::Game;
pub use observer::{Commentator, NoopObserver, RoundObserver};
pub use options::GameOptions;
pub use player::{FirstLegalCard, Player, SEATS, Seat, Strategy};
pub use result::{Declaration, GameResult, RoundOutcome, RoundScore};
pub use round::{Round, RoundState, TRICKS};
pub use team::{Table, Team, TeamId, Teams};
pub use trick::resolve_trick;
