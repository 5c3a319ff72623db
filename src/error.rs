//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;
use crate::player::Seat;

/// Errors that can occur while building a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Unknown suit symbol.
    #[error("invalid suit symbol {0:?}")]
    InvalidSuit(char),
    /// Unknown rank symbol.
    #[error("invalid rank symbol {0:?}")]
    InvalidRank(char),
    /// Card codes are exactly two characters, rank then suit.
    #[error("card code must be a rank symbol followed by a suit symbol")]
    InvalidCode,
}

/// Errors that can occur when mutating a card container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardSetError {
    /// The card is already in the container.
    #[error("{0} is already present")]
    Duplicate(Card),
    /// The container is full.
    #[error("capacity of {0} cards exceeded")]
    CapacityExceeded(usize),
    /// The card is not in the container.
    #[error("{0} is not present")]
    NotFound(Card),
    /// The container has no cards left.
    #[error("no cards left")]
    Empty,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The stock ran out before every player had their cards.
    #[error("stock exhausted while dealing")]
    StockExhausted,
    /// A hand refused a dealt card.
    #[error(transparent)]
    Hand(#[from] CardSetError),
}

/// Errors that can occur while resolving a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrickError {
    /// The trick does not hold one card per seat.
    #[error("trick holds {0} cards, expected 4")]
    Incomplete(usize),
}

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// A strategy chose a card its player does not hold.
    #[error("seat {seat} played {card}, which is not in hand")]
    CardNotInHand {
        /// Seat of the offending player.
        seat: Seat,
        /// The card the strategy returned.
        card: Card,
    },
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Trick resolution failed.
    #[error(transparent)]
    Trick(#[from] TrickError),
    /// A container rejected a card.
    #[error(transparent)]
    CardSet(#[from] CardSetError),
}
