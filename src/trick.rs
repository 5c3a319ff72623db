//! Trick resolution.

use crate::card::{RankedCard, Suit};
use crate::card_set::{TRICK_CAPACITY, Trick};
use crate::error::TrickError;
use crate::player::Seat;

/// Returns the seat that wins `trick`, which was led from `leader`.
///
/// The first card sets the demanded suit. A later card can only take the
/// trick if it is a trump or of the demanded suit, and it must beat the
/// card currently winning.
///
/// # Errors
///
/// Returns an error if the trick does not hold four cards.
///
/// # Example
///
/// ```
/// use belote::{Seat, Suit, Trick, resolve_trick};
///
/// let trick = Trick::from_cards(&[
///     "8C".parse().unwrap(),
///     "TC".parse().unwrap(),
///     "JC".parse().unwrap(),
///     "QC".parse().unwrap(),
/// ])
/// .unwrap();
/// let winner = resolve_trick(&trick, Suit::Clubs, Seat::new(1)).unwrap();
/// assert_eq!(winner, Seat::new(3));
/// ```
pub fn resolve_trick(trick: &Trick, trump: Suit, leader: Seat) -> Result<Seat, TrickError> {
    if trick.len() != TRICK_CAPACITY {
        return Err(TrickError::Incomplete(trick.len()));
    }

    let mut cards = trick.cards().iter().map(|c| c.rank_relative_to(trump));
    let Some(first) = cards.next() else {
        return Err(TrickError::Incomplete(0));
    };
    let demanded = first.suit();

    let mut winner: (usize, RankedCard) = (0, first);
    for (offset, card) in cards.enumerate() {
        let eligible = card.is_trump() || card.suit() == demanded;
        if eligible && card.beats(&winner.1) {
            winner = (offset + 1, card);
        }
    }

    Ok(leader.offset(winner.0))
}
