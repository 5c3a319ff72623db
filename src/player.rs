//! Seats, players and the decision-making seam.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::card::{Card, Rank, Suit};
use crate::card_set::{Hand, Trick};
use crate::team::TeamId;

/// Number of seats at a Belote table.
pub const SEATS: usize = 4;

/// A position at the table, `0..4`. Seats 0 and 2 play for [`TeamId::A`],
/// seats 1 and 3 for [`TeamId::B`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seat(u8);

impl Seat {
    /// All seats in turn order.
    pub const ALL: [Self; SEATS] = [Self(0), Self(1), Self(2), Self(3)];

    /// Returns the seat for `index`, wrapping around the table.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self((index % SEATS) as u8)
    }

    /// Returns the seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the seat `steps` places after this one.
    #[must_use]
    pub const fn offset(self, steps: usize) -> Self {
        Self::new(self.index() + steps % SEATS)
    }

    /// Returns the team this seat plays for.
    #[must_use]
    pub const fn team(self) -> TeamId {
        if self.0 % 2 == 0 { TeamId::A } else { TeamId::B }
    }

    /// Returns the four seats in turn order starting from this one.
    #[must_use]
    pub const fn turn_order(self) -> [Self; SEATS] {
        [self, self.offset(1), self.offset(2), self.offset(3)]
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The decisions a player makes during a round.
///
/// The engine calls these synchronously and trusts nothing it gets back:
/// a card that is not in hand aborts the round.
pub trait Strategy {
    /// First bidding pass: take the revealed card and its suit as trump?
    fn decide_start(&mut self, hand: &Hand, revealed: Card) -> bool;

    /// Second bidding pass: name any suit as trump, or pass with `None`.
    fn decide_trump_nomination(&mut self, hand: &Hand, revealed: Card) -> Option<Suit>;

    /// Picks the next card to play from `hand` into `trick`. Only called
    /// while the hand still holds cards.
    fn choose_card(&mut self, hand: &Hand, trick: &Trick, trump: Suit) -> Card;
}

/// Accepts the revealed suit, never nominates, and plays the first card of
/// the demanded suit, else the first trump, else the first card in hand.
///
/// Asked to play from an empty hand it answers the seven of trumps, which
/// the round rejects as not in hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegalCard;

impl Strategy for FirstLegalCard {
    fn decide_start(&mut self, _hand: &Hand, _revealed: Card) -> bool {
        true
    }

    fn decide_trump_nomination(&mut self, _hand: &Hand, _revealed: Card) -> Option<Suit> {
        None
    }

    fn choose_card(&mut self, hand: &Hand, trick: &Trick, trump: Suit) -> Card {
        let first = hand.cards().first().copied();
        let followed = trick.get(0).and_then(|lead| {
            hand.of_suit(lead.suit)
                .next()
                .or_else(|| hand.of_suit(trump).next())
        });
        followed
            .or(first)
            .unwrap_or(Card::new(trump, Rank::Seven))
    }
}

/// A seated player: a name, a hand and a strategy.
pub struct Player {
    name: String,
    hand: Hand,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Creates a player with an empty hand.
    pub fn new(name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            strategy: Box::new(strategy),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn decide_start(&mut self, revealed: Card) -> bool {
        self.strategy.decide_start(&self.hand, revealed)
    }

    pub(crate) fn decide_trump_nomination(&mut self, revealed: Card) -> Option<Suit> {
        self.strategy.decide_trump_nomination(&self.hand, revealed)
    }

    pub(crate) fn choose_card(&mut self, trick: &Trick, trump: Suit) -> Card {
        self.strategy.choose_card(&self.hand, trick, trump)
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
