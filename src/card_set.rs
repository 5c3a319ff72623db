//! Fixed-capacity, duplicate-free card containers.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, RankedCard, Suit};
use crate::error::CardSetError;

/// Maximum number of cards in a hand.
pub const HAND_CAPACITY: usize = 8;
/// Number of cards in a complete trick.
pub const TRICK_CAPACITY: usize = 4;

/// An insertion-ordered set of at most `CAP` distinct cards.
///
/// Once a trump suit is applied with [`CardSet::rank_relative_to`], every
/// card in the set (including cards added later) is seen through that trump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSet<const CAP: usize> {
    cards: Vec<Card>,
    trump: Option<Suit>,
}

/// A player's hand.
pub type Hand = CardSet<HAND_CAPACITY>;
/// The cards played in one trick, in play order.
pub type Trick = CardSet<TRICK_CAPACITY>;
/// The undealt cards, drawn from the front.
pub type Stock = CardSet<DECK_SIZE>;
/// The cards a team has won during a round.
pub type WonCards = CardSet<DECK_SIZE>;

impl<const CAP: usize> CardSet<CAP> {
    /// Creates an empty, unranked set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            trump: None,
        }
    }

    /// Creates an empty set ranked against `trump`.
    #[must_use]
    pub const fn ranked(trump: Suit) -> Self {
        Self {
            cards: Vec::new(),
            trump: Some(trump),
        }
    }

    /// Builds a set from `cards`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` holds a duplicate or more than `CAP` cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self, CardSetError> {
        let mut set = Self::new();
        for &card in cards {
            set.add(card)?;
        }
        Ok(set)
    }

    /// Returns the maximum number of cards this set holds.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Adds a card at the end.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the set unchanged, if the card is already
    /// present or the set is full.
    pub fn add(&mut self, card: Card) -> Result<(), CardSetError> {
        if self.cards.contains(&card) {
            return Err(CardSetError::Duplicate(card));
        }
        if self.cards.len() >= CAP {
            return Err(CardSetError::CapacityExceeded(CAP));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes `card`.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not present.
    pub fn remove(&mut self, card: Card) -> Result<(), CardSetError> {
        let index = self
            .cards
            .iter()
            .position(|c| *c == card)
            .ok_or(CardSetError::NotFound(card))?;
        self.cards.remove(index);
        Ok(())
    }

    /// Removes and returns the earliest-added card.
    ///
    /// # Errors
    ///
    /// Returns an error if the set is empty.
    pub fn draw_first(&mut self) -> Result<Card, CardSetError> {
        if self.cards.is_empty() {
            return Err(CardSetError::Empty);
        }
        Ok(self.cards.remove(0))
    }

    /// Returns whether `card` is in the set.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the cards in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index` in insertion order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the set holds `CAP` cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() == CAP
    }

    /// Returns the trump suit the set is ranked against, if any.
    #[must_use]
    pub const fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// Ranks every card, present and future, against `trump`.
    pub const fn rank_relative_to(&mut self, trump: Suit) {
        self.trump = Some(trump);
    }

    /// Returns the ranked view of each card, or an empty iterator while the
    /// set is unranked.
    pub fn ranked_cards(&self) -> impl Iterator<Item = RankedCard> + '_ {
        let trump = self.trump;
        self.cards
            .iter()
            .filter_map(move |card| trump.map(|t| card.rank_relative_to(t)))
    }

    /// Sums the point values of the cards. An unranked set is worth 0.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.ranked_cards().map(|c| u32::from(c.points())).sum()
    }

    /// Returns the cards of `suit`, in insertion order.
    pub fn of_suit(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.suit == suit)
    }

    /// Removes every card and forgets the trump suit.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.trump = None;
    }
}

impl CardSet<DECK_SIZE> {
    /// Creates a complete 32-card deck in suit-then-rank order.
    #[must_use]
    pub fn full_deck() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards, trump: None }
    }

    /// Moves every card of `other` to the end of this set.
    ///
    /// # Errors
    ///
    /// Returns an error on the first card that cannot be added. Cards added
    /// before it stay in this set and `other` is left as it was.
    pub fn take_all<const N: usize>(&mut self, other: &mut CardSet<N>) -> Result<(), CardSetError> {
        for &card in &other.cards {
            self.add(card)?;
        }
        other.cards.clear();
        Ok(())
    }

    /// Permutes the cards with `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Permutes the cards with a ChaCha8 stream seeded from `seed`, or with
    /// the thread-local generator when no seed is given.
    #[cfg(feature = "std")]
    pub fn shuffle_seeded(&mut self, seed: Option<u64>) {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        match seed {
            Some(seed) => self.shuffle(&mut ChaCha8Rng::seed_from_u64(seed)),
            None => self.shuffle(&mut rand::rng()),
        }
    }
}

impl<const CAP: usize> Default for CardSet<CAP> {
    fn default() -> Self {
        Self::new()
    }
}
