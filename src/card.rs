//! Card types and trump-relative ranking.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol.to_ascii_uppercase() {
            'C' => Ok(Self::Clubs),
            'D' => Ok(Self::Diamonds),
            'H' => Ok(Self::Hearts),
            'S' => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit(symbol)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Card rank within a suit. Belote plays with the 32-card deck, seven to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All eight ranks, in deck order.
    pub const ALL: [Self; 8] = [
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Order and point value when this rank belongs to the trump suit.
    const fn trump_weight(self) -> (u8, u8) {
        match self {
            Self::Seven => (0, 0),
            Self::Eight => (1, 0),
            Self::Queen => (2, 3),
            Self::King => (3, 4),
            Self::Ten => (4, 10),
            Self::Ace => (5, 11),
            Self::Nine => (6, 14),
            Self::Jack => (7, 20),
        }
    }

    /// Order and point value outside the trump suit.
    const fn plain_weight(self) -> (u8, u8) {
        match self {
            Self::Seven => (0, 0),
            Self::Eight => (1, 0),
            Self::Nine => (2, 0),
            Self::Jack => (3, 2),
            Self::Queen => (4, 3),
            Self::King => (5, 4),
            Self::Ten => (6, 10),
            Self::Ace => (7, 11),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol.to_ascii_uppercase() {
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            'T' => Ok(Self::Ten),
            'J' => Ok(Self::Jack),
            'Q' => Ok(Self::Queen),
            'K' => Ok(Self::King),
            'A' => Ok(Self::Ace),
            _ => Err(CardError::InvalidRank(symbol)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        };
        f.write_str(name)
    }
}

/// A playing card. Identity is the `(suit, rank)` pair and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the view of this card once `trump` has been declared.
    #[must_use]
    pub const fn rank_relative_to(self, trump: Suit) -> RankedCard {
        let is_trump = self.suit as u8 == trump as u8;
        let (order, points) = if is_trump {
            self.rank.trump_weight()
        } else {
            self.rank.plain_weight()
        };
        RankedCard {
            card: self,
            is_trump,
            order,
            points,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Parses a two-character code such as `"JC"` (jack of clubs) or `"TH"`
/// (ten of hearts): rank symbol first, suit symbol second.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let mut chars = code.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::InvalidCode);
        };
        Ok(Self::new(Suit::try_from(suit)?, Rank::try_from(rank)?))
    }
}

/// A card seen relative to a declared trump suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankedCard {
    card: Card,
    is_trump: bool,
    order: u8,
    points: u8,
}

impl RankedCard {
    /// Returns the underlying card.
    #[must_use]
    pub const fn card(&self) -> Card {
        self.card
    }

    /// Returns the suit of the underlying card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.card.suit
    }

    /// Returns whether the card belongs to the trump suit.
    #[must_use]
    pub const fn is_trump(&self) -> bool {
        self.is_trump
    }

    /// Returns the order used to compare cards of the same suit (0..=7).
    #[must_use]
    pub const fn order(&self) -> u8 {
        self.order
    }

    /// Returns the scoring weight of the card.
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.points
    }

    /// Returns whether this card beats `other`.
    ///
    /// Trick resolution only asks this of cards that are trumps or follow
    /// the demanded suit.
    #[must_use]
    pub const fn beats(&self, other: &Self) -> bool {
        let by_trump = self.is_trump && !other.is_trump;
        let by_order = self.card.suit as u8 == other.card.suit as u8 && self.order > other.order;
        by_trump || by_order
    }
}

impl fmt::Display for RankedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.card, f)
    }
}

/// Number of cards in a Belote deck.
pub const DECK_SIZE: usize = 32;
