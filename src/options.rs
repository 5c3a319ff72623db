//! Game configuration options.

use crate::player::Seat;

/// Configuration options for a Belote game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use belote::{GameOptions, Seat};
///
/// let options = GameOptions::default()
///     .with_target_score(500)
///     .with_max_rounds(50)
///     .with_first_leader(Seat::new(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The game ends once a team's total is strictly above this.
    pub target_score: u32,
    /// Maximum number of rounds, abandoned ones included.
    pub max_rounds: u32,
    /// Seat that leads the first round.
    pub first_leader: Seat,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            target_score: 1000,
            max_rounds: 200,
            first_leader: Seat::new(0),
        }
    }
}

impl GameOptions {
    /// Sets the target score.
    ///
    /// # Example
    ///
    /// ```
    /// use belote::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(500);
    /// assert_eq!(options.target_score, 500);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Sets the round limit.
    ///
    /// # Example
    ///
    /// ```
    /// use belote::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(12);
    /// assert_eq!(options.max_rounds, 12);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Sets the seat that leads the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use belote::{GameOptions, Seat};
    ///
    /// let options = GameOptions::default().with_first_leader(Seat::new(3));
    /// assert_eq!(options.first_leader, Seat::new(3));
    /// ```
    #[must_use]
    pub const fn with_first_leader(mut self, seat: Seat) -> Self {
        self.first_leader = seat;
        self
    }
}
