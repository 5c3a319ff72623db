//! Round and game result types.

use crate::card::Suit;
use crate::player::Seat;
use crate::team::TeamId;

/// The outcome of trump bidding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    /// Seat of the player who declared.
    pub seat: Seat,
    /// The declared trump suit.
    pub trump: Suit,
    /// `true` if the revealed suit was accepted on the first pass, `false`
    /// if the suit was nominated on the second.
    pub accepted_revealed: bool,
}

/// Points settled at the end of a played round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundScore {
    /// The team that held the contract.
    pub declarer: TeamId,
    /// Round points for team A.
    pub team_a: u32,
    /// Round points for team B.
    pub team_b: u32,
}

impl RoundScore {
    /// Returns the round points of `team`.
    #[must_use]
    pub const fn points(&self, team: TeamId) -> u32 {
        match team {
            TeamId::A => self.team_a,
            TeamId::B => self.team_b,
        }
    }

    /// Returns whether the declarer reached its contract.
    #[must_use]
    pub const fn contract_made(&self) -> bool {
        self.points(self.declarer) > 0
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Eight tricks were played and points settled.
    Scored(RoundScore),
    /// Nobody declared trump; the round is void.
    Abandoned,
}

/// Result of a complete game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The team past the target score, or `None` if the round limit was hit
    /// first.
    pub winner: Option<TeamId>,
    /// Cumulative points for team A.
    pub team_a: u32,
    /// Cumulative points for team B.
    pub team_b: u32,
    /// Rounds played, abandoned ones included.
    pub rounds_played: u32,
}
