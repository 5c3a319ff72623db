//! Teams and the four-seat table.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::card_set::WonCards;
use crate::player::{Player, SEATS, Seat};

/// One of the two partnerships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TeamId {
    /// Seats 0 and 2.
    A,
    /// Seats 1 and 3.
    B,
}

impl TeamId {
    /// Both teams.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Returns the opposing team.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Returns the two seats of this team.
    #[must_use]
    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Self::A => [Seat::ALL[0], Seat::ALL[2]],
            Self::B => [Seat::ALL[1], Seat::ALL[3]],
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// A team's state for the current round plus its running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    declarer: bool,
    won_last_trick: bool,
    won: WonCards,
    round_points: u32,
    total_points: u32,
}

impl Team {
    /// Creates a team with no points.
    #[must_use]
    pub const fn new(id: TeamId) -> Self {
        Self {
            id,
            declarer: false,
            won_last_trick: false,
            won: WonCards::new(),
            round_points: 0,
            total_points: 0,
        }
    }

    /// Returns the team id.
    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    /// Returns whether this team declared trump and holds the contract.
    #[must_use]
    pub const fn is_declarer(&self) -> bool {
        self.declarer
    }

    /// Returns whether this team won the eighth trick.
    #[must_use]
    pub const fn won_last_trick(&self) -> bool {
        self.won_last_trick
    }

    /// Returns the cards won this round.
    #[must_use]
    pub const fn won_cards(&self) -> &WonCards {
        &self.won
    }

    /// Returns the points scored in the last settled round.
    #[must_use]
    pub const fn round_points(&self) -> u32 {
        self.round_points
    }

    /// Returns the points accumulated over all settled rounds.
    #[must_use]
    pub const fn total_points(&self) -> u32 {
        self.total_points
    }

    pub(crate) const fn set_declarer(&mut self, declarer: bool) {
        self.declarer = declarer;
    }

    pub(crate) const fn set_won_last_trick(&mut self) {
        self.won_last_trick = true;
    }

    pub(crate) const fn won_cards_mut(&mut self) -> &mut WonCards {
        &mut self.won
    }

    pub(crate) const fn record_round_points(&mut self, points: u32) {
        self.round_points = points;
        self.total_points += points;
    }

    /// Throws away the won cards and the per-round flags.
    pub(crate) fn reset_round(&mut self) {
        self.won.clear();
        self.declarer = false;
        self.won_last_trick = false;
    }
}

/// Both teams, indexed by [`TeamId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teams([Team; 2]);

impl Teams {
    /// Creates both teams with no points.
    #[must_use]
    pub const fn new() -> Self {
        Self([Team::new(TeamId::A), Team::new(TeamId::B)])
    }

    /// Iterates over both teams, A first.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.0.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Team> {
        self.0.iter_mut()
    }
}

impl Default for Teams {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<TeamId> for Teams {
    type Output = Team;

    fn index(&self, id: TeamId) -> &Team {
        &self.0[id.index()]
    }
}

impl IndexMut<TeamId> for Teams {
    fn index_mut(&mut self, id: TeamId) -> &mut Team {
        &mut self.0[id.index()]
    }
}

/// Four players in fixed seats and the two teams they form.
#[derive(Debug)]
pub struct Table {
    players: [Player; SEATS],
    teams: Teams,
}

impl Table {
    /// Seats `players` in order: the first and third partner against the
    /// second and fourth.
    #[must_use]
    pub const fn new(players: [Player; SEATS]) -> Self {
        Self {
            players,
            teams: Teams::new(),
        }
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub(crate) const fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Returns the players in seat order.
    #[must_use]
    pub const fn players(&self) -> &[Player; SEATS] {
        &self.players
    }

    /// Returns both teams.
    #[must_use]
    pub const fn teams(&self) -> &Teams {
        &self.teams
    }

    /// Returns the team playing in `seat`.
    #[must_use]
    pub fn team_of(&self, seat: Seat) -> &Team {
        &self.teams[seat.team()]
    }

    pub(crate) const fn teams_mut(&mut self) -> &mut Teams {
        &mut self.teams
    }
}
