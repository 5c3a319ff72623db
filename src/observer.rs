//! Round notifications for commentary and UIs.

use core::fmt::{self, Write};

use crate::card_set::Trick;
use crate::player::Seat;
use crate::result::{Declaration, RoundScore};
use crate::team::Table;

/// Receives informational events from a round.
///
/// Observers see the table read-only and cannot influence play. Every method
/// has an empty default so implementors only pick the events they need.
pub trait RoundObserver {
    /// A round is about to be dealt.
    fn round_started(&mut self, _table: &Table, _round: u32, _leader: Seat) {}

    /// Trump has been declared and the deal completed.
    fn trump_declared(&mut self, _table: &Table, _declaration: &Declaration) {}

    /// All four cards of a trick are on the table.
    fn trick_played(&mut self, _table: &Table, _leader: Seat, _trick: &Trick) {}

    /// A trick has been resolved.
    fn trick_won(&mut self, _table: &Table, _winner: Seat) {}

    /// Points have been settled.
    fn round_ended(&mut self, _table: &Table, _score: &RoundScore) {}

    /// Nobody declared trump.
    fn round_abandoned(&mut self, _table: &Table, _round: u32) {}
}

/// An observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}

/// Writes a plain-English account of each round to `out`.
///
/// ```
/// use belote::{Commentator, FirstLegalCard, Player, RoundObserver, Seat, Table};
///
/// let names = ["Alex", "Marie", "Thibaud", "Veltin"];
/// let table = Table::new(names.map(|name| Player::new(name, FirstLegalCard)));
///
/// let mut commentator = Commentator::new(String::new());
/// commentator.trick_won(&table, Seat::new(1));
/// commentator.round_abandoned(&table, 3);
/// assert_eq!(commentator.into_inner(), "Marie wins.\nRound 3 not played.\n");
/// ```
#[derive(Debug)]
pub struct Commentator<W> {
    out: W,
}

impl<W: Write> Commentator<W> {
    /// Creates a commentator writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_trick(&mut self, table: &Table, leader: Seat, trick: &Trick) -> fmt::Result {
        for (i, (seat, card)) in leader.turn_order().iter().zip(trick.cards()).enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
            }
            write!(self.out, "{} plays {card}", table.player(*seat))?;
        }
        self.out.write_str(".\n")
    }

    fn write_score(&mut self, score: &RoundScore) -> fmt::Result {
        writeln!(self.out)?;
        writeln!(self.out, "Team A: {} points.", score.team_a)?;
        writeln!(self.out, "Team B: {} points.", score.team_b)?;
        let best = if score.team_a >= score.team_b { "A" } else { "B" };
        writeln!(self.out, "Team {best} wins!")
    }
}

// Write errors are dropped: commentary must never disturb the round.
impl<W: Write> RoundObserver for Commentator<W> {
    fn round_started(&mut self, _table: &Table, round: u32, _leader: Seat) {
        let _ = write!(self.out, "\nRound {round}\n");
    }

    fn trump_declared(&mut self, _table: &Table, declaration: &Declaration) {
        let _ = writeln!(self.out, "Trump suit will be {}.", declaration.trump);
    }

    fn trick_played(&mut self, table: &Table, leader: Seat, trick: &Trick) {
        let _ = self.write_trick(table, leader, trick);
    }

    fn trick_won(&mut self, table: &Table, winner: Seat) {
        let _ = writeln!(self.out, "{} wins.", table.player(winner));
    }

    fn round_ended(&mut self, _table: &Table, score: &RoundScore) {
        let _ = self.write_score(score);
    }

    fn round_abandoned(&mut self, _table: &Table, round: u32) {
        let _ = writeln!(self.out, "Round {round} not played.");
    }
}
