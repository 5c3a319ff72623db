use tracing::{debug, info};

use crate::card::Suit;
use crate::card_set::Trick;
use crate::error::RoundError;
use crate::player::Seat;
use crate::result::RoundScore;
use crate::score::team_round_points;
use crate::team::TeamId;
use crate::trick::resolve_trick;

use super::{Round, RoundState, TRICKS};

impl Round<'_> {
    /// Plays the next trick and returns the winning seat.
    ///
    /// Each player, from the current leader on, chooses one card through its
    /// strategy; the card leaves the hand and joins the trick. The winner
    /// leads next and its team collects the four cards. The team winning the
    /// eighth trick is marked for the last-trick bonus.
    ///
    /// # Errors
    ///
    /// Returns an error if trump has not been declared, all eight tricks
    /// are already played, or a strategy chooses a card its player does not
    /// hold. That last error aborts the round: cards already played to the
    /// trick are lost and no further step is accepted.
    pub fn play_trick(&mut self) -> Result<Seat, RoundError> {
        let index = match self.state {
            RoundState::TrumpDeclared => 0,
            RoundState::InTrick(n) if n + 1 < TRICKS => n + 1,
            _ => return Err(RoundError::InvalidState),
        };
        let trump = self.trump.ok_or(RoundError::InvalidState)?;
        self.run_trick(index, trump).map_err(|error| self.abort(error))
    }

    fn run_trick(&mut self, index: u8, trump: Suit) -> Result<Seat, RoundError> {
        let leader = self.leader;

        let mut trick = Trick::ranked(trump);
        for seat in leader.turn_order() {
            let player = self.table.player_mut(seat);
            let card = player.choose_card(&trick, trump);
            player
                .hand_mut()
                .remove(card)
                .map_err(|_| RoundError::CardNotInHand { seat, card })?;
            trick.add(card)?;
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.trick_played(&*self.table, leader, &trick);
        }

        let winner = resolve_trick(&trick, trump, leader)?;
        debug!(
            round = self.id,
            trick = index,
            winner = %winner,
            points = trick.total_points(),
            "Trick resolved"
        );

        let team = &mut self.table.teams_mut()[winner.team()];
        team.won_cards_mut().take_all(&mut trick)?;
        if index + 1 == TRICKS {
            team.set_won_last_trick();
        }

        self.leader = winner;
        self.transition(RoundState::InTrick(index));
        if let Some(observer) = self.observer.as_mut() {
            observer.trick_won(&*self.table, winner);
        }
        Ok(winner)
    }

    /// Settles the round: both teams' points under the contract rule are
    /// recorded and added to their totals.
    ///
    /// # Errors
    ///
    /// Returns an error unless all eight tricks have been played.
    pub fn score(&mut self) -> Result<RoundScore, RoundError> {
        if self.state != RoundState::InTrick(TRICKS - 1) {
            return Err(RoundError::InvalidState);
        }
        let declaration = self.declaration.ok_or(RoundError::InvalidState)?;

        for team in self.table.teams_mut().iter_mut() {
            let points = team_round_points(team);
            team.record_round_points(points);
        }

        let teams = self.table.teams();
        let score = RoundScore {
            declarer: declaration.seat.team(),
            team_a: teams[TeamId::A].round_points(),
            team_b: teams[TeamId::B].round_points(),
        };
        info!(
            round = self.id,
            declarer = %score.declarer,
            team_a = score.team_a,
            team_b = score.team_b,
            contract_made = score.contract_made(),
            "Round scored"
        );
        self.transition(RoundState::Scored);

        if let Some(observer) = self.observer.as_mut() {
            observer.round_ended(&*self.table, &score);
        }
        Ok(score)
    }
}
