use tracing::info;

use crate::card::Card;
use crate::error::RoundError;
use crate::player::Seat;
use crate::result::Declaration;

use super::{Round, RoundState};

impl Round<'_> {
    /// First pass: who takes the revealed suit?
    fn first_pass(&mut self, revealed: Card) -> Option<Declaration> {
        self.leader
            .turn_order()
            .into_iter()
            .find(|&seat| self.table.player_mut(seat).decide_start(revealed))
            .map(|seat| Declaration {
                seat,
                trump: revealed.suit,
                accepted_revealed: true,
            })
    }

    /// Second pass: who names a suit of their choice?
    fn second_pass(&mut self, revealed: Card) -> Option<Declaration> {
        self.leader.turn_order().into_iter().find_map(|seat| {
            self.table
                .player_mut(seat)
                .decide_trump_nomination(revealed)
                .map(|trump| Declaration {
                    seat,
                    trump,
                    accepted_revealed: false,
                })
        })
    }

    fn apply_declaration(
        &mut self,
        declaration: Declaration,
        revealed: Card,
    ) -> Result<(), RoundError> {
        let trump = declaration.trump;
        let declarer = declaration.seat.team();
        let teams = self.table.teams_mut();
        teams[declarer].set_declarer(true);
        teams[declarer.other()].set_declarer(false);
        for team in teams.iter_mut() {
            team.won_cards_mut().rank_relative_to(trump);
        }

        for seat in Seat::ALL {
            self.table.player_mut(seat).hand_mut().rank_relative_to(trump);
        }
        self.table
            .player_mut(declaration.seat)
            .hand_mut()
            .add(revealed)?;

        self.trump = Some(trump);
        self.declaration = Some(declaration);
        self.final_distribution()?;
        Ok(())
    }

    /// Runs the two bidding passes over the revealed card.
    ///
    /// On a declaration the declarer's team takes the contract, every hand
    /// is ranked against the trump, the declarer receives the revealed card
    /// and the deal is completed to eight cards each. If every player passes
    /// twice the round is abandoned and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealt state or the stock
    /// runs out while completing the deal. Running out aborts the round.
    pub fn declare_trump(&mut self) -> Result<Option<Declaration>, RoundError> {
        if self.state != RoundState::Dealt {
            return Err(RoundError::InvalidState);
        }
        let revealed = self.revealed.ok_or(RoundError::InvalidState)?;

        let declaration = match self.first_pass(revealed) {
            Some(declaration) => Some(declaration),
            None => self.second_pass(revealed),
        };
        let Some(declaration) = declaration else {
            self.abandon();
            return Ok(None);
        };

        if let Err(error) = self.apply_declaration(declaration, revealed) {
            return Err(self.abort(error));
        }
        info!(
            round = self.id,
            seat = %declaration.seat,
            trump = %declaration.trump,
            team = %declaration.seat.team(),
            "Trump declared"
        );
        self.transition(RoundState::TrumpDeclared);

        if let Some(observer) = self.observer.as_mut() {
            observer.trump_declared(&*self.table, &declaration);
        }
        Ok(Some(declaration))
    }
}
