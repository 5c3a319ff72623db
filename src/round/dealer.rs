use tracing::debug;

use crate::card::Card;
use crate::card_set::HAND_CAPACITY;
use crate::error::{DealError, RoundError};
use crate::player::Seat;

use super::{Round, RoundState};

impl Round<'_> {
    fn give_cards(&mut self, seat: Seat, count: usize) -> Result<(), DealError> {
        for _ in 0..count {
            let card = self
                .stock
                .draw_first()
                .map_err(|_| DealError::StockExhausted)?;
            self.table.player_mut(seat).hand_mut().add(card)?;
        }
        Ok(())
    }

    /// Two cards to each player in turn order, then three more each.
    fn first_distribution(&mut self) -> Result<(), DealError> {
        for count in [2, 3] {
            for seat in self.leader.turn_order() {
                self.give_cards(seat, count)?;
            }
        }
        Ok(())
    }

    /// Tops every hand up to eight cards: three for the players at five,
    /// two for the player who took the revealed card.
    pub(super) fn final_distribution(&mut self) -> Result<(), DealError> {
        for seat in self.leader.turn_order() {
            let missing = HAND_CAPACITY - self.table.player(seat).hand().len();
            self.give_cards(seat, missing)?;
        }
        debug!(round = self.id, remaining = self.stock.len(), "Deal completed");
        Ok(())
    }

    /// Shuffles, deals five cards to each player and reveals the bidding card.
    ///
    /// Returns the revealed card. Hands left over from an earlier round are
    /// emptied first.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the created state or the
    /// stock runs out. Running out aborts the round.
    pub fn deal(&mut self) -> Result<Card, RoundError> {
        if self.state != RoundState::Created {
            return Err(RoundError::InvalidState);
        }
        self.deal_first_cards().map_err(|error| self.abort(error))
    }

    fn deal_first_cards(&mut self) -> Result<Card, RoundError> {
        if let Some(observer) = self.observer.as_mut() {
            observer.round_started(&*self.table, self.id, self.leader);
        }

        for seat in Seat::ALL {
            self.table.player_mut(seat).hand_mut().clear();
        }
        for team in self.table.teams_mut().iter_mut() {
            team.reset_round();
        }

        self.seed_stock();
        self.first_distribution()?;
        let revealed = self
            .stock
            .draw_first()
            .map_err(|_| DealError::StockExhausted)?;
        self.revealed = Some(revealed);

        debug!(round = self.id, leader = %self.leader, %revealed, "Card revealed");
        self.transition(RoundState::Dealt);
        Ok(revealed)
    }
}
