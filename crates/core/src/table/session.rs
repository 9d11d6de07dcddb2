// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand session driver.
use log::{error, info, warn};

use crate::strategy::ActionRequest;

use super::{
    Seat,
    state::{HandResult, TableState},
};

/// Runs one hand to the end asking each seat strategy for its actions.
#[derive(Debug)]
pub struct HandSession<'a> {
    state: TableState,
    seats: &'a mut [Seat],
}

impl<'a> HandSession<'a> {
    /// Consecutive rejected actions before a seat is folded.
    pub const MAX_REJECTED_ACTIONS: usize = 3;

    /// Creates a session for a hand state with a strategy for each seat.
    ///
    /// Panics if the number of seats doesn't match the number of players.
    pub fn new(state: TableState, seats: &'a mut [Seat]) -> Self {
        assert_eq!(state.players().len(), seats.len(), "One seat per player");
        Self { state, seats }
    }

    /// The hand state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Plays the hand to the end and updates the seats chips.
    pub fn run(mut self) -> HandResult {
        let result = loop {
            self.betting_round();
            if let Some(result) = self.state.next_phase() {
                break result;
            }
        };

        for winner in &result.winners {
            match winner.category {
                Some(category) => info!("{} wins {} with {category}", winner.name, winner.payout),
                None => info!("{} wins {}", winner.name, winner.payout),
            }
        }

        for (seat, player) in self.seats.iter_mut().zip(self.state.players()) {
            seat.chips = player.chips();
        }

        result
    }

    fn betting_round(&mut self) {
        loop {
            if let Some(req) = self.state.action_request() {
                self.request_action(&req);
            }

            if !self.state.next_turn() {
                break;
            }
        }
    }

    fn request_action(&mut self, req: &ActionRequest) {
        let seat = req.seat;

        for attempt in 1..=Self::MAX_REJECTED_ACTIONS {
            let view = self.state.view(seat);
            let (action, amount) = self.seats[seat].strategy.execute(req, &view);
            match self.state.apply(seat, action, amount) {
                Ok(()) => return,
                Err(e) => warn!(
                    "{} {action} {amount} rejected ({attempt}/{}): {e}",
                    self.seats[seat].name,
                    Self::MAX_REJECTED_ACTIONS
                ),
            }
        }

        warn!("Folding {} after rejected actions", self.seats[seat].name);
        if let Err(e) = self.state.fold(seat) {
            error!("Cannot fold {}: {e}", self.seats[seat].name);
        }
    }
}
