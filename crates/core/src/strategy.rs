// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Decision policy types.
use crate::{
    action::PlayerAction,
    poker::{Card, Chips},
    table::{Phase, PlayerState, TableState},
};

/// A player decision policy.
pub trait Strategy {
    /// Chooses an action for the seat to act, the chips amount is only used for
    /// bet and raise actions.
    fn execute(&mut self, req: &ActionRequest, view: &TableView<'_>) -> (PlayerAction, Chips);
}

/// The legal action context for the seat to act.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    /// The seat to act.
    pub seat: usize,
    /// The legal actions.
    pub actions: Vec<PlayerAction>,
    /// The chips this seat owes to stay in the hand.
    pub to_call: Chips,
    /// The minimum raise amount.
    pub min_raise: Chips,
    /// The hand big blind.
    pub big_blind: Chips,
    /// The chips left in this seat stack.
    pub chips: Chips,
}

impl ActionRequest {
    /// Check if a call action is in the request.
    pub fn can_call(&self) -> bool {
        self.check_action(PlayerAction::Call)
    }

    /// Check if a check action is in the request.
    pub fn can_check(&self) -> bool {
        self.check_action(PlayerAction::Check)
    }

    /// Check if a bet action is in the request.
    pub fn can_bet(&self) -> bool {
        self.check_action(PlayerAction::Bet)
    }

    /// Check if a raise action is in the request.
    pub fn can_raise(&self) -> bool {
        self.check_action(PlayerAction::Raise)
    }

    fn check_action(&self, action: PlayerAction) -> bool {
        self.actions.iter().any(|a| a == &action)
    }
}

/// Read only view of the table for the seat to act.
///
/// Other players hole cards are not visible.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    state: &'a TableState,
    seat: usize,
}

impl<'a> TableView<'a> {
    pub(crate) fn new(state: &'a TableState, seat: usize) -> Self {
        Self { state, seat }
    }

    /// The seat this view belongs to.
    pub fn seat(&self) -> usize {
        self.seat
    }

    /// This seat hole cards.
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.state.players()[self.seat].hole_cards()
    }

    /// This seat player.
    pub fn player(&self) -> &'a PlayerState {
        &self.state.players()[self.seat]
    }

    /// All the players in seat order.
    pub fn players(&self) -> &'a [PlayerState] {
        self.state.players()
    }

    /// The community cards.
    pub fn board(&self) -> &'a [Card] {
        self.state.board()
    }

    /// The pot total.
    pub fn pot(&self) -> Chips {
        self.state.pot()
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The dealer seat.
    pub fn dealer(&self) -> usize {
        self.state.dealer()
    }
}
