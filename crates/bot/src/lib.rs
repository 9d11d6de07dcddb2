// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker automated player.
//!
//! The [EquityBot] strategy sizes its decisions on the equity of its hand
//! against every hand an opponent may hold.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use log::debug;

use holdem_core::{
    action::PlayerAction,
    poker::Chips,
    strategy::{ActionRequest, Strategy, TableView},
};
use holdem_eval::estimate_equity;

/// A strategy driven by the hand equity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquityBot {
    /// Call a wager larger than the stack above this equity.
    pub all_in_threshold: f64,
    /// Bet or raise above this equity.
    pub raise_threshold: f64,
    /// Call a wager above this equity.
    pub call_threshold: f64,
}

impl Default for EquityBot {
    fn default() -> Self {
        Self {
            all_in_threshold: 0.5,
            raise_threshold: 0.4,
            call_threshold: 0.2,
        }
    }
}

impl EquityBot {
    /// Chooses an action for the request given the hand equity.
    ///
    /// Bets and raises put one big blind over the amount owed.
    pub fn decide(&self, req: &ActionRequest, equity: f64) -> (PlayerAction, Chips) {
        if req.to_call > req.chips {
            if equity > self.all_in_threshold {
                (PlayerAction::Call, Chips::ZERO)
            } else {
                (PlayerAction::Fold, Chips::ZERO)
            }
        } else if req.to_call > Chips::ZERO {
            if equity > self.raise_threshold && req.can_raise() {
                let amount = (req.to_call + req.big_blind).min(req.chips);
                (PlayerAction::Raise, amount)
            } else if equity > self.call_threshold {
                (PlayerAction::Call, Chips::ZERO)
            } else {
                (PlayerAction::Fold, Chips::ZERO)
            }
        } else if equity > self.raise_threshold && req.can_bet() {
            // A bet must leave some chips in the stack.
            let amount = req.big_blind.min(req.chips - Chips::new(1));
            (PlayerAction::Bet, amount)
        } else {
            (PlayerAction::Check, Chips::ZERO)
        }
    }
}

impl Strategy for EquityBot {
    fn execute(&mut self, req: &ActionRequest, view: &TableView<'_>) -> (PlayerAction, Chips) {
        let Some(hole_cards) = view.hole_cards() else {
            return (PlayerAction::Fold, Chips::ZERO);
        };

        let equity = estimate_equity(hole_cards, view.board());
        debug!(
            "{} {} {} equity {equity:.3} on {}",
            view.player().name(),
            hole_cards[0],
            hole_cards[1],
            view.phase()
        );

        self.decide(req, equity)
    }
}
