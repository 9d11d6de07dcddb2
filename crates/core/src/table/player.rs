// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use crate::{
    action::PlayerAction,
    poker::{Card, Chips},
};

/// A player state for one hand.
#[derive(Debug, Clone)]
pub struct PlayerState {
    name: String,
    chips: Chips,
    contribution: Chips,
    hole_cards: Option<[Card; 2]>,
    is_active: bool,
    action: PlayerAction,
}

impl PlayerState {
    /// Creates a new player, a player with no chips doesn't take part in the hand.
    pub fn new(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
            contribution: Chips::ZERO,
            hole_cards: None,
            is_active: chips > Chips::ZERO,
            action: PlayerAction::None,
        }
    }

    /// The player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The chips left in the player stack.
    pub fn chips(&self) -> Chips {
        self.chips
    }

    /// The chips this player has put in the pot in this hand.
    pub fn contribution(&self) -> Chips {
        self.contribution
    }

    /// Checks if the player is still in the hand.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Checks if the player has put all its chips in the pot.
    pub fn is_all_in(&self) -> bool {
        self.is_active && self.chips == Chips::ZERO
    }

    /// The last player action.
    pub fn action(&self) -> PlayerAction {
        self.action
    }

    pub(crate) fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole_cards
    }

    pub(crate) fn deal(&mut self, c1: Card, c2: Card) {
        self.hole_cards = Some([c1, c2]);
    }

    /// Moves up to `amount` chips into the pot and returns the chips paid, a
    /// player with fewer chips goes all in.
    pub(crate) fn pay(&mut self, action: PlayerAction, amount: Chips) -> Chips {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.contribution += paid;
        self.action = action;
        paid
    }

    pub(crate) fn check(&mut self) {
        self.action = PlayerAction::Check;
    }

    pub(crate) fn fold(&mut self) {
        self.is_active = false;
        self.action = PlayerAction::Fold;
    }

    pub(crate) fn win(&mut self, chips: Chips) {
        self.chips += chips;
    }

    /// Clears the last action at the start of a betting round.
    pub(crate) fn start_round(&mut self) {
        if self.is_active {
            self.action = PlayerAction::None;
        }
    }
}
