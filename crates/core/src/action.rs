// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player actions and action errors.
use std::fmt;
use thiserror::Error;

use crate::poker::Chips;

/// A player action.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PlayerAction {
    /// No action.
    #[default]
    None,
    /// Player pays small blind.
    SmallBlind,
    /// Player pays big blind.
    BigBlind,
    /// Player calls.
    Call,
    /// Player checks.
    Check,
    /// Player bets.
    Bet,
    /// Player raises.
    Raise,
    /// Player folds.
    Fold,
}

impl PlayerAction {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::SmallBlind => "SB",
            PlayerAction::BigBlind => "BB",
            PlayerAction::Call => "CALL",
            PlayerAction::Check => "CHECK",
            PlayerAction::Bet => "BET",
            PlayerAction::Raise => "RAISE",
            PlayerAction::Fold => "FOLD",
            PlayerAction::None => "",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An illegal action, the table state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The seat is not the seat to act.
    #[error("seat {0} is not the seat to act")]
    NotYourTurn(usize),
    /// The player has folded or was forced out of the hand.
    #[error("seat {0} is not active in the hand")]
    NotActive(usize),
    /// There is no betting round in progress.
    #[error("betting is closed")]
    BettingClosed,
    /// A raise must put in more than the amount owed.
    #[error("raise of {amount} must be more than {required}")]
    RaiseTooSmall {
        /// The raise amount.
        amount: Chips,
        /// The amount owed.
        required: Chips,
    },
    /// The amount is more than the player chips.
    #[error("amount {amount} exceeds the player stack of {chips}")]
    ExceedsStack {
        /// The action amount.
        amount: Chips,
        /// The player chips.
        chips: Chips,
    },
    /// A bet must be positive and smaller than the player chips.
    #[error("invalid bet of {0}")]
    InvalidBet(Chips),
    /// A bet is only possible when nothing is owed.
    #[error("cannot bet facing a wager of {0}, call or raise")]
    BetFacingWager(Chips),
    /// A check is only possible when nothing is owed.
    #[error("cannot check facing a wager of {0}")]
    CheckFacingWager(Chips),
    /// A call needs an amount owed.
    #[error("nothing to call")]
    NothingToCall,
    /// The action cannot be chosen by a player.
    #[error("action {0:?} cannot be played")]
    Unsupported(PlayerAction),
}
