// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker core types.
//!
//! The [TableState](table::TableState) is the betting state machine for one
//! hand, a [HandSession](table::HandSession) drives it to the end asking each
//! seat [Strategy](strategy::Strategy) for actions, and a [Table](table::Table)
//! plays hands with persistent stacks and a rotating dealer.
//!
//! ```
//! # use holdem_core::{action::PlayerAction, poker::*, table::*};
//! let players = vec![
//!     PlayerState::new("Alice", Chips::new(100)),
//!     PlayerState::new("Bob", Chips::new(100)),
//! ];
//! let deck = Deck::default();
//! let mut state = TableState::new(players, 0, Chips::new(1), Chips::new(2), deck);
//!
//! // Bob pays the small blind and acts first.
//! assert_eq!(state.pot(), Chips::new(3));
//! assert_eq!(state.current(), 1);
//! state.fold(1).unwrap();
//! assert!(!state.next_turn());
//!
//! let result = state.next_phase().unwrap();
//! assert!(result.uncontested);
//! assert_eq!(result.winners[0].name, "Alice");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod action;
pub mod poker;
pub mod strategy;
pub mod table;
