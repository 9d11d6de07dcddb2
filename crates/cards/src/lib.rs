// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert!(kd < ah);
//! assert_eq!(ah.rank().value(), 14);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all the 2 cards hands an opponent may hold
//! once the player cards are known:
//!
//! ```
//! # use holdem_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::default();
//! deck.remove(Card::new(Rank::Ace, Suit::Hearts));
//! deck.remove(Card::new(Rank::Ace, Suit::Spades));
//!
//! let mut counter = 0;
//! deck.for_each(2, |hand| {
//!     assert_eq!(hand.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_225);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
