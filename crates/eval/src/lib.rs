// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker hand evaluator.
//!
//! Evaluator for Texas Hold'em hands of 5, 6 and 7 cards that classifies a hand
//! into a [HandCategory], extracts the five cards that make the hand, compares
//! hands, and estimates a hand equity against every possible opponent hand.
//!
//! To classify and compare hands:
//!
//! ```
//! # use holdem_eval::*;
//! let board = ["Kc", "9s", "3s", "5d", "Jh"].map(|c| c.parse::<Card>().unwrap());
//!
//! let mut kings = vec!["Kd".parse::<Card>().unwrap(), "2c".parse().unwrap()];
//! kings.extend_from_slice(&board);
//! let mut nines = vec!["9d".parse::<Card>().unwrap(), "Ac".parse().unwrap()];
//! nines.extend_from_slice(&board);
//!
//! let v1 = classify(&kings).unwrap();
//! let v2 = classify(&nines).unwrap();
//! assert_eq!(v1.category(), HandCategory::Pair);
//! assert_eq!(v2.category(), HandCategory::Pair);
//! assert!(v2 > v1);
//! ```
//!
//! Same category hands are compared using the ranks of all the cards, so the
//! nines with an ace beat the kings with a deuce.
//!
//! To estimate a hand equity against all the opponent hole cards:
//!
//! ```
//! # use holdem_eval::*;
//! let hole = [Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::Ace, Suit::Spades)];
//! let equity = estimate_equity(hole, &[]);
//! assert!(equity > 0.5 && equity <= 1.0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod equity;
pub mod eval;
pub use equity::estimate_equity;
pub use eval::{EvalError, HandCategory, HandValue, classify, compare, extract_best_five};

// Reexport cards types.
pub use holdem_cards::{Card, Deck, ParseCardError, Rank, Suit};
