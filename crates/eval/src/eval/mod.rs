// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies a set of 5, 6, or 7 cards into a [HandCategory]
//! checking categories from the strongest to the weakest, the first category
//! present in the set wins. Hands with the same category are ranked comparing
//! the ranks of the whole set in descending order, see [compare].
//!
//! Straights are sequences of five consecutive rank values with the ace
//! always counting as 14, so `A 2 3 4 5` is not a straight.
//!
//! Pairs and full houses count ranks that appear exactly twice: two triples
//! without a pair are three of a kind, and three pairs are a pair, not two
//! pair. Both are known simplifications of the standard rules.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use holdem_cards::{Card, Rank, Suit};

mod best_five;
pub use best_five::extract_best_five;

/// Evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The set has fewer than five cards.
    #[error("a hand needs at least 5 cards, got {count}")]
    NotEnoughCards {
        /// Number of cards in the set.
        count: usize,
    },
    /// The same card appears twice in the set.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// The category is not present in the set.
    #[error("no {0} in the given cards")]
    CategoryNotPresent(HandCategory),
}

/// Display label and comparison value for each category, indexed by category.
const CATEGORY_INFO: [(&str, u8); 9] = [
    ("High Card", 0),
    ("Pair", 1),
    ("Two Pair", 2),
    ("Three of a Kind", 3),
    ("Straight", 4),
    ("Flush", 5),
    ("Full House", 6),
    ("Four of a Kind", 7),
    ("Straight Flush", 8),
];

/// A hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category.
    HighCard = 0,
    /// Two cards with the same rank.
    Pair,
    /// Exactly two pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

impl HandCategory {
    /// Returns all categories from the strongest to the weakest, this is the
    /// order used to classify a hand.
    pub fn by_precedence() -> impl Iterator<Item = HandCategory> {
        use HandCategory::*;
        [
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            Pair,
            HighCard,
        ]
        .into_iter()
    }

    /// The category comparison value, from 0 for a high card to 8 for a
    /// straight flush.
    pub fn rank(&self) -> u8 {
        CATEGORY_INFO[*self as usize].1
    }

    /// The category display label.
    pub fn label(&self) -> &'static str {
        CATEGORY_INFO[*self as usize].0
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hand value made of its category and the tie-break key.
///
/// Values are ordered by category and then by tie-break key.
#[derive(Debug, Clone)]
pub struct HandValue {
    category: HandCategory,
    tie_break: Vec<Rank>,
}

impl HandValue {
    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The ranks of all the cards in the hand sorted from highest to lowest.
    pub fn tie_break(&self) -> &[Rank] {
        &self.tie_break
    }

    /// Evaluates a set of any size, sets with fewer than 5 cards can only be
    /// pairs, trips, or quads.
    pub(crate) fn eval_any(cards: &[Card]) -> Self {
        let counts = Counts::new(cards);
        let category = HandCategory::by_precedence()
            .find(|c| counts.has(*c))
            .unwrap_or(HandCategory::HighCard);

        Self {
            category,
            tie_break: sorted_ranks(cards),
        }
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| compare_ranks(&self.tie_break, &other.tie_break))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if let Some(high) = self.tie_break.first() {
            write!(f, " ({high} high)")?;
        }
        Ok(())
    }
}

/// Classifies a set of at least 5 cards.
///
/// The result does not depend on the cards order.
pub fn classify(cards: &[Card]) -> Result<HandValue, EvalError> {
    check_cards(cards)?;
    Ok(HandValue::eval_any(cards))
}

/// Compares two sets with the same category.
///
/// The sets ranks are sorted from highest to lowest and compared position by
/// position, the first different rank decides, if all ranks are the same the
/// hands are tied.
pub fn compare(hand1: &[Card], hand2: &[Card]) -> Result<Ordering, EvalError> {
    check_cards(hand1)?;
    check_cards(hand2)?;
    Ok(compare_ranks(&sorted_ranks(hand1), &sorted_ranks(hand2)))
}

fn check_cards(cards: &[Card]) -> Result<(), EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::NotEnoughCards { count: cards.len() });
    }

    let mut seen = [false; 52];
    for card in cards {
        if std::mem::replace(&mut seen[card.id()], true) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    Ok(())
}

fn sorted_ranks(cards: &[Card]) -> Vec<Rank> {
    let mut ranks = cards.iter().map(Card::rank).collect::<Vec<_>>();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}

fn compare_ranks(ranks1: &[Rank], ranks2: &[Rank]) -> Ordering {
    ranks1
        .iter()
        .zip(ranks2)
        .map(|(r1, r2)| r1.cmp(r2))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Rank and suit histograms of a set of cards.
struct Counts {
    ranks: [u8; 13],
    suits: [u8; 4],
    /// Rank bitmask for each suit.
    suit_ranks: [u16; 4],
}

impl Counts {
    fn new(cards: &[Card]) -> Self {
        let mut counts = Counts {
            ranks: [0; 13],
            suits: [0; 4],
            suit_ranks: [0; 4],
        };

        for card in cards {
            let (rank, suit) = (card.rank() as usize, card.suit() as usize);
            counts.ranks[rank] += 1;
            counts.suits[suit] += 1;
            counts.suit_ranks[suit] |= 1 << rank;
        }

        counts
    }

    fn has(&self, category: HandCategory) -> bool {
        use HandCategory::*;
        match category {
            StraightFlush => self.straight_flush().is_some(),
            FourOfAKind => self.ranks_with(4).next().is_some(),
            FullHouse => self.full_house().is_some(),
            Flush => self.flush_suit().is_some(),
            Straight => straight_high(self.rank_mask()).is_some(),
            ThreeOfAKind => self.ranks_with(3).next().is_some(),
            TwoPair => self.ranks_with(2).count() == 2,
            Pair => self.ranks_with(2).next().is_some(),
            HighCard => true,
        }
    }

    /// Ranks that appear exactly `count` times, from highest to lowest.
    fn ranks_with(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks()
            .rev()
            .filter(move |r| self.ranks[*r as usize] == count)
    }

    /// The highest three of a kind rank with the highest pair rank.
    fn full_house(&self) -> Option<(Rank, Rank)> {
        let trips = self.ranks_with(3).next()?;
        let pair = self.ranks_with(2).next()?;
        Some((trips, pair))
    }

    fn rank_mask(&self) -> u16 {
        self.suit_ranks.iter().fold(0, |acc, m| acc | m)
    }

    fn flush_suit(&self) -> Option<Suit> {
        Suit::suits().find(|s| self.suits[*s as usize] >= 5)
    }

    /// The suit and high rank of the highest straight flush.
    fn straight_flush(&self) -> Option<(Suit, Rank)> {
        Suit::suits()
            .filter_map(|s| straight_high(self.suit_ranks[s as usize]).map(|r| (s, r)))
            .max_by_key(|(_, r)| *r)
    }
}

/// Returns the high rank of the highest five consecutive ranks in the mask.
fn straight_high(mask: u16) -> Option<Rank> {
    const FIVE: u16 = 0b11111;
    Rank::ranks()
        .rev()
        .filter(|r| *r >= Rank::Six)
        .find(|r| {
            let low = *r as u16 - 4;
            (mask >> low) & FIVE == FIVE
        })
}
