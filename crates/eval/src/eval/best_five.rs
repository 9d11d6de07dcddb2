// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards extraction.
use holdem_cards::{Card, Rank};

use super::{Counts, EvalError, HandCategory, check_cards, straight_high};

/// Returns the five cards that make the given category sorted by rank from
/// lowest to highest.
///
/// The category cards are completed with the highest remaining cards, for
/// example a pair returns the pair and the three highest kickers. Returns an
/// error if the set has fewer than five cards or the category is not present.
pub fn extract_best_five(cards: &[Card], category: HandCategory) -> Result<Vec<Card>, EvalError> {
    check_cards(cards)?;

    // Highest cards first so that taking from the front picks the best cards.
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let counts = Counts::new(cards);
    let combo = combination(&sorted, &counts, category)
        .ok_or(EvalError::CategoryNotPresent(category))?;

    let mut best = combo.clone();
    best.extend(sorted.iter().filter(|c| !combo.contains(c)).take(5 - combo.len()));
    best.sort_unstable();
    Ok(best)
}

/// The cards that define a category, at most five.
fn combination(sorted: &[Card], counts: &Counts, category: HandCategory) -> Option<Vec<Card>> {
    use HandCategory::*;
    let with_rank = |rank: Rank, n: usize| -> Vec<Card> {
        sorted.iter().filter(|c| c.rank() == rank).take(n).copied().collect()
    };

    let combo = match category {
        StraightFlush => {
            let (suit, high) = counts.straight_flush()?;
            sorted
                .iter()
                .filter(|c| c.suit() == suit && c.rank() <= high && c.rank() as u8 + 4 >= high as u8)
                .copied()
                .collect()
        }
        FourOfAKind => with_rank(counts.ranks_with(4).next()?, 4),
        FullHouse => {
            let (trips, pair) = counts.full_house()?;
            let mut combo = with_rank(trips, 3);
            combo.extend(with_rank(pair, 2));
            combo
        }
        Flush => {
            let suit = counts.flush_suit()?;
            sorted.iter().filter(|c| c.suit() == suit).take(5).copied().collect()
        }
        Straight => {
            let high = straight_high(counts.rank_mask())?;
            let mut combo = Vec::with_capacity(5);
            for card in sorted {
                let in_range = card.rank() <= high && card.rank() as u8 + 4 >= high as u8;
                if in_range && !combo.iter().any(|c: &Card| c.rank() == card.rank()) {
                    combo.push(*card);
                }
            }
            combo
        }
        ThreeOfAKind => with_rank(counts.ranks_with(3).next()?, 3),
        TwoPair => {
            let mut pairs = counts.ranks_with(2);
            let (high, low) = (pairs.next()?, pairs.next()?);
            let mut combo = with_rank(high, 2);
            combo.extend(with_rank(low, 2));
            combo
        }
        Pair => with_rank(counts.ranks_with(2).next()?, 2),
        HighCard => Vec::new(),
    };

    Some(combo)
}
