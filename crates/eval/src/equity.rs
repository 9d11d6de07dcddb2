// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand equity estimation.
//!
//! The equity of a hand is computed enumerating every two cards hand an
//! opponent can hold given the cards the player can see, the unseen cards pool
//! has 50 cards preflop, 47 on the flop, 46 on the turn, and 45 on the river.
use log::debug;
use std::cmp::Ordering;

use holdem_cards::{Card, Deck};

use crate::eval::HandValue;

/// Returns the fraction of opponent hands this hand beats, counting ties as
/// half a win.
///
/// Returns 0 if there are no unseen cards to enumerate, callers should treat
/// this value as no information rather than as the weakest hand.
pub fn estimate_equity(hole_cards: [Card; 2], community_cards: &[Card]) -> f64 {
    debug_assert!(community_cards.len() <= 5);

    let mut player = hole_cards.to_vec();
    player.extend_from_slice(community_cards);
    let player_value = HandValue::eval_any(&player);

    let mut deck = Deck::default();
    for card in &player {
        deck.remove(*card);
    }

    let (mut ahead, mut tied, mut behind) = (0u32, 0u32, 0u32);
    let mut opponent = Vec::with_capacity(community_cards.len() + 2);

    deck.for_each(2, |opponent_hole| {
        opponent.clear();
        opponent.extend_from_slice(community_cards);
        opponent.extend_from_slice(opponent_hole);

        match player_value.cmp(&HandValue::eval_any(&opponent)) {
            Ordering::Greater => ahead += 1,
            Ordering::Equal => tied += 1,
            Ordering::Less => behind += 1,
        }
    });

    let total = ahead + tied + behind;
    debug!(
        "Equity for {} {} on {} cards board: ahead={ahead} tied={tied} behind={behind}",
        hole_cards[0],
        hole_cards[1],
        community_cards.len()
    );

    if total == 0 {
        0.0
    } else {
        (f64::from(ahead) + f64::from(tied) / 2.0) / f64::from(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn hole(s: &str) -> [Card; 2] {
        let c = cards(s);
        [c[0], c[1]]
    }

    #[test]
    fn equity_is_bounded() {
        let boards = ["", "2c 7d 9s", "2c 7d 9s Jh", "2c 7d 9s Jh Kc"];
        let hands = ["3d 4d", "Ks Kh", "7c 7h", "Ah Qd"];

        for board in boards {
            for hand in hands {
                let equity = estimate_equity(hole(hand), &cards(board));
                assert!((0.0..=1.0).contains(&equity), "{hand} {board} {equity}");
            }
        }
    }

    #[test]
    fn equity_grows_with_hand_strength() {
        let board = cards("2c 7d 9s Jh Kc");

        let high_card = estimate_equity(hole("3d 4d"), &board);
        let pair = estimate_equity(hole("3d 3h"), &board);
        let two_pair = estimate_equity(hole("9d 7h"), &board);
        let trips = estimate_equity(hole("Kd Kh"), &board);
        let straight = estimate_equity(hole("10d Qh"), &board);

        assert!(high_card <= pair);
        assert!(pair <= two_pair);
        assert!(two_pair <= trips);
        assert!(trips <= straight);
    }

    #[test]
    fn nuts_on_the_river() {
        // The only opponent straight flush is the lower 7h 8h.
        let board = cards("9h 10h Jh 2c 5d");
        let equity = estimate_equity(hole("Qh Kh"), &board);
        assert_eq!(equity, 1.0);
    }

    #[test]
    fn board_plays_for_everyone() {
        // Every opponent hand plays the board straight flush, ties count half.
        let board = cards("2h 3h 4h 5h 6h");
        let equity = estimate_equity(hole("8c 9d"), &board);
        assert!(equity <= 0.5);
        assert!(equity > 0.0);
    }
}
