// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// Display label and comparison value for each rank, indexed by rank.
const RANK_INFO: [(&str, u8); 13] = [
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("10", 10),
    ("J", 11),
    ("Q", 12),
    ("K", 13),
    ("A", 14),
];

/// A Poker card.
///
/// Cards are ordered by rank first and by suit only to break ties between
/// cards of the same rank, use `sort_by_key(Card::rank)` for a rank only
/// ordering.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// This card unique id in the range 0..52.
    pub fn id(&self) -> usize {
        self.suit as usize * 13 + self.rank as usize
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Error returned when parsing a card from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank part is not a valid rank.
    #[error("invalid rank in card {0:?}")]
    InvalidRank(String),
    /// The suit part is not a valid suit.
    #[error("invalid suit in card {0:?}")]
    InvalidSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards like `Ah`, `10c`, `Td` or `K♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s
            .chars()
            .last()
            .ok_or_else(|| ParseCardError::InvalidSuit(s.to_string()))?;
        let rank_str = &s[..s.len() - suit_char.len_utf8()];

        let suit = match suit_char {
            'h' | 'H' | '♥' => Suit::Hearts,
            'd' | 'D' | '♦' => Suit::Diamonds,
            'c' | 'C' | '♣' => Suit::Clubs,
            's' | 'S' | '♠' => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit(s.to_string())),
        };

        let rank = match rank_str.to_ascii_uppercase().as_str() {
            "T" => Rank::Ten,
            label => Rank::ranks()
                .find(|r| r.label() == label)
                .ok_or_else(|| ParseCardError::InvalidRank(s.to_string()))?,
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The comparison value, from 2 for a deuce to 14 for an ace.
    ///
    /// The ace is always high, there is no ace low value.
    pub fn value(&self) -> u8 {
        RANK_INFO[*self as usize].1
    }

    /// The display label.
    pub fn label(&self) -> &'static str {
        RANK_INFO[*self as usize].0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the top of the deck.
    ///
    /// # Panics
    ///
    /// Panics if the deck is empty, a hand with at most 8 players never
    /// deals more than 21 cards.
    pub fn deal(&mut self) -> Card {
        match self.cards.pop() {
            Some(card) => card,
            None => panic!("No cards left in the deck"),
        }
    }

    /// Deals a card if the deck is not empty.
    pub fn try_deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards combination of the cards left
    /// in the deck.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Indices of the current combination in lexicographic order.
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can still move right.
            let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[pos] += 1;
            hand[pos] = self.cards[idx[pos]];
            for i in pos + 1..k {
                idx[i] = idx[i - 1] + 1;
                hand[i] = self.cards[idx[i]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

/// Builds a deck from the given cards, the last card is dealt first.
impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
