// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table types.
use anyhow::{Result, bail, ensure};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::fmt;
use thiserror::Error;

use crate::{
    poker::{Chips, Deck},
    strategy::Strategy,
};

mod player;
mod session;
mod state;

pub use player::PlayerState;
pub use session::HandSession;
pub use state::{HandResult, Phase, TableState, Winner};

/// An invalid table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Blinds must be positive.
    #[error("blinds must be greater than zero")]
    ZeroBlind,
    /// The big blind is smaller than the small blind.
    #[error("big blind {big_blind} is smaller than the small blind {small_blind}")]
    BigBlindTooSmall {
        /// The small blind.
        small_blind: Chips,
        /// The big blind.
        big_blind: Chips,
    },
    /// The number of seats is out of range.
    #[error("a table has from 2 to 8 seats, got {0}")]
    InvalidSeats(usize),
}

/// The long lived table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// The small blind.
    pub small_blind: Chips,
    /// The big blind.
    pub big_blind: Chips,
    /// Maximum number of players.
    pub max_seats: usize,
}

impl TableConfig {
    /// Minimum number of seats.
    pub const MIN_SEATS: usize = 2;
    /// Maximum number of seats.
    pub const MAX_SEATS: usize = 8;

    /// Creates a configuration with a big blind twice the small blind.
    pub fn new(small_blind: Chips) -> Self {
        Self {
            small_blind,
            big_blind: small_blind * 2,
            max_seats: Self::MAX_SEATS,
        }
    }

    /// Checks the blinds and the number of seats.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.small_blind == Chips::ZERO || self.big_blind == Chips::ZERO {
            return Err(ConfigError::ZeroBlind);
        }

        if self.big_blind < self.small_blind {
            return Err(ConfigError::BigBlindTooSmall {
                small_blind: self.small_blind,
                big_blind: self.big_blind,
            });
        }

        if !(Self::MIN_SEATS..=Self::MAX_SEATS).contains(&self.max_seats) {
            return Err(ConfigError::InvalidSeats(self.max_seats));
        }

        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(Chips::new(1))
    }
}

/// A player seated at the table.
pub struct Seat {
    /// The player name.
    pub name: String,
    /// The player chips, updated at the end of each hand.
    pub chips: Chips,
    /// The player decision policy.
    pub strategy: Box<dyn Strategy>,
}

impl Seat {
    /// Creates a new seat.
    pub fn new(name: impl Into<String>, chips: Chips, strategy: impl Strategy + 'static) -> Self {
        Self {
            name: name.into(),
            chips,
            strategy: Box::new(strategy),
        }
    }
}

impl fmt::Debug for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seat")
            .field("name", &self.name)
            .field("chips", &self.chips)
            .finish_non_exhaustive()
    }
}

/// A table that plays hands with persistent stacks and a rotating dealer.
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    seats: Vec<Seat>,
    dealer: usize,
    hands: usize,
    rng: StdRng,
}

impl Table {
    /// Creates a new table.
    pub fn new(config: TableConfig, seats: Vec<Seat>) -> Result<Self> {
        Self::with_rng(config, seats, StdRng::from_os_rng())
    }

    /// Creates a new table with user initialized randomness.
    pub fn with_rng(config: TableConfig, seats: Vec<Seat>, rng: StdRng) -> Result<Self> {
        config.validate()?;

        if seats.len() < TableConfig::MIN_SEATS || seats.len() > config.max_seats {
            bail!(
                "A table needs from {} to {} players, got {}",
                TableConfig::MIN_SEATS,
                config.max_seats,
                seats.len()
            );
        }

        if let Some(seat) = seats.iter().find(|s| s.chips == Chips::ZERO) {
            bail!("Player {} has no chips", seat.name);
        }

        Ok(Self {
            config,
            seats,
            dealer: 0,
            hands: 0,
            rng,
        })
    }

    /// The table configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The players at the table.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// The dealer seat for the next hand.
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// Number of hands played.
    pub fn hands(&self) -> usize {
        self.hands
    }

    /// Checks if fewer than two players have chips.
    pub fn is_game_over(&self) -> bool {
        self.seats.iter().filter(|s| s.chips > Chips::ZERO).count() < 2
    }

    /// Plays a hand, then moves the button and removes players with no chips.
    pub fn play_hand(&mut self) -> Result<HandResult> {
        ensure!(!self.is_game_over(), "Not enough players with chips");

        self.hands += 1;
        info!(
            "Hand {} dealer {} blinds {}/{}",
            self.hands, self.seats[self.dealer].name, self.config.small_blind, self.config.big_blind
        );

        let players = self
            .seats
            .iter()
            .map(|s| PlayerState::new(s.name.clone(), s.chips))
            .collect();
        let state = TableState::new(
            players,
            self.dealer,
            self.config.small_blind,
            self.config.big_blind,
            Deck::new_and_shuffled(&mut self.rng),
        );

        let result = HandSession::new(state, &mut self.seats).run();
        self.rotate_dealer();

        Ok(result)
    }

    /// Removes the players with no chips and moves the button to the first
    /// seat after the dealer that still has chips.
    fn rotate_dealer(&mut self) {
        let next = self.dealer + 1;
        let removed_before = self.seats[..next.min(self.seats.len())]
            .iter()
            .filter(|s| s.chips == Chips::ZERO)
            .count();

        for seat in self.seats.iter().filter(|s| s.chips == Chips::ZERO) {
            info!("Player {} left the table with no chips", seat.name);
        }

        self.seats.retain(|s| s.chips > Chips::ZERO);
        if !self.seats.is_empty() {
            self.dealer = (next - removed_before) % self.seats.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        action::PlayerAction,
        strategy::{ActionRequest, TableView},
    };
    use ahash::AHashSet;

    /// Calls or checks, pushes all in with a pair.
    struct CallOrShove;

    impl Strategy for CallOrShove {
        fn execute(&mut self, req: &ActionRequest, view: &TableView<'_>) -> (PlayerAction, Chips) {
            let pair = view
                .hole_cards()
                .map(|[c1, c2]| c1.rank() == c2.rank())
                .unwrap_or(false);

            if pair && req.can_raise() {
                (PlayerAction::Raise, req.chips)
            } else if req.can_call() {
                (PlayerAction::Call, Chips::ZERO)
            } else {
                (PlayerAction::Check, Chips::ZERO)
            }
        }
    }

    /// Checks or folds.
    struct Passive;

    impl Strategy for Passive {
        fn execute(&mut self, req: &ActionRequest, _view: &TableView<'_>) -> (PlayerAction, Chips) {
            if req.can_check() {
                (PlayerAction::Check, Chips::ZERO)
            } else {
                (PlayerAction::Fold, Chips::ZERO)
            }
        }
    }

    fn new_table(stacks: &[u32], seed: u64) -> Table {
        let seats = stacks
            .iter()
            .enumerate()
            .map(|(idx, &chips)| Seat::new(format!("P{idx}"), Chips::new(chips), CallOrShove))
            .collect();
        Table::with_rng(TableConfig::default(), seats, StdRng::seed_from_u64(seed)).unwrap()
    }

    fn total_chips(table: &Table) -> Chips {
        table.seats().iter().map(|s| s.chips).sum()
    }

    #[test]
    fn config_validation() {
        assert_eq!(TableConfig::default().validate(), Ok(()));
        assert_eq!(TableConfig::new(Chips::new(5)).big_blind, Chips::new(10));

        let config = TableConfig::new(Chips::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBlind));

        let config = TableConfig {
            small_blind: Chips::new(10),
            big_blind: Chips::new(5),
            max_seats: 6,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BigBlindTooSmall { .. })
        ));

        let config = TableConfig {
            max_seats: 9,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSeats(9)));
        assert_eq!(
            ConfigError::InvalidSeats(9).to_string(),
            "a table has from 2 to 8 seats, got 9"
        );
    }

    #[test]
    fn table_needs_players() {
        let seats = vec![Seat::new("Alice", Chips::new(100), CallOrShove)];
        assert!(Table::new(TableConfig::default(), seats).is_err());

        let seats = (0..9)
            .map(|idx| Seat::new(format!("P{idx}"), Chips::new(100), CallOrShove))
            .collect();
        assert!(Table::new(TableConfig::default(), seats).is_err());

        let seats = vec![
            Seat::new("Alice", Chips::new(100), CallOrShove),
            Seat::new("Bob", Chips::ZERO, CallOrShove),
        ];
        assert!(Table::new(TableConfig::default(), seats).is_err());
    }

    #[test]
    fn dealer_rotates() {
        let seats = ["Alice", "Bob", "Carol"]
            .into_iter()
            .map(|name| Seat::new(name, Chips::new(100), Passive))
            .collect();
        let rng = StdRng::seed_from_u64(5);
        let mut table = Table::with_rng(TableConfig::default(), seats, rng).unwrap();
        assert_eq!(table.dealer(), 0);

        let mut dealers = vec![];
        for _ in 0..4 {
            let result = table.play_hand().unwrap();
            assert!(result.uncontested);
            dealers.push(table.dealer());
        }

        assert_eq!(dealers, vec![1, 2, 0, 1]);
        assert_eq!(table.hands(), 4);
        assert_eq!(total_chips(&table), Chips::new(300));
    }

    #[test]
    fn busted_players_leave() {
        fn names(table: &Table) -> Vec<&str> {
            table.seats().iter().map(|s| s.name.as_str()).collect()
        }

        let seats = ["Alice", "Bob", "Carol", "Dave"]
            .into_iter()
            .map(|name| Seat::new(name, Chips::new(100), Passive))
            .collect();
        let rng = StdRng::seed_from_u64(3);
        let mut table = Table::with_rng(TableConfig::default(), seats, rng).unwrap();

        // Bob was the next dealer, the button moves to Carol.
        table.seats[1].chips = Chips::ZERO;
        table.rotate_dealer();
        assert_eq!(names(&table), vec!["Alice", "Carol", "Dave"]);
        assert_eq!(table.dealer(), 1);

        // The dealer and a seat before it leave, the button moves to Dave.
        table.seats[0].chips = Chips::ZERO;
        table.seats[1].chips = Chips::ZERO;
        table.rotate_dealer();
        assert_eq!(names(&table), vec!["Dave"]);
        assert_eq!(table.dealer(), 0);
        assert!(table.is_game_over());
        assert!(table.play_hand().is_err());
    }

    #[test]
    fn chips_are_conserved() {
        let mut table = new_table(&[100, 80, 60, 40], 11);
        let mut total = total_chips(&table);
        assert_eq!(total, Chips::new(280));

        while !table.is_game_over() && table.hands() < 500 {
            let result = table.play_hand().unwrap();
            let after = total_chips(&table);
            assert_eq!(after + result.unawarded, total);
            total = after;

            let names = table.seats().iter().map(|s| s.name.clone()).collect::<AHashSet<_>>();
            assert_eq!(names.len(), table.seats().len());
            assert!(table.seats().iter().all(|s| s.chips > Chips::ZERO));
            assert!(table.dealer() < table.seats().len());
        }

        assert!(table.play_hand().is_err() || table.hands() == 500);
    }
}
