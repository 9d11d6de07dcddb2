// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Plays a table of equity bots against each other.
//!
//! ```bash
//! $ cargo r --release --example selfplay -- --players 4 --hands 100
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use holdem_bot::EquityBot;
use holdem_core::{
    poker::Chips,
    table::{Seat, Table, TableConfig},
};

static NICKNAMES: &[&str] = &["Alice", "Bob", "Carol", "Dave", "Frank", "Mike", "Nina", "Olga"];

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=8))]
    players: u8,
    /// Maximum number of hands to play.
    #[clap(long, default_value_t = 100)]
    hands: usize,
    /// Starting chips for each player.
    #[clap(long, default_value_t = 100)]
    chips: u32,
    /// Seed for a reproducible game.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let seats = NICKNAMES[..cli.players as usize]
        .iter()
        .map(|name| Seat::new(*name, Chips::new(cli.chips), EquityBot::default()))
        .collect();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut table = Table::with_rng(TableConfig::default(), seats, rng)?;
    while !table.is_game_over() && table.hands() < cli.hands {
        table.play_hand()?;
    }

    println!("Played {} hands", table.hands());
    for seat in table.seats() {
        println!("{:>8} {:>8}", seat.name, seat.chips.to_string());
    }

    Ok(())
}
