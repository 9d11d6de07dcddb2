// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem terminal game.
//!
//! Plays No-Limit Texas Hold'em against equity bots:
//!
//! ```bash
//! $ cargo r --release -- --players 4 --chips 200
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, ensure};
use clap::Parser;
use crossterm::style::{Stylize, style};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use holdem_bot::EquityBot;
use holdem_core::{
    poker::Chips,
    table::{Seat, Table, TableConfig},
};

mod history;
mod human;
mod terminal;

static NICKNAMES: &[&str] = &["Alice", "Bob", "Carol", "Dave", "Frank", "Mike", "Nina", "Olga"];

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players at the table.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=8))]
    players: u8,
    /// Starting chips for each player.
    #[clap(long, short, default_value_t = 100)]
    chips: u32,
    /// The small blind.
    #[clap(long, default_value_t = 1)]
    small_blind: u32,
    /// The big blind, twice the small blind if not set.
    #[clap(long)]
    big_blind: Option<u32>,
    /// Your nickname.
    #[clap(long, short, default_value = "You")]
    name: String,
    /// Maximum number of hands to play.
    #[clap(long)]
    hands: Option<usize>,
    /// Watch the bots play without a human player.
    #[clap(long)]
    bots_only: bool,
    /// Seed for a reproducible game.
    #[clap(long)]
    seed: Option<u64>,
    /// Write each hand result as a JSON line to this file.
    #[clap(long)]
    history: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    ensure!(cli.chips > 0, "Players need some chips to play");

    let mut config = TableConfig::new(Chips::new(cli.small_blind));
    if let Some(big_blind) = cli.big_blind {
        config.big_blind = Chips::new(big_blind);
    }
    config.validate()?;

    let chips = Chips::new(cli.chips);
    let mut seats = Vec::with_capacity(cli.players as usize);
    if !cli.bots_only {
        seats.push(Seat::new(&cli.name, chips, human::HumanPlayer::stdio()));
    }

    let bots = NICKNAMES
        .iter()
        .filter(|name| cli.bots_only || !name.eq_ignore_ascii_case(&cli.name))
        .take(cli.players as usize - seats.len());
    for name in bots {
        seats.push(Seat::new(*name, chips, EquityBot::default()));
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut hand_history = match &cli.history {
        Some(path) => Some(history::HandHistory::new(File::create(path)?)),
        None => None,
    };

    let mut table = Table::with_rng(config, seats, rng)?;
    let mut out = io::stdout();

    loop {
        writeln!(out, "\n{}", style(format!("Hand {}", table.hands() + 1)).bold())?;
        let result = table.play_hand()?;
        terminal::print_result(&mut out, &result)?;

        if let Some(history) = hand_history.as_mut() {
            history.record(table.hands(), &result, table.seats())?;
        }

        if table.is_game_over() {
            break;
        }

        if cli.hands.is_some_and(|hands| table.hands() >= hands) {
            break;
        }

        if !cli.bots_only {
            let busted = table.seats().iter().all(|s| s.name != cli.name);
            if busted {
                writeln!(out, "{}", "You are out of chips".red())?;
                break;
            }

            if !confirm(&mut out, "Play another hand? [Y/n] ")? {
                break;
            }
        }
    }

    writeln!(out, "\nPlayed {} hands", table.hands())?;
    terminal::print_standings(&mut out, table.seats())?;

    Ok(())
}

fn confirm(out: &mut impl Write, prompt: &str) -> io::Result<bool> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(false);
    }

    let answer = line.trim().to_lowercase();
    Ok(answer.is_empty() || answer == "y" || answer == "yes")
}
