// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --example equity -- --hole "Ah Kh" --board "Qh Jh 2c"
// ```
use clap::Parser;
use rand::prelude::*;
use std::time::Instant;

use holdem_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The two hole cards (eg. "Ah Kd"), random if not given.
    #[clap(long)]
    hole: Option<String>,
    /// The community cards (eg. "Qh Jh 2c").
    #[clap(long, default_value = "")]
    board: String,
}

fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let board = parse_cards(&cli.board)?;
    anyhow::ensure!(board.len() <= 5, "the board has at most 5 cards");

    let hole = match cli.hole {
        Some(hole) => parse_cards(&hole)?,
        None => {
            let mut deck = Deck::new_and_shuffled(&mut rand::rng());
            board.iter().for_each(|c| deck.remove(*c));
            vec![deck.deal(), deck.deal()]
        }
    };
    anyhow::ensure!(hole.len() == 2, "there must be 2 hole cards");

    let mut cards = hole.clone();
    cards.extend_from_slice(&board);
    if let Ok(value) = classify(&cards) {
        let best = extract_best_five(&cards, value.category())?;
        let best = best.iter().map(Card::to_string).collect::<Vec<_>>();
        println!("{} [{}]", value.category(), best.join(" "));
    }

    let now = Instant::now();
    let equity = estimate_equity([hole[0], hole[1]], &board);
    println!(
        "{} {} equity {:.3} ({:.2?})",
        hole[0],
        hole[1],
        equity,
        now.elapsed()
    );

    // Compare with a few random hole cards on the same board.
    let mut rng = rand::rng();
    let mut deck = Deck::default();
    cards.iter().for_each(|c| deck.remove(*c));
    let mut others = deck.into_iter().collect::<Vec<_>>();
    others.shuffle(&mut rng);
    for pair in others.chunks_exact(2).take(3) {
        let equity = estimate_equity([pair[0], pair[1]], &board);
        println!("{} {} equity {:.3}", pair[0], pair[1], equity);
    }

    Ok(())
}
