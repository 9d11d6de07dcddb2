// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use crossterm::style::{StyledContent, Stylize, style};
use std::io::{self, Write};

use holdem_eval::{classify, extract_best_five};

use holdem_core::{
    action::PlayerAction,
    poker::{Card, Suit},
    strategy::{ActionRequest, TableView},
    table::{HandResult, Seat},
};

/// A card with red hearts and diamonds.
pub fn styled_card(card: Card) -> StyledContent<String> {
    match card.suit() {
        Suit::Hearts | Suit::Diamonds => style(card.to_string()).red().bold(),
        Suit::Clubs | Suit::Spades => style(card.to_string()).bold(),
    }
}

fn styled_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| styled_card(*c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints the table as seen by the seat to act.
pub fn print_table(w: &mut impl Write, view: &TableView<'_>) -> io::Result<()> {
    writeln!(w)?;
    writeln!(
        w,
        "{} board [{}] pot {}",
        view.phase().label().cyan(),
        styled_cards(view.board()),
        view.pot()
    )?;

    for (seat, player) in view.players().iter().enumerate() {
        let button = if seat == view.dealer() { "D" } else { " " };
        let line = format!(
            "{button} {:<10} chips {:>7} bet {:>7} {:<6}",
            player.name(),
            player.chips().to_string(),
            player.contribution().to_string(),
            player.action().label()
        );

        if seat == view.seat() {
            writeln!(w, "{}", style(line).bold())?;
        } else if !player.is_active() {
            writeln!(w, "{}", style(line).dark_grey())?;
        } else {
            writeln!(w, "{line}")?;
        }
    }

    if let Some(hole_cards) = view.hole_cards() {
        writeln!(w, "Your cards {}", styled_cards(&hole_cards))?;

        if view.board().len() >= 3 {
            let mut cards = hole_cards.to_vec();
            cards.extend_from_slice(view.board());
            if let Ok(value) = classify(&cards) {
                let best = extract_best_five(&cards, value.category()).unwrap_or_default();
                writeln!(w, "Your hand {} [{}]", value.category(), styled_cards(&best))?;
            }
        }
    }

    Ok(())
}

/// Prints the actions a player can choose.
pub fn print_prompt(w: &mut impl Write, req: &ActionRequest) -> io::Result<()> {
    let mut choices = vec!["[f]old".to_string()];
    for action in &req.actions {
        match action {
            PlayerAction::Check => choices.push("chec[k]".to_string()),
            PlayerAction::Call => choices.push(format!("[c]all {}", req.to_call)),
            PlayerAction::Bet => choices.push("[b]et N".to_string()),
            PlayerAction::Raise => choices.push(format!("[r]aise N (min {})", req.min_raise)),
            _ => {}
        }
    }

    write!(w, "{} > ", choices.join(" "))?;
    w.flush()
}

/// Prints the hand winners.
pub fn print_result(w: &mut impl Write, result: &HandResult) -> io::Result<()> {
    for winner in &result.winners {
        match winner.category {
            Some(category) => writeln!(
                w,
                "{} wins {} with {} [{}]",
                winner.name.as_str().green(),
                winner.payout,
                category,
                styled_cards(&winner.cards)
            )?,
            None => writeln!(w, "{} wins {}", winner.name.as_str().green(), winner.payout)?,
        }
    }

    if result.unawarded.amount() > 0 {
        writeln!(w, "{} chips left in the pot", result.unawarded)?;
    }

    Ok(())
}

/// Prints the chips of each player at the table.
pub fn print_standings(w: &mut impl Write, seats: &[Seat]) -> io::Result<()> {
    writeln!(w)?;
    for seat in seats {
        writeln!(w, "{:<10} {:>8}", seat.name, seat.chips.to_string())?;
    }

    Ok(())
}
