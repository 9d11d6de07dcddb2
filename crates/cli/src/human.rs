// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Interactive player.
use log::warn;
use std::io::{self, BufRead, Write};

use holdem_core::{
    action::PlayerAction,
    poker::Chips,
    strategy::{ActionRequest, Strategy, TableView},
};

use crate::terminal;

/// A source of input lines.
pub trait LineSource {
    /// Reads the next line, none at the end of the input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl LineSource for io::Stdin {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

impl<T: AsRef<[u8]>> LineSource for io::Cursor<T> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Parses an action command like `call`, `b 10`, or `raise 20`.
pub fn parse_action(input: &str) -> Option<(PlayerAction, Chips)> {
    let mut parts = input.split_whitespace();
    let action = match parts.next()?.to_lowercase().as_str() {
        "f" | "fold" => PlayerAction::Fold,
        "c" | "call" => PlayerAction::Call,
        "k" | "check" => PlayerAction::Check,
        "b" | "bet" => PlayerAction::Bet,
        "r" | "raise" => PlayerAction::Raise,
        _ => return None,
    };

    let amount = match action {
        PlayerAction::Bet | PlayerAction::Raise => Chips::new(parts.next()?.parse().ok()?),
        _ => Chips::ZERO,
    };

    if parts.next().is_some() {
        return None;
    }

    Some((action, amount))
}

/// A player that chooses actions from the terminal.
#[derive(Debug)]
pub struct HumanPlayer<I, W> {
    input: I,
    output: W,
}

impl HumanPlayer<io::Stdin, io::Stdout> {
    /// Creates a player that reads from stdin and writes to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<I: LineSource, W: Write> HumanPlayer<I, W> {
    /// Creates a new player.
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Checks an action before sending it to the table.
    fn check_action(
        req: &ActionRequest,
        action: PlayerAction,
        amount: Chips,
    ) -> Result<(), String> {
        if !req.actions.contains(&action) {
            return Err(format!("{} is not possible now", action.label()));
        }

        match action {
            PlayerAction::Bet if amount == Chips::ZERO || amount >= req.chips => {
                Err(format!("Bet must be more than 0 and less than {}", req.chips))
            }
            PlayerAction::Raise if amount < req.min_raise || amount > req.chips => Err(format!(
                "Raise must be from {} to {}",
                req.min_raise, req.chips
            )),
            _ => Ok(()),
        }
    }

    fn read_action(&mut self, req: &ActionRequest) -> io::Result<(PlayerAction, Chips)> {
        loop {
            terminal::print_prompt(&mut self.output, req)?;

            let Some(line) = self.input.next_line()? else {
                // No more input.
                writeln!(self.output)?;
                return Ok((PlayerAction::Fold, Chips::ZERO));
            };

            match parse_action(&line) {
                Some((action, amount)) => match Self::check_action(req, action, amount) {
                    Ok(()) => return Ok((action, amount)),
                    Err(msg) => writeln!(self.output, "{msg}")?,
                },
                None => writeln!(self.output, "Invalid action {:?}", line.trim())?,
            }
        }
    }
}

impl<I: LineSource, W: Write> Strategy for HumanPlayer<I, W> {
    fn execute(&mut self, req: &ActionRequest, view: &TableView<'_>) -> (PlayerAction, Chips) {
        let res = terminal::print_table(&mut self.output, view).and_then(|_| self.read_action(req));
        match res {
            Ok(action) => action,
            Err(e) => {
                warn!("Terminal error {e}");
                (PlayerAction::Fold, Chips::ZERO)
            }
        }
    }
}
