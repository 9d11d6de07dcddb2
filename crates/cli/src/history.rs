// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands history written as JSON lines.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

use holdem_core::{
    poker::Chips,
    table::{HandResult, Seat},
};

/// A player stack after a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    /// The player name.
    pub name: String,
    /// The player chips.
    pub chips: Chips,
}

/// One history line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    /// The hand number starting from 1.
    pub hand: usize,
    /// The hand winners and payouts.
    pub result: HandResult,
    /// The stacks of the players still at the table.
    pub stacks: Vec<Stack>,
}

/// Writes a record for each hand.
#[derive(Debug)]
pub struct HandHistory<W> {
    writer: W,
}

impl<W: Write> HandHistory<W> {
    /// Creates a history that writes to the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes a hand result with the seats stacks.
    pub fn record(&mut self, hand: usize, result: &HandResult, seats: &[Seat]) -> Result<()> {
        let record = HandRecord {
            hand,
            result: result.clone(),
            stacks: seats
                .iter()
                .map(|s| Stack {
                    name: s.name.clone(),
                    chips: s.chips,
                })
                .collect(),
        };

        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_core::{
        action::PlayerAction,
        poker::{Card, HandCategory},
        strategy::{ActionRequest, Strategy, TableView},
        table::Winner,
    };

    struct Folder;

    impl Strategy for Folder {
        fn execute(
            &mut self,
            _req: &ActionRequest,
            _view: &TableView<'_>,
        ) -> (PlayerAction, Chips) {
            (PlayerAction::Fold, Chips::ZERO)
        }
    }

    #[test]
    fn records_are_json_lines() {
        let seats = vec![
            Seat::new("Alice", Chips::new(1_004), Folder),
            Seat::new("Bob", Chips::new(996), Folder),
        ];

        let showdown = HandResult {
            winners: vec![Winner {
                seat: 0,
                name: "Alice".to_string(),
                payout: Chips::new(8),
                category: Some(HandCategory::Pair),
                cards: ["2h", "5c", "9d", "Ks", "Kd"]
                    .map(|c| c.parse::<Card>().unwrap())
                    .to_vec(),
            }],
            unawarded: Chips::ZERO,
            uncontested: false,
        };

        let mut history = HandHistory::new(Vec::new());
        history.record(1, &showdown, &seats).unwrap();
        history.record(2, &HandResult::default(), &seats[..1]).unwrap();

        let out = String::from_utf8(history.writer).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"payout\":8"));
        assert!(lines[0].contains("\"Pair\""));

        let record: HandRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(record.hand, 1);
        assert_eq!(record.result, showdown);
        assert_eq!(record.stacks[1].name, "Bob");
        assert_eq!(record.stacks[1].chips, Chips::new(996));

        let record: HandRecord = serde_json::from_str(lines[1]).unwrap();
        assert!(record.result.winners.is_empty());
        assert_eq!(record.stacks.len(), 1);
    }
}
