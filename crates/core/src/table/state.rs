// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand state types.
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use holdem_eval::{classify, extract_best_five};

use crate::{
    action::{ActionError, PlayerAction},
    poker::{Card, Chips, Deck, HandCategory, HandValue},
    strategy::{ActionRequest, TableView},
};

use super::player::PlayerState;

/// The hand phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Hole cards dealt and blinds collected.
    Preflop,
    /// Three community cards dealt.
    Flop,
    /// Fourth community card dealt.
    Turn,
    /// Fifth community card dealt.
    River,
    /// Active players show their cards.
    Showdown,
    /// The hand has ended.
    End,
}

impl Phase {
    /// The phase label.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Preflop => "Preflop",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
            Phase::Showdown => "Showdown",
            Phase::End => "End",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hand winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// The winner seat.
    pub seat: usize,
    /// The winner name.
    pub name: String,
    /// The chips won.
    pub payout: Chips,
    /// The winning category, none if the pot was won uncontested.
    pub category: Option<HandCategory>,
    /// The five cards that make the winning hand.
    pub cards: Vec<Card>,
}

/// The result of a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    /// The hand winners.
    pub winners: Vec<Winner>,
    /// Chips left in the pot after splitting it among the winners.
    pub unawarded: Chips,
    /// All other players folded.
    pub uncontested: bool,
}

/// The state of one hand.
///
/// Seats are indexed by position, the seat to act moves forward modulo the
/// number of seats and a betting round closes after the round anchor acts.
#[derive(Debug)]
pub struct TableState {
    players: Vec<PlayerState>,
    dealer: usize,
    small_blind: Chips,
    big_blind: Chips,
    board: Vec<Card>,
    pot: Chips,
    phase: Phase,
    current: usize,
    anchor: usize,
    round_open: bool,
    deck: Deck,
}

impl TableState {
    /// Creates the state for a new hand, deals the hole cards and collects the blinds.
    ///
    /// Panics if there are fewer than 2 players or the dealer is not a seat.
    pub fn new(
        players: Vec<PlayerState>,
        dealer: usize,
        small_blind: Chips,
        big_blind: Chips,
        deck: Deck,
    ) -> Self {
        assert!(players.len() > 1, "A hand needs at least 2 players");
        assert!(dealer < players.len(), "Dealer must be a seat");

        let mut state = Self {
            players,
            dealer,
            small_blind,
            big_blind,
            board: Vec::with_capacity(5),
            pot: Chips::ZERO,
            phase: Phase::Preflop,
            current: dealer,
            anchor: dealer,
            round_open: false,
            deck,
        };

        state.enter_preflop();
        state
    }

    /// The players in seat order.
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// The dealer seat.
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// The small blind amount.
    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }

    /// The big blind amount.
    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }

    /// The community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The sum of all contributions in this hand.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// The hand phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The seat to act.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The seat that closes the betting round.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Checks if a betting round is in progress.
    pub fn is_betting_open(&self) -> bool {
        self.round_open
    }

    /// Number of players still in the hand.
    pub fn count_active(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// The chips a seat owes to match the round leader.
    ///
    /// The leader is the last player who bet or raised, or the big blind,
    /// and always has the highest contribution in the hand.
    pub fn to_call(&self, seat: usize) -> Chips {
        let leader = self
            .players
            .iter()
            .map(PlayerState::contribution)
            .max()
            .unwrap_or_default();
        self.players
            .get(seat)
            .map(|p| leader - p.contribution())
            .unwrap_or_default()
    }

    /// A read only view of the table for the given seat.
    pub fn view(&self, seat: usize) -> TableView<'_> {
        TableView::new(self, seat)
    }

    /// Checks if the seat to act must choose an action.
    ///
    /// Folded and all in players are skipped, as is a player who owes nothing
    /// when nobody else can still wager.
    pub fn needs_action(&self) -> bool {
        if !self.round_open || self.count_active() < 2 {
            return false;
        }

        let player = &self.players[self.current];
        if !player.is_active() || player.chips() == Chips::ZERO {
            return false;
        }

        let others_with_chips = self
            .players
            .iter()
            .enumerate()
            .any(|(seat, p)| seat != self.current && p.is_active() && p.chips() > Chips::ZERO);

        others_with_chips || self.to_call(self.current) > Chips::ZERO
    }

    /// The legal action context for the seat to act, none if the seat must not act.
    pub fn action_request(&self) -> Option<ActionRequest> {
        if !self.needs_action() {
            return None;
        }

        let seat = self.current;
        let chips = self.players[seat].chips();
        let to_call = self.to_call(seat);

        let mut actions = vec![PlayerAction::Fold];

        if to_call == Chips::ZERO {
            actions.push(PlayerAction::Check);
            if chips > Chips::new(1) {
                actions.push(PlayerAction::Bet);
            }
        } else {
            actions.push(PlayerAction::Call);
            if chips > to_call {
                actions.push(PlayerAction::Raise);
            }
        }

        Some(ActionRequest {
            seat,
            actions,
            to_call,
            min_raise: to_call + Chips::new(1),
            big_blind: self.big_blind,
            chips,
        })
    }

    /// Applies a player chosen action.
    pub fn apply(
        &mut self,
        seat: usize,
        action: PlayerAction,
        amount: Chips,
    ) -> Result<(), ActionError> {
        match action {
            PlayerAction::Bet => self.bet(seat, amount),
            PlayerAction::Raise => self.raise(seat, amount),
            PlayerAction::Call => self.call(seat),
            PlayerAction::Check => self.check(seat),
            PlayerAction::Fold => self.fold(seat),
            PlayerAction::None | PlayerAction::SmallBlind | PlayerAction::BigBlind => {
                Err(ActionError::Unsupported(action))
            }
        }
    }

    /// Puts `amount` chips in the pot, more than the amount owed.
    ///
    /// The action comes back around to the raiser last.
    pub fn raise(&mut self, seat: usize, amount: Chips) -> Result<(), ActionError> {
        self.check_turn(seat)?;

        let required = self.to_call(seat);
        let chips = self.players[seat].chips();
        if amount <= required {
            return Err(ActionError::RaiseTooSmall { amount, required });
        }

        if amount > chips {
            return Err(ActionError::ExceedsStack { amount, chips });
        }

        self.wager(seat, PlayerAction::Raise, amount);
        self.reopen_round();
        info!("{} raises {amount}", self.players[seat].name());
        Ok(())
    }

    /// Opens the betting with `amount` chips, less than the player stack.
    pub fn bet(&mut self, seat: usize, amount: Chips) -> Result<(), ActionError> {
        self.check_turn(seat)?;

        let required = self.to_call(seat);
        if required > Chips::ZERO {
            return Err(ActionError::BetFacingWager(required));
        }

        let chips = self.players[seat].chips();
        if amount > chips {
            return Err(ActionError::ExceedsStack { amount, chips });
        }

        if amount == Chips::ZERO || amount == chips {
            return Err(ActionError::InvalidBet(amount));
        }

        self.wager(seat, PlayerAction::Bet, amount);
        self.reopen_round();
        info!("{} bets {amount}", self.players[seat].name());
        Ok(())
    }

    /// Matches the round leader, a player with fewer chips goes all in.
    pub fn call(&mut self, seat: usize) -> Result<(), ActionError> {
        self.check_turn(seat)?;

        let required = self.to_call(seat);
        if required == Chips::ZERO {
            return Err(ActionError::NothingToCall);
        }

        let paid = self.wager(seat, PlayerAction::Call, required);
        let player = &self.players[seat];
        if player.is_all_in() {
            info!("{} calls {paid} and is all in", player.name());
        } else {
            info!("{} calls {paid}", player.name());
        }

        Ok(())
    }

    /// Passes the action when nothing is owed.
    pub fn check(&mut self, seat: usize) -> Result<(), ActionError> {
        self.check_turn(seat)?;

        let required = self.to_call(seat);
        if required > Chips::ZERO {
            return Err(ActionError::CheckFacingWager(required));
        }

        self.players[seat].check();
        info!("{} checks", self.players[seat].name());
        Ok(())
    }

    /// Leaves the hand, contributed chips stay in the pot.
    pub fn fold(&mut self, seat: usize) -> Result<(), ActionError> {
        self.check_turn(seat)?;

        self.players[seat].fold();
        info!("{} folds", self.players[seat].name());
        Ok(())
    }

    /// Moves the turn to the next seat, returns false when the round is closed.
    pub fn next_turn(&mut self) -> bool {
        if !self.round_open {
            return false;
        }

        if self.current == self.anchor || self.count_active() < 2 {
            self.round_open = false;
            return false;
        }

        self.current = (self.current + 1) % self.players.len();
        true
    }

    /// Closes the betting round and moves the hand to the next phase.
    ///
    /// Returns the hand result once the hand has ended, either because one
    /// player is left or after the showdown.
    pub fn next_phase(&mut self) -> Option<HandResult> {
        self.round_open = false;

        if self.phase == Phase::End {
            return None;
        }

        if self.count_active() < 2 {
            return Some(self.award_uncontested());
        }

        match self.phase {
            Phase::Preflop => self.enter_street(Phase::Flop, 3),
            Phase::Flop => self.enter_street(Phase::Turn, 1),
            Phase::Turn => self.enter_street(Phase::River, 1),
            Phase::River | Phase::Showdown => return Some(self.enter_showdown()),
            Phase::End => {}
        }

        None
    }

    fn enter_preflop(&mut self) {
        self.phase = Phase::Preflop;

        for player in self.players.iter_mut().filter(|p| p.is_active()) {
            let (c1, c2) = (self.deck.deal(), self.deck.deal());
            player.deal(c1, c2);
        }

        let n = self.players.len();
        let sb_seat = (self.dealer + 1) % n;
        let bb_seat = (self.dealer + 2) % n;
        self.collect_blind(sb_seat, self.small_blind, PlayerAction::SmallBlind);
        self.collect_blind(bb_seat, self.big_blind, PlayerAction::BigBlind);

        self.current = (bb_seat + 1) % n;
        self.anchor = sb_seat;
        self.round_open = true;

        info!(
            "Preflop dealer {} pot {}",
            self.players[self.dealer].name(),
            self.pot
        );
    }

    fn enter_street(&mut self, phase: Phase, cards: usize) {
        for _ in 0..cards {
            self.board.push(self.deck.deal());
        }

        for player in &mut self.players {
            player.start_round();
        }

        self.phase = phase;
        self.current = (self.dealer + 1) % self.players.len();
        self.anchor = self.dealer;
        self.round_open = true;

        let board = self.board.iter().map(Card::to_string).collect::<Vec<_>>();
        info!("{phase} [{}] pot {}", board.join(" "), self.pot);
    }

    fn enter_showdown(&mut self) -> HandResult {
        self.phase = Phase::Showdown;

        let mut leaders: Vec<(usize, HandValue, Vec<Card>)> = Vec::new();
        for (seat, player) in self.players.iter().enumerate() {
            let Some([c1, c2]) = player.hole_cards().filter(|_| player.is_active()) else {
                continue;
            };

            let mut cards = vec![c1, c2];
            cards.extend_from_slice(&self.board);
            let value = match classify(&cards) {
                Ok(value) => value,
                Err(e) => {
                    warn!("Cannot evaluate {} hand: {e}", player.name());
                    continue;
                }
            };

            info!("{} shows {c1} {c2} {}", player.name(), value.category());

            match leaders.first().map(|(_, best, _)| value.cmp(best)) {
                None | Some(Ordering::Greater) => {
                    leaders.clear();
                    leaders.push((seat, value, cards));
                }
                Some(Ordering::Equal) => leaders.push((seat, value, cards)),
                Some(Ordering::Less) => {}
            }
        }

        let mut result = HandResult::default();
        if leaders.is_empty() {
            result.unawarded = self.pot;
        } else {
            let share = self.pot / leaders.len() as u32;
            result.unawarded = self.pot % leaders.len() as u32;

            for (seat, value, cards) in leaders {
                let category = value.category();
                let player = &mut self.players[seat];
                player.win(share);
                result.winners.push(Winner {
                    seat,
                    name: player.name().to_string(),
                    payout: share,
                    category: Some(category),
                    cards: extract_best_five(&cards, category).unwrap_or_default(),
                });
            }
        }

        self.phase = Phase::End;
        result
    }

    fn award_uncontested(&mut self) -> HandResult {
        let mut result = HandResult {
            uncontested: true,
            ..Default::default()
        };

        match self.players.iter().position(PlayerState::is_active) {
            Some(seat) => {
                let player = &mut self.players[seat];
                player.win(self.pot);
                result.winners.push(Winner {
                    seat,
                    name: player.name().to_string(),
                    payout: self.pot,
                    category: None,
                    cards: Vec::new(),
                });
            }
            None => result.unawarded = self.pot,
        }

        self.phase = Phase::End;
        result
    }

    /// Collects a blind, a player who cannot cover it is forced out of the
    /// hand unless it is the last active player who then goes all in.
    fn collect_blind(&mut self, seat: usize, amount: Chips, action: PlayerAction) {
        let count_active = self.count_active();
        let player = &mut self.players[seat];
        if !player.is_active() {
            return;
        }

        if player.chips() < amount && count_active > 1 {
            info!(
                "{} cannot cover the {} blind of {amount}",
                player.name(),
                action.label()
            );
            player.fold();
        } else {
            let paid = player.pay(action, amount);
            self.pot += paid;
        }
    }

    fn check_turn(&self, seat: usize) -> Result<(), ActionError> {
        if !self.round_open {
            return Err(ActionError::BettingClosed);
        }

        if seat != self.current {
            return Err(ActionError::NotYourTurn(seat));
        }

        if !self.players[seat].is_active() {
            return Err(ActionError::NotActive(seat));
        }

        Ok(())
    }

    fn wager(&mut self, seat: usize, action: PlayerAction, amount: Chips) -> Chips {
        let paid = self.players[seat].pay(action, amount);
        self.pot += paid;
        paid
    }

    /// Sets the anchor to the seat before the aggressor.
    fn reopen_round(&mut self) {
        let n = self.players.len();
        self.anchor = (self.current + n - 1) % n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    /// A deck that deals the given cards in order.
    fn deck(s: &str) -> Deck {
        cards(s).into_iter().rev().collect()
    }

    fn new_state(stacks: &[u32], dealer: usize, deck: Deck) -> TableState {
        let players = stacks
            .iter()
            .enumerate()
            .map(|(seat, &chips)| PlayerState::new(format!("P{seat}"), Chips::new(chips)))
            .collect();
        TableState::new(players, dealer, Chips::new(1), Chips::new(2), deck)
    }

    fn shuffled() -> Deck {
        Deck::new_and_shuffled(&mut StdRng::seed_from_u64(101))
    }

    fn contributions(state: &TableState) -> Vec<u32> {
        state
            .players()
            .iter()
            .map(|p| p.contribution().amount())
            .collect()
    }

    fn chips(state: &TableState) -> Vec<u32> {
        state.players().iter().map(|p| p.chips().amount()).collect()
    }

    fn assert_pot(state: &TableState) {
        let total = state.players().iter().map(PlayerState::contribution).sum::<Chips>();
        assert_eq!(state.pot(), total);
    }

    /// Plays an action for the seat to act and moves the turn.
    fn act(state: &mut TableState, seat: usize, action: PlayerAction, amount: u32) -> bool {
        assert_eq!(state.current(), seat);
        state.apply(seat, action, Chips::new(amount)).unwrap();
        assert_pot(state);
        state.next_turn()
    }

    #[test]
    fn heads_up_blinds() {
        let state = new_state(&[100, 100], 0, shuffled());

        // Seat after the dealer pays the small blind, the dealer the big blind.
        assert_eq!(contributions(&state), vec![2, 1]);
        assert_eq!(state.pot(), Chips::new(3));
        assert_eq!(state.current(), 1);
        assert_eq!(state.anchor(), 1);
        assert_eq!(state.phase(), Phase::Preflop);
        assert_eq!(state.players()[0].action(), PlayerAction::BigBlind);
        assert_eq!(state.players()[1].action(), PlayerAction::SmallBlind);

        for player in state.players() {
            assert!(player.hole_cards().is_some());
        }
    }

    #[test]
    fn three_players_blinds() {
        let state = new_state(&[100, 100, 100], 1, shuffled());
        assert_eq!(contributions(&state), vec![2, 0, 1]);
        assert_eq!(state.current(), 1);
        assert_eq!(state.anchor(), 2);
        assert_eq!(state.to_call(1), Chips::new(2));
        assert_eq!(state.to_call(2), Chips::new(1));
        assert_eq!(state.to_call(0), Chips::ZERO);
    }

    #[test]
    fn rejected_actions_leave_state_unchanged() {
        let mut state = new_state(&[100, 100, 100], 0, shuffled());
        assert_eq!(state.current(), 0);

        let rejected = [
            (
                state.raise(0, Chips::new(2)),
                ActionError::RaiseTooSmall {
                    amount: Chips::new(2),
                    required: Chips::new(2),
                },
            ),
            (
                state.raise(0, Chips::new(101)),
                ActionError::ExceedsStack {
                    amount: Chips::new(101),
                    chips: Chips::new(100),
                },
            ),
            (state.raise(1, Chips::new(10)), ActionError::NotYourTurn(1)),
            (state.call(2), ActionError::NotYourTurn(2)),
            (state.check(0), ActionError::CheckFacingWager(Chips::new(2))),
            (
                state.bet(0, Chips::new(5)),
                ActionError::BetFacingWager(Chips::new(2)),
            ),
            (
                state.apply(0, PlayerAction::BigBlind, Chips::new(2)),
                ActionError::Unsupported(PlayerAction::BigBlind),
            ),
        ];

        for (res, err) in rejected {
            assert_eq!(res, Err(err));
        }

        assert_eq!(state.pot(), Chips::new(3));
        assert_eq!(contributions(&state), vec![0, 1, 2]);
        assert_eq!(chips(&state), vec![100, 99, 98]);
        assert_eq!(state.current(), 0);
        assert_eq!(state.count_active(), 3);
    }

    #[test]
    fn raise_moves_the_anchor() {
        let mut state = new_state(&[100, 100, 100], 0, shuffled());

        assert!(act(&mut state, 0, PlayerAction::Raise, 6));
        assert_eq!(state.anchor(), 2);
        assert_eq!(state.to_call(1), Chips::new(5));

        assert!(act(&mut state, 1, PlayerAction::Call, 0));
        assert_eq!(state.to_call(2), Chips::new(4));

        // The big blind closes the round.
        assert!(!act(&mut state, 2, PlayerAction::Fold, 0));
        assert!(!state.is_betting_open());
        assert_eq!(state.count_active(), 2);
        assert_eq!(state.pot(), Chips::new(14));
        assert_eq!(contributions(&state), vec![6, 6, 2]);

        // No actions once the round is closed.
        assert_eq!(state.call(2), Err(ActionError::BettingClosed));
    }

    #[test]
    fn preflop_round_closes_at_small_blind() {
        let mut state = new_state(&[100, 100, 100], 0, shuffled());

        assert!(act(&mut state, 0, PlayerAction::Call, 0));
        assert!(!act(&mut state, 1, PlayerAction::Call, 0));
        assert_eq!(contributions(&state), vec![2, 2, 2]);

        assert_eq!(state.next_phase(), None);
        assert_eq!(state.phase(), Phase::Flop);
        assert_eq!(state.board().len(), 3);
        assert_eq!(state.current(), 1);
        assert_eq!(state.anchor(), 0);

        let req = state.action_request().unwrap();
        assert_eq!(req.seat, 1);
        assert_eq!(req.to_call, Chips::ZERO);
        assert!(req.can_check());
        assert!(req.can_bet());
        assert!(!req.can_call());
        assert!(!req.can_raise());
    }

    #[test]
    fn action_request_facing_a_bet() {
        let mut state = new_state(&[100, 100], 0, shuffled());

        let req = state.action_request().unwrap();
        assert_eq!(req.seat, 1);
        assert_eq!(req.to_call, Chips::new(1));
        assert_eq!(req.min_raise, Chips::new(2));
        assert_eq!(req.big_blind, Chips::new(2));
        assert_eq!(req.chips, Chips::new(99));
        assert_eq!(
            req.actions,
            vec![PlayerAction::Fold, PlayerAction::Call, PlayerAction::Raise]
        );

        assert!(!act(&mut state, 1, PlayerAction::Call, 0));
        assert!(state.action_request().is_none());
    }

    #[test]
    fn bet_must_be_less_than_the_stack() {
        let mut state = new_state(&[100, 100], 0, shuffled());
        assert!(!act(&mut state, 1, PlayerAction::Call, 0));
        state.next_phase();

        assert_eq!(state.bet(1, Chips::ZERO), Err(ActionError::InvalidBet(Chips::ZERO)));
        assert_eq!(
            state.bet(1, Chips::new(98)),
            Err(ActionError::InvalidBet(Chips::new(98)))
        );
        assert_eq!(
            state.bet(1, Chips::new(99)),
            Err(ActionError::ExceedsStack {
                amount: Chips::new(99),
                chips: Chips::new(98),
            })
        );
        assert_eq!(state.call(1), Err(ActionError::NothingToCall));

        assert!(act(&mut state, 1, PlayerAction::Bet, 10));
        assert_eq!(state.anchor(), 0);
        assert_eq!(state.to_call(0), Chips::new(10));
        assert!(!act(&mut state, 0, PlayerAction::Call, 0));
        assert_eq!(state.pot(), Chips::new(24));
    }

    #[test]
    fn all_in_caller_wins_the_whole_pot() {
        // Seat 0 has high card, seat 1 a pair of aces.
        let deck = deck("2c 7d Ah As Kd 9s 4h 3c Jd");
        let mut state = new_state(&[100, 30], 0, deck);

        assert!(!act(&mut state, 1, PlayerAction::Call, 0));
        assert_eq!(state.next_phase(), None);

        assert!(act(&mut state, 1, PlayerAction::Check, 0));
        assert!(act(&mut state, 0, PlayerAction::Bet, 50));
        assert!(!act(&mut state, 1, PlayerAction::Call, 0));

        assert!(state.players()[1].is_all_in());
        assert_eq!(contributions(&state), vec![52, 30]);
        assert_eq!(state.pot(), Chips::new(82));

        // Nobody acts on the turn and the river.
        for phase in [Phase::Turn, Phase::River] {
            assert_eq!(state.next_phase(), None);
            assert_eq!(state.phase(), phase);
            while state.is_betting_open() {
                assert!(state.action_request().is_none());
                state.next_turn();
            }
        }

        let result = state.next_phase().unwrap();
        assert_eq!(state.phase(), Phase::End);
        assert!(!result.uncontested);
        assert_eq!(result.unawarded, Chips::ZERO);
        assert_eq!(result.winners.len(), 1);

        let winner = &result.winners[0];
        assert_eq!(winner.seat, 1);
        assert_eq!(winner.payout, Chips::new(82));
        assert_eq!(winner.category, Some(HandCategory::Pair));
        assert_eq!(winner.cards, cards("9s Jd Kd Ah As"));

        assert_eq!(chips(&state), vec![48, 82]);
        assert_pot(&state);
    }

    #[test]
    fn split_pot_leaves_remainder() {
        // Seats 0 and 1 play the same straight, seat 2 has a pair of aces.
        let deck = deck("9c 2d 9d 2c Ac Ad 5h 6d 7c 8s Kh");
        let mut state = new_state(&[100, 100, 100], 0, deck);

        assert!(act(&mut state, 0, PlayerAction::Call, 0));
        assert!(!act(&mut state, 1, PlayerAction::Call, 0));
        state.next_phase();

        assert!(act(&mut state, 1, PlayerAction::Check, 0));
        assert!(act(&mut state, 2, PlayerAction::Bet, 3));
        assert!(act(&mut state, 0, PlayerAction::Call, 0));
        assert!(!act(&mut state, 1, PlayerAction::Call, 0));
        assert_eq!(state.pot(), Chips::new(15));

        for _ in 0..2 {
            state.next_phase();
            assert!(act(&mut state, 1, PlayerAction::Check, 0));
            assert!(act(&mut state, 2, PlayerAction::Check, 0));
            assert!(!act(&mut state, 0, PlayerAction::Check, 0));
        }

        let result = state.next_phase().unwrap();
        let seats = result.winners.iter().map(|w| w.seat).collect::<Vec<_>>();
        assert_eq!(seats, vec![0, 1]);
        for winner in &result.winners {
            assert_eq!(winner.payout, Chips::new(7));
            assert_eq!(winner.category, Some(HandCategory::Straight));
            assert_eq!(winner.cards.len(), 5);
        }

        assert_eq!(result.unawarded, Chips::new(1));
        assert_eq!(chips(&state), vec![102, 102, 95]);
    }

    #[test]
    fn fold_ends_the_hand() {
        let mut state = new_state(&[100, 100, 100], 0, shuffled());

        assert!(act(&mut state, 0, PlayerAction::Fold, 0));
        assert_eq!(state.count_active(), 2);

        // The round closes as soon as one player is left.
        assert!(!act(&mut state, 1, PlayerAction::Fold, 0));
        assert_eq!(state.count_active(), 1);

        let result = state.next_phase().unwrap();
        assert!(result.uncontested);
        assert!(state.board().is_empty());
        assert_eq!(result.winners.len(), 1);
        assert_eq!(result.winners[0].seat, 2);
        assert_eq!(result.winners[0].payout, Chips::new(3));
        assert_eq!(result.winners[0].category, None);
        assert_eq!(chips(&state), vec![100, 99, 101]);

        assert_eq!(state.next_phase(), None);
    }

    #[test]
    fn short_blind_is_forced_out() {
        let state = new_state(&[100, 100, 1], 0, shuffled());

        assert_eq!(state.count_active(), 2);
        assert!(!state.players()[2].is_active());
        assert_eq!(state.players()[2].action(), PlayerAction::Fold);
        assert_eq!(contributions(&state), vec![0, 1, 0]);
        assert_eq!(state.pot(), Chips::new(1));
        assert_eq!(state.to_call(0), Chips::new(1));
    }

    #[test]
    fn short_blind_never_removes_last_player() {
        let players = vec![
            PlayerState::new("P0", Chips::new(1)),
            PlayerState::new("P1", Chips::new(1)),
        ];
        let mut state = TableState::new(players, 0, Chips::new(2), Chips::new(4), shuffled());

        // The small blind is forced out, the big blind goes all in.
        assert_eq!(state.count_active(), 1);
        assert!(state.players()[0].is_active());
        assert_eq!(contributions(&state), vec![1, 0]);
        assert!(state.action_request().is_none());

        assert!(!state.next_turn());
        let result = state.next_phase().unwrap();
        assert!(result.uncontested);
        assert_eq!(result.winners[0].seat, 0);
        assert_eq!(chips(&state), vec![1, 1]);
    }

    #[test]
    fn active_players_decrease_only_on_fold() {
        let mut state = new_state(&[50, 50, 50, 50], 3, shuffled());
        let mut active = state.count_active();
        assert_eq!(active, 4);

        let script = [
            (PlayerAction::Raise, 10),
            (PlayerAction::Call, 0),
            (PlayerAction::Fold, 0),
            (PlayerAction::Call, 0),
            (PlayerAction::Call, 0),
        ];

        for (action, amount) in script {
            let seat = state.current();
            state.apply(seat, action, Chips::new(amount)).unwrap();
            assert_pot(&state);

            let count = state.count_active();
            if action == PlayerAction::Fold {
                assert_eq!(count, active - 1);
            } else {
                assert_eq!(count, active);
            }
            active = count;

            if !state.next_turn() {
                break;
            }
        }

        assert!(!state.is_betting_open());
        assert_eq!(state.count_active(), 3);
        for player in state.players() {
            assert!(player.contribution() <= Chips::new(50));
        }
    }
}
