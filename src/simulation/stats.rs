//! Outcome counters accumulated over many rounds.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};
use crate::round::Round;
use crate::trick::winning_play;

/// Tricks won, broken down by the kind of card that took them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinsByKind {
    pub normal: u64,
    pub wizard: u64,
    pub jester: u64,
}

/// Statistics collected while simulating.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub rounds: u64,
    pub tricks: u64,
    /// Tricks taken per seat, indexed by seat.
    pub tricks_by_seat: Vec<u64>,
    /// Rounds where a Jester was turned up.
    pub no_trump_rounds: u64,
    /// Rounds where a Wizard was turned up and trump was drawn at random.
    pub wizard_trump_rounds: u64,
    /// Tricks taken by a trump suit card.
    pub trump_wins: u64,
    pub wins_by_kind: WinsByKind,
}

impl SimulationStats {
    pub fn new(player_count: usize) -> Self {
        Self {
            tricks_by_seat: vec![0; player_count],
            ..Self::default()
        }
    }

    /// Fold a finished round into the totals.
    pub fn record_round(&mut self, round: &Round) {
        self.rounds += 1;
        match round.trump_card() {
            Card::Jester => self.no_trump_rounds += 1,
            Card::Wizard => self.wizard_trump_rounds += 1,
            Card::Normal { .. } => {}
        }

        for trick in round.trick_history() {
            let Some(best) = winning_play(trick.plays(), trick.trump()) else {
                continue;
            };
            self.tricks += 1;
            if let Some(count) = self.tricks_by_seat.get_mut(best.seat.index()) {
                *count += 1;
            }
            match best.card.kind() {
                CardKind::Normal => self.wins_by_kind.normal += 1,
                CardKind::Wizard => self.wins_by_kind.wizard += 1,
                CardKind::Jester => self.wins_by_kind.jester += 1,
            }
            if best.card.suit().is_some() && best.card.suit() == trick.trump() {
                self.trump_wins += 1;
            }
        }
    }

    /// Share of all tricks taken by `seat`.
    #[must_use]
    pub fn win_share(&self, seat: usize) -> f64 {
        if self.tricks == 0 {
            0.0
        } else {
            self.tricks_by_seat.get(seat).copied().unwrap_or(0) as f64 / self.tricks as f64
        }
    }

    /// Average tricks per round taken by `seat`.
    #[must_use]
    pub fn avg_tricks(&self, seat: usize) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.tricks_by_seat.get(seat).copied().unwrap_or(0) as f64 / self.rounds as f64
        }
    }
}
