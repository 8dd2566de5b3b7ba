//! One trick: every seat plays once in play order, then a winner is decided.
//!
//! ## Lifecycle
//!
//! `Leading -> Following(k) -> Resolved`
//!
//! - `Leading`: the first seat may play anything. A suit card sets the led
//!   suit; a Wizard or Jester leaves it unset for the whole trick.
//! - `Following(k)`: `k` cards are down, the next seat in order must play.
//! - `Resolved`: every seat played and the winner is fixed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cards::{Card, Hand, Suit};
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::error::{Result, WizardError};
use crate::policy::{CardSelector, TrickView};
use crate::rules::{beats, led_suit_of};

/// A card put down by a seat, with its 0-based position in the trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    pub seat: PlayerId,
    pub card: Card,
    pub index: usize,
}

/// Where a trick is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrickPhase {
    /// Waiting for the leader's card.
    Leading,
    /// `k` cards played, waiting for the next seat.
    Following(usize),
    /// Every seat has played.
    Resolved,
}

/// A single trick.
///
/// The trick only sequences plays and resolves the winner. Suit following is
/// enforced by the seat's `Hand`; crediting the winner is the round's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    order: SmallVec<[PlayerId; 8]>,
    trump: Option<Suit>,
    led_suit: Option<Suit>,
    plays: SmallVec<[Play; 8]>,
    winner: Option<PlayerId>,
}

impl Trick {
    /// Start a trick played in `order`; the first seat leads.
    ///
    /// Fails with `InvalidConfig` if `order` is empty.
    pub fn new(order: &[PlayerId], trump: Option<Suit>) -> Result<Self> {
        if order.is_empty() {
            return Err(WizardError::InvalidConfig(
                "a trick needs at least one seat".to_string(),
            ));
        }
        Ok(Self {
            order: SmallVec::from_slice(order),
            trump,
            led_suit: None,
            plays: SmallVec::new(),
            winner: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> TrickPhase {
        match self.plays.len() {
            0 => TrickPhase::Leading,
            k if k < self.order.len() => TrickPhase::Following(k),
            _ => TrickPhase::Resolved,
        }
    }

    #[must_use]
    pub fn leader(&self) -> PlayerId {
        self.order[0]
    }

    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    #[must_use]
    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// Suit later seats must follow; `None` before the lead or after a
    /// Wizard or Jester lead.
    #[must_use]
    pub fn led_suit(&self) -> Option<Suit> {
        self.led_suit
    }

    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Seat whose turn it is, `None` once resolved.
    #[must_use]
    pub fn next_seat(&self) -> Option<PlayerId> {
        self.order.get(self.plays.len()).copied()
    }

    /// Winner, once every seat has played.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Record `seat` putting down `card`.
    ///
    /// The card must already have been taken from the seat's hand.
    pub fn record(&mut self, seat: PlayerId, card: Card) -> Result<()> {
        let expected = self.next_seat();
        if expected != Some(seat) {
            return Err(WizardError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        let index = self.plays.len();
        if index == 0 {
            self.led_suit = led_suit_of(card);
        }
        self.plays.push(Play { seat, card, index });
        trace!(%seat, %card, index, "card played");

        if self.phase() == TrickPhase::Resolved {
            self.winner = winning_play(&self.plays, self.trump).map(|play| play.seat);
        }
        Ok(())
    }

    /// Have every seat in order play a card chosen by `selectors`.
    ///
    /// Each seat picks from its legal plays against the led suit; the chosen
    /// card is removed from its hand and recorded.
    pub fn play_out<S: CardSelector>(
        &mut self,
        hands: &mut PlayerMap<Hand>,
        selectors: &PlayerMap<S>,
        rng: &mut GameRng,
    ) -> Result<PlayerId> {
        while let Some(seat) = self.next_seat() {
            let led_suit = self.led_suit;
            let hand = &mut hands[seat];
            if hand.is_empty() {
                return Err(WizardError::EmptyHand { seat });
            }

            let legal = hand.legal_plays(led_suit);
            let view = TrickView {
                seat,
                led_suit,
                trump: self.trump,
                plays: &self.plays,
            };
            let choice = selectors[seat]
                .choose(&view, &legal, rng)
                .ok_or(WizardError::EmptyHand { seat })?;

            let card = hand.play(led_suit, choice)?;
            self.record(seat, card)?;
        }

        // A resolved trick always has a winner
        let winner = self.winner.unwrap_or_else(|| self.leader());
        debug!(
            leader = %self.leader(),
            winner = %winner,
            led_suit = ?self.led_suit,
            trump = ?self.trump,
            "trick resolved"
        );
        Ok(winner)
    }
}

/// Scan `plays` left to right and return the winning play.
///
/// `None` only for an empty slice.
#[must_use]
pub fn winning_play(plays: &[Play], trump: Option<Suit>) -> Option<&Play> {
    let (first, rest) = plays.split_first()?;
    let mut best = first;
    for play in rest {
        if beats(best.card, play.card, trump) {
            best = play;
        }
    }
    Some(best)
}
