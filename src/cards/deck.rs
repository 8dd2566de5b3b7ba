//! The 60-card deck, consumed without replacement.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::card::{Card, Suit, MAX_RANK, MIN_RANK};
use crate::core::GameRng;
use crate::error::{Result, WizardError};

/// Copies of each special card in a deck.
pub const SPECIALS_PER_KIND: usize = 4;
/// 13 ranks x 4 suits + 4 Wizards + 4 Jesters.
pub const DECK_SIZE: usize = 60;

/// A shuffled source of cards for one round.
///
/// Cards are dealt from the end of the underlying sequence and never come
/// back; a deck is built fresh for every round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck in randomized order.
    pub fn new(rng: &mut GameRng) -> Self {
        let mut cards = Self::full();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// A stacked deck. The last card of `cards` is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// All 60 cards in a fixed order: suits in `Suit::ALL` order, ranks
    /// ascending, then the Wizards, then the Jesters.
    #[must_use]
    pub fn full() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                cards.push(Card::Normal { rank, suit });
            }
        }
        cards.extend([Card::Wizard; SPECIALS_PER_KIND]);
        cards.extend([Card::Jester; SPECIALS_PER_KIND]);
        cards
    }

    /// Remove and return `n` cards.
    ///
    /// Fails without touching the deck when fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(WizardError::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        let dealt: Vec<Card> = self.cards.drain(remaining - n..).rev().collect();
        trace!(n, remaining = self.cards.len(), "dealt cards");
        Ok(dealt)
    }

    /// Remove and return a single card.
    pub fn deal_one(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(WizardError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards still in the deck, next-to-deal last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
