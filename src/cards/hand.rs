//! A seat's hand and the suit-following rule.
//!
//! ## Legal plays
//!
//! - Leading (no led suit): any held card.
//! - Holding the led suit: cards of that suit plus any Wizard or Jester.
//! - Void in the led suit: any held card.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::card::{Card, Suit};
use crate::core::PlayerId;
use crate::error::{IllegalPlayReason, Result, WizardError};

/// Cards held by one seat.
///
/// The hand is a multiset: duplicate Wizards or Jesters are each held and
/// played one at a time. A per-suit index and the list of specials are
/// rebuilt after every play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    owner: PlayerId,
    cards: Vec<Card>,
    starting_cards: Vec<Card>,
    by_suit: FxHashMap<Suit, SmallVec<[Card; 8]>>,
    specials: SmallVec<[Card; 4]>,
}

impl Hand {
    /// Create a hand from a deal.
    pub fn new(owner: PlayerId, cards: Vec<Card>) -> Self {
        let mut hand = Self {
            owner,
            starting_cards: cards.clone(),
            cards,
            by_suit: FxHashMap::default(),
            specials: SmallVec::new(),
        };
        hand.reindex();
        hand
    }

    fn reindex(&mut self) {
        self.by_suit.clear();
        self.specials.clear();
        for &card in &self.cards {
            match card.suit() {
                Some(suit) => self.by_suit.entry(suit).or_default().push(card),
                None => self.specials.push(card),
            }
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Cards currently held.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards dealt at the start of the round.
    #[must_use]
    pub fn starting_cards(&self) -> &[Card] {
        &self.starting_cards
    }

    /// Held Wizards and Jesters.
    #[must_use]
    pub fn specials(&self) -> &[Card] {
        &self.specials
    }

    /// Held suit cards of `suit`.
    #[must_use]
    pub fn cards_of_suit(&self, suit: Suit) -> &[Card] {
        match self.by_suit.get(&suit) {
            Some(cards) => cards.as_slice(),
            None => &[],
        }
    }

    #[must_use]
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.cards_of_suit(suit).len()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards this hand may play against `led_suit`.
    ///
    /// Never empty while the hand holds a card.
    #[must_use]
    pub fn legal_plays(&self, led_suit: Option<Suit>) -> Vec<Card> {
        let Some(led) = led_suit else {
            return self.cards.clone();
        };
        let following = self.cards_of_suit(led);
        if following.is_empty() {
            return self.cards.clone();
        }
        following
            .iter()
            .chain(self.specials.iter())
            .copied()
            .collect()
    }

    /// Check a single card against the suit-following rule.
    #[must_use]
    pub fn is_legal(&self, led_suit: Option<Suit>, card: Card) -> bool {
        if !self.contains(card) {
            return false;
        }
        match (led_suit, card.suit()) {
            (Some(led), Some(suit)) => suit == led || self.count_suit(led) == 0,
            _ => true,
        }
    }

    /// Remove `card` from the hand and return it.
    pub fn play(&mut self, led_suit: Option<Suit>, card: Card) -> Result<Card> {
        if self.cards.is_empty() {
            return Err(WizardError::EmptyHand { seat: self.owner });
        }
        let Some(pos) = self.cards.iter().position(|&c| c == card) else {
            return Err(WizardError::illegal(card, IllegalPlayReason::NotInHand));
        };
        if !self.is_legal(led_suit, card) {
            return Err(WizardError::illegal(card, IllegalPlayReason::MustFollowSuit));
        }

        let played = self.cards.remove(pos);
        self.reindex();
        Ok(played)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [", self.owner)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
