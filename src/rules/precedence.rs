//! Card precedence within a trick.
//!
//! A trick is resolved by scanning plays left to right with a running best.
//! [`beats`] decides whether the next card displaces the running best:
//!
//! 1. A Wizard already in front is never displaced (first Wizard wins).
//! 2. A Jester never displaces anything.
//! 3. A Wizard displaces any non-Wizard.
//! 4. A Jester in front is displaced by any non-Jester.
//! 5. Trump displaces a non-trump suit card.
//! 6. Within one suit the higher rank wins.
//! 7. Anything else (off-suit, not trump) loses.

use crate::cards::{Card, Suit};

/// Does `challenger`, played after `best`, take the lead in the trick?
#[must_use]
pub fn beats(best: Card, challenger: Card, trump: Option<Suit>) -> bool {
    match (best, challenger) {
        (Card::Wizard, _) => false,
        (_, Card::Jester) => false,
        (_, Card::Wizard) => true,
        // Even an off-suit, non-trump card displaces a leading Jester
        (Card::Jester, _) => true,
        (
            Card::Normal {
                rank: best_rank,
                suit: best_suit,
            },
            Card::Normal { rank, suit },
        ) => {
            if trump.is_some_and(|t| suit == t && best_suit != t) {
                return true;
            }
            suit == best_suit && rank > best_rank
        }
    }
}

/// Suit established by the card that leads a trick.
///
/// A Wizard or Jester lead establishes no suit, so every later seat may play
/// anything.
#[must_use]
pub fn led_suit_of(lead: Card) -> Option<Suit> {
    lead.suit()
}
