//! Card values, the deck and hands.
//!
//! - `Card`: a ranked suit card, a Wizard, or a Jester
//! - `Deck`: 60 shuffled cards dealt without replacement
//! - `Hand`: one seat's cards and the suit-following rule

mod card;
mod deck;
mod hand;

pub use card::{parse_cards, Card, CardKind, Suit, MAX_RANK, MIN_RANK};
pub use deck::{Deck, DECK_SIZE, SPECIALS_PER_KIND};
pub use hand::Hand;
