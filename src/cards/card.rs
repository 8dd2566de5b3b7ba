//! Card values.
//!
//! A card is either a ranked suit card or one of the two specials. The enum
//! makes the "Normal has rank and suit, Special has neither" rule a property
//! of the type, so no card can be half of each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WizardError;

/// Lowest rank of a suit card.
pub const MIN_RANK: u8 = 2;
/// Highest rank of a suit card (ace).
pub const MAX_RANK: u8 = 14;

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Clubs,
    Spades,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Spades, Suit::Diamonds];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
            Suit::Diamonds => "diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| WizardError::ParseCard(s.to_string()))
    }
}

/// What kind of card this is, independent of rank and suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Normal,
    /// Always wins the trick; the first one played wins among several.
    Wizard,
    /// Never wins unless every card in the trick is a Jester.
    Jester,
}

/// A playing card.
///
/// Equality, ordering and hashing are structural. The four Wizards (and the
/// four Jesters) of a deck are equal to one another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Card {
    Normal { rank: u8, suit: Suit },
    Wizard,
    Jester,
}

impl Card {
    /// A suit card.
    ///
    /// Panics if `rank` is outside `2..=14`.
    #[must_use]
    pub fn normal(rank: u8, suit: Suit) -> Self {
        assert!(
            (MIN_RANK..=MAX_RANK).contains(&rank),
            "Rank must be {MIN_RANK}-{MAX_RANK}, got {rank}"
        );
        Card::Normal { rank, suit }
    }

    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Card::Normal { .. } => CardKind::Normal,
            Card::Wizard => CardKind::Wizard,
            Card::Jester => CardKind::Jester,
        }
    }

    /// Rank of a suit card; `None` for specials.
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Card::Normal { rank, .. } => Some(rank),
            _ => None,
        }
    }

    /// Suit of a suit card; `None` for specials.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Card::Normal { suit, .. } => Some(suit),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self, Card::Normal { .. })
    }

    #[must_use]
    pub const fn is_wizard(self) -> bool {
        matches!(self, Card::Wizard)
    }

    #[must_use]
    pub const fn is_jester(self) -> bool {
        matches!(self, Card::Jester)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Normal { rank, suit } => write!(f, "{rank}-{suit}"),
            Card::Wizard => f.write_str("wizard"),
            Card::Jester => f.write_str("jester"),
        }
    }
}

/// Parses the display form: `"10-hearts"`, `"wizard"`, `"jester"`.
impl FromStr for Card {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("wizard") {
            return Ok(Card::Wizard);
        }
        if token.eq_ignore_ascii_case("jester") {
            return Ok(Card::Jester);
        }

        let (rank, suit) = token
            .split_once('-')
            .ok_or_else(|| WizardError::ParseCard(s.to_string()))?;
        let rank: u8 = rank
            .parse()
            .map_err(|_| WizardError::ParseCard(s.to_string()))?;
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(WizardError::ParseCard(s.to_string()));
        }
        let suit = suit
            .parse::<Suit>()
            .map_err(|_| WizardError::ParseCard(s.to_string()))?;

        Ok(Card::Normal { rank, suit })
    }
}

/// Parse a list of card tokens, failing on the first bad one.
pub fn parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, WizardError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| token.as_ref().parse::<Card>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes() {
        let card = Card::normal(12, Suit::Spades);
        assert_eq!(card.kind(), CardKind::Normal);
        assert_eq!(card.rank(), Some(12));
        assert_eq!(card.suit(), Some(Suit::Spades));
        assert!(!card.is_special());

        assert_eq!(Card::Wizard.kind(), CardKind::Wizard);
        assert_eq!(Card::Wizard.suit(), None);
        assert_eq!(Card::Jester.rank(), None);
        assert!(Card::Jester.is_special());
    }

    #[test]
    #[should_panic(expected = "Rank must be 2-14")]
    fn test_rank_out_of_range() {
        let _ = Card::normal(15, Suit::Hearts);
    }

    #[test]
    fn test_specials_are_value_equal() {
        use std::collections::HashSet;

        let set: HashSet<Card> = [Card::Wizard, Card::Wizard, Card::Jester].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::normal(10, Suit::Hearts).to_string(), "10-hearts");
        assert_eq!(Card::normal(14, Suit::Diamonds).to_string(), "14-diamonds");
        assert_eq!(Card::Wizard.to_string(), "wizard");
        assert_eq!(Card::Jester.to_string(), "jester");
    }

    #[test]
    fn test_parse() {
        assert_eq!("9-clubs".parse::<Card>().unwrap(), Card::normal(9, Suit::Clubs));
        assert_eq!("Wizard".parse::<Card>().unwrap(), Card::Wizard);
        assert_eq!(" jester ".parse::<Card>().unwrap(), Card::Jester);

        for bad in ["1-clubs", "15-hearts", "5-stars", "king", "x-spades", ""] {
            assert!(bad.parse::<Card>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_parse_cards() {
        let cards = parse_cards(["2-hearts", "wizard"]).unwrap();
        assert_eq!(cards, vec![Card::normal(2, Suit::Hearts), Card::Wizard]);
        assert!(parse_cards(["2-hearts", "nope"]).is_err());
    }

    #[test]
    fn test_ordering_is_structural() {
        assert!(Card::normal(3, Suit::Hearts) < Card::normal(4, Suit::Hearts));
        assert!(Card::normal(14, Suit::Diamonds) < Card::Wizard);
        assert!(Card::Wizard < Card::Jester);
    }

    #[test]
    fn test_serde() {
        let cards = vec![Card::normal(7, Suit::Clubs), Card::Wizard, Card::Jester];
        let json = serde_json::to_string(&cards).unwrap();
        let back: Vec<Card> = serde_json::from_str(&json).unwrap();
        assert_eq!(cards, back);
    }
}
