//! Crate-wide error type.
//!
//! Every failure in a round is a precondition violation by the caller, so
//! errors are never retried: they propagate with `?` and the round is
//! abandoned without being scored.

use thiserror::Error;

use crate::cards::Card;
use crate::core::PlayerId;

/// Why a play was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalPlayReason {
    /// The card is not held by the seat.
    NotInHand,
    /// The seat holds the led suit and the card neither follows nor is special.
    MustFollowSuit,
}

impl std::fmt::Display for IllegalPlayReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlayReason::NotInHand => write!(f, "card not in hand"),
            IllegalPlayReason::MustFollowSuit => write!(f, "must follow suit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot deal {requested} cards, only {remaining} remain in the deck")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("illegal play of {card}: {reason}")]
    IllegalPlay {
        card: Card,
        reason: IllegalPlayReason,
    },

    #[error("{seat} has no cards left to play")]
    EmptyHand { seat: PlayerId },

    /// A trick was handed a play from the wrong seat, or after every seat played.
    #[error("out of turn: expected {expected:?}, got {actual}")]
    OutOfTurn {
        expected: Option<PlayerId>,
        actual: PlayerId,
    },

    #[error("cannot parse card: {0}")]
    ParseCard(String),

    #[error("report encoding failed: {0}")]
    Encoding(String),
}

impl WizardError {
    pub(crate) fn illegal(card: Card, reason: IllegalPlayReason) -> Self {
        WizardError::IllegalPlay { card, reason }
    }
}

impl From<bincode::Error> for WizardError {
    fn from(err: bincode::Error) -> Self {
        WizardError::Encoding(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_messages() {
        let err = WizardError::InsufficientCards {
            requested: 5,
            remaining: 2,
        };
        assert_eq!(
            err.to_string(),
            "cannot deal 5 cards, only 2 remain in the deck"
        );

        let err = WizardError::illegal(Card::normal(10, Suit::Hearts), IllegalPlayReason::MustFollowSuit);
        assert_eq!(err.to_string(), "illegal play of 10-hearts: must follow suit");

        let err = WizardError::EmptyHand {
            seat: PlayerId::new(3),
        };
        assert_eq!(err.to_string(), "Seat 3 has no cards left to play");
    }
}
