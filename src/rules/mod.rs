//! Trick-taking rules shared by the trick engine and play policies.
//!
//! Suit following lives on `Hand`; this module holds the precedence that
//! decides who wins once every seat has played.

pub mod precedence;

pub use precedence::{beats, led_suit_of};
