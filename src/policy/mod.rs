//! Card choice policies.
//!
//! Policies are trait-based so simulations can swap how seats pick among
//! their legal plays:
//! - `PlayPolicy::Random`: uniform over the legal plays (the simulator default)
//! - `PlayPolicy::FirstLegal`: the lowest legal card, fully deterministic

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::{GameRng, PlayerId};
use crate::trick::Play;

// =============================================================================
// Selector trait
// =============================================================================

/// What a seat can see when it chooses a card.
#[derive(Clone, Copy, Debug)]
pub struct TrickView<'a> {
    /// Seat about to play.
    pub seat: PlayerId,
    /// Suit to follow, if one was established.
    pub led_suit: Option<Suit>,
    pub trump: Option<Suit>,
    /// Cards already down in this trick, in play order.
    pub plays: &'a [Play],
}

/// Picks one card out of the legal plays.
pub trait CardSelector {
    /// Choose a card from `legal`.
    ///
    /// Returns `None` only when `legal` is empty.
    fn choose(&self, view: &TrickView<'_>, legal: &[Card], rng: &mut GameRng) -> Option<Card>;
}

// =============================================================================
// Built-in policies
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayPolicy {
    /// Uniformly random legal card.
    #[default]
    Random,
    /// Lowest legal card in card order.
    FirstLegal,
}

impl CardSelector for PlayPolicy {
    fn choose(&self, _view: &TrickView<'_>, legal: &[Card], rng: &mut GameRng) -> Option<Card> {
        match self {
            PlayPolicy::Random => rng.choose(legal).copied(),
            PlayPolicy::FirstLegal => legal.iter().min().copied(),
        }
    }
}
