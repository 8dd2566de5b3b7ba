//! Bid strategies.
//!
//! A bid is the number of tricks a seat expects to take. Strategies are a
//! closed set of variants behind the `Bidder` trait; new strategies are added
//! as new `BidStrategy` variants. The trick engine never reads bids, they
//! are carried through to the seat records for later evaluation.

use serde::{Deserialize, Serialize};

use crate::cards::{Hand, Suit};
use crate::core::GameRng;

/// Everything a strategy may look at when bidding.
#[derive(Clone, Copy, Debug)]
pub struct BidContext<'a> {
    pub hand: &'a Hand,
    /// Offset of the seat from the first trick's leader (0 = leads).
    pub starting_position: usize,
    pub player_count: usize,
    pub cards_per_player: usize,
    pub trump: Option<Suit>,
}

pub trait Bidder {
    /// Bid in `0..=ctx.cards_per_player`.
    fn compute_bid(&self, ctx: &BidContext<'_>, rng: &mut GameRng) -> u32;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BidStrategy {
    /// Uniform over every possible bid.
    Random,
    /// The same bid every round, capped at the hand size.
    Constant(u32),
    /// The fair share of tricks, `cards / players` rounded half to even.
    #[default]
    Proportional,
}

impl Bidder for BidStrategy {
    fn compute_bid(&self, ctx: &BidContext<'_>, rng: &mut GameRng) -> u32 {
        let max_bid = ctx.cards_per_player as u32;
        match *self {
            BidStrategy::Random => rng.gen_range_inclusive(0..=max_bid),
            BidStrategy::Constant(bid) => bid.min(max_bid),
            BidStrategy::Proportional => {
                let share = ctx.cards_per_player as f64 / ctx.player_count as f64;
                share.round_ties_even() as u32
            }
        }
    }
}
