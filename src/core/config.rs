//! Round configuration.
//!
//! A `RoundConfig` fixes the table size, the hand size, who leads each trick,
//! and how seats bid and choose cards. It is validated once at round setup.

use serde::{Deserialize, Serialize};

use crate::bidding::BidStrategy;
use crate::cards::DECK_SIZE;
use crate::error::{Result, WizardError};
use crate::policy::PlayPolicy;

/// Smallest table the rules allow.
pub const MIN_PLAYERS: usize = 2;

/// Largest table a `PlayerId` can address.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Who leads each trick of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadRule {
    /// Seat 0 leads every trick.
    #[default]
    FixedSeat,
    /// The winner of the previous trick leads the next one.
    TrickWinner,
}

/// Configuration for a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Seats at the table (at least 2).
    pub player_count: usize,

    /// Cards dealt to each seat, which is also the number of tricks played.
    pub cards_per_player: usize,

    /// Who leads each trick.
    pub lead_rule: LeadRule,

    /// Bid strategy used by every seat unless overridden in `seat_bidders`.
    pub bid_strategy: BidStrategy,

    /// Per-seat bid strategy overrides, indexed by seat. Missing entries fall
    /// back to `bid_strategy`.
    #[serde(default)]
    pub seat_bidders: Vec<BidStrategy>,

    /// Card choice policy used by every seat.
    pub play_policy: PlayPolicy,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            cards_per_player: 10,
            lead_rule: LeadRule::default(),
            bid_strategy: BidStrategy::Proportional,
            seat_bidders: Vec::new(),
            play_policy: PlayPolicy::Random,
        }
    }
}

impl RoundConfig {
    pub fn new(player_count: usize, cards_per_player: usize) -> Self {
        Self {
            player_count,
            cards_per_player,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_lead_rule(mut self, rule: LeadRule) -> Self {
        self.lead_rule = rule;
        self
    }

    #[must_use]
    pub fn with_bid_strategy(mut self, strategy: BidStrategy) -> Self {
        self.bid_strategy = strategy;
        self
    }

    /// Override the bid strategy of individual seats, in seat order.
    #[must_use]
    pub fn with_seat_bidders(mut self, bidders: Vec<BidStrategy>) -> Self {
        self.seat_bidders = bidders;
        self
    }

    #[must_use]
    pub fn with_play_policy(mut self, policy: PlayPolicy) -> Self {
        self.play_policy = policy;
        self
    }

    /// Bid strategy for the seat at `index`.
    #[must_use]
    pub fn bidder_for(&self, index: usize) -> BidStrategy {
        self.seat_bidders
            .get(index)
            .copied()
            .unwrap_or(self.bid_strategy)
    }

    /// Cards a round consumes: every hand plus the trump-revealing card.
    ///
    /// `None` if the count overflows `usize`.
    #[must_use]
    pub fn cards_needed(&self) -> Option<usize> {
        self.player_count
            .checked_mul(self.cards_per_player)?
            .checked_add(1)
    }

    /// Check the table fits the deck.
    pub fn validate(&self) -> Result<()> {
        if self.player_count < MIN_PLAYERS {
            return Err(WizardError::InvalidConfig(format!(
                "need at least {MIN_PLAYERS} players, got {}",
                self.player_count
            )));
        }
        if self.cards_per_player == 0 {
            return Err(WizardError::InvalidConfig(
                "cards per player must be positive".to_string(),
            ));
        }
        if self.player_count > MAX_PLAYERS {
            return Err(WizardError::InvalidConfig(format!(
                "at most {MAX_PLAYERS} players supported, got {}",
                self.player_count
            )));
        }
        if self.cards_needed().map_or(true, |needed| needed > DECK_SIZE) {
            return Err(WizardError::InvalidConfig(format!(
                "{} players x {} cards + 1 trump card exceeds the {DECK_SIZE}-card deck",
                self.player_count, self.cards_per_player
            )));
        }
        if self.seat_bidders.len() > self.player_count {
            return Err(WizardError::InvalidConfig(format!(
                "{} seat bidders for {} seats",
                self.seat_bidders.len(),
                self.player_count
            )));
        }
        Ok(())
    }
}
