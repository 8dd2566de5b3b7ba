//! # wizard-sim
//!
//! A simulation engine for single rounds of the trick-taking card game
//! Wizard, built for generating large numbers of reproducible rounds to
//! evaluate bidding strategies.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Every API takes `player_count` as context.
//!    Seats are `PlayerId`s and per-seat data lives in a `PlayerMap`.
//!
//! 2. **Determinism**: All randomness flows through `GameRng`. The same seed
//!    deals the same hands, reveals the same trump and plays the same cards.
//!
//! 3. **Rounds Own Their State**: Each round gets its own deck, hands and
//!    random source. Nothing carries over between rounds.
//!
//! ## Modules
//!
//! - `core`: Seats, per-seat storage, RNG, round configuration
//! - `error`: The crate error type
//! - `cards`: Cards, the 60-card deck and hands
//! - `rules`: Card precedence within a trick
//! - `trick`: Playing and resolving a single trick
//! - `policy`: Card selection for automated seats
//! - `bidding`: Bid strategies
//! - `round`: Dealing, trump reveal, bidding and play-out of one round
//! - `simulation`: Many-round runs and outcome statistics

pub mod core;
pub mod error;
pub mod cards;
pub mod rules;
pub mod trick;
pub mod policy;
pub mod bidding;
pub mod round;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{GameRng, LeadRule, PlayerId, PlayerMap, RoundConfig};

pub use crate::error::{IllegalPlayReason, Result, WizardError};

pub use crate::cards::{Card, CardKind, Deck, Hand, Suit, DECK_SIZE};

pub use crate::rules::beats;

pub use crate::trick::{Play, Trick, TrickPhase};

pub use crate::policy::{CardSelector, PlayPolicy, TrickView};

pub use crate::bidding::{BidContext, BidStrategy, Bidder};

pub use crate::round::{PlayOrder, Round, SeatRecord};

pub use crate::simulation::{SimulationConfig, SimulationReport, SimulationStats, Simulator};
