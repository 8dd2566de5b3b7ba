//! Core building blocks shared by every module: seats, per-seat storage,
//! the seedable RNG and round configuration.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{LeadRule, RoundConfig, MAX_PLAYERS, MIN_PLAYERS};
