//! Many-round simulation for bidding-strategy evaluation.
//!
//! Every round is built fresh from its own forked `GameRng`, so no deck,
//! hand or counter survives from one round to the next, and a simulation
//! is reproducible from its seed alone.

mod stats;

pub use stats::{SimulationStats, WinsByKind};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameRng, RoundConfig};
use crate::error::{Result, WizardError};
use crate::round::{Round, SeatRecord};

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Table and strategy setup shared by every round.
    pub round: RoundConfig,

    /// Number of rounds to play.
    pub rounds: usize,

    /// Master seed. Round `i` uses the `i + 1`-th fork of it.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            round: RoundConfig::default(),
            rounds: 1_000,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_round(mut self, round: RoundConfig) -> Self {
        self.round = round;
        self
    }

    #[must_use]
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(WizardError::InvalidConfig(
                "a simulation needs at least one round".to_string(),
            ));
        }
        self.round.validate()
    }
}

/// Everything a simulation produced, ready for external reporting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    /// One record per seat per round, rounds in order.
    pub records: Vec<SeatRecord>,
    pub stats: SimulationStats,
}

impl SimulationReport {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a report produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Runs independent rounds and gathers their records.
#[derive(Clone, Debug)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play every round. Any round error aborts the whole run.
    pub fn run(&self) -> Result<SimulationReport> {
        self.config.validate()?;
        info!(
            rounds = self.config.rounds,
            players = self.config.round.player_count,
            cards = self.config.round.cards_per_player,
            seed = self.config.seed,
            "starting simulation"
        );

        let mut master = GameRng::new(self.config.seed);
        let mut stats = SimulationStats::new(self.config.round.player_count);
        let mut records = Vec::with_capacity(self.config.rounds * self.config.round.player_count);

        for round_no in 0..self.config.rounds {
            let mut round = Round::setup(self.config.round.clone(), master.fork())?;
            records.extend(round.run()?);
            stats.record_round(&round);
            debug!(round_no, trump = ?round.trump(), "round finished");
        }

        info!(tricks = stats.tricks, "simulation finished");
        Ok(SimulationReport {
            config: self.config.clone(),
            records,
            stats,
        })
    }
}
