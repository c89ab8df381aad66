use crate::Chips;
use crate::Error;
use crate::ROUNDS;
use crate::SESSIONS;
use crate::STAKE;
use crate::TABLE_LIMIT;
use crate::UNIT;
use crate::game::Game;
use crate::players::Bankroll;
use crate::players::Gambler;
use crate::players::Strategy;
use crate::simulation::Simulator;
use crate::table::Table;
use crate::wheel::Wheel;

/// Everything needed to seat a strategy and run a batch.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(author, version, about = "Sample bankroll behavior of roulette staking systems")
)]
pub struct Config {
    /// Maximum total of active bets on the table
    #[cfg_attr(feature = "cli", arg(long, default_value_t = TABLE_LIMIT))]
    pub limit: Chips,
    /// Independent sessions per batch
    #[cfg_attr(feature = "cli", arg(long, default_value_t = SESSIONS))]
    pub sessions: usize,
    /// Rounds the player will sit for in one session
    #[cfg_attr(feature = "cli", arg(long, default_value_t = ROUNDS))]
    pub rounds: usize,
    /// Opening stake of every session
    #[cfg_attr(feature = "cli", arg(long, default_value_t = STAKE))]
    pub stake: Chips,
    /// Base betting unit
    #[cfg_attr(feature = "cli", arg(long, default_value_t = UNIT))]
    pub unit: Chips,
    /// Seed for the wheel and any randomized strategy
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 1))]
    pub seed: u64,
    /// Staking system to simulate
    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value_t = Strategy::default()))]
    pub strategy: Strategy,
    /// Outcome targeted by every strategy but `random`
    #[cfg_attr(feature = "cli", arg(long, default_value = "Black"))]
    pub outcome: String,
    /// Run sessions concurrently, each on its own reseeded wheel
    #[cfg_attr(feature = "cli", arg(long))]
    pub parallel: bool,
    /// Print the summary as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,
    /// Print the pocket → outcomes table as JSON and exit
    #[cfg_attr(feature = "cli", arg(long))]
    pub layout: bool,
    /// Log every session at debug level
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,
    /// Also write a debug log to this file
    #[cfg_attr(feature = "cli", arg(long))]
    pub log_file: Option<std::path::PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: TABLE_LIMIT,
            sessions: SESSIONS,
            rounds: ROUNDS,
            stake: STAKE,
            unit: UNIT,
            seed: 1,
            strategy: Strategy::default(),
            outcome: "Black".to_string(),
            parallel: false,
            json: false,
            layout: false,
            verbose: false,
            log_file: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.limit <= 0 {
            return Err(Error::InvalidConfig(format!("limit must be positive, got {}", self.limit)));
        }
        if self.sessions == 0 {
            return Err(Error::InvalidConfig("sessions must be positive".to_string()));
        }
        if self.unit > self.limit {
            return Err(Error::InvalidConfig(format!(
                "unit {} can never be placed under limit {}",
                self.unit, self.limit
            )));
        }
        self.bankroll().map(|_| ())
    }
    pub fn bankroll(&self) -> Result<Bankroll, Error> {
        Bankroll::new(self.stake, self.rounds, self.unit)
    }
    /// Wires wheel → table → game → player → simulator.
    pub fn simulator(&self) -> Result<Simulator<Gambler>, Error> {
        self.validate()?;
        let bankroll = self.bankroll()?;
        let wheel = Wheel::new(self.seed);
        let table = Table::new(self.limit)?;
        let player = Gambler::new(self.strategy, &wheel, &self.outcome, bankroll, self.seed)?;
        let game = Game::new(wheel, table);
        Simulator::new(game, player, bankroll, self.sessions, self.seed)
    }
}
