//! American roulette under classic staking systems.
//!
//! A [`wheel::Wheel`] owns the frozen pocket → outcome table, a
//! [`table::Table`] enforces the house limit, a [`players::Player`] decides
//! how much to stake, a [`game::Game`] plays one round at a time, and a
//! [`simulation::Simulator`] repeats sessions to sample bankroll behavior.
pub mod config;
pub mod error;
pub mod game;
pub mod players;
pub mod simulation;
pub mod table;
pub mod wheel;

pub use config::Config;
pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stakes, bet amounts, and winnings in table units.
pub type Chips = i64;
/// Payout multiple, read as `odds:1`.
pub type Odds = i64;

// ============================================================================
// WHEEL LAYOUT
// ============================================================================
/// Pockets on an American wheel: 1..=36, 0, and 00.
pub const POCKETS: usize = 38;
/// Index of the "00" pocket.
pub const DOUBLE_ZERO: u8 = 37;
/// Rows of three numbers on the betting layout.
pub const ROWS: u8 = 12;
/// The eighteen red numbers. Every other number in 1..=36 is black.
pub const RED: [u8; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

// ============================================================================
// PAYOUT ODDS
// ============================================================================
pub const STRAIGHT_ODDS: Odds = 35;
pub const SPLIT_ODDS: Odds = 17;
pub const STREET_ODDS: Odds = 11;
pub const CORNER_ODDS: Odds = 8;
pub const LINE_ODDS: Odds = 5;
pub const DOZEN_ODDS: Odds = 2;
pub const COLUMN_ODDS: Odds = 2;
pub const EVEN_MONEY_ODDS: Odds = 1;

// ============================================================================
// SIMULATION DEFAULTS
// ============================================================================
/// Table limit on the sum of active bets.
pub const TABLE_LIMIT: Chips = 300;
/// Starting stake for every session.
pub const STAKE: Chips = 100;
/// Base betting unit.
pub const UNIT: Chips = 10;
/// Rounds a player is willing to sit for in one session.
pub const ROUNDS: usize = 250;
/// Sessions per batch.
pub const SESSIONS: usize = 250;
/// Rounds of consecutive reds SevenReds waits for before betting.
pub const RED_STREAK: u8 = 7;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging, optionally mirrored into a file.
/// The file always records DEBUG so a quiet terminal run can still be audited.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(path) = file {
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config.clone(),
            std::fs::File::create(path)?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
