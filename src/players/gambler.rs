use super::*;
use crate::Chips;
use crate::Error;
use crate::table::Bet;
use crate::wheel::Bin;
use crate::wheel::Outcome;
use crate::wheel::Wheel;

/// Which staking system to seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Strategy {
    Flat,
    Random,
    #[default]
    Martingale,
    Fibonacci,
    SevenReds,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Flat => "flat",
                Self::Random => "random",
                Self::Martingale => "martingale",
                Self::Fibonacci => "fibonacci",
                Self::SevenReds => "seven-reds",
            }
        )
    }
}

/// The closed set of strategies, dispatched through [`Player`].
#[derive(Debug, Clone)]
pub enum Gambler {
    Flat(Flat),
    Random(Random),
    Martingale(Martingale),
    Fibonacci(Fibonacci),
    SevenReds(SevenReds),
}

impl Gambler {
    /// Seats a strategy, resolving its target outcome on the wheel.
    /// `target` is ignored by [`Strategy::Random`], `seed` by all others.
    pub fn new(
        strategy: Strategy,
        wheel: &Wheel,
        target: &str,
        bankroll: Bankroll,
        seed: u64,
    ) -> Result<Self, Error> {
        Ok(match strategy {
            Strategy::Flat => Self::Flat(Flat::new(bankroll, wheel.get(target)?)),
            Strategy::Random => Self::Random(Random::new(bankroll, wheel.bins(), seed)),
            Strategy::Martingale => Self::Martingale(Martingale::new(bankroll, wheel.get(target)?)),
            Strategy::Fibonacci => Self::Fibonacci(Fibonacci::new(bankroll, wheel.get(target)?)),
            Strategy::SevenReds => Self::SevenReds(SevenReds::new(
                bankroll,
                wheel.get(target)?,
                wheel.get("Red")?,
            )),
        })
    }
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Flat(_) => Strategy::Flat,
            Self::Random(_) => Strategy::Random,
            Self::Martingale(_) => Strategy::Martingale,
            Self::Fibonacci(_) => Strategy::Fibonacci,
            Self::SevenReds(_) => Strategy::SevenReds,
        }
    }
    fn inner(&self) -> &dyn Player {
        match self {
            Self::Flat(p) => p,
            Self::Random(p) => p,
            Self::Martingale(p) => p,
            Self::Fibonacci(p) => p,
            Self::SevenReds(p) => p,
        }
    }
    fn inner_mut(&mut self) -> &mut dyn Player {
        match self {
            Self::Flat(p) => p,
            Self::Random(p) => p,
            Self::Martingale(p) => p,
            Self::Fibonacci(p) => p,
            Self::SevenReds(p) => p,
        }
    }
}

impl Player for Gambler {
    fn bankroll(&self) -> &Bankroll {
        self.inner().bankroll()
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        self.inner_mut().bankroll_mut()
    }
    fn wager(&self) -> Chips {
        self.inner().wager()
    }
    fn choose(&mut self) -> Option<Outcome> {
        self.inner_mut().choose()
    }
    fn on_win(&mut self, bet: &Bet) {
        self.inner_mut().on_win(bet)
    }
    fn on_lose(&mut self, bet: &Bet) {
        self.inner_mut().on_lose(bet)
    }
    fn on_spin(&mut self, bin: &Bin) {
        self.inner_mut().on_spin(bin)
    }
    fn on_reset(&mut self) {
        self.inner_mut().on_reset()
    }
    fn reseed(&mut self, seed: u64) {
        self.inner_mut().reseed(seed)
    }
}
