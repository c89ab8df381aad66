use super::bankroll::Bankroll;
use super::martingale::Martingale;
use super::player::Player;
use crate::Chips;
use crate::RED_STREAK;
use crate::table::Bet;
use crate::wheel::Bin;
use crate::wheel::Outcome;

/// A Martingale that waits for seven reds in a row before betting.
///
/// `countdown` starts at seven and drops by one for every red spin; any
/// other result (black, 0, 00) winds it back to seven. The player sits
/// rounds out until the countdown reaches zero. From then on it plays the
/// inner Martingale, and a losing red keeps the countdown at zero.
#[derive(Debug, Clone)]
pub struct SevenReds {
    inner: Martingale,
    red: Outcome,
    countdown: u8,
}

impl SevenReds {
    pub fn new(bankroll: Bankroll, outcome: Outcome, red: Outcome) -> Self {
        Self {
            inner: Martingale::new(bankroll, outcome),
            red,
            countdown: RED_STREAK,
        }
    }
    /// Reds still needed before the next bet.
    pub fn countdown(&self) -> u8 {
        self.countdown
    }
}

impl Player for SevenReds {
    fn bankroll(&self) -> &Bankroll {
        self.inner.bankroll()
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        self.inner.bankroll_mut()
    }
    fn wager(&self) -> Chips {
        self.inner.wager()
    }
    fn choose(&mut self) -> Option<Outcome> {
        match self.countdown {
            0 => self.inner.choose(),
            _ => None,
        }
    }
    fn on_win(&mut self, bet: &Bet) {
        self.inner.on_win(bet);
    }
    fn on_lose(&mut self, bet: &Bet) {
        self.inner.on_lose(bet);
    }
    fn on_spin(&mut self, bin: &Bin) {
        self.countdown = match bin.contains(&self.red) {
            true => self.countdown.saturating_sub(1),
            false => RED_STREAK,
        };
    }
    fn on_reset(&mut self) {
        self.inner.on_reset();
        self.countdown = RED_STREAK;
    }
}
