use super::bankroll::Bankroll;
use super::player::Player;
use crate::Chips;
use crate::table::Bet;
use crate::wheel::Outcome;

/// Doubles the bet after every loss and falls back to one unit on a win.
///
/// The next bet is `unit × 2^losses`. A long enough losing streak either
/// outgrows the stake or runs into the table limit, which ends the session.
#[derive(Debug, Clone)]
pub struct Martingale {
    purse: Bankroll,
    outcome: Outcome,
    losses: u32,
    multiplier: Chips,
}

impl Martingale {
    pub fn new(bankroll: Bankroll, outcome: Outcome) -> Self {
        Self {
            purse: bankroll,
            outcome,
            losses: 0,
            multiplier: 1,
        }
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }
}

impl Player for Martingale {
    fn bankroll(&self) -> &Bankroll {
        &self.purse
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.purse
    }
    fn wager(&self) -> Chips {
        self.purse.unit().saturating_mul(self.multiplier)
    }
    fn choose(&mut self) -> Option<Outcome> {
        Some(self.outcome.clone())
    }
    fn on_win(&mut self, _: &Bet) {
        self.on_reset();
    }
    fn on_lose(&mut self, _: &Bet) {
        self.losses += 1;
        self.multiplier = self.multiplier.saturating_mul(2);
    }
    fn on_reset(&mut self) {
        self.losses = 0;
        self.multiplier = 1;
    }
}
