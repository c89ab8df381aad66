use super::bankroll::Bankroll;
use crate::Chips;
use crate::Error;
use crate::table::Bet;
use crate::table::Table;
use crate::wheel::Bin;
use crate::wheel::Outcome;

/// A betting strategy seated at the table.
///
/// Implementors supply their purse, the size of the next bet, and which
/// outcome to back; the provided methods turn those into the round
/// protocol the [`Game`](crate::game::Game) drives:
/// place → (win | lose per bet) → observe the winning bin → tick.
///
/// The `on_*` hooks are where strategies update their own counters;
/// stake bookkeeping is handled here and is identical for every strategy.
pub trait Player {
    fn bankroll(&self) -> &Bankroll;
    fn bankroll_mut(&mut self) -> &mut Bankroll;
    /// Size of the next bet.
    fn wager(&self) -> Chips;
    /// Outcome to back this round, or `None` to sit the round out.
    fn choose(&mut self) -> Option<Outcome>;

    fn on_win(&mut self, _: &Bet) {}
    fn on_lose(&mut self, _: &Bet) {}
    fn on_spin(&mut self, _: &Bin) {}
    /// Restore strategy counters to their session-start values.
    fn on_reset(&mut self) {}
    /// Restart any private random stream.
    fn reseed(&mut self, _: u64) {}

    /// Can cover the next bet and still has rounds left.
    fn playing(&self) -> bool {
        self.bankroll().stake() >= self.wager() && self.bankroll().rounds() != 0
    }
    /// Puts the next bet on the table, deducting it from the stake only
    /// once the table has accepted it. A rejected bet propagates unchanged.
    fn place_bets(&mut self, table: &mut Table) -> Result<(), Error> {
        if !self.playing() {
            return Ok(());
        }
        if let Some(outcome) = self.choose() {
            let bet = Bet::new(self.wager(), outcome);
            let amount = bet.amount();
            table.place(bet)?;
            self.bankroll_mut().debit(amount);
        }
        Ok(())
    }
    fn win(&mut self, bet: &Bet) {
        self.bankroll_mut().credit(bet.win_amount());
        self.on_win(bet);
    }
    fn lose(&mut self, bet: &Bet) {
        self.on_lose(bet);
    }
    /// Every pocket's outcomes are shown to the player, bet or not.
    fn winners(&mut self, bin: &Bin) {
        self.on_spin(bin);
    }
    fn tick(&mut self) {
        self.bankroll_mut().tick();
    }
    /// Fresh purse and counters for a new session.
    fn reset(&mut self, bankroll: Bankroll) {
        *self.bankroll_mut() = bankroll;
        self.on_reset();
    }
    fn stake(&self) -> Chips {
        self.bankroll().stake()
    }
}
