use super::bankroll::Bankroll;
use super::player::Player;
use crate::Chips;
use crate::table::Bet;
use crate::wheel::Outcome;

/// Walks up the Fibonacci sequence on losses, back to the start on a win.
///
/// Bets `recent × unit`, where `(previous, recent)` starts at `(0, 1)`
/// and each loss shifts it to `(recent, previous + recent)`, giving
/// multiples 1, 1, 2, 3, 5, 8, …
#[derive(Debug, Clone)]
pub struct Fibonacci {
    purse: Bankroll,
    outcome: Outcome,
    previous: Chips,
    recent: Chips,
}

impl Fibonacci {
    pub fn new(bankroll: Bankroll, outcome: Outcome) -> Self {
        Self {
            purse: bankroll,
            outcome,
            previous: 0,
            recent: 1,
        }
    }
    /// Current multiple of the unit.
    pub fn multiple(&self) -> Chips {
        self.recent
    }
}

impl Player for Fibonacci {
    fn bankroll(&self) -> &Bankroll {
        &self.purse
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.purse
    }
    fn wager(&self) -> Chips {
        self.purse.unit().saturating_mul(self.recent)
    }
    fn choose(&mut self) -> Option<Outcome> {
        Some(self.outcome.clone())
    }
    fn on_win(&mut self, _: &Bet) {
        self.on_reset();
    }
    fn on_lose(&mut self, _: &Bet) {
        let next = self.previous.saturating_add(self.recent);
        self.previous = self.recent;
        self.recent = next;
    }
    fn on_reset(&mut self) {
        self.previous = 0;
        self.recent = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black() -> Outcome {
        Outcome::new("Black", 1)
    }
    fn fibonacci() -> Fibonacci {
        Fibonacci::new(Bankroll::new(1000, 100, 5).unwrap(), black())
    }

    #[test]
    fn losses_climb_the_sequence() {
        let mut player = fibonacci();
        let mut multiples = vec![player.multiple()];
        for _ in 0..6 {
            let bet = Bet::new(player.wager(), black());
            player.lose(&bet);
            multiples.push(player.multiple());
        }
        assert_eq!(multiples, vec![1, 1, 2, 3, 5, 8, 13]);
        assert_eq!(player.wager(), 65);
    }

    #[test]
    fn win_restarts_the_sequence() {
        let mut player = fibonacci();
        for _ in 0..4 {
            player.lose(&Bet::new(player.wager(), black()));
        }
        player.win(&Bet::new(player.wager(), black()));
        assert_eq!(player.multiple(), 1);
        player.lose(&Bet::new(player.wager(), black()));
        assert_eq!(player.multiple(), 1);
        player.lose(&Bet::new(player.wager(), black()));
        assert_eq!(player.multiple(), 2);
    }
}
