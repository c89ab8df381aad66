use super::bankroll::Bankroll;
use super::player::Player;
use crate::Chips;
use crate::wheel::Outcome;

/// Bets one unit on the same outcome every round.
#[derive(Debug, Clone)]
pub struct Flat {
    purse: Bankroll,
    outcome: Outcome,
}

impl Flat {
    pub fn new(bankroll: Bankroll, outcome: Outcome) -> Self {
        Self {
            purse: bankroll,
            outcome,
        }
    }
}

impl Player for Flat {
    fn bankroll(&self) -> &Bankroll {
        &self.purse
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.purse
    }
    fn wager(&self) -> Chips {
        self.purse.unit()
    }
    fn choose(&mut self) -> Option<Outcome> {
        Some(self.outcome.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Bet;
    use crate::table::Table;

    fn flat() -> Flat {
        Flat::new(Bankroll::new(100, 3, 10).unwrap(), Outcome::new("Black", 1))
    }

    #[test]
    fn bets_unit_on_its_outcome() {
        let mut player = flat();
        let mut table = Table::new(50).unwrap();
        player.place_bets(&mut table).unwrap();
        assert_eq!(table.bets(), &[Bet::new(10, Outcome::new("Black", 1))]);
        assert_eq!(player.stake(), 90);
    }

    #[test]
    fn win_returns_wager_and_winnings() {
        let mut player = flat();
        let mut table = Table::new(50).unwrap();
        player.place_bets(&mut table).unwrap();
        let bet = table.bets()[0].clone();
        player.win(&bet);
        assert_eq!(player.stake(), 110);
        assert_eq!(player.wager(), 10);
    }

    #[test]
    fn stops_when_rounds_run_out() {
        let mut player = flat();
        assert!(player.playing());
        (0..3).for_each(|_| player.tick());
        assert!(!player.playing());
        let mut table = Table::new(50).unwrap();
        player.place_bets(&mut table).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn stops_when_stake_cannot_cover() {
        let mut player = Flat::new(Bankroll::new(15, 3, 10).unwrap(), Outcome::new("Black", 1));
        let mut table = Table::new(50).unwrap();
        player.place_bets(&mut table).unwrap();
        player.tick();
        assert_eq!(player.stake(), 5);
        assert!(!player.playing());
    }

    #[test]
    fn reset_restores_purse() {
        let mut player = flat();
        let mut table = Table::new(50).unwrap();
        player.place_bets(&mut table).unwrap();
        player.tick();
        player.reset(Bankroll::new(100, 3, 10).unwrap());
        assert_eq!(player.stake(), 100);
        assert_eq!(player.bankroll().rounds(), 3);
    }
}
