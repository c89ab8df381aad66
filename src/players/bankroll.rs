use crate::Chips;
use crate::Error;

/// Money and patience a player brings to one session.
///
/// `unit` is the base bet every strategy scales from. A strategy keeps one
/// of these as its live purse and is handed a fresh copy on every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    stake: Chips,
    rounds: usize,
    unit: Chips,
}

impl Bankroll {
    pub fn new(stake: Chips, rounds: usize, unit: Chips) -> Result<Self, Error> {
        if stake <= 0 {
            return Err(Error::InvalidConfig(format!("stake must be positive, got {}", stake)));
        }
        if unit <= 0 {
            return Err(Error::InvalidConfig(format!("unit must be positive, got {}", unit)));
        }
        if stake < unit {
            return Err(Error::InvalidConfig(format!(
                "stake {} cannot cover a unit of {}",
                stake, unit
            )));
        }
        if rounds == 0 {
            return Err(Error::InvalidConfig("rounds must be positive".to_string()));
        }
        Ok(Self {
            stake,
            rounds,
            unit,
        })
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn unit(&self) -> Chips {
        self.unit
    }
    pub fn debit(&mut self, amount: Chips) {
        self.stake -= amount;
    }
    pub fn credit(&mut self, amount: Chips) {
        self.stake += amount;
    }
    /// One round consumed.
    pub fn tick(&mut self) {
        self.rounds = self.rounds.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_inputs() {
        assert!(Bankroll::new(100, 10, 5).is_ok());
        assert!(Bankroll::new(0, 10, 5).is_err());
        assert!(Bankroll::new(100, 0, 5).is_err());
        assert!(Bankroll::new(100, 10, 0).is_err());
        assert!(Bankroll::new(10, 10, 10).is_ok());
        assert!(matches!(
            Bankroll::new(5, 10, 10),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn ledger() {
        let mut bankroll = Bankroll::new(100, 2, 10).unwrap();
        bankroll.debit(10);
        bankroll.credit(20);
        assert_eq!(bankroll.stake(), 110);
        bankroll.tick();
        bankroll.tick();
        bankroll.tick();
        assert_eq!(bankroll.rounds(), 0);
    }
}
