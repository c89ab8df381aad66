use crate::Chips;
use crate::wheel::Bin;
use crate::wheel::Outcome;

/// An amount wagered on a single outcome for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bet {
    amount: Chips,
    outcome: Outcome,
}

impl Bet {
    pub fn new(amount: Chips, outcome: Outcome) -> Self {
        assert!(amount > 0, "bets must be positive");
        Self { amount, outcome }
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
    /// Whether the spun pocket's bin pays this bet.
    pub fn wins(&self, bin: &Bin) -> bool {
        bin.contains(&self.outcome)
    }
    /// Returned wager plus winnings.
    pub fn win_amount(&self) -> Chips {
        self.amount + self.outcome.win_amount(self.amount)
    }
    pub fn lose_amount(&self) -> Chips {
        self.amount
    }
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} on {}", self.amount, self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_money_doubles() {
        let bet = Bet::new(10, Outcome::new("Black", 1));
        assert_eq!(bet.win_amount(), 20);
        assert_eq!(bet.lose_amount(), 10);
    }

    #[test]
    fn straight_pays_thirty_five() {
        let bet = Bet::new(2, Outcome::new("17", 35));
        assert_eq!(bet.win_amount(), 72);
    }

    #[test]
    fn settles_against_bin_by_name() {
        let bin = [Outcome::new("17", 35), Outcome::new("Black", 1)]
            .into_iter()
            .collect::<Bin>();
        assert!(Bet::new(5, Outcome::new("Black", 1)).wins(&bin));
        assert!(!Bet::new(5, Outcome::new("Red", 1)).wins(&bin));
    }

    #[test]
    fn display() {
        let bet = Bet::new(25, Outcome::new("Red", 1));
        assert_eq!(bet.to_string(), "25 on Red (1:1)");
    }
}
