use super::bet::Bet;
use crate::Chips;
use crate::Error;

/// The felt for the current round.
///
/// Holds the active bets in placement order and guarantees their sum never
/// exceeds the table limit: a bet that would break the limit is rejected
/// before anything is recorded.
#[derive(Debug, Clone)]
pub struct Table {
    limit: Chips,
    bets: Vec<Bet>,
}

impl Table {
    pub fn new(limit: Chips) -> Result<Self, Error> {
        if limit <= 0 {
            return Err(Error::InvalidConfig(format!(
                "table limit must be positive, got {}",
                limit
            )));
        }
        Ok(Self {
            limit,
            bets: Vec::new(),
        })
    }
    pub fn limit(&self) -> Chips {
        self.limit
    }
    /// Sum of every active bet.
    pub fn total(&self) -> Chips {
        self.bets.iter().map(Bet::amount).sum()
    }
    /// Accepts the bet only if the new total stays within the limit.
    pub fn place(&mut self, bet: Bet) -> Result<(), Error> {
        let total = self.total();
        let within = total
            .checked_add(bet.amount())
            .is_some_and(|sum| sum <= self.limit);
        if !within {
            return Err(Error::LimitExceeded {
                limit: self.limit,
                total,
                amount: bet.amount(),
            });
        }
        log::trace!("{:<32}{}", "placed", bet);
        self.bets.push(bet);
        Ok(())
    }
    pub fn clear(&mut self) {
        self.bets.clear();
    }
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let bets = self.bets.iter().map(Bet::to_string).collect::<Vec<_>>();
        write!(f, "Table({}/{}) [{}]", self.total(), self.limit, bets.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::Outcome;

    fn black(amount: Chips) -> Bet {
        Bet::new(amount, Outcome::new("Black", 1))
    }

    #[test]
    fn rejects_non_positive_limit() {
        assert!(matches!(Table::new(0), Err(Error::InvalidConfig(_))));
        assert!(matches!(Table::new(-5), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn accepts_up_to_the_limit() {
        let mut table = Table::new(100).unwrap();
        table.place(black(60)).unwrap();
        table.place(black(40)).unwrap();
        assert_eq!(table.total(), 100);
        assert_eq!(table.bets().len(), 2);
    }

    #[test]
    fn rejected_bet_leaves_table_untouched() {
        let mut table = Table::new(100).unwrap();
        table.place(black(60)).unwrap();
        let result = table.place(black(41));
        assert_eq!(
            result,
            Err(Error::LimitExceeded {
                limit: 100,
                total: 60,
                amount: 41,
            })
        );
        assert_eq!(table.bets(), &[black(60)]);
        assert_eq!(table.total(), 60);
    }

    #[test]
    fn single_bet_over_limit() {
        let mut table = Table::new(100).unwrap();
        assert!(table.place(black(160)).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn overflowing_total_is_over_limit() {
        let mut table = Table::new(Chips::MAX).unwrap();
        table.place(black(Chips::MAX / 2 + 1)).unwrap();
        let result = table.place(black(Chips::MAX / 2 + 1));
        assert_eq!(
            result,
            Err(Error::LimitExceeded {
                limit: Chips::MAX,
                total: Chips::MAX / 2 + 1,
                amount: Chips::MAX / 2 + 1,
            })
        );
        assert_eq!(table.bets().len(), 1);
    }

    #[test]
    fn clear_empties_the_felt() {
        let mut table = Table::new(100).unwrap();
        table.place(black(10)).unwrap();
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn bets_keep_placement_order() {
        let mut table = Table::new(100).unwrap();
        table.place(black(10)).unwrap();
        table.place(Bet::new(5, Outcome::new("Red", 1))).unwrap();
        let names = table
            .bets()
            .iter()
            .map(|b| b.outcome().name())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Black", "Red"]);
    }
}
