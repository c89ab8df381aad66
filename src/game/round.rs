use crate::Chips;
use crate::table::Bet;
use crate::wheel::Pocket;

/// What happened in one round: the pocket spun and how each bet settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pocket: Pocket,
    wins: Vec<Bet>,
    losses: Vec<Bet>,
}

impl Round {
    pub fn new(pocket: Pocket) -> Self {
        Self {
            pocket,
            wins: Vec::new(),
            losses: Vec::new(),
        }
    }
    pub fn pocket(&self) -> Pocket {
        self.pocket
    }
    pub fn wins(&self) -> &[Bet] {
        &self.wins
    }
    pub fn losses(&self) -> &[Bet] {
        &self.losses
    }
    pub fn won(&mut self, bet: Bet) {
        self.wins.push(bet);
    }
    pub fn lost(&mut self, bet: Bet) {
        self.losses.push(bet);
    }
    /// Sat out: nothing was on the table.
    pub fn idle(&self) -> bool {
        self.wins.is_empty() && self.losses.is_empty()
    }
    /// Net change to the player's stake over the round.
    pub fn pnl(&self) -> Chips {
        let won = self.wins.iter().map(|b| b.win_amount() - b.amount()).sum::<Chips>();
        let lost = self.losses.iter().map(Bet::lose_amount).sum::<Chips>();
        won - lost
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.idle() {
            true => write!(f, "{:>2}  (no bets)", self.pocket),
            false => write!(f, "{:>2}  {:+}", self.pocket, self.pnl()),
        }
    }
}
