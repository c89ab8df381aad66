use crate::Chips;
use crate::Odds;
use std::cmp::Ordering;
use std::hash::Hash;
use std::hash::Hasher;

/// A named way to win, paying `odds:1`.
///
/// Identity is the name alone: two outcomes constructed separately with the
/// same name are the same outcome, whatever their odds. Bins, bets, and the
/// wheel's registry all compare by value through these impls, never by
/// reference.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Outcome {
    name: String,
    odds: Odds,
}

impl Outcome {
    pub fn new(name: impl Into<String>, odds: Odds) -> Self {
        Self {
            name: name.into(),
            odds,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn odds(&self) -> Odds {
        self.odds
    }
    /// Winnings on top of the returned wager.
    pub fn win_amount(&self, amount: Chips) -> Chips {
        self.odds * amount
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for Outcome {}

impl Hash for Outcome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Ord for Outcome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({}:1)", self.name, self.odds)
    }
}
