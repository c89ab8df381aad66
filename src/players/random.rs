use super::bankroll::Bankroll;
use super::player::Player;
use crate::Chips;
use crate::POCKETS;
use crate::wheel::Bin;
use crate::wheel::Outcome;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use std::sync::Arc;

/// Bets one unit on an outcome of a randomly drawn pocket.
///
/// Each round draws a pocket uniformly, then one of the outcomes in its bin
/// uniformly, so outcomes covering more pockets come up more often. Carries
/// its own seeded stream so a run is reproducible independent of the
/// wheel's spins.
#[derive(Debug, Clone)]
pub struct Random {
    purse: Bankroll,
    bins: Arc<[Bin; POCKETS]>,
    rng: SmallRng,
}

impl Random {
    pub fn new(bankroll: Bankroll, bins: Arc<[Bin; POCKETS]>, seed: u64) -> Self {
        Self {
            purse: bankroll,
            bins,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Player for Random {
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
        let pocket = self.rng.random_range(0..POCKETS);
        self.bins[pocket].iter().choose(&mut self.rng).cloned()
    }
    fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::Wheel;

    fn random(seed: u64) -> Random {
        Random::new(Bankroll::new(100, 10, 1).unwrap(), Wheel::new(0).bins(), seed)
    }

    #[test]
    fn picks_registered_outcomes() {
        let wheel = Wheel::new(0);
        let mut player = random(3);
        for _ in 0..100 {
            let outcome = player.choose().expect("always bets");
            assert!(wheel.get(outcome.name()).is_ok());
        }
    }

    #[test]
    fn picks_follow_pocket_coverage() {
        let mut player = random(5);
        let picks = (0..4000)
            .filter_map(|_| player.choose())
            .collect::<Vec<_>>();
        let count = |name: &str| picks.iter().filter(|o| o.name() == name).count();
        // zero and double zero bins hold only their straight bet
        assert!(count("0") > count("1"));
        assert!(count("Black") > count("1"));
    }

    #[test]
    fn same_seed_same_choices() {
        let mut a = random(9);
        let mut b = random(9);
        let xs = (0..32).map(|_| a.choose()).collect::<Vec<_>>();
        let ys = (0..32).map(|_| b.choose()).collect::<Vec<_>>();
        assert_eq!(xs, ys);
    }

    #[test]
    fn choices_vary() {
        let mut player = random(1);
        let first = player.choose();
        assert!((0..64).any(|_| player.choose() != first));
    }
}
