use super::bin::Bin;
use super::catalog::Catalog;
use super::outcome::Outcome;
use super::pocket::Pocket;
use crate::Error;
use crate::POCKETS;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Arc;

/// An American wheel: 38 frozen bins and a seeded source of spins.
///
/// The bins and the outcome registry are built once by [`Catalog`] and
/// shared behind an [`Arc`], so cloning a wheel for another session or
/// thread copies only the random state. Two wheels built from the same
/// seed spin the same pockets in the same order.
#[derive(Debug, Clone)]
pub struct Wheel {
    bins: Arc<[Bin; POCKETS]>,
    outcomes: Arc<HashMap<String, Outcome>>,
    rng: SmallRng,
}

impl Wheel {
    pub fn new(seed: u64) -> Self {
        let bins = Catalog::bins();
        let outcomes = bins
            .iter()
            .flat_map(Bin::iter)
            .map(|o| (o.name().to_string(), o.clone()))
            .collect::<HashMap<_, _>>();
        log::debug!(
            "{:<32}{:<16}{:<32}",
            "built wheel",
            outcomes.len(),
            format!("seed {}", seed)
        );
        Self {
            bins: Arc::new(bins),
            outcomes: Arc::new(outcomes),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    /// Restart the spin sequence without rebuilding the bins.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }
    /// Draws a pocket uniformly from all 38.
    pub fn spin(&mut self) -> Pocket {
        Pocket::from(self.rng.random_range(0..POCKETS as u8))
    }
    /// The frozen outcomes a pocket satisfies.
    pub fn bin(&self, pocket: Pocket) -> &Bin {
        &self.bins[pocket.index()]
    }
    /// All 38 bins, shared with the wheel.
    pub fn bins(&self) -> Arc<[Bin; POCKETS]> {
        self.bins.clone()
    }
    /// Resolves a registered outcome by name.
    pub fn get(&self, name: &str) -> Result<Outcome, Error> {
        self.outcomes
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownOutcome(name.to_string()))
    }
    /// Every distinct outcome, ordered by name.
    pub fn outcomes(&self) -> Vec<Outcome> {
        let mut outcomes = self.outcomes.values().cloned().collect::<Vec<_>>();
        outcomes.sort();
        outcomes
    }
    /// Pocket label → outcome names, for inspection and export.
    pub fn layout(&self) -> BTreeMap<String, Vec<String>> {
        Pocket::all()
            .map(|p| {
                let names = self.bin(p).iter().map(|o| o.name().to_string()).collect();
                (p.to_string(), names)
            })
            .collect()
    }
}
