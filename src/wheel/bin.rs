use super::outcome::Outcome;
use std::collections::BTreeSet;

/// The frozen set of outcomes a single pocket satisfies.
///
/// Bins are assembled from a plain set while the wheel is being built and
/// expose only read access afterwards, so a pocket's winners can never
/// change once the wheel exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bin(BTreeSet<Outcome>);

impl Bin {
    pub fn contains(&self, outcome: &Outcome) -> bool {
        self.0.contains(outcome)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Lookup by name, without constructing an [`Outcome`] to compare.
    pub fn named(&self, name: &str) -> Option<&Outcome> {
        self.0.iter().find(|o| o.name() == name)
    }
}

impl From<BTreeSet<Outcome>> for Bin {
    fn from(outcomes: BTreeSet<Outcome>) -> Self {
        Self(outcomes)
    }
}

impl FromIterator<Outcome> for Bin {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Bin {
    type Item = &'a Outcome;
    type IntoIter = std::collections::btree_set::Iter<'a, Outcome>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Bin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = self.iter().map(Outcome::name).collect::<Vec<_>>();
        write!(f, "[{}]", names.join(", "))
    }
}
