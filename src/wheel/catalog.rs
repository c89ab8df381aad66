use super::bin::Bin;
use super::outcome::Outcome;
use super::pocket::Pocket;
use crate::*;
use std::collections::BTreeSet;

/// A registration of one outcome on one pocket.
pub type Entry = (Pocket, Outcome);

/// Every family of bet the layout offers.
///
/// Each category enumerates its `(pocket, outcome)` registrations as a pure
/// function of the layout. An outcome covering several pockets appears once
/// per pocket, always under the same name, so the wheel ends up holding
/// equal outcomes in each of those bins.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Straight,
    Split,
    Street,
    Corner,
    Line,
    Dozen,
    Column,
    EvenMoney,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Straight,
            Self::Split,
            Self::Street,
            Self::Corner,
            Self::Line,
            Self::Dozen,
            Self::Column,
            Self::EvenMoney,
        ]
    }
    pub const fn odds(&self) -> Odds {
        match self {
            Self::Straight => STRAIGHT_ODDS,
            Self::Split => SPLIT_ODDS,
            Self::Street => STREET_ODDS,
            Self::Corner => CORNER_ODDS,
            Self::Line => LINE_ODDS,
            Self::Dozen => DOZEN_ODDS,
            Self::Column => COLUMN_ODDS,
            Self::EvenMoney => EVEN_MONEY_ODDS,
        }
    }
    pub fn entries(&self) -> Vec<Entry> {
        match self {
            Self::Straight => Catalog::straight(),
            Self::Split => Catalog::split(),
            Self::Street => Catalog::street(),
            Self::Corner => Catalog::corner(),
            Self::Line => Catalog::line(),
            Self::Dozen => Catalog::dozen(),
            Self::Column => Catalog::column(),
            Self::EvenMoney => Catalog::even_money(),
        }
    }
}

/// Builds the pocket → outcome table for an American layout.
pub struct Catalog;

impl Catalog {
    /// Every registration across every category.
    pub fn entries() -> Vec<Entry> {
        Category::all().iter().flat_map(Category::entries).collect()
    }

    /// Applies every registration once and freezes the result.
    pub fn bins() -> [Bin; POCKETS] {
        let mut sets = std::array::from_fn::<_, POCKETS, _>(|_| BTreeSet::new());
        for (pocket, outcome) in Self::entries() {
            sets[pocket.index()].insert(outcome);
        }
        sets.map(Bin::from)
    }

    /// One outcome per pocket, 0 and 00 included.
    pub fn straight() -> Vec<Entry> {
        Pocket::all()
            .map(|p| (p, Outcome::new(p.to_string(), STRAIGHT_ODDS)))
            .collect()
    }

    /// Horizontal neighbors within a row and vertical neighbors a row apart.
    pub fn split() -> Vec<Entry> {
        let across = (0..ROWS)
            .flat_map(|r| (1..=2).map(move |c| 3 * r + c))
            .map(|n| [n, n + 1]);
        let down = (1..=33).map(|n| [n, n + 3]);
        across
            .chain(down)
            .flat_map(|pair| Self::spread("Split", &pair, SPLIT_ODDS))
            .collect()
    }

    /// Each row of three.
    pub fn street() -> Vec<Entry> {
        (0..ROWS)
            .map(|r| 3 * r + 1)
            .map(|n| [n, n + 1, n + 2])
            .flat_map(|row| Self::spread("Street", &row, STREET_ODDS))
            .collect()
    }

    /// Each 2×2 block, anchored on its top-left number.
    pub fn corner() -> Vec<Entry> {
        (0..ROWS - 1)
            .flat_map(|r| (1..=2).map(move |c| 3 * r + c))
            .map(|n| [n, n + 1, n + 3, n + 4])
            .flat_map(|block| Self::spread("Corner", &block, CORNER_ODDS))
            .collect()
    }

    /// Each pair of adjacent streets.
    pub fn line() -> Vec<Entry> {
        (0..ROWS - 1)
            .map(|r| 3 * r + 1)
            .map(|n| [n, n + 1, n + 2, n + 3, n + 4, n + 5])
            .flat_map(|six| Self::spread("Line", &six, LINE_ODDS))
            .collect()
    }

    pub fn dozen() -> Vec<Entry> {
        (0..3u8)
            .flat_map(|d| {
                let lo = 12 * d + 1;
                let hi = 12 * d + 12;
                let outcome = Outcome::new(format!("Dozen {}-{}", lo, hi), DOZEN_ODDS);
                (lo..=hi).map(move |n| (Pocket::from(n), outcome.clone()))
            })
            .collect()
    }

    pub fn column() -> Vec<Entry> {
        (0..3u8)
            .flat_map(|c| {
                let outcome = Outcome::new(format!("Column {}", c + 1), COLUMN_ODDS);
                Pocket::numbers()
                    .filter(move |p| p.column() == Some(c))
                    .map(move |p| (p, outcome.clone()))
            })
            .collect()
    }

    /// Low/High, Even/Odd, Red/Black. Zeros never qualify.
    pub fn even_money() -> Vec<Entry> {
        Pocket::numbers()
            .flat_map(|p| {
                let n = u8::from(p);
                [
                    if n <= 18 { "Low" } else { "High" },
                    if n % 2 == 0 { "Even" } else { "Odd" },
                    if p.is_red() { "Red" } else { "Black" },
                ]
                .map(|name| (p, Outcome::new(name, EVEN_MONEY_ODDS)))
            })
            .collect()
    }

    /// Registers one named outcome on every number it covers.
    fn spread(kind: &str, numbers: &[u8], odds: Odds) -> Vec<Entry> {
        let name = numbers
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join("-");
        let outcome = Outcome::new(format!("{} {}", kind, name), odds);
        numbers
            .iter()
            .map(|&n| (Pocket::from(n), outcome.clone()))
            .collect()
    }
}
