use crate::DOUBLE_ZERO;
use crate::POCKETS;
use crate::RED;

/// One of the 38 physical wheel positions.
///
/// Encoded as `0..38`: numbers 1 through 36 map to themselves, `0` is
/// zero, and `37` is double zero. Only numbers 1..=36 appear on the
/// inside grid and in outside groupings; 0 and 00 are only ever
/// reachable by a straight bet.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pocket(u8);

impl Pocket {
    pub const ZERO: Self = Self(0);
    pub const DOUBLE_ZERO: Self = Self(DOUBLE_ZERO);

    /// All pockets in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..POCKETS as u8).map(Self)
    }
    /// Pockets 1..=36, the numbered grid.
    pub fn numbers() -> impl Iterator<Item = Self> {
        (1..=36).map(Self)
    }
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    pub fn is_number(&self) -> bool {
        (1..=36).contains(&self.0)
    }
    pub fn is_red(&self) -> bool {
        RED.contains(&self.0)
    }
    pub fn is_black(&self) -> bool {
        self.is_number() && !self.is_red()
    }
    /// Zero-based layout row, for numbered pockets.
    pub fn row(&self) -> Option<u8> {
        self.is_number().then(|| (self.0 - 1) / 3)
    }
    /// Zero-based layout column, for numbered pockets.
    pub fn column(&self) -> Option<u8> {
        self.is_number().then(|| (self.0 - 1) % 3)
    }
}

impl From<u8> for Pocket {
    fn from(n: u8) -> Self {
        assert!((n as usize) < POCKETS, "pocket out of range: {}", n);
        Self(n)
    }
}
impl From<Pocket> for u8 {
    fn from(p: Pocket) -> u8 {
        p.0
    }
}

impl TryFrom<&str> for Pocket {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "00" => Ok(Self::DOUBLE_ZERO),
            n => n
                .parse::<u8>()
                .ok()
                .filter(|&n| n <= 36)
                .map(Self)
                .ok_or_else(|| format!("not a pocket: {}", s)),
        }
    }
}

impl std::fmt::Display for Pocket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            DOUBLE_ZERO => f.pad("00"),
            n => f.pad(&n.to_string()),
        }
    }
}
