use crate::Chips;

/// Stake history of one session, one entry per completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    start: Chips,
    stakes: Vec<Chips>,
}

impl Session {
    pub fn new(start: Chips) -> Self {
        Self {
            start,
            stakes: Vec::new(),
        }
    }
    pub fn record(&mut self, stake: Chips) {
        self.stakes.push(stake);
    }
    pub fn start(&self) -> Chips {
        self.start
    }
    pub fn stakes(&self) -> &[Chips] {
        &self.stakes
    }
    /// Rounds played.
    pub fn duration(&self) -> usize {
        self.stakes.len()
    }
    /// Highest stake held at any point, the opening stake included.
    pub fn peak(&self) -> Chips {
        self.stakes.iter().copied().fold(self.start, Chips::max)
    }
    /// Stake at the end of the session.
    pub fn last(&self) -> Chips {
        self.stakes.last().copied().unwrap_or(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_reports_start() {
        let session = Session::new(100);
        assert_eq!(session.duration(), 0);
        assert_eq!(session.peak(), 100);
        assert_eq!(session.last(), 100);
    }

    #[test]
    fn peak_and_duration() {
        let mut session = Session::new(100);
        [110, 130, 90, 60].into_iter().for_each(|s| session.record(s));
        assert_eq!(session.duration(), 4);
        assert_eq!(session.peak(), 130);
        assert_eq!(session.last(), 60);
    }

    #[test]
    fn losing_session_peaks_at_start() {
        let mut session = Session::new(100);
        [90, 80].into_iter().for_each(|s| session.record(s));
        assert_eq!(session.peak(), 100);
    }
}
