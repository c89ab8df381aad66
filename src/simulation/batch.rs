use super::moments::Moments;
use super::session::Session;
use crate::Chips;

/// Per-session durations and peaks, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Batch {
    durations: Vec<usize>,
    peaks: Vec<Chips>,
}

impl Batch {
    pub fn push(&mut self, session: &Session) {
        self.durations.push(session.duration());
        self.peaks.push(session.peak());
    }
    pub fn durations(&self) -> &[usize] {
        &self.durations
    }
    pub fn peaks(&self) -> &[Chips] {
        &self.peaks
    }
    pub fn len(&self) -> usize {
        self.durations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }
    pub fn summary(&self) -> Summary {
        Summary {
            sessions: self.len(),
            duration: self.durations.iter().map(|&d| d as f64).collect(),
            peak: self.peaks.iter().map(|&p| p as f64).collect(),
        }
    }
}

impl FromIterator<Session> for Batch {
    fn from_iter<I: IntoIterator<Item = Session>>(sessions: I) -> Self {
        let mut batch = Self::default();
        sessions.into_iter().for_each(|s| batch.push(&s));
        batch
    }
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub sessions: usize,
    pub duration: Moments,
    pub peak: Moments,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<12}{}", "sessions", self.sessions)?;
        writeln!(f, "{:<12}{}", "duration", self.duration)?;
        write!(f, "{:<12}{}", "peak", self.peak)
    }
}
