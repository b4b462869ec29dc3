use serde::{Deserialize, Serialize};

use super::Candidate;

/// The pair of vote counters, replaced wholesale whenever the backend
/// returns fresh numbers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    pub barbie: u64,
    pub oppenheimer: u64,
}

impl VoteTally {
    pub fn count(&self, candidate: Candidate) -> u64 {
        match candidate {
            Candidate::Barbie => self.barbie,
            Candidate::Oppenheimer => self.oppenheimer,
        }
    }

    pub fn total(&self) -> u64 {
        self.barbie + self.oppenheimer
    }

    /// Share of the total for one candidate, in percent.
    ///
    /// Clamped to 0.0 while nothing has been counted yet, so the bars never
    /// see a divide-by-zero NaN.
    pub fn percentage(&self, candidate: Candidate) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(candidate) as f64 / total as f64 * 100.0
    }
}
