//! The tabu list: a bounded FIFO of forbidden candidates.

use crate::memo::RecentSet;

/// Recently visited candidates, forbidden from being revisited.
///
/// Once `capacity` entries are held, recording a new one evicts the oldest.
#[derive(Debug, Clone)]
pub struct TabuList {
    entries: RecentSet,
}

impl TabuList {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RecentSet::new(capacity),
        }
    }

    pub fn is_tabu(&self, candidate: &str) -> bool {
        self.entries.contains(candidate)
    }

    /// Forbids `candidate`, evicting the oldest entry when full.
    pub fn record(&mut self, candidate: String) {
        self.entries.insert(candidate);
    }

    /// Entries from oldest to newest.
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().map(str::to_owned).collect()
    }
}
