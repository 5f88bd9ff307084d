//! Bounded memory of recently seen candidates.
//!
//! [`RecentSet`] pairs a FIFO queue with a hash set: membership is O(1)
//! and, once `capacity` entries are held, inserting a new entry evicts the
//! oldest one. It backs the neighbor memo, the mutation memo and the tabu
//! list.

use std::collections::{HashSet, VecDeque};

/// A capacity-bounded, insertion-ordered set of strings.
///
/// A capacity of zero stores nothing.
///
/// # Examples
///
/// ```
/// use u_stringsearch::memo::RecentSet;
///
/// let mut recent = RecentSet::new(2);
/// recent.insert("aa".to_string());
/// recent.insert("bb".to_string());
/// recent.insert("cc".to_string());
/// assert!(!recent.contains("aa"));
/// assert!(recent.contains("cc"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecentSet {
    capacity: usize,
    order: VecDeque<String>,
    members: HashSet<String>,
}

impl RecentSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::new(),
            members: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.members.contains(item)
    }

    /// Records `item`, evicting the oldest entry when full.
    ///
    /// Returns `false` if `item` was already present; its position in the
    /// eviction order is left unchanged in that case.
    pub fn insert(&mut self, item: String) -> bool {
        if self.capacity == 0 || self.members.contains(&item) {
            return false;
        }
        if self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.members.remove(&oldest);
            }
        }
        self.members.insert(item.clone());
        self.order.push_back(item);
        true
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
