use std::collections::VecDeque;

use crate::models::{Firm, FirmId};

pub const DEFAULT_RECENT_CAPACITY: usize = 5;

/// Most-recent-first history of viewed firms, bounded and free of duplicate ids.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentlyViewed {
    firms: VecDeque<Firm>,
    capacity: usize,
}

impl Default for RecentlyViewed {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_RECENT_CAPACITY)
    }
}

impl RecentlyViewed {
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            firms: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild from stored records, replaying oldest first so order, dedup and bound hold.
    pub fn from_firms(firms: Vec<Firm>, capacity: usize) -> Self {
        let mut recent = Self::with_capacity(capacity);
        for firm in firms.into_iter().rev() {
            recent.record(firm);
        }
        recent
    }

    /// Move the firm to the front, or prepend it and evict the oldest past capacity.
    pub fn record(&mut self, firm: Firm) {
        if let Some(pos) = self.firms.iter().position(|f| f.id == firm.id) {
            self.firms.remove(pos);
        }
        self.firms.push_front(firm);
        self.firms.truncate(self.capacity);
    }

    pub fn get(&self, id: &FirmId) -> Option<&Firm> {
        self.firms.iter().find(|f| &f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Firm> {
        self.firms.iter()
    }

    pub fn to_vec(&self) -> Vec<Firm> {
        self.firms.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.firms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.firms.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
