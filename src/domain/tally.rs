//! Counted multisets of fragments
//!
//! Both the demand table (how many of each fragment the combination list
//! requires) and the inventory table (how many the user holds) are tallies:
//! `FragmentId -> count`, with missing entries meaning zero.

use serde::Serialize;
use std::collections::BTreeMap;

use super::fragment::FragmentId;

/// A counted multiset keyed by fragment id
///
/// Iteration runs in fragment id order, which matches the external item
/// numbering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally(BTreeMap<FragmentId, u32>);

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` to the count for `fragment`
    pub fn add(&mut self, fragment: FragmentId, n: u32) {
        *self.0.entry(fragment).or_insert(0) += n;
    }

    /// Sets the count for `fragment`, replacing any earlier value
    pub fn set(&mut self, fragment: FragmentId, n: u32) {
        self.0.insert(fragment, n);
    }

    /// Count for `fragment`; missing entries are zero
    pub fn count(&self, fragment: FragmentId) -> u32 {
        self.0.get(&fragment).copied().unwrap_or(0)
    }

    /// True if at least one of `fragment` is counted
    pub fn contains(&self, fragment: FragmentId) -> bool {
        self.count(fragment) > 0
    }

    /// Number of distinct fragments with an entry
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in fragment id order
    pub fn iter(&self) -> impl Iterator<Item = (FragmentId, u32)> + '_ {
        self.0.iter().map(|(fragment, count)| (*fragment, *count))
    }

    /// Sum of all counts
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

impl FromIterator<(FragmentId, u32)> for Tally {
    fn from_iter<I: IntoIterator<Item = (FragmentId, u32)>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for (fragment, count) in iter {
            tally.add(fragment, count);
        }
        tally
    }
}
