use std::collections::HashMap;

use crate::models::SalaryEntry;

/// Every entry the bot has already handled, keyed by id.
///
/// Grows for the lifetime of the process and is never pruned.
#[derive(Debug, Default)]
pub struct SeenSet {
    entries: HashMap<i64, SalaryEntry>,
}

impl SeenSet {
    pub fn contains(&self, id: i64) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: i64) -> Option<&SalaryEntry> {
        self.entries.get(&id)
    }

    /// Returns `false` if the id was already present; the stored entry is kept
    pub fn insert(&mut self, entry: SalaryEntry) -> bool {
        if self.contains(entry.id) {
            return false;
        }
        self.entries.insert(entry.id, entry);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Diff state owned by the poller.
///
/// Until the first poll has completed the state is uninitialized and unseen
/// entries are recorded silently, so the backlog present at startup is never
/// announced.
#[derive(Debug, Default)]
pub struct WatchState {
    seen: SeenSet,
    initialized: bool,
}

impl WatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Record `entries` and return, in input order, the ones to announce.
    ///
    /// An entry is returned only if its id was unseen and the state is
    /// initialized. A duplicate id inside the same batch counts once.
    pub fn absorb(&mut self, entries: Vec<SalaryEntry>) -> Vec<SalaryEntry> {
        let mut fresh = Vec::new();
        for entry in entries {
            if self.seen.contains(entry.id) {
                continue;
            }
            if self.initialized {
                fresh.push(entry.clone());
            }
            self.seen.insert(entry);
        }
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watcher::testing::entry;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn ids(entries: &[SalaryEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_first_cycle_is_silent() {
        let mut state = WatchState::new();
        let fresh = state.absorb(vec![entry(1), entry(2), entry(3)]);

        assert!(fresh.is_empty());
        assert_eq!(state.seen().len(), 3);
        assert!(state.seen().contains(2));
    }

    #[test]
    fn test_only_new_id_is_forwarded() {
        let mut state = WatchState::new();
        state.absorb(vec![entry(1), entry(2)]);
        state.mark_initialized();

        let fresh = state.absorb(vec![entry(1), entry(2), entry(3)]);
        assert_eq!(ids(&fresh), vec![3]);
    }

    #[test]
    fn test_order_is_preserved() {
        let mut state = WatchState::new();
        state.mark_initialized();

        let fresh = state.absorb(vec![entry(9), entry(4), entry(7)]);
        assert_eq!(ids(&fresh), vec![9, 4, 7]);
    }

    #[test]
    fn test_duplicates_within_batch_count_once() {
        let mut state = WatchState::new();
        state.mark_initialized();

        let fresh = state.absorb(vec![entry(5), entry(5), entry(6)]);
        assert_eq!(ids(&fresh), vec![5, 6]);
        assert_eq!(state.seen().len(), 2);
    }

    #[test]
    fn test_seen_set_keeps_first_version() {
        let mut seen = SeenSet::default();
        let mut original = entry(1);
        original.grade = "L4".into();
        let mut edited = entry(1);
        edited.grade = "L5".into();

        assert!(seen.insert(original));
        assert!(!seen.insert(edited));
        assert_eq!(seen.get(1).unwrap().grade, "L4");
    }

    proptest! {
        #[test]
        fn prop_no_id_forwarded_twice(
            batches in prop::collection::vec(prop::collection::vec(0i64..40, 0..15), 1..8)
        ) {
            let mut state = WatchState::new();
            let mut forwarded = Vec::new();

            for batch in batches {
                let entries = batch.into_iter().map(entry).collect();
                forwarded.extend(ids(&state.absorb(entries)));
                state.mark_initialized();
            }

            let unique: HashSet<i64> = forwarded.iter().copied().collect();
            prop_assert_eq!(unique.len(), forwarded.len());
        }

        #[test]
        fn prop_every_fetched_id_is_seen(
            first in prop::collection::vec(0i64..100, 0..20),
            second in prop::collection::vec(0i64..100, 0..20),
        ) {
            let mut state = WatchState::new();
            prop_assert!(state.absorb(first.iter().copied().map(entry).collect()).is_empty());
            state.mark_initialized();
            let fresh = state.absorb(second.iter().copied().map(entry).collect());

            for id in first.iter().chain(second.iter()) {
                prop_assert!(state.seen().contains(*id));
            }
            for e in &fresh {
                prop_assert!(!first.contains(&e.id));
            }
        }
    }
}
