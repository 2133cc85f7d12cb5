//! Insertion-ordered record store
//!
//! A thin owned sequence with linear-scan queries. There is no index: every
//! lookup, update and aggregate walks the items in insertion order, which is
//! what gives first-match lookups and first-wins extremes their meaning.
//! Sorting never reorders the store itself; it returns a sorted copy.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Which end of an ordering [`OrderedStore::find_extreme`] looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Max,
    Min,
}

/// An insertion-ordered collection of one record type
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedStore<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedStore<T> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds an item at the end
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends every item in sequence order
    pub fn bulk_append(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    /// Removes every item matching the predicate
    ///
    /// Returns true if at least one item was removed. Survivors keep their
    /// relative order.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        self.items.len() != before
    }

    /// Returns the first item matching the predicate
    pub fn find_first(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    /// Replaces every item matching the predicate with the replacer's output
    ///
    /// Returns true if any item was replaced. Replaced items keep their
    /// position.
    pub fn update_where(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
        mut replacer: impl FnMut(&T) -> T,
    ) -> bool {
        let mut updated = false;
        for slot in self.items.iter_mut() {
            if predicate(slot) {
                *slot = replacer(slot);
                updated = true;
            }
        }
        updated
    }

    /// Drops every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Finds the greatest (or least) item under `compare` in one pass
    ///
    /// The candidate is only replaced by a strictly better item, so on ties
    /// the first item in insertion order wins.
    pub fn find_extreme(
        &self,
        mut compare: impl FnMut(&T, &T) -> Ordering,
        extreme: Extreme,
    ) -> Option<&T> {
        let wanted = match extreme {
            Extreme::Max => Ordering::Greater,
            Extreme::Min => Ordering::Less,
        };

        let mut candidate: Option<&T> = None;
        for item in &self.items {
            match candidate {
                Some(best) if compare(item, best) != wanted => {}
                _ => candidate = Some(item),
            }
        }
        candidate
    }

    /// Sums a numeric projection of every item
    pub fn sum_by(&self, value: impl FnMut(&T) -> f64) -> f64 {
        self.items.iter().map(value).sum()
    }

    /// Averages a numeric projection, 0 when the store is empty
    pub fn average_by(&self, value: impl FnMut(&T) -> f64) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.sum_by(value) / self.items.len() as f64
    }

    /// Counts the items matching the predicate
    pub fn count_where(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.items.iter().filter(|item| predicate(item)).count()
    }

    /// Counts items per key
    pub fn count_by<K: Eq + Hash>(&self, mut key: impl FnMut(&T) -> K) -> HashMap<K, usize> {
        let mut counts = HashMap::new();
        for item in &self.items {
            *counts.entry(key(item)).or_insert(0) += 1;
        }
        counts
    }
}

impl<T: Clone> OrderedStore<T> {
    /// Copies the current contents in insertion order
    pub fn to_snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Returns a sorted copy; equal items keep their insertion order
    pub fn sort_snapshot(&self, compare: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
        let mut copy = self.to_snapshot();
        copy.sort_by(compare);
        copy
    }

    /// Copies the items matching the predicate, in insertion order
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}

impl<T> FromIterator<T> for OrderedStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn store_of(values: &[i32]) -> OrderedStore<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn append_keeps_order() {
        let mut store = OrderedStore::new();
        store.append("a");
        store.append("b");
        store.bulk_append(["c", "d"]);

        assert_eq!(store.to_snapshot(), vec!["a", "b", "c", "d"]);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn remove_where_removes_every_match() {
        let mut store = store_of(&[1, 2, 1, 3, 1]);
        assert!(store.remove_where(|v| *v == 1));
        assert_eq!(store.to_snapshot(), vec![2, 3]);
    }

    #[test]
    fn remove_where_handles_head_tail_and_only() {
        let mut store = store_of(&[1, 2, 3]);
        assert!(store.remove_where(|v| *v == 1));
        assert!(store.remove_where(|v| *v == 3));
        assert_eq!(store.to_snapshot(), vec![2]);

        assert!(store.remove_where(|v| *v == 2));
        assert!(store.is_empty());

        store.append(7);
        assert_eq!(store.to_snapshot(), vec![7]);
    }

    #[test]
    fn remove_where_without_match_is_noop() {
        let mut store = store_of(&[1, 2, 3]);
        assert!(!store.remove_where(|v| *v == 9));
        assert_eq!(store.to_snapshot(), vec![1, 2, 3]);
    }

    #[test]
    fn find_first_returns_earliest_match() {
        let store: OrderedStore<(i32, &str)> = [(1, "a"), (2, "b"), (1, "c")].into_iter().collect();
        assert_eq!(store.find_first(|(k, _)| *k == 1), Some(&(1, "a")));
        assert_eq!(store.find_first(|(k, _)| *k == 5), None);
    }

    #[test]
    fn update_where_replaces_every_match_in_place() {
        let mut store = store_of(&[1, 2, 1]);
        assert!(store.update_where(|v| *v == 1, |v| v * 10));
        assert_eq!(store.to_snapshot(), vec![10, 2, 10]);

        assert!(!store.update_where(|v| *v == 99, |_| 0));
    }

    #[test]
    fn sort_snapshot_leaves_store_untouched() {
        let store = store_of(&[3, 1, 2]);
        assert_eq!(store.sort_snapshot(|a, b| a.cmp(b)), vec![1, 2, 3]);
        assert_eq!(store.to_snapshot(), vec![3, 1, 2]);
    }

    #[test]
    fn find_extreme_prefers_first_on_tie() {
        let store: OrderedStore<(i32, &str)> =
            [(5, "a"), (9, "b"), (9, "c"), (1, "d"), (1, "e")].into_iter().collect();

        let max = store.find_extreme(|x, y| x.0.cmp(&y.0), Extreme::Max);
        let min = store.find_extreme(|x, y| x.0.cmp(&y.0), Extreme::Min);

        assert_eq!(max, Some(&(9, "b")));
        assert_eq!(min, Some(&(1, "d")));
    }

    #[test]
    fn find_extreme_on_empty_is_none() {
        let store: OrderedStore<i32> = OrderedStore::new();
        assert_eq!(store.find_extreme(|a, b| a.cmp(b), Extreme::Max), None);
    }

    #[test]
    fn average_of_empty_is_zero() {
        let store: OrderedStore<i32> = OrderedStore::new();
        assert_eq!(store.average_by(|v| f64::from(*v)), 0.0);
    }

    #[test]
    fn aggregates() {
        let store = store_of(&[1, 2, 3, 4]);
        assert_eq!(store.sum_by(|v| f64::from(*v)), 10.0);
        assert_eq!(store.average_by(|v| f64::from(*v)), 2.5);
        assert_eq!(store.count_where(|v| v % 2 == 0), 2);

        let parity = store.count_by(|v| v % 2 == 0);
        assert_eq!(parity.get(&true), Some(&2));
        assert_eq!(parity.get(&false), Some(&2));
    }

    #[test]
    fn clear_resets() {
        let mut store = store_of(&[1, 2]);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn iteration_is_restartable() {
        let store = store_of(&[4, 5]);
        let first: Vec<_> = store.iter().collect();
        let second: Vec<_> = (&store).into_iter().collect();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn snapshot_preserves_append_order(values in prop::collection::vec(any::<i32>(), 0..50)) {
            let mut store = OrderedStore::new();
            for v in &values {
                store.append(*v);
            }
            prop_assert_eq!(store.to_snapshot(), values.clone());
            prop_assert_eq!(store.to_snapshot(), store.to_snapshot());
        }

        #[test]
        fn sort_is_stable(pairs in prop::collection::vec((0i32..5, any::<u16>()), 0..50)) {
            let tagged: Vec<(i32, u16, usize)> = pairs
                .iter()
                .enumerate()
                .map(|(i, (k, v))| (*k, *v, i))
                .collect();
            let store: OrderedStore<_> = tagged.iter().copied().collect();

            let sorted = store.sort_snapshot(|a, b| a.0.cmp(&b.0));
            for window in sorted.windows(2) {
                prop_assert!(window[0].0 <= window[1].0);
                if window[0].0 == window[1].0 {
                    prop_assert!(window[0].2 < window[1].2);
                }
            }
        }

        #[test]
        fn remove_where_matches_filter(values in prop::collection::vec(0i32..10, 0..50), target in 0i32..10) {
            let mut store: OrderedStore<i32> = values.iter().copied().collect();
            let expected: Vec<i32> = values.iter().copied().filter(|v| *v != target).collect();

            let removed = store.remove_where(|v| *v == target);
            prop_assert_eq!(removed, values.contains(&target));
            prop_assert_eq!(store.to_snapshot(), expected);
        }
    }
}
