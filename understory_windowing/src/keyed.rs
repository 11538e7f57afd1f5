// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render identity for realized items.
//!
//! Keys never influence windowing; they let a host keep the same view
//! instance for a record while it stays realized, even as its index shifts.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// Derives a render key for a record.
///
/// Implemented by [`IndexKey`] and by any `Fn(&T, usize) -> K` closure.
pub trait ItemKey<T: ?Sized> {
    /// Key type.
    type Key;

    /// Key of `record`, which sits at `index`.
    fn key(&self, record: &T, index: usize) -> Self::Key;
}

/// Keys every record by its index.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexKey;

impl<T: ?Sized> ItemKey<T> for IndexKey {
    type Key = usize;

    fn key(&self, _record: &T, index: usize) -> usize {
        index
    }
}

impl<T: ?Sized, K, F> ItemKey<T> for F
where
    F: Fn(&T, usize) -> K,
{
    type Key = K;

    fn key(&self, record: &T, index: usize) -> K {
        self(record, index)
    }
}

/// Keys that entered and left the realized set in one update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyDiff<K> {
    /// Keys realized now that were not before, in window order.
    pub entered: Vec<K>,
    /// Keys realized before that are not anymore, in no particular order.
    pub exited: Vec<K>,
}

impl<K> KeyDiff<K> {
    /// Returns `true` if the realized set did not change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Tracks the set of realized keys across recomputations.
///
/// Feed it the keys of each new window; it reports which view instances to
/// create and which to drop. Duplicate keys within one window count once.
#[derive(Clone, Debug)]
pub struct RealizedKeys<K> {
    current: HashSet<K>,
    scratch: HashSet<K>,
}

impl<K> Default for RealizedKeys<K> {
    fn default() -> Self {
        Self {
            current: HashSet::new(),
            scratch: HashSet::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> RealizedKeys<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of realized keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Returns `true` if nothing is realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Returns `true` if `key` is realized.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.current.contains(key)
    }

    /// Replaces the realized set with `keys` and reports the difference.
    pub fn update<I>(&mut self, keys: I) -> KeyDiff<K>
    where
        I: IntoIterator<Item = K>,
    {
        self.scratch.clear();
        let mut entered = Vec::new();
        for key in keys {
            if !self.current.contains(&key) && !self.scratch.contains(&key) {
                entered.push(key.clone());
            }
            self.scratch.insert(key);
        }
        let exited = self
            .current
            .iter()
            .filter(|key| !self.scratch.contains(*key))
            .cloned()
            .collect();
        core::mem::swap(&mut self.current, &mut self.scratch);
        KeyDiff { entered, exited }
    }

    /// Drops every realized key, returning them.
    pub fn clear(&mut self) -> Vec<K> {
        self.scratch.clear();
        self.current.drain().collect()
    }
}
