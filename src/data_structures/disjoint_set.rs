//! Union-find over string keys.
//!
//! Cycle detection on undirected graphs and Kruskal's spanning tree only need
//! three operations from this structure: build it from a list of keys, ask
//! whether two keys live in different sets, and merge the sets of two keys.
//! Sets are kept as parent-pointer forests with union by rank and path
//! compression, so both queries run in near-constant amortized time.

use std::collections::HashMap;

use log::warn;

use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Key -> slot in `parent` / `rank`
    slots: HashMap<String, usize>,
    keys: Vec<String>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Creates one singleton set per key.
    ///
    /// A key listed more than once is registered on first sight and skipped
    /// afterwards.
    pub fn create<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = DisjointSet::default();
        for item in items {
            let key = item.into();
            if set.slots.contains_key(&key) {
                warn!("Key {} already present in disjoint set, skipping", key);
                continue;
            }
            let slot = set.keys.len();
            set.slots.insert(key.clone(), slot);
            set.keys.push(key);
            set.parent.push(slot);
            set.rank.push(0);
            set.sets += 1;
        }
        set
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of disjoint sets currently held
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Returns true when `a` and `b` belong to different sets
    pub fn is_disjoint(&mut self, a: &str, b: &str) -> Result<bool> {
        let root_a = self.find(self.slot(a)?);
        let root_b = self.find(self.slot(b)?);
        Ok(root_a != root_b)
    }

    /// Merges the sets holding `a` and `b`.
    ///
    /// Returns false if they were already in the same set.
    pub fn union(&mut self, a: &str, b: &str) -> Result<bool> {
        let mut left = self.find(self.slot(a)?);
        let mut right = self.find(self.slot(b)?);
        if left == right {
            return Ok(false);
        }

        if self.rank[left] < self.rank[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if self.rank[left] == self.rank[right] {
            self.rank[left] = self.rank[left].saturating_add(1);
        }
        self.sets -= 1;
        Ok(true)
    }

    /// Returns the key representing the set that holds `key`
    pub fn find_root(&mut self, key: &str) -> Result<&str> {
        let root = self.find(self.slot(key)?);
        Ok(&self.keys[root])
    }

    fn slot(&self, key: &str) -> Result<usize> {
        self.slots
            .get(key)
            .copied()
            .ok_or_else(|| Error::NotInSet(key.to_string()))
    }

    fn find(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[slot] != slot {
            let next = self.parent[slot];
            self.parent[slot] = root;
            slot = next;
        }

        root
    }
}
