//! In-memory keyed store.
//!
//! BTreeMap-based storage with RwLock: keys stay lexicographically
//! ordered, so range scans fall straight out of `BTreeMap::range`. Used
//! for embedding and as the substitutable store in tests.

use std::collections::BTreeMap;
use std::ops::Bound;

use parking_lot::RwLock;
use tracing::debug;

use rolodex_core::{Error, Result};

use crate::keyed::{KeyedStore, Scan};

/// An ordered in-memory keyed store.
///
/// Thread-safe: point operations take the lock briefly, and a scan
/// snapshots its range up front so the handle never holds the lock while
/// the caller iterates. Each call to [`KeyedStore::scan`] produces a
/// fresh snapshot; handles are not resumable across calls.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyedStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn scan(&self, low: &str, high: &str) -> Result<Box<dyn Scan + '_>> {
        let lower = if low.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(low.to_string())
        };
        let upper = if high.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(high.to_string())
        };

        let snapshot: Vec<(String, Vec<u8>)> = self
            .entries
            .read()
            .range((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        debug!(low, high, entries = snapshot.len(), "opened scan");
        Ok(Box::new(MemoryScan {
            entries: snapshot,
            cursor: 0,
            released: false,
        }))
    }
}

/// Scan handle over a snapshot of a [`MemoryStore`] range.
struct MemoryScan {
    entries: Vec<(String, Vec<u8>)>,
    cursor: usize,
    released: bool,
}

impl Scan for MemoryScan {
    fn next(&mut self) -> Result<Option<(String, Vec<u8>)>> {
        if self.released {
            return Err(Error::StoreFault("scan used after release".into()));
        }
        if self.cursor >= self.entries.len() {
            return Ok(None);
        }
        let entry = self.entries[self.cursor].clone();
        self.cursor += 1;
        Ok(Some(entry))
    }

    fn close(&mut self) {
        self.released = true;
    }
}
