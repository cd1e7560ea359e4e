//! The keyed store capability traits.
//!
//! [`KeyedStore`] is the complete surface the record service is allowed
//! to touch: point reads and writes plus an ordered range scan. All
//! concurrency control, durability, and replication live behind this
//! trait; callers above it see a synchronous, fault-reporting interface
//! and nothing else.

use rolodex_core::Result;

/// An ordered key-value store: string keys, opaque byte values.
///
/// Keys are totally ordered (lexicographic over raw key bytes by
/// convention) and scans yield entries in that order. Infrastructure
/// failures surface as [`rolodex_core::Error::StoreFault`].
pub trait KeyedStore {
    /// Fetch the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, overwriting any existing value.
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Remove `key`. Idempotent: deleting an absent key is not an error
    /// at this level.
    fn delete(&self, key: &str) -> Result<()>;

    /// Open an ordered scan over `[low, high)`.
    ///
    /// An empty `low` or `high` bound is unbounded on that side, so
    /// `scan("", "")` enumerates the whole keyspace. The returned handle
    /// is finite and restartable per call, not resumable mid-iteration,
    /// and must be released via [`Scan::close`] before it is discarded.
    fn scan(&self, low: &str, high: &str) -> Result<Box<dyn Scan + '_>>;
}

/// A scan handle over a key range.
///
/// The handle is a scoped resource: it must be closed exactly once, on
/// every exit path, before control returns from the operation that
/// opened it.
pub trait Scan {
    /// Produce the next `(key, value)` pair in store order, or `None`
    /// when the range is exhausted.
    fn next(&mut self) -> Result<Option<(String, Vec<u8>)>>;

    /// Release the scan. Idempotent; further calls to `next` fail with a
    /// store fault.
    fn close(&mut self);
}

impl<S: KeyedStore + ?Sized> KeyedStore for &S {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }

    fn scan(&self, low: &str, high: &str) -> Result<Box<dyn Scan + '_>> {
        (**self).scan(low, high)
    }
}
