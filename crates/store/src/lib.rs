//! Keyed store capability layer for rolodex
//!
//! This crate defines the narrow interface the record service consumes:
//! - [`KeyedStore`]: point get/put/delete plus ordered range scans
//! - [`Scan`]: a scan handle with an explicit release operation
//!
//! and one implementation:
//! - [`MemoryStore`]: BTreeMap-based storage with RwLock, lexicographic
//!   key order, suitable for embedding and tests
//!
//! The service never depends on a concrete store, only on these traits,
//! so any backend that can satisfy the contract can be substituted.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod keyed;
pub mod memory;

pub use keyed::{KeyedStore, Scan};
pub use memory::MemoryStore;
