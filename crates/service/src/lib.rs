//! The record service
//!
//! [`RecordService`] is the decision layer of the system: it enforces the
//! existence invariants over the keyed record store and performs the
//! encode/decode around store access. Everything below it (durability,
//! replication, concurrency control) belongs to the injected
//! [`rolodex_store::KeyedStore`]; everything above it (transport,
//! dispatch) only sees typed operations and typed errors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod service;

pub use service::RecordService;
