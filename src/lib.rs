//! # Rolodex
//!
//! Minimal record-management service over an ordered key-value store.
//!
//! Rolodex manages a single record type (id, name, contact) keyed by a
//! unique string id, with create/read/update/delete, existence checks,
//! and full enumeration. The store itself is an injected collaborator
//! behind the [`KeyedStore`] trait; [`MemoryStore`] is the bundled
//! in-memory implementation.
//!
//! ## Quick Start
//!
//! ```
//! use rolodex::prelude::*;
//!
//! let store = MemoryStore::new();
//! let service = RecordService::new(&store);
//!
//! service.create("1", "John Lee", "john.lee@g.com")?;
//! let record = service.read("1")?;
//! assert_eq!(record.name, "John Lee");
//!
//! service.update("1", "John Lee", "jlee@work.com")?;
//! service.delete("1")?;
//! # Ok::<(), rolodex::Error>(())
//! ```
//!
//! ## Typed Dispatch
//!
//! Callers that receive operations as a name plus string arguments decode
//! them once, into a [`Command`], before execution:
//!
//! ```
//! use rolodex::prelude::*;
//!
//! let store = MemoryStore::new();
//! let executor = Executor::new(&store);
//!
//! let command = rolodex::parse("Create", &["1".into(), "n".into(), "c".into()])?;
//! executor.execute(command)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod prelude;

// Re-export the entity, errors, and codec
pub use rolodex_core::{Error, Record, Result};

// Re-export the store capability layer
pub use rolodex_store::{KeyedStore, MemoryStore, Scan};

// Re-export the service
pub use rolodex_service::RecordService;

// Re-export typed dispatch
pub use rolodex_executor::{parse, Command, Executor, Output, ParseError};
