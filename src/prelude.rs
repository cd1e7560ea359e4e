//! Convenience re-exports for common usage.
//!
//! ```
//! use rolodex::prelude::*;
//! ```

pub use crate::{
    Command, Error, Executor, KeyedStore, MemoryStore, Output, Record, RecordService, Result, Scan,
};
