//! Core types for the rolodex record service
//!
//! This crate defines the fundamental types shared across the workspace:
//! - [`Record`]: the single managed entity (id, name, contact)
//! - [`Error`] / [`Result`]: the canonical error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;

pub use error::{Error, Result};
pub use record::Record;
