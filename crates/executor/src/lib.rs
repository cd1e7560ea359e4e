//! Typed command dispatch for the rolodex record service
//!
//! The dispatch collaborator delivers an operation as a name plus an
//! ordered list of string arguments. This crate decodes that pair once,
//! into a [`Command`], before anything reaches the record service:
//!
//! - [`Command`] / [`Output`]: the tagged unions over the six operations
//!   and their results
//! - [`Executor`]: maps each command onto the corresponding
//!   [`rolodex_service::RecordService`] operation
//! - [`parse`]: (name, args) → [`Command`], rejecting unknown names and
//!   wrong arities with a typed [`ParseError`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod executor;
pub mod parse;

pub use command::{Command, Output};
pub use executor::Executor;
pub use parse::{parse, ParseError};
