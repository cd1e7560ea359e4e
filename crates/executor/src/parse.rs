//! Operation name + string arguments → [`Command`] conversion.
//!
//! The dispatch collaborator hands over an operation name and an ordered
//! list of string-typed arguments. This module validates that pair once:
//! unknown names and wrong arities are rejected here, so the record
//! service only ever sees well-formed commands.

use thiserror::Error;

use crate::command::Command;

/// A (name, args) pair that does not decode into a [`Command`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The operation name matches no known command.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The operation is known but the argument count is wrong.
    #[error("{op} takes {expected} argument(s), got {got}")]
    WrongArity {
        /// Operation name as received.
        op: String,
        /// Number of arguments the operation takes.
        expected: usize,
        /// Number of arguments actually supplied.
        got: usize,
    },
}

/// Decode an operation name and its ordered string arguments.
///
/// Exists/Read/Delete take one argument (the id), Create/Update take
/// three (id, name, contact), ListAll takes none.
pub fn parse(name: &str, args: &[String]) -> Result<Command, ParseError> {
    match name {
        "Exists" => {
            let [id] = take::<1>(name, args)?;
            Ok(Command::Exists { id })
        }
        "Create" => {
            let [id, name, contact] = take::<3>(name, args)?;
            Ok(Command::Create { id, name, contact })
        }
        "Read" => {
            let [id] = take::<1>(name, args)?;
            Ok(Command::Read { id })
        }
        "Update" => {
            let [id, name, contact] = take::<3>(name, args)?;
            Ok(Command::Update { id, name, contact })
        }
        "Delete" => {
            let [id] = take::<1>(name, args)?;
            Ok(Command::Delete { id })
        }
        "ListAll" => {
            take::<0>(name, args)?;
            Ok(Command::ListAll)
        }
        other => Err(ParseError::UnknownOperation(other.to_string())),
    }
}

fn take<const N: usize>(op: &str, args: &[String]) -> Result<[String; N], ParseError> {
    let args: [String; N] =
        <[String; N]>::try_from(args.to_vec()).map_err(|_| ParseError::WrongArity {
            op: op.to_string(),
            expected: N,
            got: args.len(),
        })?;
    Ok(args)
}
