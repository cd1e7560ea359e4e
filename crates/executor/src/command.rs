//! Command and output variants for the record service.

use rolodex_core::Record;

/// A decoded record-service operation.
///
/// Each variant carries its own typed payload; by the time a `Command`
/// exists, argument count and shape have already been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check whether a record exists.
    Exists {
        /// Record id to probe.
        id: String,
    },
    /// Create a new record.
    Create {
        /// Record id; must not already be present.
        id: String,
        /// Initial name.
        name: String,
        /// Initial contact.
        contact: String,
    },
    /// Read a record.
    Read {
        /// Record id to fetch.
        id: String,
    },
    /// Replace name and contact on an existing record.
    Update {
        /// Record id; must be present.
        id: String,
        /// Replacement name.
        name: String,
        /// Replacement contact.
        contact: String,
    },
    /// Delete a record.
    Delete {
        /// Record id; must be present.
        id: String,
    },
    /// Enumerate every record in store key order.
    ListAll,
}

/// The result of executing a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Result of `Exists`.
    Bool(bool),
    /// Result of `Read`.
    Record(Record),
    /// Result of `ListAll`.
    Records(Vec<Record>),
    /// Result of `Create`, `Update`, and `Delete`.
    Unit,
}
