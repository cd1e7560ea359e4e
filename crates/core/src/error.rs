//! Unified error types for rolodex operations.
//!
//! Every failure is operation-scoped and returned to the immediate
//! caller; nothing in this workspace retries, suppresses, or aborts the
//! process.

use thiserror::Error;

/// All rolodex errors.
///
/// This is the canonical error type for record-service operations. The
/// first two variants are caller mistakes, the rest are infrastructure
/// faults; both kinds surface to the caller the same way, as a failed
/// operation with a descriptive message.
#[derive(Debug, Error)]
pub enum Error {
    /// Create was called for an id that is already present.
    #[error("the record {0} already exists")]
    AlreadyExists(String),

    /// Read, Update, or Delete was called for an absent id.
    #[error("the record {0} does not exist")]
    NotFound(String),

    /// The keyed store reported an infrastructure-level failure.
    #[error("store fault: {0}")]
    StoreFault(String),

    /// A record could not be serialized.
    #[error("encoding fault: {0}")]
    EncodingFault(String),

    /// Stored bytes could not be parsed into a valid record.
    #[error("decoding fault: {0}")]
    DecodingFault(String),
}

/// Result type for rolodex operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an already-exists error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::AlreadyExists(_))
    }

    /// Check if this error came from the store rather than the caller.
    pub fn is_store_fault(&self) -> bool {
        matches!(self, Error::StoreFault(_))
    }
}
