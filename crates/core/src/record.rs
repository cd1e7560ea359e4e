//! The record entity and its byte codec.
//!
//! A [`Record`] is the single entity this system manages. Its `id` doubles
//! as the store key and is immutable once created; only `name` and
//! `contact` change over a record's lifetime.
//!
//! Records cross the storage boundary as self-describing JSON bytes.
//! The codec is lossless: `from_bytes(to_bytes(r))` equals `r` for every
//! valid record.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The single managed entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier; doubles as the store key. Immutable.
    pub id: String,
    /// Display name. Mutable via update.
    pub name: String,
    /// Contact address. Mutable via update.
    pub contact: String,
}

impl Record {
    /// Create a new record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// Encode this record to its stored byte representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::EncodingFault(e.to_string()))
    }

    /// Decode a record from its stored byte representation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::DecodingFault(e.to_string()))
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.id, self.name, self.contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encodes_as_self_describing_json() {
        let record = Record::new("1", "John Lee", "john.lee@g.com");
        let bytes = record.to_bytes().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["name"], "John Lee");
        assert_eq!(json["contact"], "john.lee@g.com");
    }

    #[test]
    fn round_trips_losslessly() {
        let record = Record::new("k", "n", "c");
        let decoded = Record::from_bytes(&record.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn rejects_corrupt_bytes() {
        let err = Record::from_bytes(b"not json").unwrap_err();
        assert!(matches!(err, Error::DecodingFault(_)));
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = Record::from_bytes(b"{\"id\": 42}").unwrap_err();
        assert!(matches!(err, Error::DecodingFault(_)));
    }

    proptest! {
        #[test]
        fn round_trip_law(id in ".*", name in ".*", contact in ".*") {
            let record = Record::new(id, name, contact);
            let decoded = Record::from_bytes(&record.to_bytes().unwrap()).unwrap();
            prop_assert_eq!(decoded, record);
        }
    }
}
