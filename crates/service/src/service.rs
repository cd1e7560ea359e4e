//! CRUD, existence, and enumeration over the keyed store.

use tracing::debug;

use rolodex_core::{Error, Record, Result};
use rolodex_store::KeyedStore;

/// Stateless record service over an injected keyed store.
///
/// Each operation is a short synchronous procedure: at most one existence
/// check, one encode/decode, and one store call (`list_all` performs one
/// range scan and one decode per entry). The service holds no state of
/// its own between invocations; the store owns all persisted bytes.
///
/// Concurrency control is entirely the store's concern. The service never
/// retries, backs off, or caches, and presents each operation as one
/// logical step even where two store calls occur.
///
/// # Example
///
/// ```
/// use rolodex_service::RecordService;
/// use rolodex_store::MemoryStore;
///
/// let store = MemoryStore::new();
/// let service = RecordService::new(&store);
///
/// service.create("1", "John Lee", "john.lee@g.com")?;
/// assert!(service.exists("1")?);
/// # Ok::<(), rolodex_core::Error>(())
/// ```
pub struct RecordService<S> {
    store: S,
}

impl<S: KeyedStore> RecordService<S> {
    /// Create a service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Check whether a record exists under `id`.
    ///
    /// No side effects. An empty id is looked up like any other; only a
    /// store fault is an error here.
    pub fn exists(&self, id: &str) -> Result<bool> {
        debug!(id, "exists");
        Ok(self.store.get(id)?.is_some())
    }

    /// Create a new record.
    ///
    /// Fails with [`Error::AlreadyExists`] if a record is already stored
    /// under `id`.
    pub fn create(&self, id: &str, name: &str, contact: &str) -> Result<()> {
        debug!(id, "create");
        if self.exists(id)? {
            return Err(Error::AlreadyExists(id.to_string()));
        }
        let record = Record::new(id, name, contact);
        self.store.put(id, &record.to_bytes()?)
    }

    /// Read the record stored under `id`.
    ///
    /// Fails with [`Error::NotFound`] if absent, or
    /// [`Error::DecodingFault`] if the stored bytes do not parse.
    pub fn read(&self, id: &str) -> Result<Record> {
        debug!(id, "read");
        match self.store.get(id)? {
            Some(bytes) => Record::from_bytes(&bytes),
            None => Err(Error::NotFound(id.to_string())),
        }
    }

    /// Replace `name` and `contact` on an existing record.
    ///
    /// Absence of the target surfaces as the [`Error::NotFound`] from the
    /// underlying read; there is no separate existence pre-check. The id
    /// field is never touched, and the write goes back under the original
    /// lookup key rather than whatever id the stored record carries, so
    /// key and record cannot drift apart.
    pub fn update(&self, id: &str, name: &str, contact: &str) -> Result<()> {
        debug!(id, "update");
        let mut record = self.read(id)?;
        record.name = name.to_string();
        record.contact = contact.to_string();
        self.store.put(id, &record.to_bytes()?)
    }

    /// Delete the record stored under `id`.
    ///
    /// Fails with [`Error::NotFound`] if absent. The store-level delete
    /// is idempotent, but this layer still requires pre-existence.
    pub fn delete(&self, id: &str) -> Result<()> {
        debug!(id, "delete");
        if !self.exists(id)? {
            return Err(Error::NotFound(id.to_string()));
        }
        self.store.delete(id)
    }

    /// Enumerate every record in the store, in store key order.
    ///
    /// Opens one unbounded scan and decodes each value. Fails fast on the
    /// first decode failure, discarding partial results. The scan handle
    /// is released on every exit path before this returns.
    pub fn list_all(&self) -> Result<Vec<Record>> {
        debug!("list_all");
        let mut scan = self.store.scan("", "")?;
        let mut records = Vec::new();
        loop {
            match scan.next() {
                Ok(Some((_, bytes))) => match Record::from_bytes(&bytes) {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        scan.close();
                        return Err(e);
                    }
                },
                Ok(None) => break,
                Err(e) => {
                    scan.close();
                    return Err(e);
                }
            }
        }
        scan.close();
        Ok(records)
    }
}
