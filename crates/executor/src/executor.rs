//! Command execution against the record service.

use tracing::debug;

use rolodex_core::Result;
use rolodex_service::RecordService;
use rolodex_store::KeyedStore;

use crate::command::{Command, Output};

/// Executes [`Command`]s against a [`RecordService`].
///
/// Each command maps onto exactly one service operation; errors pass
/// through to the caller unchanged, never swallowed.
///
/// # Example
///
/// ```
/// use rolodex_executor::{Command, Executor, Output};
/// use rolodex_store::MemoryStore;
///
/// let store = MemoryStore::new();
/// let executor = Executor::new(&store);
///
/// executor.execute(Command::Create {
///     id: "1".into(),
///     name: "John Lee".into(),
///     contact: "john.lee@g.com".into(),
/// })?;
///
/// let out = executor.execute(Command::Exists { id: "1".into() })?;
/// assert_eq!(out, Output::Bool(true));
/// # Ok::<(), rolodex_core::Error>(())
/// ```
pub struct Executor<S> {
    service: RecordService<S>,
}

impl<S: KeyedStore> Executor<S> {
    /// Create an executor over the given store.
    pub fn new(store: S) -> Self {
        Self {
            service: RecordService::new(store),
        }
    }

    /// Access the underlying record service.
    pub fn service(&self) -> &RecordService<S> {
        &self.service
    }

    /// Execute a command and return its typed output.
    pub fn execute(&self, command: Command) -> Result<Output> {
        debug!(?command, "execute");
        match command {
            Command::Exists { id } => Ok(Output::Bool(self.service.exists(&id)?)),
            Command::Create { id, name, contact } => {
                self.service.create(&id, &name, &contact)?;
                Ok(Output::Unit)
            }
            Command::Read { id } => Ok(Output::Record(self.service.read(&id)?)),
            Command::Update { id, name, contact } => {
                self.service.update(&id, &name, &contact)?;
                Ok(Output::Unit)
            }
            Command::Delete { id } => {
                self.service.delete(&id)?;
                Ok(Output::Unit)
            }
            Command::ListAll => Ok(Output::Records(self.service.list_all()?)),
        }
    }
}
