//! Core of the phonebook: contact model, durable key/value storage, and the
//! contact store that presentation layers drive.

pub mod db;
pub mod id;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod storage;
pub mod store;

pub use id::{IdGenerator, SequenceIdGenerator, UuidIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{
    default_contacts, Contact, ContactId, ContactValidationError, NewContact,
};
pub use model::notification::{Notification, Severity};
pub use persistence::{load_contacts, save_contacts, DEFAULT_STORAGE_KEY};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};
pub use store::{ContactStore, StoreError, StoreResult, StoreState, SubmitOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
