//! Contact store: authoritative in-memory state plus its persistence
//! contract.
//!
//! # Responsibility
//! - Own the contact list, the active filter and the modal flag.
//! - Expose the operations presentation calls in response to user input.
//! - Write the contact list through whenever its length changes.
//!
//! # Invariants
//! - Contact ids are pairwise distinct.
//! - `filter` is always a string; an empty filter shows everything.
//! - Filter and modal changes never touch storage.

use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod contact_store;

pub use contact_store::{ContactStore, StoreState, SubmitOutcome, MAX_ID_ATTEMPTS};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store operation.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence I/O failed; in-memory state may already reflect the change.
    Storage(StorageError),
    /// The id generator kept returning ids already in use.
    IdExhausted { attempts: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::IdExhausted { attempts } => {
                write!(f, "no unused contact id after {attempts} attempts")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::IdExhausted { .. } => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
