//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record and its persisted JSON shape.
//! - Provide the case-insensitive name matching used by lookup and filter.
//!
//! # Invariants
//! - `id` is stable and never reused for another contact.
//! - `id` is never blank for a contact that passed `validate()`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of a contact.
///
/// Kept as a string alias: seed data uses readable ids (`id-1`) while
/// generated ids are random tokens.
pub type ContactId = String;

/// Validation failures for persisted or imported contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// `id` is empty or whitespace only.
    BlankId,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "contact id must not be blank"),
        }
    }
}

impl Error for ContactValidationError {}

/// One phonebook entry.
///
/// Serialized as `{"id": .., "name": .., "number": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    /// Display name. Compared case-insensitively for duplicates.
    pub name: String,
    /// Free-form phone number, stored verbatim.
    pub number: String,
}

impl Contact {
    /// Creates a contact with a caller-provided id.
    ///
    /// Ids come from the store's `IdGenerator` or from seed data.
    pub fn with_id(
        id: impl Into<ContactId>,
        name: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
        }
    }

    /// Checks the shape constraints a persisted contact must satisfy.
    ///
    /// # Errors
    /// - `BlankId` when `id` is empty after trimming.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.id.trim().is_empty() {
            return Err(ContactValidationError::BlankId);
        }
        Ok(())
    }

    /// Case-insensitive exact name comparison.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive substring test used by the list filter.
    ///
    /// An empty `filter` matches every contact.
    pub fn name_contains(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Form submission payload for a new contact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewContact {
    pub name: String,
    pub number: String,
}

impl NewContact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

/// Seed list used when nothing has been persisted yet.
pub fn default_contacts() -> Vec<Contact> {
    vec![
        Contact::with_id("id-1", "Rosie Simpson", "459-12-56"),
        Contact::with_id("id-2", "Hermione Kline", "443-89-12"),
        Contact::with_id("id-3", "Eden Clements", "645-17-79"),
        Contact::with_id("id-4", "Annie Copeland", "227-91-26"),
    ]
}
