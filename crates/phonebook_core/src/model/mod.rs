//! Phonebook domain model.
//!
//! # Responsibility
//! - Define the contact record shared by storage, store and presentation.
//! - Define the notification signal handed to presentation.
//!
//! # Invariants
//! - Every contact is identified by a stable, non-blank `ContactId`.
//! - Name uniqueness is checked at insertion time only; it is not a stored
//!   invariant.

pub mod contact;
pub mod notification;
