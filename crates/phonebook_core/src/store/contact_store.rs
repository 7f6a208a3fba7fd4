//! Contact store implementation.

use super::{StoreError, StoreResult};
use crate::id::IdGenerator;
use crate::model::contact::{default_contacts, Contact, ContactId, NewContact};
use crate::model::notification::Notification;
use crate::persistence::{load_contacts, save_contacts, DEFAULT_STORAGE_KEY};
use crate::storage::KeyValueStore;
use log::{info, warn};

/// Upper bound on id regeneration when the generator collides.
pub const MAX_ID_ATTEMPTS: usize = 8;

/// Read-only view handed to presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreState {
    /// Insertion order is display order.
    pub contacts: Vec<Contact>,
    /// Stored verbatim; normalized only when filtering.
    pub filter: String,
    pub modal_open: bool,
    /// Transient name field of the add form. Cleared by every add.
    pub draft_name: String,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            contacts: default_contacts(),
            filter: String::new(),
            modal_open: false,
            draft_name: String::new(),
        }
    }
}

/// Result of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(ContactId),
    /// A contact with the same name (ignoring case) already exists.
    Duplicate,
}

/// Contact list state with injected storage and id generation.
///
/// Presentation reads `state()`, calls the operations below, and drains
/// `take_notifications()` to render alerts.
pub struct ContactStore<S: KeyValueStore, G: IdGenerator> {
    storage: S,
    ids: G,
    storage_key: String,
    state: StoreState,
    notifications: Vec<Notification>,
    initialized: bool,
}

impl<S: KeyValueStore, G: IdGenerator> ContactStore<S, G> {
    /// Creates a store seeded with the default contacts.
    ///
    /// Nothing is read from storage until `initialize` runs.
    pub fn new(storage: S, ids: G) -> Self {
        Self {
            storage,
            ids,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            state: StoreState::default(),
            notifications: Vec::new(),
            initialized: false,
        }
    }

    /// Uses `key` instead of `DEFAULT_STORAGE_KEY` for load/save.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.state.contacts
    }

    pub fn filter(&self) -> &str {
        &self.state.filter
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.modal_open
    }

    /// Loads the persisted list once, replacing the seed when a blob exists.
    ///
    /// A stored empty list replaces the seed too, so deleting every contact
    /// survives a restart. Absent or malformed blobs keep the seed. Repeated
    /// calls are no-ops.
    ///
    /// # Errors
    /// - Returns `Storage` when the backend read fails.
    pub fn initialize(&mut self) -> StoreResult<()> {
        if self.initialized {
            return Ok(());
        }

        let source = match load_contacts(&self.storage, &self.storage_key)? {
            Some(saved) => {
                self.state.contacts = saved;
                "storage"
            }
            None => "seed",
        };
        self.initialized = true;

        info!(
            "event=store_init module=store status=ok source={source} count={}",
            self.state.contacts.len()
        );
        Ok(())
    }

    /// Appends a new contact with a fresh id and signals success.
    ///
    /// Performs no duplicate check; `submit_new_contact` does that. The
    /// notification is queued before the write-through, so a failed save
    /// still leaves the contact in memory with its success signal.
    ///
    /// # Errors
    /// - Returns `IdExhausted` when no unused id could be generated.
    /// - Returns `Storage` when the write-through fails.
    pub fn add_contact(
        &mut self,
        name: impl Into<String>,
        number: impl Into<String>,
    ) -> StoreResult<ContactId> {
        let id = self.next_free_id()?;
        let contact = Contact::with_id(id.clone(), name, number);
        let message = format!("{} has been added to the phonebook", contact.name);

        let previous_len = self.state.contacts.len();
        self.state.contacts.push(contact);
        self.state.draft_name.clear();
        self.notifications.push(Notification::success(message));
        self.persist_if_resized(previous_len)?;

        info!(
            "event=contact_add module=store status=ok count={}",
            self.state.contacts.len()
        );
        Ok(id)
    }

    /// Removes the contact with `id`.
    ///
    /// Returns whether a contact was removed. A missing id leaves the list
    /// untouched, but the success notification is still emitted. As with
    /// `add_contact`, the notification precedes the write-through.
    ///
    /// # Errors
    /// - Returns `Storage` when the write-through fails.
    pub fn delete_contact(&mut self, id: &str) -> StoreResult<bool> {
        let previous_len = self.state.contacts.len();
        if let Some(index) = self.state.contacts.iter().position(|c| c.id == id) {
            self.state.contacts.remove(index);
        }
        self.notifications
            .push(Notification::success("Contact has been deleted"));
        self.persist_if_resized(previous_len)?;

        let removed = self.state.contacts.len() != previous_len;
        if removed {
            info!(
                "event=contact_delete module=store status=ok count={}",
                self.state.contacts.len()
            );
        } else {
            warn!("event=contact_delete module=store status=noop reason=id_not_found");
        }
        Ok(removed)
    }

    /// First contact whose name equals `name`, ignoring case.
    pub fn check_if_exists(&self, name: &str) -> Option<&Contact> {
        self.state.contacts.iter().find(|c| c.name_matches(name))
    }

    /// Handles the add form: closes the modal, then rejects duplicates or
    /// adds the contact.
    ///
    /// The modal is closed even when the name is rejected.
    ///
    /// # Errors
    /// - Propagates `add_contact` failures.
    pub fn submit_new_contact(&mut self, submission: NewContact) -> StoreResult<SubmitOutcome> {
        self.state.modal_open = false;

        if self.check_if_exists(&submission.name).is_some() {
            info!("event=contact_submit module=store status=rejected reason=duplicate_name");
            self.notifications.push(Notification::error(format!(
                "{} is already a contact",
                submission.name
            )));
            return Ok(SubmitOutcome::Duplicate);
        }

        let id = self.add_contact(submission.name, submission.number)?;
        Ok(SubmitOutcome::Added(id))
    }

    /// Replaces the filter verbatim.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.state.filter = text.into();
    }

    /// Contacts whose name contains the filter, ignoring case, in list order.
    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        self.state
            .contacts
            .iter()
            .filter(|c| c.name_contains(&self.state.filter))
            .collect()
    }

    pub fn toggle_modal(&mut self) {
        self.state.modal_open = !self.state.modal_open;
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.state.draft_name = name.into();
    }

    /// Drains pending notifications in emission order.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Wipes the whole storage namespace and reloads as on a fresh start.
    ///
    /// Irreversible. Other keys in the namespace are removed too.
    ///
    /// # Errors
    /// - Returns `Storage` when clearing or reloading fails.
    pub fn clear_storage(&mut self) -> StoreResult<()> {
        self.storage.clear()?;
        warn!("event=storage_clear module=store status=ok");

        self.state = StoreState::default();
        self.notifications.clear();
        self.initialized = false;
        self.initialize()
    }

    fn next_free_id(&self) -> StoreResult<ContactId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.generate();
            if !candidate.trim().is_empty()
                && !self.state.contacts.iter().any(|c| c.id == candidate)
            {
                return Ok(candidate);
            }
        }
        warn!("event=contact_add module=store status=error reason=id_exhausted");
        Err(StoreError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    fn persist_if_resized(&self, previous_len: usize) -> StoreResult<()> {
        if self.state.contacts.len() == previous_len {
            return Ok(());
        }
        save_contacts(&self.storage, &self.storage_key, &self.state.contacts)?;
        Ok(())
    }
}
