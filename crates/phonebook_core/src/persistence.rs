//! Contact list persistence over a key/value namespace.
//!
//! # Responsibility
//! - Serialize the full contact list as one JSON blob under a single key.
//! - Restore it, rejecting blobs with a malformed shape.
//!
//! # Invariants
//! - Absent or malformed blobs load as `None`; they are never an error.
//! - Storage backend failures always propagate.
//! - A loaded list has valid contacts with pairwise distinct ids.

use crate::model::contact::Contact;
use crate::storage::{KeyValueStore, StorageResult};
use log::{debug, warn};
use std::collections::HashSet;

/// Storage key used when the caller does not configure one.
pub const DEFAULT_STORAGE_KEY: &str = "savedContacts";

/// Reads the contact list stored at `key`.
///
/// Returns `Ok(None)` when the key is absent or the blob does not decode to
/// a well-formed contact list.
///
/// # Errors
/// - Returns the storage error when the backend read fails.
pub fn load_contacts<S: KeyValueStore>(
    store: &S,
    key: &str,
) -> StorageResult<Option<Vec<Contact>>> {
    let Some(raw) = store.get_item(key)? else {
        debug!("event=contacts_load module=persistence status=absent");
        return Ok(None);
    };

    match decode_contacts(&raw) {
        Ok(contacts) => {
            debug!(
                "event=contacts_load module=persistence status=ok count={}",
                contacts.len()
            );
            Ok(Some(contacts))
        }
        Err(reason) => {
            warn!(
                "event=contacts_load module=persistence status=rejected bytes={} reason={reason}",
                raw.len()
            );
            Ok(None)
        }
    }
}

/// Writes `contacts` as a JSON array to `key`, replacing any prior value.
///
/// # Errors
/// - Returns `Encode` when serialization fails.
/// - Returns the storage error when the backend write fails.
pub fn save_contacts<S: KeyValueStore>(
    store: &S,
    key: &str,
    contacts: &[Contact],
) -> StorageResult<()> {
    let blob = serde_json::to_string(contacts)?;
    store.set_item(key, &blob)?;
    debug!(
        "event=contacts_save module=persistence status=ok count={}",
        contacts.len()
    );
    Ok(())
}

fn decode_contacts(raw: &str) -> Result<Vec<Contact>, String> {
    // serde_json messages quote offending values; keep only the position.
    let contacts: Vec<Contact> = serde_json::from_str(raw).map_err(|err| {
        format!(
            "invalid json shape: category={:?} line={} column={}",
            err.classify(),
            err.line(),
            err.column()
        )
    })?;

    let mut seen = HashSet::with_capacity(contacts.len());
    for (index, contact) in contacts.iter().enumerate() {
        contact
            .validate()
            .map_err(|err| format!("contact #{index}: {err}"))?;
        if !seen.insert(contact.id.as_str()) {
            return Err(format!("contact #{index}: duplicate id"));
        }
    }
    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::{decode_contacts, load_contacts, save_contacts, DEFAULT_STORAGE_KEY};
    use crate::model::contact::{default_contacts, Contact};
    use crate::storage::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn save_then_load_preserves_order() {
        let store = MemoryKeyValueStore::new();
        let contacts = vec![
            Contact::with_id("b", "Zed", "2"),
            Contact::with_id("a", "Amy", "1"),
        ];

        save_contacts(&store, DEFAULT_STORAGE_KEY, &contacts).expect("save");
        let loaded = load_contacts(&store, DEFAULT_STORAGE_KEY)
            .expect("load")
            .expect("blob should be present");
        assert_eq!(loaded, contacts);
    }

    #[test]
    fn absent_key_loads_none() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(load_contacts(&store, "nothing-here").expect("load"), None);
    }

    #[test]
    fn malformed_blob_loads_none() {
        let store = MemoryKeyValueStore::new();
        store.set_item(DEFAULT_STORAGE_KEY, "{not json").expect("set");
        assert_eq!(load_contacts(&store, DEFAULT_STORAGE_KEY).expect("load"), None);
    }

    #[test]
    fn empty_list_is_a_valid_blob() {
        let store = MemoryKeyValueStore::new();
        save_contacts(&store, DEFAULT_STORAGE_KEY, &[]).expect("save");
        assert_eq!(
            load_contacts(&store, DEFAULT_STORAGE_KEY).expect("load"),
            Some(Vec::new())
        );
    }

    #[test]
    fn decode_rejects_wrong_field_types() {
        let err = decode_contacts(r#"[{"id":"1","name":"A","number":42}]"#)
            .expect_err("numeric phone number should be rejected");
        assert!(err.contains("invalid json shape"));
    }

    #[test]
    fn decode_reason_never_echoes_blob_values() {
        let reason = decode_contacts(r#""Rosie Simpson 459-12-56""#)
            .expect_err("bare string should be rejected");
        assert!(!reason.contains("Rosie"), "{reason}");
        assert!(!reason.contains("459-12-56"), "{reason}");
        assert!(reason.contains("category=Data"), "{reason}");

        let reason = decode_contacts(r#"[{"id":"1","name":"Jo March","number":5550100}]"#)
            .expect_err("numeric number should be rejected");
        assert!(!reason.contains("5550100"), "{reason}");
    }

    #[test]
    fn decode_rejects_missing_fields() {
        assert!(decode_contacts(r#"[{"id":"1","name":"A"}]"#).is_err());
        assert!(decode_contacts(r#"{"id":"1","name":"A","number":"1"}"#).is_err());
    }

    #[test]
    fn decode_rejects_blank_and_duplicate_ids() {
        let blank = decode_contacts(r#"[{"id":"","name":"A","number":"1"}]"#)
            .expect_err("blank id should be rejected");
        assert!(blank.contains("#0"));

        let duplicate = decode_contacts(
            r#"[{"id":"x","name":"A","number":"1"},{"id":"x","name":"B","number":"2"}]"#,
        )
        .expect_err("duplicate id should be rejected");
        assert!(duplicate.contains("duplicate id"));
    }

    #[test]
    fn decode_accepts_seed_shape() {
        let json = serde_json::to_string(&default_contacts()).expect("serialize seed");
        assert_eq!(decode_contacts(&json).expect("decode"), default_contacts());
    }
}
