//! In-memory key/value namespace for ephemeral sessions and tests.

use super::{KeyValueStore, StorageResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKeyValueStore;
    use crate::storage::KeyValueStore;

    #[test]
    fn set_overwrites_and_clear_wipes_everything() {
        let store = MemoryKeyValueStore::new();
        store.set_item("a", "1").expect("set a");
        store.set_item("a", "2").expect("overwrite a");
        store.set_item("b", "3").expect("set b");

        assert_eq!(store.get_item("a").expect("get a").as_deref(), Some("2"));
        assert_eq!(store.len(), 2);

        store.clear().expect("clear");
        assert!(store.is_empty());
        assert_eq!(store.get_item("b").expect("get b"), None);
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let store = MemoryKeyValueStore::new();
        store.remove_item("missing").expect("remove should not fail");
        assert!(store.is_empty());
    }
}
