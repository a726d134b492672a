use std::{cell::RefCell, collections::HashMap};

use crate::backend::{BackendError, KeyValueStore, Result};

/// Process-local storage. An optional quota caps the total number of
/// bytes held across all keys.
#[derive(Default)]
pub struct MemoryKvStore {
    slots: RefCell<HashMap<String, String>>,
    quota: Option<usize>
}

impl MemoryKvStore {
    pub fn new() -> MemoryKvStore {
        MemoryKvStore::default()
    }

    pub fn with_quota(quota: usize) -> MemoryKvStore {
        MemoryKvStore { slots: RefCell::new(HashMap::new()), quota: Some(quota) }
    }

    fn bytes_used_without(&self, key: &str) -> usize {
        return self.slots.borrow().iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum();
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let requested = self.bytes_used_without(key) + key.len() + value.len();
            if requested > quota {
                return Err(BackendError::QuotaExceeded { requested, quota });
            }
        }
        self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
        return Ok(());
    }
}
