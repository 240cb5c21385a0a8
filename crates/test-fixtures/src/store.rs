use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use glimpse_core::errors::StorageError;
use glimpse_core::traits::SessionStore;

/// In-memory session storage that can be made to fail like private browsing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    failing: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every access fails.
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failing.get() {
            return Err(StorageError::Unavailable {
                reason: "storage disabled".into(),
            });
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "storage disabled".into(),
            });
        }
        self.insert_raw(key, value);
        Ok(())
    }
}
