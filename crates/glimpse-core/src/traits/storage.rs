use crate::errors::StorageError;

/// Per-tab ephemeral key/value storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
