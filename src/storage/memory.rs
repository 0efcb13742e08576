//! In-memory key-value store

use super::KeyValueStore;
use crate::error::StorageError;
use std::collections::HashMap;

/// HashMap-backed store
///
/// Writes can be switched off to behave like a disabled or full backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries,
            read_only: false,
        }
    }

    /// Make every subsequent write fail with [`StorageError::Unavailable`]
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Unavailable("store is read-only".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let mut store = MemoryStore::with_entry("k", "1");
        store.set_read_only(true);

        assert!(matches!(store.set("k", "2"), Err(StorageError::Unavailable(_))));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("1"));
    }
}
