//! In-memory key/value store used as a test substitute for [`FileStore`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{KeyValueStore, StoreError};

/// In-memory store. Clones share the same underlying map, so a state object
/// rebuilt over a clone observes previously written values, mirroring how
/// the file store behaves across restarts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.map.lock().expect("memory store lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.map.lock().expect("memory store lock poisoned");
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.map.lock().expect("memory store lock poisoned");
        map.remove(key);
        Ok(())
    }
}
