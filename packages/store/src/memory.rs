use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and ephemeral sessions.
///
/// Clones share the same map, so a clone handed to another component sees
/// every write made through the original.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("a").is_none());

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert!(store.contains("a"));

        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("2"));

        store.remove("a");
        assert!(store.get("a").is_none());
        // Removing twice is fine
        store.remove("a");
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        other.set("shared", "yes").unwrap();
        assert_eq!(store.get("shared").as_deref(), Some("yes"));
        assert_eq!(store.len(), 1);
    }
}
