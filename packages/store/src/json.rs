//! JSON helpers shared by every collection stored in a [`KeyValueStore`].
//!
//! Reads are forgiving: a missing key and a malformed value both come back as
//! `None`, the latter with a warning. Writes serialise the whole value and
//! replace whatever was there.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

/// Read and decode the JSON value under `key`.
pub fn read_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding malformed JSON in storage");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_malformed_json_reads_as_none() {
        let store = MemoryStore::new();
        store.set("k", "{not json").unwrap();

        let value: Option<Vec<String>> = read_json(&store, "k");
        assert!(value.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        write_json(&store, "k", &vec!["a", "b"]).unwrap();

        let value: Option<Vec<String>> = read_json(&store, "k");
        assert_eq!(value, Some(vec!["a".to_string(), "b".to_string()]));
    }
}
