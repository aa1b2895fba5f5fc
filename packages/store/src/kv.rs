//! # Key-value store abstraction
//!
//! Every piece of persisted portal state is a string value under a string key,
//! the same shape as the browser's `localStorage`. [`KeyValueStore`] is the seam
//! between the domain crate and the concrete backend:
//!
//! | Backend | Where |
//! |---------|-------|
//! | [`crate::MemoryStore`] | tests and ephemeral sessions |
//! | [`crate::FileStore`] | native builds, one file per key |
//! | `LocalStorageStore` | web builds (`wasm32` + `web` feature) |
//!
//! All operations are synchronous. There is no transaction spanning two keys:
//! a caller writing two values can observe the first succeed and the second fail.

use crate::error::Result;

/// Synchronous string-to-string storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str);

    /// Whether a value exists under `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
