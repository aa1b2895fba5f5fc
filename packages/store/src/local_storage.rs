//! # Browser `localStorage` store
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It is a zero-size handle that looks up `window.localStorage` on every call;
//! the browser keeps the storage object alive, so there is nothing to cache.
//!
//! Reads that fail (no window, storage disabled) come back as `None`, removals
//! are best effort, and writes report the browser's refusal as
//! [`StoreError::Backend`] (typically a quota error).

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for web builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

fn backend_error(e: JsValue) -> StoreError {
    StoreError::Backend(format!("{e:?}"))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Backend("localStorage unavailable".to_string()))?;
        storage.set_item(key, value).map_err(backend_error)
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
