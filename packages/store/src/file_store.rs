//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on native builds. Each key is a
//! file under a base directory and its value is the file's UTF-8 content.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── campus-portal.schema
//! ├── campus-portal.v1.user
//! └── campus-portal.v1.directory
//! ```
//!
//! ## Platform data directories
//!
//! Callers pass `dirs::data_dir()/campus-portal` or similar:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/campus-portal/` |
//! | Linux | `~/.local/share/campus-portal/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\campus-portal\` |
//!
//! Key characters outside `[A-Za-z0-9._-]` are replaced with `_` to keep file
//! names portable.

use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base.join(file_name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        std::fs::create_dir_all(&self.base).map_err(io_err)?;
        std::fs::write(self.key_path(key), value).map_err(io_err)
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("portal"));

        store.set("campus-portal.v1.user", "{\"id\":\"1\"}").unwrap();

        // Re-open from same directory
        let reopened = FileStore::new(dir.path().join("portal"));
        assert_eq!(
            reopened.get("campus-portal.v1.user").as_deref(),
            Some("{\"id\":\"1\"}")
        );

        reopened.remove("campus-portal.v1.user");
        assert!(store.get("campus-portal.v1.user").is_none());
    }

    #[test]
    fn test_unsafe_key_characters_are_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.set("../escape/attempt", "x").unwrap();
        assert!(dir.path().join(".._escape_attempt").exists());
        assert_eq!(store.get("../escape/attempt").as_deref(), Some("x"));
    }
}
