//! Errors raised by storage backends.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem-backed store failed to read or write a key file.
    #[error("storage I/O failed for key {key}: {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },

    /// The browser storage API refused the operation (quota, privacy mode, ...).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A value could not be serialised to JSON before writing.
    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}
