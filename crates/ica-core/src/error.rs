//! Error types for the store adapter and the resume composer.
//!
//! Reads through [`crate::store::LocalStore::read`] never surface these;
//! they show up on writes, on `read_checked`, and when a resume form is
//! saved without its required fields.

use thiserror::Error;

/// Errors raised by a key-value backend or by the envelope codec.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not read or write the value.
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key contains characters the backend cannot map to storage.
    #[error("invalid store key: '{0}'")]
    InvalidKey(String),

    /// The stored text is not valid JSON, or its records do not match the
    /// expected shape.
    #[error("malformed value under '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope object lacks a required field.
    #[error("value under '{key}' is missing '{field}'")]
    MissingField { key: String, field: &'static str },

    /// The value was written by a newer schema than this build understands.
    #[error("value under '{key}' has schema version {found}, newest supported is {supported}")]
    UnsupportedVersion {
        key: String,
        found: u64,
        supported: u32,
    },

    /// The value could not be serialized.
    #[error("failed to serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Returns `true` if the stored value itself is bad, as opposed to the
    /// backend failing.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            StoreError::Malformed { .. }
                | StoreError::MissingField { .. }
                | StoreError::UnsupportedVersion { .. }
        )
    }
}

/// Errors raised when saving a resume form.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Required fields are empty.
    #[error("missing required fields: {}", missing.join(", "))]
    Invalid { missing: Vec<&'static str> },

    /// The resume could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}
