//! Local key-value store adapter.
//!
//! [`LocalStore`] is the only type that talks to a [`KeyValueStore`]
//! backend. Values are JSON, wrapped in a versioned envelope:
//!
//! ```json
//! {"version": 1, "records": [ ... ]}
//! ```
//!
//! Bare values without an envelope (what the browser prototype wrote) are
//! read as schema version 0 and migrated on the next write.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::model::{Application, QuizAttempt, Resume};

/// Key of the resume collection.
pub const RESUMES_KEY: &str = "ica.resumes";
/// Key of the application collection.
pub const APPLICATIONS_KEY: &str = "ica.applications";
/// Key of the quiz attempt collection.
pub const QUIZ_ATTEMPTS_KEY: &str = "ica.quizAttempts";
/// Key of the sidebar-collapsed preference.
pub const SIDEBAR_COLLAPSED_KEY: &str = "ica.sidebarCollapsed";

/// Every key the tools write.
pub const ALL_KEYS: [&str; 4] = [
    RESUMES_KEY,
    APPLICATIONS_KEY,
    QUIZ_ATTEMPTS_KEY,
    SIDEBAR_COLLAPSED_KEY,
];

/// Envelope version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Backends
// ---------------------------------------------------------------------------

/// A string-to-string persistent map.
pub trait KeyValueStore {
    /// Returns the raw value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value under `key`. Either the whole value is stored or
    /// nothing changes.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend, used by tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory backend: key `k` lives in `<root>/k.json`.
///
/// Writes go through a temp file in the same directory followed by an
/// atomic rename.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// The directory holding the values.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let io_err = |source: std::io::Error| StoreError::Io {
            key: key.to_string(),
            source,
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&self.root).map_err(io_err)?;
        tmp.write_all(value.as_bytes()).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&path).map_err(|e| io_err(e.error))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

/// Typed access to a backend with versioned envelopes and fallback reads.
#[derive(Debug, Clone)]
pub struct LocalStore<S> {
    backend: S,
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T: ?Sized> {
    version: u32,
    records: &'a T,
}

impl<S: KeyValueStore> LocalStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    /// Read the value under `key`, or `default` if it is absent, empty,
    /// unreadable, malformed, or written by a newer schema.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.read_checked(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!(key, error = %e, "unreadable stored value, using default");
                default
            }
        }
    }

    /// Read the value under `key`, reporting why a stored value was rejected.
    ///
    /// Absent and whitespace-only values are `Ok(None)`.
    pub fn read_checked<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        decode(key, &raw).map(Some)
    }

    /// Serialize `value` and replace whatever is stored under `key`.
    pub fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let envelope = EnvelopeRef {
            version: SCHEMA_VERSION,
            records: value,
        };
        let raw = serde_json::to_string(&envelope).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, &raw)?;
        debug!(key, bytes = raw.len(), "wrote value");
        Ok(())
    }

    /// Prepend `item` to the collection under `key`. Returns the new length.
    ///
    /// A value that is not JSON at all is replaced. A value that parses but
    /// is rejected (newer schema, missing envelope field, records of the
    /// wrong shape) is left untouched and the error is returned.
    pub fn append<T>(&mut self, key: &str, item: T) -> Result<usize, StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut items: Vec<T> = match self.read_checked(key) {
            Ok(existing) => existing.unwrap_or_default(),
            Err(StoreError::Malformed { source, .. }) if source.is_syntax() || source.is_eof() => {
                warn!(key, error = %source, "discarding unparseable stored value");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        items.insert(0, item);
        self.write(key, &items)?;
        debug!(key, len = items.len(), "appended record");
        Ok(items.len())
    }

    /// Delete the value under `key`.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)
    }

    /// Saved resumes, most recent first.
    pub fn resumes(&self) -> Vec<Resume> {
        self.read(RESUMES_KEY, Vec::new())
    }

    /// Job applications, most recent first.
    pub fn applications(&self) -> Vec<Application> {
        self.read(APPLICATIONS_KEY, Vec::new())
    }

    /// Quiz attempts, most recent first.
    pub fn attempts(&self) -> Vec<QuizAttempt> {
        self.read(QUIZ_ATTEMPTS_KEY, Vec::new())
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StoreError> {
    let malformed = |source| StoreError::Malformed {
        key: key.to_string(),
        source,
    };

    let value: Value = serde_json::from_str(raw).map_err(malformed)?;
    let records = match value {
        Value::Object(mut envelope) => {
            let version = envelope
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| StoreError::MissingField {
                    key: key.to_string(),
                    field: "version",
                })?;
            if version > u64::from(SCHEMA_VERSION) {
                return Err(StoreError::UnsupportedVersion {
                    key: key.to_string(),
                    found: version,
                    supported: SCHEMA_VERSION,
                });
            }
            envelope
                .remove("records")
                .ok_or_else(|| StoreError::MissingField {
                    key: key.to_string(),
                    field: "records",
                })?
        }
        legacy => {
            debug!(key, "reading unversioned value as schema 0");
            legacy
        }
    };

    serde_json::from_value(records).map_err(malformed)
}
