//! Key-value storage port for session persistence.
//!
//! The storefront persists state as JSON strings under well-known keys
//! ([`keys::CART`], [`keys::ORDERS`]), mirroring origin-scoped browser
//! storage. The port is injectable so tests can substitute [`MemoryStore`]
//! and exercise persistence deterministically; [`FileStore`] backs a real
//! session directory.
//!
//! # Limitation: lost updates
//!
//! Values are read-modify-written whole. There is no partial-record update,
//! no locking, and no optimistic concurrency: two writers appending to the
//! same collection near-simultaneously can silently drop the earlier write
//! (last writer wins). Within one single-threaded session writes are
//! serialized and this cannot happen; across sessions it can, and it is an
//! accepted limitation of this design rather than a bug.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

/// Well-known storage keys.
pub mod keys {
    /// The live cart: a JSON array of cart lines.
    pub const CART: &str = "cart";
    /// The append-only order collection: a JSON array of orders.
    pub const ORDERS: &str = "orders";
}

/// Storage-layer errors.
///
/// Only writes surface errors to callers; unreadable or corrupt values are
/// recovered by falling back to an empty collection (see [`load_json`]).
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A key-value store holding JSON-encoded strings.
///
/// Implementations only move strings; JSON encoding and the fail-soft read
/// policy live in [`load_json`] and [`store_json`].
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value for `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set the raw value for `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Load and deserialize the value under `key`, falling back to the default.
///
/// Absent, unreadable, and unparsable values all degrade to
/// `T::default()` - corrupt persisted data must never crash the session.
/// Parse failures are logged at `warn` and otherwise swallowed.
pub fn load_json<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!(key, error = %e, "storage read failed, falling back to empty");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "corrupt persisted value, falling back to empty");
            T::default()
        }
    }
}

/// Serialize `value` and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError`] if serialization or the write fails.
pub fn store_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// The data directory backing this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
