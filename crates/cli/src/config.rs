//! CLI configuration: session data directory resolution.
//!
//! Precedence: `--data-dir` flag, then the `CLOVER_DATA_DIR` environment
//! variable, then `.clover-market` in the working directory.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use clover_market_storefront::{FileStore, Session, StorageError};

/// Default data directory relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".clover-market";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CLOVER_DATA_DIR";

/// Configuration errors that can occur during startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{DATA_DIR_ENV} is set but empty")]
    EmptyDataDir,
    #[error("failed to open data directory: {0}")]
    Storage(#[from] StorageError),
}

/// Resolve the data directory from flag, environment, or default.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyDataDir`] if `CLOVER_DATA_DIR` is set to an
/// empty string.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if dir.is_empty() => Err(ConfigError::EmptyDataDir),
        Ok(dir) => Ok(PathBuf::from(dir)),
        Err(_) => Ok(PathBuf::from(DEFAULT_DATA_DIR)),
    }
}

/// Open a storefront session over the file-backed store.
///
/// # Errors
///
/// Returns [`ConfigError`] if the data directory cannot be resolved or
/// created.
pub fn open_session(flag: Option<PathBuf>) -> Result<Session, ConfigError> {
    let dir = resolve_data_dir(flag)?;
    let store = FileStore::open(dir)?;
    tracing::debug!(dir = %store.dir().display(), "session store opened");
    Ok(Session::new(Arc::new(store)))
}
