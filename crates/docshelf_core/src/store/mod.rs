//! Persistence port and its implementations.
//!
//! # Responsibility
//! - Define the key/value blob contract the service persists through.
//! - Keep storage-backend details behind the port trait.
//!
//! # Invariants
//! - Blobs are opaque text at this layer; encoding and normalization
//!   belong to the service.
//! - The port never interprets or rewrites stored values.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage key for the serialized document collection.
pub const DOCUMENTS_KEY: &str = "documents";
/// Storage key for the serialized archival settings.
pub const SETTINGS_KEY: &str = "archive_settings";

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport and codec errors raised at the persistence boundary.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Encode(serde_json::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode persisted state: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Key/value blob persistence contract.
///
/// Mirrors a browser-local storage surface: load a string blob by key,
/// save one back. Writes are dispatched fire-and-forget by the service;
/// a crash between mutation and write may lose the most recent change.
pub trait PersistencePort {
    fn load(&self, key: &str) -> StoreResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> StoreResult<()>;
}
