//! Core domain logic for Docshelf, a local-first document manager.
//! This crate is the single source of truth for lifecycle invariants:
//! version history, archival with compression, soft delete and the
//! time-based archival policies.

pub mod clock;
pub mod engine;
pub mod logging;
pub mod model;
pub mod notify;
pub mod seed;
pub mod service;
pub mod store;

pub use clock::{Clock, IdGenerator, SystemClock, TimestampIdGenerator};
pub use engine::{
    Change, DocumentEngine, NewDocument, ARCHIVE_RETENTION_DAYS, COMPRESSED_CONTENT_CHARS,
    COMPRESSION_MARKER,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{
    Document, DocumentId, DocumentPatch, DocumentSnapshot, DocumentStatus, HistoryEntry,
};
pub use model::settings::{ArchiveSettings, ArchiveSettingsPatch};
pub use notify::{LogSink, NotificationSink, NullSink, Severity};
pub use service::document_service::DocumentService;
pub use store::{
    MemoryStore, PersistencePort, SqliteStore, StoreError, StoreResult, DOCUMENTS_KEY,
    SETTINGS_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
