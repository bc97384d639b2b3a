//! Canonical domain model for managed documents.
//!
//! # Responsibility
//! - Define the single document shape shared by engine, store and service.
//! - Define process-wide archival settings.
//!
//! # Invariants
//! - Every document is identified by a stable `DocumentId`.
//! - Deletion is represented by soft-delete tombstones, not hard delete.
//! - `history` is append-only; snapshots never contain nested history.

pub mod document;
pub mod settings;
