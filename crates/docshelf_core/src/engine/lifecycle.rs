//! Lifecycle transitions: archive, unarchive, soft delete, restore,
//! revert and purge.
//!
//! # Invariants
//! - Archival captures the restore baseline before any compression, so an
//!   unarchive is lossless whenever `previous_state` survives.
//! - Transition calls on documents already in the target state are
//!   history-free no-ops.
//! - Revert is a forward operation: it rewrites the live fields but never
//!   truncates or reorders history.

use super::{push_history, Change, DocumentEngine};
use crate::clock::{Clock, IdGenerator};
use crate::model::document::DocumentId;
use log::debug;

/// Visible characters kept when content is compressed on archival.
pub const COMPRESSED_CONTENT_CHARS: usize = 100;
/// Marker appended to truncated content.
pub const COMPRESSION_MARKER: &str = "...";

impl<C: Clock, G: IdGenerator> DocumentEngine<C, G> {
    /// Archives a document, optionally compressing its content.
    ///
    /// # Contract
    /// - Unknown id or already archived: silent no-op.
    /// - `previous_state` carries the original, uncompressed content.
    /// - `status` is left untouched; archival is a flag, not a
    ///   classification.
    pub fn archive(&mut self, id: DocumentId) -> Change {
        let now = self.clock.now();
        let compress_enabled = self.settings.compress_content;
        let Some(doc) = self.document_mut(id) else {
            return Change::None;
        };
        if doc.is_archived {
            return Change::None;
        }

        // Restore baseline, captured before compression touches content.
        let baseline = doc.snapshot();
        push_history(doc, now);

        if compress_enabled && doc.content.chars().count() > COMPRESSED_CONTENT_CHARS {
            let mut truncated: String =
                doc.content.chars().take(COMPRESSED_CONTENT_CHARS).collect();
            truncated.push_str(COMPRESSION_MARKER);
            doc.content = truncated;
            doc.compressed = true;
        } else {
            doc.compressed = false;
        }

        doc.is_archived = true;
        doc.archived_at = Some(now);
        doc.updated_at = now;
        doc.previous_state = Some(baseline);
        debug!(
            "event=document_archived module=engine status=ok id={} compressed={}",
            id, doc.compressed
        );
        Change::Documents
    }

    /// Unarchives a document, restoring the pre-archive state when a
    /// baseline exists.
    ///
    /// # Contract
    /// - Unknown id or not archived: silent no-op.
    /// - With a baseline: content, status and archive flags return to
    ///   their pre-archive values and the baseline is cleared.
    /// - Without one: archive flags are cleared and content stays as-is,
    ///   possibly truncated. Accepted lossy path.
    pub fn unarchive(&mut self, id: DocumentId) -> Change {
        let now = self.clock.now();
        let Some(doc) = self.document_mut(id) else {
            return Change::None;
        };
        if !doc.is_archived {
            return Change::None;
        }

        push_history(doc, now);
        match doc.previous_state.take() {
            Some(baseline) => doc.apply_snapshot(&baseline),
            None => {
                doc.is_archived = false;
                doc.archived_at = None;
                doc.compressed = false;
            }
        }
        doc.updated_at = now;
        debug!("event=document_unarchived module=engine status=ok id={id}");
        Change::Documents
    }

    /// Flags a document as deleted without removing it.
    pub fn soft_delete(&mut self, id: DocumentId) -> Change {
        let now = self.clock.now();
        let Some(doc) = self.document_mut(id) else {
            return Change::None;
        };
        if doc.is_deleted {
            return Change::None;
        }

        push_history(doc, now);
        doc.is_deleted = true;
        doc.updated_at = now;
        debug!("event=document_deleted module=engine status=ok id={id}");
        Change::Documents
    }

    /// Clears the soft-delete flag.
    pub fn restore(&mut self, id: DocumentId) -> Change {
        let now = self.clock.now();
        let Some(doc) = self.document_mut(id) else {
            return Change::None;
        };
        if !doc.is_deleted {
            return Change::None;
        }

        push_history(doc, now);
        doc.is_deleted = false;
        doc.updated_at = now;
        debug!("event=document_restored module=engine status=ok id={id}");
        Change::Documents
    }

    /// Rewinds the live fields to a prior history snapshot.
    ///
    /// # Contract
    /// - Unknown id or out-of-range index: silent no-op.
    /// - The history sequence itself is preserved unchanged.
    /// - `previous_state` is cleared; the old archive baseline no longer
    ///   matches the reverted fields.
    pub fn revert_to_version(&mut self, id: DocumentId, index: usize) -> Change {
        let now = self.clock.now();
        let Some(doc) = self.document_mut(id) else {
            return Change::None;
        };
        let Some(snapshot) = doc.history.get(index).map(|entry| entry.data.clone()) else {
            return Change::None;
        };

        doc.apply_snapshot(&snapshot);
        doc.previous_state = None;
        doc.updated_at = now;
        debug!("event=document_reverted module=engine status=ok id={id} version={index}");
        Change::Documents
    }

    /// Permanently removes a document from the collection.
    pub fn purge(&mut self, id: DocumentId) -> Change {
        let before = self.documents.len();
        self.documents.retain(|doc| doc.id != id);
        if self.documents.len() == before {
            return Change::None;
        }
        debug!("event=document_purged module=engine status=ok id={id}");
        Change::Documents
    }
}
