//! Document lifecycle engine.
//!
//! # Responsibility
//! - Own the document collection and the archival settings.
//! - Expose create/update mutations; lifecycle transitions and policy
//!   sweeps live in the `lifecycle` and `policy` submodules.
//!
//! # Invariants
//! - Exactly one history snapshot is appended before every state-changing
//!   mutation of an existing document.
//! - Operations on unknown ids are silent no-ops reported as
//!   `Change::None`, never errors.
//! - Handed-out document references are read-only views; the collection
//!   retains exclusive ownership.

use crate::clock::{Clock, IdGenerator};
use crate::model::document::{
    Document, DocumentId, DocumentPatch, DocumentStatus, HistoryEntry,
};
use crate::model::settings::{ArchiveSettings, ArchiveSettingsPatch};
use chrono::{DateTime, Utc};
use log::debug;

mod lifecycle;
mod policy;

pub use lifecycle::{COMPRESSED_CONTENT_CHARS, COMPRESSION_MARKER};
pub use policy::ARCHIVE_RETENTION_DAYS;

/// What a mutating operation touched, if anything.
///
/// Returned instead of an implicit change watcher so the persistence
/// layer can map each top-level mutation to exactly one write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Nothing to persist; the call was a no-op.
    None,
    /// The document collection changed.
    Documents,
    /// The archival settings changed.
    Settings,
}

impl Change {
    pub fn is_none(self) -> bool {
        self == Change::None
    }
}

/// Request model for creating a document.
///
/// Statically restricted to business statuses; an archived document
/// cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub title: String,
    pub content: String,
    pub status: DocumentStatus,
}

/// In-memory collection of documents plus archival settings.
///
/// Single logical caller at a time; an embedding with concurrent callers
/// needs an external serialization point.
pub struct DocumentEngine<C: Clock, G: IdGenerator> {
    documents: Vec<Document>,
    settings: ArchiveSettings,
    clock: C,
    ids: G,
}

impl<C: Clock, G: IdGenerator> DocumentEngine<C, G> {
    /// Creates an empty engine with default settings.
    pub fn new(clock: C, ids: G) -> Self {
        Self::with_state(clock, ids, Vec::new(), ArchiveSettings::default())
    }

    /// Creates an engine over an existing collection and settings.
    pub fn with_state(
        clock: C,
        ids: G,
        documents: Vec<Document>,
        settings: ArchiveSettings,
    ) -> Self {
        Self {
            documents,
            settings,
            clock,
            ids,
        }
    }

    /// Read-only view of the collection, in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Looks up one document by id.
    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Active archival settings.
    pub fn settings(&self) -> &ArchiveSettings {
        &self.settings
    }

    /// Replaces the whole collection, e.g. after a load.
    pub fn replace_documents(&mut self, documents: Vec<Document>) {
        self.documents = documents;
    }

    /// Replaces the settings wholesale, e.g. after a load.
    pub fn replace_settings(&mut self, settings: ArchiveSettings) {
        self.settings = settings;
    }

    /// Creates a document and appends it to the end of the collection.
    ///
    /// # Contract
    /// - The assigned id collides with no existing document.
    /// - Timestamps are set to now, flags zeroed, history empty.
    pub fn create(&mut self, request: NewDocument) -> DocumentId {
        let mut id = self.ids.next_id();
        // Loaded data may already hold generator-shaped ids.
        while self.document(id).is_some() {
            id += 1;
        }
        let now = self.clock.now();
        let doc = Document::new(id, request.title, request.content, request.status, now);
        debug!(
            "event=document_created module=engine status=ok id={} doc_status={}",
            id,
            doc.status.as_str()
        );
        self.documents.push(doc);
        id
    }

    /// Applies an explicit patch to an existing document.
    ///
    /// # Contract
    /// - Unknown id: silent no-op.
    /// - Exactly one history snapshot is appended, even for an empty
    ///   patch.
    pub fn update(&mut self, id: DocumentId, patch: &DocumentPatch) -> Change {
        let now = self.clock.now();
        let Some(doc) = self.document_mut(id) else {
            return Change::None;
        };

        push_history(doc, now);
        if let Some(title) = &patch.title {
            doc.title = title.clone();
        }
        if let Some(content) = &patch.content {
            doc.content = content.clone();
        }
        if let Some(status) = patch.status {
            doc.status = status;
        }
        doc.updated_at = now;
        Change::Documents
    }

    /// Merges a partial settings update.
    pub fn update_settings(&mut self, patch: &ArchiveSettingsPatch) -> Change {
        self.settings.apply(patch);
        debug!(
            "event=settings_updated module=engine status=ok auto_archive_enabled={} auto_archive_days={}",
            self.settings.auto_archive_enabled, self.settings.auto_archive_days
        );
        Change::Settings
    }

    fn document_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.iter_mut().find(|doc| doc.id == id)
    }

    pub(crate) fn timekeeping(&mut self) -> (&C, &mut G) {
        (&self.clock, &mut self.ids)
    }
}

/// Appends the pre-mutation state to the document's history.
fn push_history(doc: &mut Document, now: DateTime<Utc>) {
    let data = doc.snapshot();
    doc.history.push(HistoryEntry {
        timestamp: now,
        data,
    });
}
