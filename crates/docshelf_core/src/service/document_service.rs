//! Document use-case service.
//!
//! # Responsibility
//! - Expose the engine's operations to UI callers.
//! - Load persisted state (seeding defaults when absent or corrupt) and
//!   write state back after every mutation the engine reports.
//!
//! # Invariants
//! - Each top-level mutation maps to at most one save call, dispatched
//!   after the mutation completes.
//! - Save failures are logged and swallowed; the in-memory state stays
//!   authoritative. A crash before the write lands loses at most the
//!   latest change.

use crate::clock::{Clock, IdGenerator};
use crate::engine::{Change, DocumentEngine, NewDocument};
use crate::model::document::{Document, DocumentId, DocumentPatch};
use crate::model::settings::{ArchiveSettings, ArchiveSettingsPatch};
use crate::notify::{LogSink, NotificationSink, Severity};
use crate::seed;
use crate::store::{PersistencePort, StoreResult, DOCUMENTS_KEY, SETTINGS_KEY};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

/// Version tag on the persisted document envelope.
const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct DocumentsEnvelope {
    version: u32,
    documents: Vec<Document>,
}

/// Engine plus persistence wiring.
pub struct DocumentService<S: PersistencePort, C: Clock, G: IdGenerator> {
    engine: DocumentEngine<C, G>,
    store: S,
    sink: Box<dyn NotificationSink>,
}

impl<S: PersistencePort, C: Clock, G: IdGenerator> DocumentService<S, C, G> {
    /// Creates a service over an empty engine; call `load` to hydrate it.
    pub fn new(store: S, clock: C, ids: G) -> Self {
        Self {
            engine: DocumentEngine::new(clock, ids),
            store,
            sink: Box::new(LogSink),
        }
    }

    /// Replaces the notification sink.
    pub fn with_sink(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Loads documents and settings from the store.
    ///
    /// # Contract
    /// - A missing blob seeds the default dataset and persists it.
    /// - An unparsable documents blob is discarded (logged) and replaced
    ///   by the default dataset; the error is never surfaced.
    /// - Unparsable settings fall back to defaults.
    ///
    /// # Errors
    /// - Only port transport failures propagate.
    pub fn load(&mut self) -> StoreResult<()> {
        let documents = match self.store.load(DOCUMENTS_KEY)? {
            Some(raw) => match parse_documents(&raw) {
                Ok(documents) => Some(documents),
                Err(err) => {
                    error!(
                        "event=store_load module=service status=error key={DOCUMENTS_KEY} error={err}"
                    );
                    None
                }
            },
            None => None,
        };

        match documents {
            Some(documents) => {
                info!(
                    "event=store_load module=service status=ok key={DOCUMENTS_KEY} count={}",
                    documents.len()
                );
                self.engine.replace_documents(documents);
            }
            None => {
                let seeded = {
                    let (clock, ids) = self.engine.timekeeping();
                    seed::default_documents(clock, ids)
                };
                info!(
                    "event=store_seed module=service status=ok count={}",
                    seeded.len()
                );
                self.engine.replace_documents(seeded);
                self.persist(Change::Documents);
            }
        }

        if let Some(raw) = self.store.load(SETTINGS_KEY)? {
            match serde_json::from_str::<ArchiveSettings>(&raw) {
                Ok(settings) => self.engine.replace_settings(settings),
                Err(err) => {
                    warn!(
                        "event=store_load module=service status=fallback key={SETTINGS_KEY} error={err}"
                    );
                    self.engine.replace_settings(ArchiveSettings::default());
                }
            }
        }

        Ok(())
    }

    /// Read-only view of the collection.
    pub fn documents(&self) -> &[Document] {
        self.engine.documents()
    }

    /// Looks up one document by id.
    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.engine.document(id)
    }

    /// Active archival settings.
    pub fn settings(&self) -> &ArchiveSettings {
        self.engine.settings()
    }

    /// Creates a document and persists the collection.
    pub fn create(&mut self, request: NewDocument) -> DocumentId {
        let id = self.engine.create(request);
        self.persist(Change::Documents);
        self.sink.notify(Severity::Success, "Document created");
        id
    }

    /// Applies a patch; returns whether anything changed.
    pub fn update(&mut self, id: DocumentId, patch: &DocumentPatch) -> bool {
        self.apply(|engine| engine.update(id, patch), "Document updated")
    }

    /// Archives a document; returns whether anything changed.
    pub fn archive(&mut self, id: DocumentId) -> bool {
        self.apply(|engine| engine.archive(id), "Document archived")
    }

    /// Unarchives a document; returns whether anything changed.
    pub fn unarchive(&mut self, id: DocumentId) -> bool {
        self.apply(|engine| engine.unarchive(id), "Document restored from archive")
    }

    /// Moves a document to the trash; returns whether anything changed.
    pub fn soft_delete(&mut self, id: DocumentId) -> bool {
        self.apply(|engine| engine.soft_delete(id), "Document moved to trash")
    }

    /// Restores a document from the trash; returns whether anything
    /// changed.
    pub fn restore(&mut self, id: DocumentId) -> bool {
        self.apply(|engine| engine.restore(id), "Document restored")
    }

    /// Rewinds a document to a prior version; returns whether anything
    /// changed.
    pub fn revert_to_version(&mut self, id: DocumentId, index: usize) -> bool {
        self.apply(
            |engine| engine.revert_to_version(id, index),
            "Document reverted",
        )
    }

    /// Permanently deletes a document; returns whether anything changed.
    pub fn purge(&mut self, id: DocumentId) -> bool {
        self.apply(|engine| engine.purge(id), "Document permanently deleted")
    }

    /// Runs the auto-archive sweep; returns whether anything changed.
    pub fn check_auto_archive(&mut self) -> bool {
        self.apply(|engine| engine.check_auto_archive(), "Documents auto-archived")
    }

    /// Runs the retention cleanup; returns whether anything changed.
    pub fn cleanup_archive(&mut self) -> bool {
        self.apply(|engine| engine.cleanup_archive(), "Old archives cleaned up")
    }

    /// Merges a settings update and persists the settings blob.
    pub fn update_settings(&mut self, patch: &ArchiveSettingsPatch) {
        let change = self.engine.update_settings(patch);
        self.persist(change);
        self.sink.notify(Severity::Info, "Archive settings updated");
    }

    fn apply<F>(&mut self, op: F, message: &str) -> bool
    where
        F: FnOnce(&mut DocumentEngine<C, G>) -> Change,
    {
        let change = op(&mut self.engine);
        if change.is_none() {
            return false;
        }
        self.persist(change);
        self.sink.notify(Severity::Success, message);
        true
    }

    /// Dispatches the write for a reported change. Fire-and-forget:
    /// failures are logged, never propagated.
    fn persist(&self, change: Change) {
        let result = match change {
            Change::None => return,
            Change::Documents => self.save_documents(),
            Change::Settings => self.save_settings(),
        };
        if let Err(err) = result {
            error!("event=store_save module=service status=error error={err}");
        }
    }

    fn save_documents(&self) -> StoreResult<()> {
        let envelope = DocumentsEnvelope {
            version: SCHEMA_VERSION,
            documents: self.engine.documents().to_vec(),
        };
        let raw = serde_json::to_string(&envelope)?;
        self.store.save(DOCUMENTS_KEY, &raw)
    }

    fn save_settings(&self) -> StoreResult<()> {
        let raw = serde_json::to_string(self.engine.settings())?;
        self.store.save(SETTINGS_KEY, &raw)
    }
}

/// Parses a persisted documents blob.
///
/// Accepts the versioned envelope and, for data written before the
/// envelope existed, a bare document array. Per-document normalization
/// happens in the model's deserializers.
fn parse_documents(raw: &str) -> Result<Vec<Document>, serde_json::Error> {
    match serde_json::from_str::<DocumentsEnvelope>(raw) {
        Ok(envelope) => Ok(envelope.documents),
        Err(_) => serde_json::from_str::<Vec<Document>>(raw),
    }
}
