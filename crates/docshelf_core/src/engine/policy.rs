//! Time-based archival policies.
//!
//! # Responsibility
//! - Sweep live documents into the archive by age or completion status.
//! - Purge archived documents past the fixed retention window.
//!
//! # Invariants
//! - Both sweeps are externally triggered; no scheduling happens here.
//! - Cleanup fails open: documents without usable archival metadata are
//!   never purged.

use super::{Change, DocumentEngine};
use crate::clock::{Clock, IdGenerator};
use crate::model::document::{DocumentId, DocumentStatus};
use chrono::Duration;
use log::info;

/// Fixed retention window for archived documents, in days.
pub const ARCHIVE_RETENTION_DAYS: i64 = 90;

impl<C: Clock, G: IdGenerator> DocumentEngine<C, G> {
    /// Archives every live document that qualifies under the current
    /// settings.
    ///
    /// # Contract
    /// - Disabled settings short-circuit the whole sweep, not individual
    ///   documents.
    /// - A document qualifies when its age since `created_at` exceeds
    ///   `auto_archive_days`, or when it is completed and
    ///   `archive_completed_docs` is set.
    /// - Archived and deleted documents are never swept.
    pub fn check_auto_archive(&mut self) -> Change {
        if !self.settings.auto_archive_enabled {
            return Change::None;
        }

        let now = self.clock.now();
        let max_age = Duration::try_days(self.settings.auto_archive_days)
            .unwrap_or(Duration::MAX);
        let archive_completed = self.settings.archive_completed_docs;

        let due: Vec<DocumentId> = self
            .documents
            .iter()
            .filter(|doc| doc.is_live())
            .filter(|doc| {
                now - doc.created_at > max_age
                    || (archive_completed && doc.status == DocumentStatus::Completed)
            })
            .map(|doc| doc.id)
            .collect();

        if due.is_empty() {
            return Change::None;
        }

        let count = due.len();
        for id in due {
            self.archive(id);
        }
        info!("event=auto_archive_sweep module=engine status=ok archived={count}");
        Change::Documents
    }

    /// Permanently removes archived documents past the retention window.
    pub fn cleanup_archive(&mut self) -> Change {
        let now = self.clock.now();
        let retention = Duration::days(ARCHIVE_RETENTION_DAYS);
        let before = self.documents.len();

        self.documents.retain(|doc| {
            if !doc.is_archived {
                return true;
            }
            let Some(archived_at) = doc.archived_at else {
                // Fail open on missing metadata.
                return true;
            };
            now - archived_at <= retention
        });

        let removed = before - self.documents.len();
        if removed == 0 {
            return Change::None;
        }
        info!("event=archive_cleanup module=engine status=ok removed={removed}");
        Change::Documents
    }
}
