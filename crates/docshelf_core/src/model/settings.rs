//! Process-wide archival policy settings.
//!
//! # Responsibility
//! - Define the archival configuration shape and its defaults.
//! - Provide partial-merge semantics for settings updates.
//!
//! # Invariants
//! - Numeric thresholds are stored as provided; range validation is the
//!   caller's responsibility.

use serde::{Deserialize, Serialize};

/// Archival policy configuration.
///
/// Every field defaults individually so partially persisted settings load
/// without error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveSettings {
    /// Master switch for the auto-archive sweep.
    pub auto_archive_enabled: bool,
    /// Age threshold, in days since creation, past which a live document
    /// is archived by the sweep.
    pub auto_archive_days: i64,
    /// Archive completed documents regardless of age during the sweep.
    pub archive_completed_docs: bool,
    /// Truncate long content on archival.
    pub compress_content: bool,
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            auto_archive_enabled: true,
            auto_archive_days: 30,
            archive_completed_docs: true,
            compress_content: true,
        }
    }
}

/// Partial settings update; only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveSettingsPatch {
    pub auto_archive_enabled: Option<bool>,
    pub auto_archive_days: Option<i64>,
    pub archive_completed_docs: Option<bool>,
    pub compress_content: Option<bool>,
}

impl ArchiveSettings {
    /// Merges a partial update into the live configuration.
    pub fn apply(&mut self, patch: &ArchiveSettingsPatch) {
        if let Some(enabled) = patch.auto_archive_enabled {
            self.auto_archive_enabled = enabled;
        }
        if let Some(days) = patch.auto_archive_days {
            self.auto_archive_days = days;
        }
        if let Some(completed) = patch.archive_completed_docs {
            self.archive_completed_docs = completed;
        }
        if let Some(compress) = patch.compress_content {
            self.compress_content = compress;
        }
    }
}
