//! Document domain model.
//!
//! # Responsibility
//! - Define the canonical document record and its version-history shapes.
//! - Provide snapshot helpers used by every mutating lifecycle operation.
//!
//! # Invariants
//! - `id` is stable and never reused for another document.
//! - `history` entries hold a `DocumentSnapshot`, never nested history or
//!   `previous_state`, so history growth stays linear.
//! - `status` is the business classification only; archival and deletion
//!   live in the independent `is_archived`/`is_deleted` flags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier for a document.
///
/// Derived from epoch milliseconds at creation time; kept as a type alias
/// to make semantic intent explicit in signatures.
pub type DocumentId = i64;

/// Business classification of a document.
///
/// Archival is deliberately not a status value: it is tracked by the
/// `is_archived` flag so the pre-archive classification survives an
/// archive/unarchive round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Active,
    Pending,
    Completed,
}

impl Default for DocumentStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl DocumentStatus {
    /// Parses a persisted status value.
    ///
    /// Returns `None` for unknown values, including the legacy
    /// `"archived"` status some older datasets carry.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Stable lowercase form used in persisted data and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// Copy of a document's fields excluding `history` and `previous_state`.
///
/// Used both for history entries and for the restore baseline captured on
/// archival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    #[serde(default, deserialize_with = "status_compat")]
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub compressed: bool,
}

/// Timestamped snapshot appended to `Document::history` immediately before
/// each mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub data: DocumentSnapshot,
}

/// Canonical document record.
///
/// Loaded data is normalized field-by-field: flags and optional shapes
/// default when missing, a malformed or missing `history` collapses to an
/// empty sequence, and legacy status values are coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    /// May hold a truncated representation while `compressed` is set.
    pub content: String,
    #[serde(default, deserialize_with = "status_compat")]
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
    /// True only while `content` holds a truncated representation of a
    /// longer original.
    #[serde(default)]
    pub compressed: bool,
    /// Restore baseline captured immediately before the most recent
    /// archival; cleared after a successful unarchive.
    #[serde(default)]
    pub previous_state: Option<DocumentSnapshot>,
    /// Append-only version history, oldest first.
    #[serde(default, deserialize_with = "history_compat")]
    pub history: Vec<HistoryEntry>,
}

impl Document {
    /// Creates a fresh document with zeroed lifecycle flags and empty
    /// history.
    pub fn new(
        id: DocumentId,
        title: impl Into<String>,
        content: impl Into<String>,
        status: DocumentStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            status,
            created_at,
            updated_at: created_at,
            is_archived: false,
            is_deleted: false,
            archived_at: None,
            compressed: false,
            previous_state: None,
            history: Vec::new(),
        }
    }

    /// Captures the current fields, excluding `history` and
    /// `previous_state`.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            is_archived: self.is_archived,
            is_deleted: self.is_deleted,
            archived_at: self.archived_at,
            compressed: self.compressed,
        }
    }

    /// Overwrites the live fields from a snapshot.
    ///
    /// `history` and `previous_state` are left untouched; callers decide
    /// how those evolve.
    pub fn apply_snapshot(&mut self, snapshot: &DocumentSnapshot) {
        self.title = snapshot.title.clone();
        self.content = snapshot.content.clone();
        self.status = snapshot.status;
        self.created_at = snapshot.created_at;
        self.updated_at = snapshot.updated_at;
        self.is_archived = snapshot.is_archived;
        self.is_deleted = snapshot.is_deleted;
        self.archived_at = snapshot.archived_at;
        self.compressed = snapshot.compressed;
    }

    /// Returns whether this document is neither archived nor deleted.
    pub fn is_live(&self) -> bool {
        !self.is_archived && !self.is_deleted
    }
}

/// Explicit patch for `update`: only the listed fields may change.
///
/// Replaces a dynamic shallow merge so unknown keys cannot slip through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<DocumentStatus>,
}

impl DocumentPatch {
    /// Returns whether the patch carries no field changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.status.is_none()
    }
}

/// Accepts legacy status values on load, coercing unknown ones (including
/// `"archived"`) to `active`.
fn status_compat<'de, D>(deserializer: D) -> Result<DocumentStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(DocumentStatus::parse(&raw).unwrap_or_default())
}

/// Coerces a missing or malformed `history` value to an empty sequence
/// instead of failing the whole document.
fn history_compat<'de, D>(deserializer: D) -> Result<Vec<HistoryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if !value.is_array() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}
