mod support;

use docshelf_core::{
    ArchiveSettingsPatch, Change, DocumentPatch, DocumentStatus, COMPRESSED_CONTENT_CHARS,
    COMPRESSION_MARKER,
};
use support::{engine, new_doc};

#[test]
fn create_initializes_flags_history_and_timestamps() {
    let (mut engine, clock) = engine();

    let id = engine.create(new_doc("Plan", "body", DocumentStatus::Pending));
    let doc = engine.document(id).unwrap();

    assert_eq!(doc.id, 1);
    assert_eq!(doc.status, DocumentStatus::Pending);
    assert!(!doc.is_archived);
    assert!(!doc.is_deleted);
    assert!(!doc.compressed);
    assert!(doc.archived_at.is_none());
    assert!(doc.previous_state.is_none());
    assert!(doc.history.is_empty());
    assert_eq!(doc.created_at, clock.current());
    assert_eq!(doc.updated_at, clock.current());
}

#[test]
fn create_appends_in_insertion_order_without_id_collisions() {
    let (mut engine, _clock) = engine();

    let first = engine.create(new_doc("a", "", DocumentStatus::Active));
    let second = engine.create(new_doc("b", "", DocumentStatus::Active));
    let third = engine.create(new_doc("c", "", DocumentStatus::Active));

    let ids: Vec<_> = engine.documents().iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![first, second, third]);
    assert_ne!(first, second);
    assert_ne!(second, third);
}

#[test]
fn update_applies_patch_and_records_one_snapshot() {
    let (mut engine, clock) = engine();
    let id = engine.create(new_doc("Draft", "v1", DocumentStatus::Active));

    clock.advance_days(1);
    let change = engine.update(
        id,
        &DocumentPatch {
            content: Some("v2".to_string()),
            status: Some(DocumentStatus::Completed),
            ..DocumentPatch::default()
        },
    );

    assert_eq!(change, Change::Documents);
    let doc = engine.document(id).unwrap();
    assert_eq!(doc.title, "Draft");
    assert_eq!(doc.content, "v2");
    assert_eq!(doc.status, DocumentStatus::Completed);
    assert_eq!(doc.updated_at, clock.current());
    assert_eq!(doc.history.len(), 1);
    assert_eq!(doc.history[0].data.content, "v1");
    assert_eq!(doc.history[0].data.status, DocumentStatus::Active);
}

#[test]
fn update_with_empty_patch_still_records_history() {
    let (mut engine, _clock) = engine();
    let id = engine.create(new_doc("Draft", "v1", DocumentStatus::Active));

    let change = engine.update(id, &DocumentPatch::default());

    assert_eq!(change, Change::Documents);
    assert_eq!(engine.document(id).unwrap().history.len(), 1);
}

#[test]
fn update_unknown_id_is_silent_noop() {
    let (mut engine, _clock) = engine();
    engine.create(new_doc("Draft", "v1", DocumentStatus::Active));

    let change = engine.update(999, &DocumentPatch::default());

    assert_eq!(change, Change::None);
    assert_eq!(engine.documents().len(), 1);
    assert!(engine.documents()[0].history.is_empty());
}

#[test]
fn archive_compresses_long_content_and_keeps_original_in_baseline() {
    let (mut engine, clock) = engine();
    let long_content = "x".repeat(150);
    let id = engine.create(new_doc("Long", &long_content, DocumentStatus::Pending));

    let change = engine.archive(id);

    assert_eq!(change, Change::Documents);
    let doc = engine.document(id).unwrap();
    assert_eq!(
        doc.content.chars().count(),
        COMPRESSED_CONTENT_CHARS + COMPRESSION_MARKER.len()
    );
    assert!(doc.content.ends_with(COMPRESSION_MARKER));
    assert!(doc.compressed);
    assert!(doc.is_archived);
    assert_eq!(doc.archived_at, Some(clock.current()));
    // Status is a classification, not a lifecycle flag.
    assert_eq!(doc.status, DocumentStatus::Pending);

    let baseline = doc.previous_state.as_ref().unwrap();
    assert_eq!(baseline.content, long_content);
    assert!(!baseline.compressed);
    assert!(!baseline.is_archived);
}

#[test]
fn archive_leaves_short_content_untouched() {
    let (mut engine, _clock) = engine();
    let short_content = "y".repeat(50);
    let id = engine.create(new_doc("Short", &short_content, DocumentStatus::Active));

    engine.archive(id);

    let doc = engine.document(id).unwrap();
    assert_eq!(doc.content, short_content);
    assert!(!doc.compressed);
    assert!(doc.is_archived);
}

#[test]
fn archive_respects_disabled_compression() {
    let (mut engine, _clock) = engine();
    engine.update_settings(&ArchiveSettingsPatch {
        compress_content: Some(false),
        ..ArchiveSettingsPatch::default()
    });
    let long_content = "z".repeat(150);
    let id = engine.create(new_doc("Long", &long_content, DocumentStatus::Active));

    engine.archive(id);

    let doc = engine.document(id).unwrap();
    assert_eq!(doc.content, long_content);
    assert!(!doc.compressed);
    assert!(doc.is_archived);
}

#[test]
fn archive_twice_is_a_noop() {
    let (mut engine, _clock) = engine();
    let id = engine.create(new_doc("Doc", "body", DocumentStatus::Active));

    assert_eq!(engine.archive(id), Change::Documents);
    let after_first = engine.document(id).unwrap().clone();

    assert_eq!(engine.archive(id), Change::None);
    assert_eq!(engine.document(id).unwrap(), &after_first);
    assert_eq!(after_first.history.len(), 1);
}

#[test]
fn unarchive_restores_pre_archive_state() {
    let (mut engine, clock) = engine();
    let long_content = "a".repeat(150);
    let id = engine.create(new_doc("Doc", &long_content, DocumentStatus::Completed));

    clock.advance_days(1);
    engine.archive(id);
    clock.advance_days(1);
    let change = engine.unarchive(id);

    assert_eq!(change, Change::Documents);
    let doc = engine.document(id).unwrap();
    assert_eq!(doc.content, long_content);
    assert_eq!(doc.status, DocumentStatus::Completed);
    assert!(!doc.is_archived);
    assert!(doc.archived_at.is_none());
    assert!(!doc.compressed);
    assert!(doc.previous_state.is_none());
    assert_eq!(doc.updated_at, clock.current());
    // One entry from archive, one from unarchive.
    assert_eq!(doc.history.len(), 2);
}

#[test]
fn unarchive_without_baseline_keeps_truncated_content() {
    let (mut engine, _clock) = engine();
    let id = engine.create(new_doc("Doc", &"b".repeat(150), DocumentStatus::Active));
    engine.archive(id);

    // Simulate foreign data where the baseline was lost.
    let mut docs = engine.documents().to_vec();
    docs[0].previous_state = None;
    let truncated = docs[0].content.clone();
    engine.replace_documents(docs);

    assert_eq!(engine.unarchive(id), Change::Documents);
    let doc = engine.document(id).unwrap();
    assert!(!doc.is_archived);
    assert!(doc.archived_at.is_none());
    assert!(!doc.compressed);
    // Accepted lossy path: content stays truncated.
    assert_eq!(doc.content, truncated);
}

#[test]
fn unarchive_of_live_document_is_a_noop() {
    let (mut engine, _clock) = engine();
    let id = engine.create(new_doc("Doc", "body", DocumentStatus::Active));

    assert_eq!(engine.unarchive(id), Change::None);
    assert!(engine.document(id).unwrap().history.is_empty());
}

#[test]
fn soft_delete_and_restore_toggle_with_state_guards() {
    let (mut engine, _clock) = engine();
    let id = engine.create(new_doc("Doc", "body", DocumentStatus::Active));

    assert_eq!(engine.soft_delete(id), Change::Documents);
    assert!(engine.document(id).unwrap().is_deleted);
    // Still present in the collection.
    assert_eq!(engine.documents().len(), 1);

    // Already in target state: no history entry, no change.
    assert_eq!(engine.soft_delete(id), Change::None);
    assert_eq!(engine.document(id).unwrap().history.len(), 1);

    assert_eq!(engine.restore(id), Change::Documents);
    assert!(!engine.document(id).unwrap().is_deleted);
    assert_eq!(engine.restore(id), Change::None);
    assert_eq!(engine.document(id).unwrap().history.len(), 2);
}

#[test]
fn archive_and_delete_flags_are_independent() {
    let (mut engine, _clock) = engine();
    let id = engine.create(new_doc("Doc", "body", DocumentStatus::Active));

    engine.archive(id);
    engine.soft_delete(id);

    let doc = engine.document(id).unwrap();
    assert!(doc.is_archived);
    assert!(doc.is_deleted);
}

#[test]
fn purge_removes_only_the_target_document() {
    let (mut engine, _clock) = engine();
    let keep = engine.create(new_doc("Keep", "", DocumentStatus::Active));
    let drop = engine.create(new_doc("Drop", "", DocumentStatus::Active));

    assert_eq!(engine.purge(drop), Change::Documents);
    assert_eq!(engine.purge(drop), Change::None);

    assert_eq!(engine.documents().len(), 1);
    assert!(engine.document(keep).is_some());
    assert!(engine.document(drop).is_none());
}
