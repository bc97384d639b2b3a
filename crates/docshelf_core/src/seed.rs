//! Deterministic default dataset.
//!
//! Seeded when the store holds no document blob, or when the stored blob
//! cannot be parsed. Content is fixed; ids and timestamps come from the
//! provided generator and clock.

use crate::clock::{Clock, IdGenerator};
use crate::model::document::{Document, DocumentStatus};
use chrono::Duration;

/// Builds the default three-document dataset.
pub fn default_documents<C, G>(clock: &C, ids: &mut G) -> Vec<Document>
where
    C: Clock,
    G: IdGenerator,
{
    let now = clock.now();
    let seeds = [
        (
            "Project Proposal",
            "This is a detailed project proposal for the new marketing campaign.",
            DocumentStatus::Active,
            5,
        ),
        (
            "Meeting Notes",
            "Notes from the quarterly planning meeting with the executive team.",
            DocumentStatus::Completed,
            30,
        ),
        (
            "Budget Report",
            "Financial analysis and budget report for Q2 2023.",
            DocumentStatus::Pending,
            15,
        ),
    ];

    seeds
        .into_iter()
        .map(|(title, content, status, age_days)| {
            let mut doc = Document::new(
                ids.next_id(),
                title,
                content,
                status,
                now - Duration::days(age_days),
            );
            doc.updated_at = now;
            doc
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::default_documents;
    use crate::clock::{SystemClock, TimestampIdGenerator};
    use crate::model::document::DocumentStatus;

    #[test]
    fn seeds_three_distinct_live_documents() {
        let clock = SystemClock;
        let mut ids = TimestampIdGenerator::new();
        let docs = default_documents(&clock, &mut ids);

        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].title, "Project Proposal");
        assert_eq!(docs[1].status, DocumentStatus::Completed);
        assert_eq!(docs[2].status, DocumentStatus::Pending);
        assert!(docs.iter().all(|doc| doc.is_live() && doc.history.is_empty()));

        let mut seen = docs.iter().map(|doc| doc.id).collect::<Vec<_>>();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }
}
