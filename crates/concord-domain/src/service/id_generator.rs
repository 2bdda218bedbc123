//! Identity generation for new records
//!
//! Generators are handed the collection as it currently stands (loaded
//! from the medium), so an id can never be chosen from a counter that
//! forgot what was persisted before a restart.

use tracing::warn;

use crate::model::record::{document_id, Document, RecordId};

/// Chooses the identity of the next record in a collection
pub trait IdGenerator {
    fn next_id(&mut self, collection: &str, existing: &[Document]) -> RecordId;
}

/// Random UUID v4 identities
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, _collection: &str, _existing: &[Document]) -> RecordId {
        RecordId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Short decimal identities: one past the largest numeric id present
///
/// Non-numeric ids are ignored, so a collection can mix seeded numeric
/// ids with ids produced elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds;

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, collection: &str, existing: &[Document]) -> RecordId {
        let highest = existing
            .iter()
            .filter_map(document_id)
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        match highest.checked_add(1) {
            Some(next) => RecordId::new(next.to_string()),
            None => {
                // An unassigned id is never accepted; the store gives up with
                // DuplicateIdentity after its retries.
                warn!(collection, "Sequential ids exhausted");
                RecordId::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn docs(ids: &[&str]) -> Vec<Document> {
        ids.iter()
            .map(|id| json!({ "id": id }).as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_sequential_starts_at_one() {
        assert_eq!(SequentialIds.next_id("users", &[]).as_str(), "1");
    }

    #[test]
    fn test_sequential_continues_after_persisted_max() {
        let existing = docs(&["3", "10", "legacy-id", "7"]);
        assert_eq!(SequentialIds.next_id("users", &existing).as_str(), "11");
    }

    #[test]
    fn test_sequential_at_numeric_limit_yields_unassigned() {
        let existing = docs(&["18446744073709551615"]);
        assert!(SequentialIds.next_id("works", &existing).is_unassigned());
    }

    #[test]
    fn test_uuid_ids_differ() {
        let mut ids = UuidIds;
        let a = ids.next_id("works", &[]);
        let b = ids.next_id("works", &[]);
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }
}
