//! Error types for the record store

use thiserror::Error;

use crate::model::record::RecordId;
use crate::repository::storage_medium::MediumError;

/// Outcome of a failed store operation.
///
/// `NotFound`, `DuplicateIdentity` and `InvalidRecord` are expected
/// conditions the caller decides how to present. `StorageFailure` means the
/// durable medium rejected a read or write; the store has already switched
/// to memory-only operation when this is returned.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record '{id}' not found in collection '{collection}'")]
    NotFound { collection: String, id: RecordId },

    #[error("Identity '{id}' already exists in collection '{collection}'")]
    DuplicateIdentity { collection: String, id: RecordId },

    #[error("Storage failure for '{key}': {source}")]
    StorageFailure {
        key: String,
        #[source]
        source: MediumError,
    },

    #[error("Invalid record for collection '{collection}': {reason}")]
    InvalidRecord { collection: String, reason: String },
}

impl StoreError {
    pub fn not_found(collection: &str, id: impl Into<RecordId>) -> Self {
        StoreError::NotFound {
            collection: collection.to_string(),
            id: id.into(),
        }
    }

    pub fn invalid(collection: &str, reason: impl ToString) -> Self {
        StoreError::InvalidRecord {
            collection: collection.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn is_storage_failure(&self) -> bool {
        matches!(self, StoreError::StorageFailure { .. })
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("contracts", "c-42");
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Record 'c-42' not found in collection 'contracts'"
        );
    }

    #[test]
    fn test_storage_failure_keeps_source() {
        let err = StoreError::StorageFailure {
            key: "concord.users".to_string(),
            source: MediumError::QuotaExceeded {
                requested: 10,
                limit: 5,
            },
        };
        assert!(err.is_storage_failure());
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("5 byte limit"));
    }
}
