//! StorageMedium - Abstract durable key space
//!
//! One entry per key, each holding an opaque serialized string.
//! The RecordStore keeps one entry per collection.

use thiserror::Error;

/// Errors raised by a storage medium
#[derive(Debug, Error)]
pub enum MediumError {
    /// Writing would exceed the medium's capacity
    #[error("Quota exceeded: writing {requested} bytes would exceed the {limit} byte limit")]
    QuotaExceeded { requested: usize, limit: usize },

    /// Key cannot be mapped onto the medium
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// Stored value exists but cannot be decoded
    #[error("Corrupted state: {0}")]
    Corrupted(String),

    /// Medium is not usable (poisoned lock, detached handle)
    #[error("Medium unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage Medium Trait
///
/// This is a PORT in hexagonal architecture.
/// A write must be durable when it returns `Ok`; the store relies on that
/// to guarantee a completed mutation survives a restart.
pub trait StorageMedium {
    /// Read the value stored under `key`, `None` if never written
    fn read(&self, key: &str) -> Result<Option<String>, MediumError>;

    /// Replace the value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<(), MediumError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), MediumError>;

    /// All keys currently present
    fn keys(&self) -> Result<Vec<String>, MediumError>;

    /// Check whether a key is present
    fn contains(&self, key: &str) -> Result<bool, MediumError> {
        Ok(self.read(key)?.is_some())
    }
}

impl<M: StorageMedium + ?Sized> StorageMedium for Box<M> {
    fn read(&self, key: &str) -> Result<Option<String>, MediumError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), MediumError> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), MediumError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, MediumError> {
        (**self).keys()
    }
}
