//! In-Memory Storage Medium
//!
//! Keeps every key in a shared map. Clones share the same map, so a new
//! RecordStore built over a clone sees exactly what the previous one
//! persisted. Useful for tests and for sessions that should not touch disk.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use concord_domain::repository::storage_medium::{MediumError, StorageMedium};

/// In-memory key space with an optional byte quota
///
/// Thread-safe implementation using RwLock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMedium {
    entries: Arc<RwLock<HashMap<String, String>>>,
    /// Upper bound on the summed size of keys and values
    quota: Option<usize>,
}

impl InMemoryMedium {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            quota: None,
        }
    }

    /// Builder: reject writes that would grow the medium past `bytes`
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Total bytes currently held (keys plus values)
    pub fn used_bytes(&self) -> Result<usize, MediumError> {
        let entries = self.entries.read().map_err(|_| {
            MediumError::Unavailable("Failed to acquire read lock".to_string())
        })?;
        Ok(entries.iter().map(|(k, v)| k.len() + v.len()).sum())
    }
}

impl StorageMedium for InMemoryMedium {
    fn read(&self, key: &str) -> Result<Option<String>, MediumError> {
        let entries = self.entries.read().map_err(|_| {
            MediumError::Unavailable("Failed to acquire read lock".to_string())
        })?;
        Ok(entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), MediumError> {
        let mut entries = self.entries.write().map_err(|_| {
            MediumError::Unavailable("Failed to acquire write lock".to_string())
        })?;

        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let requested = others + key.len() + value.len();
            if requested > limit {
                return Err(MediumError::QuotaExceeded { requested, limit });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), MediumError> {
        let mut entries = self.entries.write().map_err(|_| {
            MediumError::Unavailable("Failed to acquire write lock".to_string())
        })?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, MediumError> {
        let entries = self.entries.read().map_err(|_| {
            MediumError::Unavailable("Failed to acquire read lock".to_string())
        })?;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_domain::{Partner, RecordStore, StoreError, User, UserRole};

    #[test]
    fn test_clones_share_contents() {
        let mut medium = InMemoryMedium::new();
        let reader = medium.clone();

        medium.write("concord.users", "[]").unwrap();

        assert_eq!(reader.read("concord.users").unwrap().as_deref(), Some("[]"));
        assert_eq!(reader.keys().unwrap(), vec!["concord.users".to_string()]);
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let mut medium = InMemoryMedium::new().with_quota(10);

        medium.write("k", "12345").unwrap();
        medium.write("k", "123456789").unwrap();
        assert_eq!(medium.used_bytes().unwrap(), 10);

        let err = medium.write("other", "x").unwrap_err();
        assert!(matches!(err, MediumError::QuotaExceeded { limit: 10, .. }));
    }

    #[test]
    fn test_store_reload_over_clone() {
        let medium = InMemoryMedium::new();
        let mut store = RecordStore::new(medium.clone());
        let created = store
            .collection::<User>()
            .create(User::new("an", "Le An", "an@example.org", UserRole::User))
            .unwrap();
        drop(store);

        let mut reloaded = RecordStore::new(medium);
        let users = reloaded.collection::<User>().all().unwrap();
        assert_eq!(users, vec![created]);
    }

    #[test]
    fn test_quota_exceeded_surfaces_once() {
        let medium = InMemoryMedium::new().with_quota(120);
        let mut store = RecordStore::new(medium.clone());
        let mut partners = store.collection::<Partner>();

        partners.create(Partner::new("Small")).unwrap();
        let err = partners
            .create(Partner::new("x".repeat(200)))
            .unwrap_err();
        assert!(matches!(err, StoreError::StorageFailure { .. }));

        partners.create(Partner::new("y".repeat(200))).unwrap();
        assert_eq!(partners.count().unwrap(), 2);
        assert!(store.is_degraded());
        assert!(medium.used_bytes().unwrap() <= 120);
    }
}
