//! RecordStore - Identity-stable CRUD over named collections
//!
//! Every collection is loaded from the medium the first time it is
//! touched and kept in memory afterwards. Each mutation is applied in
//! memory, the whole collection is written back, and only then does the
//! call return. If the write fails the mutation is rolled back.
//!
//! ```text
//! caller ──create/update/delete──▶ RecordStore ──write(key, json)──▶ StorageMedium
//!                                   │  cache: collection → [Document]
//!                                   └─ ids: IdGenerator
//! ```
//!
//! When the medium fails (quota exceeded, unreadable state) the first
//! failure is returned as [`StoreError::StorageFailure`] and the store
//! keeps working from memory for the rest of the session. Nothing is
//! written to the medium after that, but collections not loaded yet are
//! still read from it.

use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::model::record::{document_id, merge_patch, with_identity, Document, RecordId};
use crate::repository::storage_medium::{MediumError, StorageMedium};
use crate::service::id_generator::{IdGenerator, UuidIds};

/// Prefix put in front of collection names to form storage keys
pub const DEFAULT_KEY_PREFIX: &str = "concord.";

/// How many candidates an id generator gets before `create` gives up
const MAX_ID_ATTEMPTS: usize = 8;

pub struct RecordStore {
    medium: Box<dyn StorageMedium>,
    ids: Box<dyn IdGenerator>,
    key_prefix: String,
    /// Loaded collections, in insertion order
    collections: HashMap<String, Vec<Document>>,
    /// Set once the medium has failed; no further writes go to it
    degraded: bool,
}

impl RecordStore {
    /// Create a store over a medium, with UUID identities
    pub fn new(medium: impl StorageMedium + 'static) -> Self {
        Self {
            medium: Box::new(medium),
            ids: Box::new(UuidIds),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            collections: HashMap::new(),
            degraded: false,
        }
    }

    /// Builder: use a different identity strategy
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Builder: namespace the storage keys
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Storage key holding a collection
    pub fn storage_key(&self, collection: &str) -> String {
        format!("{}{}", self.key_prefix, collection)
    }

    /// Whether the medium has failed and the store runs from memory only
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    // ========== Reads ==========

    /// Every record of a collection in insertion order
    ///
    /// A collection that was never written is simply empty.
    pub fn get_all(&mut self, collection: &str) -> StoreResult<Vec<Document>> {
        self.ensure_loaded(collection)?;
        Ok(self.records(collection).to_vec())
    }

    /// Point lookup by identity
    pub fn get_by_id(&mut self, collection: &str, id: &str) -> StoreResult<Document> {
        self.ensure_loaded(collection)?;
        let records = self.records(collection);
        position_of(records, id)
            .map(|index| records[index].clone())
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    /// Records whose `field` equals `value`
    pub fn find_by(
        &mut self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<Document>> {
        self.ensure_loaded(collection)?;
        Ok(self
            .records(collection)
            .iter()
            .filter(|doc| doc.get(field) == Some(value))
            .cloned()
            .collect())
    }

    pub fn count(&mut self, collection: &str) -> StoreResult<usize> {
        self.ensure_loaded(collection)?;
        Ok(self.records(collection).len())
    }

    /// Names of collections holding data, persisted or in memory
    pub fn collections(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .collections
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(name, _)| name.clone())
            .collect();

        match self.medium.keys() {
            Ok(keys) => names.extend(
                keys.iter()
                    .filter_map(|key| key.strip_prefix(self.key_prefix.as_str()))
                    .filter(|name| !name.is_empty())
                    .map(str::to_string),
            ),
            Err(error) => warn!(error = %error, "Could not list storage keys"),
        }

        names.sort();
        names.dedup();
        names
    }

    // ========== Mutations ==========

    /// Store a new record under a freshly allocated identity
    ///
    /// Any `id` supplied by the caller is discarded.
    pub fn create(&mut self, collection: &str, record: Document) -> StoreResult<Document> {
        self.ensure_loaded(collection)?;

        let id = self.allocate_id(collection)?;
        let stored = with_identity(record, &id);
        self.records_mut(collection).push(stored.clone());

        if let Err(err) = self.flush(collection) {
            self.records_mut(collection).pop();
            return Err(err);
        }

        info!(collection, id = %id, "Created record");
        Ok(stored)
    }

    /// Shallow-merge `patch` into an existing record
    ///
    /// Patch fields win; `id` cannot be changed. A missing record is
    /// reported as `NotFound` and nothing is written.
    pub fn update(
        &mut self,
        collection: &str,
        id: &str,
        patch: &Document,
    ) -> StoreResult<Document> {
        self.ensure_loaded(collection)?;

        let records = self.records_mut(collection);
        let Some(index) = position_of(records, id) else {
            debug!(collection, id, "Update target not found");
            return Err(StoreError::not_found(collection, id));
        };

        let previous = records[index].clone();
        merge_patch(&mut records[index], patch);
        let merged = records[index].clone();

        if let Err(err) = self.flush(collection) {
            self.records_mut(collection)[index] = previous;
            return Err(err);
        }

        info!(collection, id, fields = patch.len(), "Updated record");
        Ok(merged)
    }

    /// Remove a record; `false` if it was not there
    pub fn delete(&mut self, collection: &str, id: &str) -> StoreResult<bool> {
        self.ensure_loaded(collection)?;

        let records = self.records_mut(collection);
        let Some(index) = position_of(records, id) else {
            debug!(collection, id, "Delete target not found");
            return Ok(false);
        };
        let removed = records.remove(index);

        if let Err(err) = self.flush(collection) {
            self.records_mut(collection).insert(index, removed);
            return Err(err);
        }

        info!(collection, id, "Deleted record");
        Ok(true)
    }

    /// Fill an empty collection with default records
    ///
    /// Defaults keep the ids they carry so seeding is reproducible; those
    /// without one get an id from the generator. A collection that already
    /// holds records is left untouched and `false` is returned.
    pub fn seed_if_empty(
        &mut self,
        collection: &str,
        defaults: Vec<Document>,
    ) -> StoreResult<bool> {
        self.ensure_loaded(collection)?;

        if !self.records(collection).is_empty() {
            debug!(collection, "Collection already populated, skipping seed");
            return Ok(false);
        }
        if defaults.is_empty() {
            return Ok(false);
        }

        let mut seeded: Vec<Document> = Vec::with_capacity(defaults.len());
        for doc in defaults {
            let id = match document_id(&doc).filter(|id| !id.is_empty()) {
                Some(id) => RecordId::new(id),
                None => self.ids.next_id(collection, &seeded),
            };
            if id.is_unassigned() || position_of(&seeded, id.as_str()).is_some() {
                return Err(StoreError::DuplicateIdentity {
                    collection: collection.to_string(),
                    id,
                });
            }
            seeded.push(with_identity(doc, &id));
        }

        let count = seeded.len();
        *self.records_mut(collection) = seeded;

        if let Err(err) = self.flush(collection) {
            self.records_mut(collection).clear();
            return Err(err);
        }

        info!(collection, count, "Seeded default records");
        Ok(true)
    }

    // ========== Internals ==========

    fn records(&self, collection: &str) -> &[Document] {
        self.collections
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn records_mut(&mut self, collection: &str) -> &mut Vec<Document> {
        self.collections.entry(collection.to_string()).or_default()
    }

    fn ensure_loaded(&mut self, collection: &str) -> StoreResult<()> {
        if self.collections.contains_key(collection) {
            return Ok(());
        }

        let key = self.storage_key(collection);
        let loaded = self.medium.read(&key).and_then(|raw| match raw {
            Some(raw) => decode_collection(&raw),
            None => Ok(Vec::new()),
        });

        match loaded {
            Ok(records) => {
                debug!(collection, count = records.len(), "Loaded collection");
                self.collections.insert(collection.to_string(), records);
                Ok(())
            }
            Err(source) => {
                self.collections.insert(collection.to_string(), Vec::new());
                if self.degraded {
                    warn!(key = %key, error = %source, "Unreadable collection starts empty");
                    return Ok(());
                }
                self.degrade(key, source)
            }
        }
    }

    fn flush(&mut self, collection: &str) -> StoreResult<()> {
        if self.degraded {
            debug!(collection, "Memory-only mode, not persisting");
            return Ok(());
        }

        let key = self.storage_key(collection);
        let records = self
            .collections
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or_default();

        match encode_collection(records).and_then(|raw| self.medium.write(&key, &raw)) {
            Ok(()) => Ok(()),
            Err(source) => self.degrade(key, source),
        }
    }

    fn degrade(&mut self, key: String, source: MediumError) -> StoreResult<()> {
        self.degraded = true;
        warn!(
            key = %key,
            error = %source,
            "Storage medium failed; continuing in memory only for this session"
        );
        Err(StoreError::StorageFailure { key, source })
    }

    fn allocate_id(&mut self, collection: &str) -> StoreResult<RecordId> {
        let records = self
            .collections
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut last = RecordId::default();
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id(collection, records);
            if !candidate.is_unassigned() && position_of(records, candidate.as_str()).is_none() {
                return Ok(candidate);
            }
            debug!(collection, id = %candidate, "Identity already taken, drawing again");
            last = candidate;
        }

        warn!(collection, id = %last, "Id generator kept producing taken identities");
        Err(StoreError::DuplicateIdentity {
            collection: collection.to_string(),
            id: last,
        })
    }
}

impl core::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut loaded: Vec<&String> = self.collections.keys().collect();
        loaded.sort();
        f.debug_struct("RecordStore")
            .field("key_prefix", &self.key_prefix)
            .field("loaded", &loaded)
            .field("degraded", &self.degraded)
            .finish()
    }
}

fn position_of(records: &[Document], id: &str) -> Option<usize> {
    records.iter().position(|doc| document_id(doc) == Some(id))
}

fn encode_collection(records: &[Document]) -> Result<String, MediumError> {
    serde_json::to_string(records).map_err(|e| MediumError::Corrupted(e.to_string()))
}

fn decode_collection(raw: &str) -> Result<Vec<Document>, MediumError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| MediumError::Corrupted(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(MediumError::Corrupted(
            "expected an array of records".to_string(),
        ));
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(doc) = item else {
            return Err(MediumError::Corrupted(format!(
                "entry {index} is not an object"
            )));
        };
        match document_id(&doc) {
            Some(id) if !id.is_empty() => {
                if !seen.insert(id.to_string()) {
                    return Err(MediumError::Corrupted(format!("duplicate id '{id}'")));
                }
            }
            _ => {
                return Err(MediumError::Corrupted(format!(
                    "entry {index} has no string id"
                )))
            }
        }
        records.push(doc);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::id_generator::SequentialIds;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use std::rc::Rc;

    /// Medium whose clones share contents, so a second store over a clone
    /// behaves like the page being reloaded.
    #[derive(Clone, Default)]
    struct SharedMedium {
        entries: Rc<RefCell<BTreeMap<String, String>>>,
        fail_writes: Rc<Cell<bool>>,
        writes: Rc<Cell<usize>>,
    }

    impl SharedMedium {
        fn raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }
    }

    impl StorageMedium for SharedMedium {
        fn read(&self, key: &str) -> Result<Option<String>, MediumError> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), MediumError> {
            if self.fail_writes.get() {
                return Err(MediumError::QuotaExceeded {
                    requested: value.len(),
                    limit: 0,
                });
            }
            self.writes.set(self.writes.get() + 1);
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&mut self, key: &str) -> Result<(), MediumError> {
            self.entries.borrow_mut().remove(key);
            Ok(())
        }

        fn keys(&self) -> Result<Vec<String>, MediumError> {
            Ok(self.entries.borrow().keys().cloned().collect())
        }
    }

    /// Always hands out the same id
    struct FixedIds(&'static str);

    impl IdGenerator for FixedIds {
        fn next_id(&mut self, _collection: &str, _existing: &[Document]) -> RecordId {
            RecordId::new(self.0)
        }
    }

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    fn id_of(doc: &Document) -> String {
        document_id(doc).unwrap().to_string()
    }

    #[test]
    fn test_create_assigns_distinct_ids() {
        let mut store = RecordStore::new(SharedMedium::default());

        let mut ids = HashSet::new();
        for n in 0..50 {
            let created = store
                .create("works", doc(json!({ "title": format!("Work {n}") })))
                .unwrap();
            assert!(ids.insert(id_of(&created)));
        }
        assert_eq!(store.count("works").unwrap(), 50);
    }

    #[test]
    fn test_create_then_get_returns_input_plus_id() {
        let mut store = RecordStore::new(SharedMedium::default());

        let created = store
            .create(
                "users",
                doc(json!({"username": "admin", "email": "admin@example.org", "role": "admin"})),
            )
            .unwrap();
        let id = id_of(&created);

        assert_eq!(
            Value::Object(created.clone()),
            json!({"id": id, "username": "admin", "email": "admin@example.org", "role": "admin"})
        );
        assert_eq!(store.get_by_id("users", &id).unwrap(), created);

        let all = store.get_all("users").unwrap();
        assert_eq!(all.iter().filter(|d| id_of(d) == id).count(), 1);
    }

    #[test]
    fn test_create_ignores_caller_id() {
        let mut store = RecordStore::new(SharedMedium::default());
        let first = store.create("partners", doc(json!({"name": "A"}))).unwrap();

        let second = store
            .create("partners", doc(json!({"id": id_of(&first), "name": "B"})))
            .unwrap();

        assert_ne!(id_of(&first), id_of(&second));
        assert_eq!(store.get_by_id("partners", &id_of(&first)).unwrap()["name"], "A");
    }

    #[test]
    fn test_update_merges_patch() {
        let mut store = RecordStore::new(SharedMedium::default());
        let created = store
            .create("contracts", doc(json!({"title": "Deal", "status": "draft", "value": 5})))
            .unwrap();
        let id = id_of(&created);

        let merged = store
            .update("contracts", &id, &doc(json!({"status": "active", "id": "other"})))
            .unwrap();

        assert_eq!(merged["id"], id.as_str());
        assert_eq!(merged["status"], "active");
        assert_eq!(merged["title"], "Deal");
        assert_eq!(store.get_by_id("contracts", &id).unwrap(), merged);
    }

    #[test]
    fn test_update_missing_id_writes_nothing() {
        let medium = SharedMedium::default();
        let mut store = RecordStore::new(medium.clone());
        store.create("contracts", doc(json!({"title": "Deal"}))).unwrap();
        let before = store.get_all("contracts").unwrap();
        let writes = medium.writes.get();

        let result = store.update("contracts", "missing-id", &doc(json!({"status": "active"})));

        assert!(matches!(result, Err(StoreError::NotFound { .. })));
        assert_eq!(store.get_all("contracts").unwrap(), before);
        assert_eq!(medium.writes.get(), writes);
    }

    #[test]
    fn test_delete_then_lookup() {
        let mut store = RecordStore::new(SharedMedium::default());
        let created = store.create("channels", doc(json!({"name": "Radio"}))).unwrap();
        let id = id_of(&created);

        assert!(store.delete("channels", &id).unwrap());
        assert!(store.get_by_id("channels", &id).unwrap_err().is_not_found());
        assert!(!store.delete("channels", &id).unwrap());
    }

    #[test]
    fn test_reload_round_trip_preserves_order_and_fields() {
        let medium = SharedMedium::default();
        let mut store = RecordStore::new(medium.clone());
        for title in ["First", "Second", "Third"] {
            store
                .create("works", doc(json!({"title": title, "zeta": 1, "alpha": {"nested": true}})))
                .unwrap();
        }
        let before = store.get_all("works").unwrap();
        drop(store);

        let mut reloaded = RecordStore::new(medium);
        let after = reloaded.get_all("works").unwrap();

        assert_eq!(before, after);
        let fields: Vec<_> = after[0].keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["id", "title", "zeta", "alpha"]);
    }

    #[test]
    fn test_unwritten_collection_is_empty() {
        let medium = SharedMedium::default();
        let mut store = RecordStore::new(medium.clone());

        assert!(store.get_all("never").unwrap().is_empty());
        assert!(medium.raw("concord.never").is_none());
        assert!(store.collections().is_empty());
    }

    #[test]
    fn test_seed_is_idempotent() {
        let mut store = RecordStore::new(SharedMedium::default());
        let defaults = || {
            vec![
                doc(json!({"id": "1", "username": "admin"})),
                doc(json!({"id": "2", "username": "user"})),
            ]
        };

        assert!(store.seed_if_empty("users", defaults()).unwrap());
        assert!(!store.seed_if_empty("users", defaults()).unwrap());
        assert_eq!(store.count("users").unwrap(), 2);
    }

    #[test]
    fn test_seed_rejects_duplicate_defaults() {
        let mut store = RecordStore::new(SharedMedium::default());
        let result = store.seed_if_empty(
            "users",
            vec![doc(json!({"id": "1"})), doc(json!({"id": "1"}))],
        );

        assert!(matches!(result, Err(StoreError::DuplicateIdentity { .. })));
        assert_eq!(store.count("users").unwrap(), 0);
    }

    #[test]
    fn test_duplicate_identity_fails_create() {
        let mut store = RecordStore::new(SharedMedium::default()).with_id_generator(FixedIds("x"));
        store.create("partners", doc(json!({"name": "A"}))).unwrap();

        let result = store.create("partners", doc(json!({"name": "B"})));

        assert!(matches!(result, Err(StoreError::DuplicateIdentity { .. })));
        assert_eq!(store.get_by_id("partners", "x").unwrap()["name"], "A");
        assert_eq!(store.count("partners").unwrap(), 1);
    }

    #[test]
    fn test_sequential_ids_survive_restart() {
        let medium = SharedMedium::default();
        let mut store = RecordStore::new(medium.clone()).with_id_generator(SequentialIds);
        store.create("partners", doc(json!({"name": "A"}))).unwrap();
        store.create("partners", doc(json!({"name": "B"}))).unwrap();
        drop(store);

        let mut reloaded = RecordStore::new(medium).with_id_generator(SequentialIds);
        let created = reloaded.create("partners", doc(json!({"name": "C"}))).unwrap();

        assert_eq!(created["id"], "3");
    }

    #[test]
    fn test_sequential_ids_exhausted_fails_create() {
        let medium = SharedMedium::default();
        medium.entries.borrow_mut().insert(
            "concord.works".to_string(),
            r#"[{"id":"18446744073709551615"}]"#.to_string(),
        );
        let mut store = RecordStore::new(medium).with_id_generator(SequentialIds);

        let result = store.create("works", doc(json!({"title": "One too many"})));

        assert!(matches!(result, Err(StoreError::DuplicateIdentity { .. })));
        assert_eq!(store.count("works").unwrap(), 1);
    }

    #[test]
    fn test_write_failure_degrades_to_memory() {
        let medium = SharedMedium::default();
        let mut store = RecordStore::new(medium.clone());
        store.create("works", doc(json!({"title": "Kept"}))).unwrap();
        let persisted = medium.raw("concord.works");

        medium.fail_writes.set(true);
        let result = store.create("works", doc(json!({"title": "Lost"})));
        assert!(matches!(result, Err(StoreError::StorageFailure { .. })));
        assert!(store.is_degraded());
        assert_eq!(store.count("works").unwrap(), 1);

        // Later calls succeed in memory and leave the medium alone
        let created = store
            .create("works", doc(json!({"title": "In memory"})))
            .unwrap();
        assert_eq!(store.count("works").unwrap(), 2);
        assert!(store.delete("works", &id_of(&created)).unwrap());
        assert_eq!(medium.raw("concord.works"), persisted);
    }

    #[test]
    fn test_corrupted_state_is_reported_once_and_left_alone() {
        let medium = SharedMedium::default();
        medium
            .entries
            .borrow_mut()
            .insert("concord.users".to_string(), "{not json".to_string());
        let mut store = RecordStore::new(medium.clone());

        let first = store.get_all("users");
        assert!(first.unwrap_err().is_storage_failure());
        assert!(store.get_all("users").unwrap().is_empty());

        store.create("users", doc(json!({"username": "temp"}))).unwrap();
        assert_eq!(medium.raw("concord.users").as_deref(), Some("{not json"));
    }

    #[test]
    fn test_corrupted_collection_leaves_siblings_readable() {
        let medium = SharedMedium::default();
        medium.entries.borrow_mut().insert(
            "concord.partners".to_string(),
            r#"[{"id":"p1","name":"Acme"}]"#.to_string(),
        );
        medium
            .entries
            .borrow_mut()
            .insert("concord.works".to_string(), "{broken".to_string());
        let mut store = RecordStore::new(medium.clone());

        assert!(store.get_all("works").unwrap_err().is_storage_failure());
        assert!(store.is_degraded());

        let partners = store.get_all("partners").unwrap();
        assert_eq!(partners.len(), 1);
        assert_eq!(partners[0]["name"], "Acme");

        // Still memory-only: the sibling is not rewritten
        store.create("partners", doc(json!({"name": "Beta"}))).unwrap();
        assert_eq!(store.count("partners").unwrap(), 2);
        assert_eq!(
            medium.raw("concord.partners").as_deref(),
            Some(r#"[{"id":"p1","name":"Acme"}]"#)
        );
    }

    #[test]
    fn test_second_unreadable_collection_after_degrade_starts_empty() {
        let medium = SharedMedium::default();
        for key in ["concord.works", "concord.channels"] {
            medium
                .entries
                .borrow_mut()
                .insert(key.to_string(), "{broken".to_string());
        }
        let mut store = RecordStore::new(medium);

        assert!(store.get_all("works").is_err());
        assert!(store.get_all("channels").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_records_without_id() {
        assert!(decode_collection(r#"[{"name": "no id"}]"#).is_err());
        assert!(decode_collection(r#"[{"id": "1"}, {"id": "1"}]"#).is_err());
        assert!(decode_collection(r#"{"id": "1"}"#).is_err());
        assert_eq!(decode_collection("[]").unwrap().len(), 0);
    }

    #[test]
    fn test_find_by_equality() {
        let mut store = RecordStore::new(SharedMedium::default());
        store
            .create("contracts", doc(json!({"title": "A", "status": "active"})))
            .unwrap();
        store
            .create("contracts", doc(json!({"title": "B", "status": "draft"})))
            .unwrap();
        store
            .create("contracts", doc(json!({"title": "C", "status": "active"})))
            .unwrap();

        let active = store.find_by("contracts", "status", &json!("active")).unwrap();
        let titles: Vec<_> = active.iter().map(|d| d["title"].clone()).collect();
        assert_eq!(titles, vec![json!("A"), json!("C")]);
    }

    #[test]
    fn test_collections_lists_persisted_names() {
        let medium = SharedMedium::default();
        let mut store = RecordStore::new(medium.clone());
        store.create("users", doc(json!({"username": "a"}))).unwrap();
        store.create("partners", doc(json!({"name": "b"}))).unwrap();
        medium
            .entries
            .borrow_mut()
            .insert("unrelated".to_string(), "[]".to_string());

        let fresh = RecordStore::new(medium);
        assert_eq!(fresh.collections(), vec!["partners", "users"]);
    }
}
