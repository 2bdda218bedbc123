//! Collection - Typed view over one collection of the RecordStore
//!
//! All operations go through the untyped store, converting with serde on
//! the way in and out, so there is a single CRUD implementation for every
//! entity type.

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{StoreError, StoreResult};
use crate::model::record::{document_id, merge_patch, Document, Record, RecordId};
use crate::service::record_store::RecordStore;

pub struct Collection<'s, T: Record> {
    store: &'s mut RecordStore,
    _record: PhantomData<T>,
}

impl RecordStore {
    /// Typed access to the collection holding `T`
    pub fn collection<T: Record>(&mut self) -> Collection<'_, T> {
        Collection {
            store: self,
            _record: PhantomData,
        }
    }
}

impl<'s, T: Record> Collection<'s, T> {
    pub fn name(&self) -> &'static str {
        T::COLLECTION
    }

    pub fn all(&mut self) -> StoreResult<Vec<T>> {
        self.store
            .get_all(T::COLLECTION)?
            .into_iter()
            .map(from_document)
            .collect()
    }

    /// Every record that fits `T`, skipping the rest
    ///
    /// The untyped surface stores whatever it is given, so a collection can
    /// hold documents this type cannot read. Each one skipped is logged.
    pub fn all_valid(&mut self) -> StoreResult<Vec<T>> {
        Ok(self
            .store
            .get_all(T::COLLECTION)?
            .into_iter()
            .filter_map(|doc| {
                let id = document_id(&doc).unwrap_or_default().to_string();
                match from_document(doc) {
                    Ok(record) => Some(record),
                    Err(error) => {
                        warn!(
                            collection = T::COLLECTION,
                            id = %id,
                            error = %error,
                            "Skipping record that does not fit the entity type"
                        );
                        None
                    }
                }
            })
            .collect())
    }

    pub fn get(&mut self, id: &RecordId) -> StoreResult<T> {
        from_document(self.store.get_by_id(T::COLLECTION, id.as_str())?)
    }

    pub fn find_by(&mut self, field: &str, value: impl Serialize) -> StoreResult<Vec<T>> {
        let value =
            serde_json::to_value(value).map_err(|e| StoreError::invalid(T::COLLECTION, e))?;
        self.store
            .find_by(T::COLLECTION, field, &value)?
            .into_iter()
            .map(from_document)
            .collect()
    }

    pub fn count(&mut self) -> StoreResult<usize> {
        self.store.count(T::COLLECTION)
    }

    /// Store `record` under a new identity and return it with that identity
    pub fn create(&mut self, record: T) -> StoreResult<T> {
        let record = to_document(T::COLLECTION, &record)?;
        let stored = self.store.create(T::COLLECTION, record)?;
        from_document(stored)
    }

    /// Merge `patch` into the record
    ///
    /// The merged result must still be a valid `T`; if not, nothing is
    /// written and `InvalidRecord` is returned.
    pub fn update(&mut self, id: &RecordId, patch: impl Serialize) -> StoreResult<T> {
        let patch = to_document(T::COLLECTION, &patch)?;

        let mut merged = self.store.get_by_id(T::COLLECTION, id.as_str())?;
        merge_patch(&mut merged, &patch);
        from_document::<T>(merged)?;

        from_document(self.store.update(T::COLLECTION, id.as_str(), &patch)?)
    }

    pub fn delete(&mut self, id: &RecordId) -> StoreResult<bool> {
        self.store.delete(T::COLLECTION, id.as_str())
    }

    /// Seed the collection when it is empty; `true` if anything was written
    pub fn seed_if_empty(&mut self, defaults: Vec<T>) -> StoreResult<bool> {
        let defaults = defaults
            .iter()
            .map(|record| to_document(T::COLLECTION, record))
            .collect::<StoreResult<Vec<_>>>()?;
        self.store.seed_if_empty(T::COLLECTION, defaults)
    }
}

fn to_document(collection: &str, value: &impl Serialize) -> StoreResult<Document> {
    match serde_json::to_value(value).map_err(|e| StoreError::invalid(collection, e))? {
        Value::Object(doc) => Ok(doc),
        other => Err(StoreError::invalid(
            collection,
            format!("expected an object, got {other}"),
        )),
    }
}

fn from_document<T: Record>(doc: Document) -> StoreResult<T> {
    serde_json::from_value(Value::Object(doc)).map_err(|e| StoreError::invalid(T::COLLECTION, e))
}
