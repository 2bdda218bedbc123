//! Record - The shared shape of every stored entity
//!
//! On the untyped surface a record is a JSON object ([`Document`]) whose
//! `id` field is owned by the store. Typed entities implement [`Record`]
//! so the same CRUD code serves all of them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved identity field
pub const ID_FIELD: &str = "id";

/// A stored record in its untyped form; field order is preserved
pub type Document = serde_json::Map<String, Value>;

/// Identity of a record within its collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A record that has not been stored yet carries an empty id
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&RecordId> for RecordId {
    fn from(id: &RecordId) -> Self {
        id.clone()
    }
}

/// A typed entity stored in its own collection
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Name of the collection holding this entity
    const COLLECTION: &'static str;

    fn id(&self) -> &RecordId;
}

/// Read the identity of a document, if it carries a string id
pub fn document_id(doc: &Document) -> Option<&str> {
    doc.get(ID_FIELD).and_then(Value::as_str)
}

/// Rebuild `doc` with `id` as its first field, dropping any previous id
pub fn with_identity(doc: Document, id: &RecordId) -> Document {
    let mut stored = Document::with_capacity(doc.len() + 1);
    stored.insert(ID_FIELD.to_string(), Value::String(id.as_str().to_string()));
    stored.extend(doc.into_iter().filter(|(field, _)| field != ID_FIELD));
    stored
}

/// Shallow merge: every patch field replaces the record's field, except `id`
pub fn merge_patch(doc: &mut Document, patch: &Document) {
    for (field, value) in patch {
        if field == ID_FIELD {
            continue;
        }
        doc.insert(field.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_with_identity_puts_id_first() {
        let stored = with_identity(
            doc(json!({"name": "Acme", "id": "caller-supplied", "phone": "1"})),
            &RecordId::new("p-1"),
        );

        let fields: Vec<_> = stored.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["id", "name", "phone"]);
        assert_eq!(document_id(&stored), Some("p-1"));
    }

    #[test]
    fn test_merge_patch_keeps_id_and_unpatched_fields() {
        let mut record = doc(json!({"id": "c-1", "title": "Old", "status": "draft"}));
        merge_patch(
            &mut record,
            &doc(json!({"id": "hijack", "status": "active", "value": 10})),
        );

        assert_eq!(record["id"], "c-1");
        assert_eq!(record["title"], "Old");
        assert_eq!(record["status"], "active");
        assert_eq!(record["value"], 10);
    }

    #[test]
    fn test_record_id_serializes_as_plain_string() {
        let id = RecordId::new("42");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("42"));
        assert!(RecordId::default().is_unassigned());
    }
}
