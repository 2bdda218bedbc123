//! Work - A piece of content covered by contracts

use serde::{Deserialize, Serialize};

use super::record::{Document, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    #[serde(default)]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Free-form category (song, film, book...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Channel the work is published on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<RecordId>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Work {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: RecordId::default(),
            title: title.into(),
            author: author.into(),
            kind: None,
            channel_id: None,
            extra: Document::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_channel(mut self, channel_id: impl Into<RecordId>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }
}

impl Record for Work {
    const COLLECTION: &'static str = "works";

    fn id(&self) -> &RecordId {
        &self.id
    }
}
