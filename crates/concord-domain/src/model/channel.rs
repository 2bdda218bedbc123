//! Channel - Where works are distributed

use serde::{Deserialize, Serialize};

use super::record::{Document, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Channel {
    pub fn new(name: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            id: RecordId::default(),
            name: name.into(),
            platform: platform.into(),
            url: None,
            extra: Document::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl Record for Channel {
    const COLLECTION: &'static str = "channels";

    fn id(&self) -> &RecordId {
        &self.id
    }
}
