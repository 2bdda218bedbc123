//! Terminal output: styled text for people, JSON for scripts

use concord_domain::model::record::{document_id, ID_FIELD};
use concord_domain::Document;
use console::style;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Pretty-printed JSON, regardless of mode
    pub fn value<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn record(&self, doc: &Document) -> anyhow::Result<()> {
        if self.json {
            return self.value(doc);
        }
        println!("{}", record_line(doc));
        Ok(())
    }

    pub fn records(&self, collection: &str, docs: &[Document]) -> anyhow::Result<()> {
        if self.json {
            return self.value(docs);
        }
        for doc in docs {
            println!("{}", record_line(doc));
        }
        println!(
            "{} {} record(s)",
            style(collection).cyan(),
            style(docs.len()).bold()
        );
        Ok(())
    }

    /// Confirmation line; silent in JSON mode
    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// Non-fatal problem, always on stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), message);
    }
}

/// `<id> field=value field=value ...`
pub fn record_line(doc: &Document) -> String {
    let id = document_id(doc).unwrap_or("?");
    let fields: Vec<String> = doc
        .iter()
        .filter(|(field, _)| field.as_str() != ID_FIELD)
        .map(|(field, value)| format!("{}={}", style(field).dim(), plain(value)))
        .collect();
    format!("{} {}", style(id).bold(), fields.join(" "))
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
