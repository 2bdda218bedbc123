//! concord list / get / create / update / delete / find
//!
//! Plain CRUD on any collection by name. No schema is applied here;
//! whatever fields are given are stored.

use anyhow::{bail, Context as _};
use clap::Args;
use concord_domain::Document;
use console::Term;
use dialoguer::Confirm;
use serde_json::Value;

use super::Context;

/// Record fields given on the command line
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    /// Fields as a JSON object
    #[arg(long, value_name = "JSON")]
    pub data: Option<String>,

    /// Single field, repeatable; the value is parsed as JSON when it can be
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,
}

impl FieldArgs {
    /// Merge `--data` and every `--set` into one document, `--set` last
    pub fn to_document(&self) -> anyhow::Result<Document> {
        let mut doc = match &self.data {
            Some(raw) => {
                let value: Value = serde_json::from_str(raw).context("--data is not valid JSON")?;
                match value {
                    Value::Object(doc) => doc,
                    _ => bail!("--data must be a JSON object"),
                }
            }
            None => Document::new(),
        };

        for assignment in &self.set {
            let (field, value) = parse_assignment(assignment)?;
            doc.insert(field, value);
        }
        Ok(doc)
    }
}

/// Parse `field=value`
pub fn parse_assignment(assignment: &str) -> anyhow::Result<(String, Value)> {
    let Some((field, raw)) = assignment.split_once('=') else {
        bail!("expected FIELD=VALUE, got '{assignment}'");
    };
    let field = field.trim();
    if field.is_empty() {
        bail!("empty field name in '{assignment}'");
    }
    Ok((field.to_string(), parse_value(raw)))
}

/// JSON when the text is valid JSON, a string otherwise
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Collection name (users, contracts, works, partners, channels, ...)
    pub collection: String,
}

impl ListCommand {
    pub fn run(&self, ctx: &mut Context) -> anyhow::Result<()> {
        let records = ctx.store.get_all(&self.collection)?;
        ctx.output.records(&self.collection, &records)
    }
}

#[derive(Debug, Args)]
pub struct GetCommand {
    pub collection: String,
    pub id: String,
}

impl GetCommand {
    pub fn run(&self, ctx: &mut Context) -> anyhow::Result<()> {
        let record = ctx.store.get_by_id(&self.collection, &self.id)?;
        ctx.output.record(&record)
    }
}

#[derive(Debug, Args)]
pub struct CreateCommand {
    pub collection: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl CreateCommand {
    pub fn run(&self, ctx: &mut Context) -> anyhow::Result<()> {
        let record = self.fields.to_document()?;
        let created = ctx.store.create(&self.collection, record)?;
        ctx.output.record(&created)?;
        ctx.output.success(&format!("Created in {}", self.collection));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    pub collection: String,
    pub id: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl UpdateCommand {
    pub fn run(&self, ctx: &mut Context) -> anyhow::Result<()> {
        let patch = self.fields.to_document()?;
        if patch.is_empty() {
            bail!("nothing to update; pass --data or --set");
        }
        let updated = ctx.store.update(&self.collection, &self.id, &patch)?;
        ctx.output.record(&updated)?;
        ctx.output.success(&format!("Updated {}", self.id));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct DeleteCommand {
    pub collection: String,
    pub id: String,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

impl DeleteCommand {
    pub fn run(&self, ctx: &mut Context) -> anyhow::Result<()> {
        if !self.yes && !self.confirm()? {
            ctx.output.success("Nothing deleted");
            return Ok(());
        }

        let deleted = ctx.store.delete(&self.collection, &self.id)?;
        if ctx.output.is_json() {
            ctx.output.value(&serde_json::json!({ "deleted": deleted }))
        } else {
            if deleted {
                ctx.output.success(&format!("Deleted {}", self.id));
            } else {
                ctx.output
                    .warn(&format!("No record '{}' in {}", self.id, self.collection));
            }
            Ok(())
        }
    }

    fn confirm(&self) -> anyhow::Result<bool> {
        if !Term::stderr().is_term() {
            bail!("refusing to delete without --yes when not attached to a terminal");
        }
        let prompt = format!("Delete '{}' from {}?", self.id, self.collection);
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

#[derive(Debug, Args)]
pub struct FindCommand {
    pub collection: String,
    pub field: String,
    /// Value to match; parsed as JSON when it can be
    pub value: String,
}

impl FindCommand {
    pub fn run(&self, ctx: &mut Context) -> anyhow::Result<()> {
        let value = parse_value(&self.value);
        let records = ctx.store.find_by(&self.collection, &self.field, &value)?;
        ctx.output.records(&self.collection, &records)
    }
}
