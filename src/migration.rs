//! Merge a localization dump into a content patch and an i18n file.
//!
//! Every raw key in the dump gets two updates:
//!
//! - the content patch entry for the raw key is pointed at the canonical key
//!   through an `{{i18n:...}}` token, written only when it differs;
//! - the canonical key is added to the i18n file with the dump's value,
//!   unless the i18n file already has it. Existing translations always win.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::json_file::{read_json, sorted_top_level, write_json};
use crate::keys::{canonical_key, i18n_reference};

/// What happened to one source entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEvent {
    ContentUpdated { raw_key: String, reference: String },
    I18nAdded { key: String, value: String },
    I18nPreserved { key: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    pub content_updated: usize,
    pub i18n_added: usize,
    pub i18n_preserved: usize,
    /// Number of source entries processed.
    pub total: usize,
}

#[derive(Debug, Default)]
pub struct MigrationOutcome {
    pub events: Vec<EntryEvent>,
    pub summary: MigrationSummary,
}

/// Paths of the three documents taking part in a migration.
#[derive(Debug, Clone)]
pub struct MigrationPaths {
    pub source: PathBuf,
    pub content: PathBuf,
    pub i18n: PathBuf,
}

/// The three documents, loaded and shape-checked.
#[derive(Debug)]
pub struct MigrationDocuments {
    pub source: Value,
    pub content: Value,
    pub i18n: Value,
}

impl MigrationDocuments {
    /// Read all three documents. Any read or parse failure aborts before
    /// anything is modified.
    pub fn load(paths: &MigrationPaths) -> Result<Self> {
        Self::load_with(paths, |_| {})
    }

    /// Like [`load`](Self::load), calling `before_read` right before each file is read.
    pub fn load_with<F: FnMut(&Path)>(paths: &MigrationPaths, mut before_read: F) -> Result<Self> {
        let mut read = |path: &Path| {
            before_read(path);
            read_json(path)
        };
        let docs = Self {
            source: read(paths.source.as_path())?,
            content: read(paths.content.as_path())?,
            i18n: read(paths.i18n.as_path())?,
        };
        docs.check_shape(paths)?;
        Ok(docs)
    }

    fn check_shape(&self, paths: &MigrationPaths) -> Result<()> {
        source_entries(&self.source)
            .with_context(|| format!("Invalid source dump: {}", paths.source.display()))?;
        content_entries(&self.content)
            .with_context(|| format!("Invalid content patch: {}", paths.content.display()))?;
        if !self.i18n.is_object() {
            bail!("Root of i18n file must be an object: {}", paths.i18n.display());
        }
        Ok(())
    }

    /// Apply the merge in memory.
    pub fn merge(&mut self) -> Result<MigrationOutcome> {
        let source = source_entries(&self.source)?;
        let entries = content_entries_mut(&mut self.content)?;
        let Some(i18n) = self.i18n.as_object_mut() else {
            bail!("Root of i18n file must be an object");
        };
        Ok(merge_entries(source, entries, i18n))
    }

    /// Write the content patch in its original key order, then the i18n file
    /// with its keys sorted. The writes are not atomic as a pair.
    pub fn save(&self, paths: &MigrationPaths) -> Result<()> {
        self.save_with(paths, |_| {})
    }

    /// Like [`save`](Self::save), calling `before_write` right before each file is written.
    pub fn save_with<F: FnMut(&Path)>(&self, paths: &MigrationPaths, mut before_write: F) -> Result<()> {
        let Some(i18n) = self.i18n.as_object() else {
            bail!("Root of i18n file must be an object");
        };

        before_write(&paths.content);
        write_json(&paths.content, &self.content)?;

        before_write(&paths.i18n);
        write_json(&paths.i18n, &sorted_top_level(i18n))
    }
}

/// Walk `source` in order and update `entries` and `i18n`.
pub fn merge_entries(
    source: &Map<String, Value>,
    entries: &mut Map<String, Value>,
    i18n: &mut Map<String, Value>,
) -> MigrationOutcome {
    let mut outcome = MigrationOutcome::default();

    for (raw_key, value) in source {
        let key = canonical_key(raw_key);
        let reference = i18n_reference(&key);

        if entries.get(raw_key).and_then(Value::as_str) != Some(reference.as_str()) {
            entries.insert(raw_key.clone(), Value::String(reference.clone()));
            outcome.summary.content_updated += 1;
            outcome.events.push(EntryEvent::ContentUpdated {
                raw_key: raw_key.clone(),
                reference,
            });
        }

        if i18n.contains_key(&key) {
            outcome.summary.i18n_preserved += 1;
            outcome.events.push(EntryEvent::I18nPreserved { key });
        } else {
            i18n.insert(key.clone(), value.clone());
            outcome.summary.i18n_added += 1;
            outcome.events.push(EntryEvent::I18nAdded {
                key,
                value: display_value(value),
            });
        }
    }

    outcome.summary.total = source.len();
    outcome
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn source_entries(doc: &Value) -> Result<&Map<String, Value>> {
    match doc.get("content") {
        Some(Value::Object(map)) => Ok(map),
        Some(_) => bail!("\"content\" must be an object"),
        None => bail!("Missing top-level \"content\" field"),
    }
}

fn content_entries(doc: &Value) -> Result<&Map<String, Value>> {
    let Some(changes) = doc.get("Changes") else {
        bail!("Missing top-level \"Changes\" field");
    };
    let Some(changes) = changes.as_array() else {
        bail!("\"Changes\" must be a list");
    };
    let Some(first) = changes.first() else {
        bail!("\"Changes\" is empty");
    };
    match first.get("Entries") {
        Some(Value::Object(map)) => Ok(map),
        Some(_) => bail!("\"Changes[0].Entries\" must be an object"),
        None => bail!("Missing \"Entries\" in the first element of \"Changes\""),
    }
}

fn content_entries_mut(doc: &mut Value) -> Result<&mut Map<String, Value>> {
    doc.get_mut("Changes")
        .and_then(|changes| changes.get_mut(0))
        .and_then(|first| first.get_mut("Entries"))
        .and_then(Value::as_object_mut)
        .context("Missing \"Changes[0].Entries\" object in content patch")
}

/// Load, merge and optionally save in one step.
pub fn migrate(paths: &MigrationPaths, write: bool) -> Result<MigrationOutcome> {
    let mut docs = MigrationDocuments::load(paths)?;
    let outcome = docs.merge()?;
    if write {
        docs.save(paths)?;
    }
    Ok(outcome)
}
