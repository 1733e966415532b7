//! Entry sources: JSON arrays and directories of markdown files

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::{Entry, MalformedEntryPolicy};

/// Extension of note files picked up from directories
pub const MARKDOWN_EXTENSION: &str = "md";
/// Files ending in this suffix are left out of directory sources
pub const IGNORE_SUFFIX: &str = ".ignore.md";
/// Backup directory written by the notes sync tool; never rendered
pub const BACKUP_DIR: &str = ".session-sync-backups";

/// Parse a JSON array of `{ "markdown": "..." }` records
pub fn parse_entries(json: &str, policy: MalformedEntryPolicy) -> Result<Vec<Entry>> {
    let value: Value = serde_json::from_str(json)?;
    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(Error::InvalidSource(format!(
                "expected a JSON array of entries, found {}",
                kind_of(&other)
            )))
        }
    };

    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match entry_from_value(record) {
            Ok(entry) => entries.push(entry),
            Err(reason) => match policy {
                MalformedEntryPolicy::EmptyCard => {
                    warn!(index, %reason, "malformed entry, rendering empty card");
                    entries.push(Entry::new(String::new()));
                }
                MalformedEntryPolicy::Skip => {
                    warn!(index, %reason, "malformed entry, skipping");
                }
                MalformedEntryPolicy::Reject => {
                    return Err(Error::MalformedEntry { index, reason });
                }
            },
        }
    }
    debug!(count = entries.len(), "parsed entries");
    Ok(entries)
}

fn entry_from_value(record: Value) -> std::result::Result<Entry, String> {
    let mut fields = match record {
        Value::Object(fields) => fields,
        other => return Err(format!("expected an object, found {}", kind_of(&other))),
    };
    let markdown = match fields.remove("markdown") {
        Some(Value::String(markdown)) => markdown,
        Some(other) => {
            return Err(format!(
                "`markdown` must be a string, found {}",
                kind_of(&other)
            ))
        }
        None => return Err("missing `markdown` field".to_string()),
    };
    let source = match fields.remove("source") {
        Some(Value::String(source)) => Some(source),
        _ => None,
    };
    Ok(Entry { markdown, source })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read entries from a JSON file
pub fn load_entries_file(path: impl AsRef<Path>, policy: MalformedEntryPolicy) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading entries file");
    let json = std::fs::read_to_string(path)?;
    parse_entries(&json, policy)
}

/// Read every `*.md` file under `dir`, ordered by relative path.
///
/// Files ending in `.ignore.md` are skipped, as is the sync tool's backup
/// tree at the top of `dir`. Each file becomes one entry with its relative
/// path (forward slashes) as `source`.
pub fn load_entries_dir(dir: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let dir = dir.as_ref();
    debug!(dir = %dir.display(), "scanning entry directory");

    let walker = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|item| !(item.depth() == 1 && item.file_name() == BACKUP_DIR));

    let mut notes: Vec<(String, PathBuf)> = Vec::new();
    for item in walker {
        let item = item?;
        if !item.file_type().is_file() {
            continue;
        }
        let path = item.path();
        if path.extension().and_then(|e| e.to_str()) != Some(MARKDOWN_EXTENSION) {
            continue;
        }
        let relative = path
            .strip_prefix(dir)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if relative.ends_with(IGNORE_SUFFIX) {
            debug!(file = %relative, "ignoring note");
            continue;
        }
        notes.push((relative, path.to_path_buf()));
    }
    notes.sort_by(|a, b| a.0.cmp(&b.0));

    let mut entries = Vec::with_capacity(notes.len());
    for (relative, path) in notes {
        let markdown = std::fs::read_to_string(&path)?;
        entries.push(Entry::new(markdown).with_source(relative));
    }
    debug!(count = entries.len(), "loaded directory entries");
    Ok(entries)
}

/// Load entries from a directory of notes or a JSON file
pub fn load_entries(path: impl AsRef<Path>, policy: MalformedEntryPolicy) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    if path.is_dir() {
        load_entries_dir(path)
    } else {
        load_entries_file(path, policy)
    }
}
