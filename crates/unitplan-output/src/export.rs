use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::info;

use unitplan_model::{FreeTextField, GRADE_KEY, PathLevel, TIMESTAMP_KEY, UnitDraft};

use crate::error::{OutputError, Result};
use crate::filename::suggested_filename;

/// A flattened unit: string values under a fixed key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitExport {
    entries: Vec<(String, String)>,
}

impl UnitExport {
    /// Key order: `textType, grade, book, chapter, startVerse, endVerse`,
    /// the benchmark keys, the free-text fields, then `timestamp`. Unset
    /// values become empty strings.
    pub fn from_draft(draft: &UnitDraft, timestamp: DateTime<Utc>) -> Self {
        let mut entries = Vec::with_capacity(
            PathLevel::ALL.len() + draft.benchmarks.len() + FreeTextField::ALL.len() + 2,
        );
        let path_entry = |level: PathLevel| {
            let value = draft.path.get(level).unwrap_or_default();
            (level.export_key().to_string(), value.to_string())
        };

        entries.push(path_entry(PathLevel::Category));
        entries.push((GRADE_KEY.to_string(), draft.grade.clone()));
        for level in &PathLevel::ALL[1..] {
            entries.push(path_entry(*level));
        }
        for choice in &draft.benchmarks {
            entries.push((choice.key.clone(), choice.code.clone()));
        }
        for field in FreeTextField::ALL {
            entries.push((field.key().to_string(), draft.free_text(field).to_string()));
        }
        entries.push((TIMESTAMP_KEY.to_string(), format_timestamp(timestamp)));
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for UnitExport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// ISO-8601 UTC with milliseconds, e.g. `2026-01-05T09:30:00.000Z`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// JSON text for `draft` stamped with `timestamp`.
pub fn export_json_at(draft: &UnitDraft, timestamp: DateTime<Utc>) -> Result<String> {
    UnitExport::from_draft(draft, timestamp).to_json()
}

/// JSON text for `draft` stamped with the current time.
pub fn export_json_now(draft: &UnitDraft) -> Result<String> {
    export_json_at(draft, Utc::now())
}

/// A unit written to disk.
#[derive(Debug, Clone)]
pub struct ExportedUnit {
    pub path: PathBuf,
    pub json: String,
}

/// Write `draft` into `dir` under its suggested filename, stamped now.
pub fn write_export(dir: &Path, draft: &UnitDraft) -> Result<ExportedUnit> {
    write_export_at(dir, draft, Utc::now())
}

pub fn write_export_at(
    dir: &Path,
    draft: &UnitDraft,
    timestamp: DateTime<Utc>,
) -> Result<ExportedUnit> {
    let json = export_json_at(draft, timestamp)?;
    std::fs::create_dir_all(dir).map_err(|source| OutputError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(suggested_filename(draft));
    std::fs::write(&path, &json).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = json.len(), "unit exported");
    Ok(ExportedUnit { path, json })
}
