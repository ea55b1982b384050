//! Typed record shapes and their header aliases.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::level::{HierarchyLevel, SortOrder};

/// One untyped CSV row: header name to trimmed cell value.
pub type RawRow = BTreeMap<String, String>;

pub const SUBJECT_HEADERS: &[&str] = &["Subject"];
pub const KEY_CHAPTER_HEADERS: &[&str] = &["KeyChapter", "Key Chapter"];
pub const START_VERSE_HEADERS: &[&str] = &["StartVerse", "Start Verse"];
pub const END_VERSE_HEADERS: &[&str] = &["EndVerse", "End Verse"];
pub const LEARNING_GOAL_HEADERS: &[&str] = &[
    "LearningGoal",
    "Learning Goal",
    "Posnack Learning Goals (TBD)",
];
pub const CONTENT_ALLOCATION_HEADERS: &[&str] = &["ContentAllocation", "Content / Allocation"];
pub const KEY_SOURCE_UNIT_HEADERS: &[&str] = &["KeySourceUnit", "Key Source / Unit"];
pub const KEY_CONCEPT_THEME_HEADERS: &[&str] = &["KeyConceptTheme", "Key Concept / Theme"];
pub const CODE_HEADERS: &[&str] = &["Code"];
pub const DESCRIPTION_HEADERS: &[&str] = &["Description", "Benchmark"];

/// First non-missing value among `aliases`, or an empty string.
fn lookup(row: &RawRow, aliases: &[&str]) -> String {
    aliases
        .iter()
        .find_map(|alias| row.get(*alias))
        .cloned()
        .unwrap_or_default()
}

/// Per-shape accessors used by the filter engine.
pub trait HierarchyRecord {
    /// Value of the field mapped to `level` for this shape.
    fn level_value(&self, level: HierarchyLevel) -> &str;

    /// Display order of the field mapped to `level`.
    fn sort_order(level: HierarchyLevel) -> SortOrder;

    /// Guidance text copied into the unit aim on a unique match.
    fn learning_goal(&self) -> Option<&str> {
        None
    }
}

/// Text-family row (ChumashNEW, Navi, Talmud).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub subject: String,
    pub key_chapter: String,
    pub start_verse: String,
    pub end_verse: String,
    pub learning_goal: String,
}

impl TextRecord {
    pub const FIELDS: &'static [&'static [&'static str]] = &[
        SUBJECT_HEADERS,
        KEY_CHAPTER_HEADERS,
        START_VERSE_HEADERS,
        END_VERSE_HEADERS,
        LEARNING_GOAL_HEADERS,
    ];

    pub fn from_row(row: &RawRow) -> Self {
        Self {
            subject: lookup(row, SUBJECT_HEADERS),
            key_chapter: lookup(row, KEY_CHAPTER_HEADERS),
            start_verse: lookup(row, START_VERSE_HEADERS),
            end_verse: lookup(row, END_VERSE_HEADERS),
            learning_goal: lookup(row, LEARNING_GOAL_HEADERS),
        }
    }
}

impl HierarchyRecord for TextRecord {
    fn level_value(&self, level: HierarchyLevel) -> &str {
        match level {
            HierarchyLevel::Book => &self.subject,
            HierarchyLevel::Chapter => &self.key_chapter,
            HierarchyLevel::Start => &self.start_verse,
            HierarchyLevel::End => &self.end_verse,
        }
    }

    fn sort_order(level: HierarchyLevel) -> SortOrder {
        match level {
            HierarchyLevel::Book => SortOrder::Lexicographic,
            _ => SortOrder::Numeric,
        }
    }

    fn learning_goal(&self) -> Option<&str> {
        Some(&self.learning_goal)
    }
}

/// Halacha-family row. Only three hierarchy fields: the concept/theme
/// serves as both the start and the end position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalachaRecord {
    pub content_allocation: String,
    pub key_source_unit: String,
    pub key_concept_theme: String,
}

impl HalachaRecord {
    pub const FIELDS: &'static [&'static [&'static str]] = &[
        CONTENT_ALLOCATION_HEADERS,
        KEY_SOURCE_UNIT_HEADERS,
        KEY_CONCEPT_THEME_HEADERS,
    ];

    pub fn from_row(row: &RawRow) -> Self {
        Self {
            content_allocation: lookup(row, CONTENT_ALLOCATION_HEADERS),
            key_source_unit: lookup(row, KEY_SOURCE_UNIT_HEADERS),
            key_concept_theme: lookup(row, KEY_CONCEPT_THEME_HEADERS),
        }
    }
}

impl HierarchyRecord for HalachaRecord {
    fn level_value(&self, level: HierarchyLevel) -> &str {
        match level {
            HierarchyLevel::Book => &self.content_allocation,
            HierarchyLevel::Chapter => &self.key_source_unit,
            HierarchyLevel::Start | HierarchyLevel::End => &self.key_concept_theme,
        }
    }

    fn sort_order(_level: HierarchyLevel) -> SortOrder {
        SortOrder::Lexicographic
    }
}

/// One benchmark standard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub code: String,
    pub description: String,
}

impl BenchmarkRecord {
    pub const FIELDS: &'static [&'static [&'static str]] = &[CODE_HEADERS, DESCRIPTION_HEADERS];

    /// Returns `None` for rows with neither a code nor a description.
    pub fn from_row(row: &RawRow) -> Option<Self> {
        let record = Self {
            code: lookup(row, CODE_HEADERS),
            description: lookup(row, DESCRIPTION_HEADERS),
        };
        if record.code.is_empty() && record.description.is_empty() {
            None
        } else {
            Some(record)
        }
    }

    /// Display label, e.g. `J.1 – Reads text`.
    pub fn label(&self) -> String {
        if self.code.is_empty() {
            self.description.clone()
        } else {
            format!("{} – {}", self.code, self.description)
        }
    }
}
