//! Positions in the selection hierarchy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// How the values of one hierarchy field are ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Byte-wise ascending string order.
    Lexicographic,
    /// Ascending numeric value; non-numeric values sort last.
    Numeric,
}

/// A level below the category: book, chapter, start-unit, end-unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyLevel {
    Book,
    Chapter,
    Start,
    End,
}

impl HierarchyLevel {
    pub const ALL: [HierarchyLevel; 4] = [Self::Book, Self::Chapter, Self::Start, Self::End];

    /// One-based depth below the category (book = 1).
    pub fn depth(self) -> usize {
        match self {
            Self::Book => 1,
            Self::Chapter => 2,
            Self::Start => 3,
            Self::End => 4,
        }
    }

    /// The levels that must be chosen before options for `self` exist.
    pub fn prerequisites(self) -> &'static [HierarchyLevel] {
        match self {
            Self::Book => &[],
            Self::Chapter => &[Self::Book],
            Self::Start => &[Self::Book, Self::Chapter],
            Self::End => &[Self::Book, Self::Chapter, Self::Start],
        }
    }

    pub fn next(self) -> Option<HierarchyLevel> {
        Self::ALL.get(self.depth()).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Chapter => "chapter",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HierarchyLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "book" => Ok(Self::Book),
            "chapter" => Ok(Self::Chapter),
            "start" | "startverse" => Ok(Self::Start),
            "end" | "endverse" => Ok(Self::End),
            _ => Err(ModelError::UnknownLevel(s.to_string())),
        }
    }
}

/// A level of the full selection path, including the category at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathLevel {
    Category,
    Hierarchy(HierarchyLevel),
}

impl PathLevel {
    pub const ALL: [PathLevel; 5] = [
        Self::Category,
        Self::Hierarchy(HierarchyLevel::Book),
        Self::Hierarchy(HierarchyLevel::Chapter),
        Self::Hierarchy(HierarchyLevel::Start),
        Self::Hierarchy(HierarchyLevel::End),
    ];

    /// Zero-based index into the path (category = 0).
    pub fn index(self) -> usize {
        match self {
            Self::Category => 0,
            Self::Hierarchy(level) => level.depth(),
        }
    }

    /// JSON key this level is exported under.
    pub fn export_key(self) -> &'static str {
        match self {
            Self::Category => "textType",
            Self::Hierarchy(HierarchyLevel::Book) => "book",
            Self::Hierarchy(HierarchyLevel::Chapter) => "chapter",
            Self::Hierarchy(HierarchyLevel::Start) => "startVerse",
            Self::Hierarchy(HierarchyLevel::End) => "endVerse",
        }
    }

    /// The hierarchy level whose options become available once `self` is set.
    pub fn unlocks(self) -> Option<HierarchyLevel> {
        match self {
            Self::Category => Some(HierarchyLevel::Book),
            Self::Hierarchy(level) => level.next(),
        }
    }
}

impl From<HierarchyLevel> for PathLevel {
    fn from(level: HierarchyLevel) -> Self {
        Self::Hierarchy(level)
    }
}

impl fmt::Display for PathLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => f.write_str("category"),
            Self::Hierarchy(level) => level.fmt(f),
        }
    }
}
