//! The exportable unit plan.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::level::PathLevel;
use crate::selection::SelectionPath;

/// Free-text planning fields, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FreeTextField {
    Aim,
    Outline,
    Keywords,
    Outcomes,
    Skills,
    Levels,
    HigherOrderThinking,
    LifeLessons,
    Resources,
    Differentiation,
    Lessons,
}

impl FreeTextField {
    pub const ALL: [FreeTextField; 11] = [
        Self::Aim,
        Self::Outline,
        Self::Keywords,
        Self::Outcomes,
        Self::Skills,
        Self::Levels,
        Self::HigherOrderThinking,
        Self::LifeLessons,
        Self::Resources,
        Self::Differentiation,
        Self::Lessons,
    ];

    /// JSON key used in the export document.
    pub fn key(self) -> &'static str {
        match self {
            Self::Aim => "unitAim",
            Self::Outline => "unitOutline",
            Self::Keywords => "unitKeywords",
            Self::Outcomes => "unitOutcomes",
            Self::Skills => "unitSkills",
            Self::Levels => "unitLevels",
            Self::HigherOrderThinking => "unitHot",
            Self::LifeLessons => "unitLifeLessons",
            Self::Resources => "unitResources",
            Self::Differentiation => "unitDiff",
            Self::Lessons => "unitLessons",
        }
    }
}

impl fmt::Display for FreeTextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub const GRADE_KEY: &str = "grade";
pub const TIMESTAMP_KEY: &str = "timestamp";

/// True when `key` is one of the fixed export keys (path levels, grade,
/// free-text fields, timestamp), which a benchmark set must not reuse.
pub fn is_reserved_export_key(key: &str) -> bool {
    key == GRADE_KEY
        || key == TIMESTAMP_KEY
        || PathLevel::ALL.iter().any(|level| level.export_key() == key)
        || FreeTextField::ALL.iter().any(|field| field.key() == key)
}

/// Benchmark code chosen for one benchmark set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkChoice {
    /// Export key of the benchmark set (e.g. `benchmarkCode`).
    pub key: String,
    pub code: String,
}

/// Selection path plus free text, assembled at export time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDraft {
    pub path: SelectionPath,
    pub grade: String,
    /// One entry per benchmark set, in catalog order.
    pub benchmarks: Vec<BenchmarkChoice>,
    pub unit_aim: String,
    pub unit_outline: String,
    pub unit_keywords: String,
    pub unit_outcomes: String,
    pub unit_skills: String,
    pub unit_levels: String,
    pub unit_hot: String,
    pub unit_life_lessons: String,
    pub unit_resources: String,
    pub unit_diff: String,
    pub unit_lessons: String,
}

impl UnitDraft {
    pub fn free_text(&self, field: FreeTextField) -> &str {
        match field {
            FreeTextField::Aim => &self.unit_aim,
            FreeTextField::Outline => &self.unit_outline,
            FreeTextField::Keywords => &self.unit_keywords,
            FreeTextField::Outcomes => &self.unit_outcomes,
            FreeTextField::Skills => &self.unit_skills,
            FreeTextField::Levels => &self.unit_levels,
            FreeTextField::HigherOrderThinking => &self.unit_hot,
            FreeTextField::LifeLessons => &self.unit_life_lessons,
            FreeTextField::Resources => &self.unit_resources,
            FreeTextField::Differentiation => &self.unit_diff,
            FreeTextField::Lessons => &self.unit_lessons,
        }
    }

    pub fn set_free_text(&mut self, field: FreeTextField, value: impl Into<String>) {
        let slot = match field {
            FreeTextField::Aim => &mut self.unit_aim,
            FreeTextField::Outline => &mut self.unit_outline,
            FreeTextField::Keywords => &mut self.unit_keywords,
            FreeTextField::Outcomes => &mut self.unit_outcomes,
            FreeTextField::Skills => &mut self.unit_skills,
            FreeTextField::Levels => &mut self.unit_levels,
            FreeTextField::HigherOrderThinking => &mut self.unit_hot,
            FreeTextField::LifeLessons => &mut self.unit_life_lessons,
            FreeTextField::Resources => &mut self.unit_resources,
            FreeTextField::Differentiation => &mut self.unit_diff,
            FreeTextField::Lessons => &mut self.unit_lessons,
        };
        *slot = value.into();
    }

    pub fn benchmark(&self, key: &str) -> Option<&str> {
        self.benchmarks
            .iter()
            .find(|choice| choice.key == key)
            .map(|choice| choice.code.as_str())
    }
}
