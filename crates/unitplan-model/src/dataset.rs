use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::{BenchmarkRecord, HalachaRecord, TextRecord};

/// Shape of every record in a hierarchy dataset, fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordShape {
    Text,
    Halacha,
}

impl RecordShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Halacha => "halacha",
        }
    }
}

impl fmt::Display for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered records of a single shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dataset {
    Text(Vec<TextRecord>),
    Halacha(Vec<HalachaRecord>),
}

impl Dataset {
    pub fn empty(shape: RecordShape) -> Self {
        match shape {
            RecordShape::Text => Self::Text(Vec::new()),
            RecordShape::Halacha => Self::Halacha(Vec::new()),
        }
    }

    pub fn shape(&self) -> RecordShape {
        match self {
            Self::Text(_) => RecordShape::Text,
            Self::Halacha(_) => RecordShape::Halacha,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Text(records) => records.len(),
            Self::Halacha(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named hierarchy dataset (e.g. `ChumashNEW`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub dataset: Dataset,
}

/// A named list of benchmark standards and the export key its choice uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkSet {
    pub name: String,
    pub key: String,
    pub records: Vec<BenchmarkRecord>,
}

impl BenchmarkSet {
    pub fn find(&self, code: &str) -> Option<&BenchmarkRecord> {
        self.records.iter().find(|record| record.code == code)
    }
}
