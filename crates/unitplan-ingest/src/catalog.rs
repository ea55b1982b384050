//! The catalog manifest: which CSV file backs each category and benchmark set.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use unitplan_model::{RecordShape, is_reserved_export_key};

use crate::error::{IngestError, Result};

pub const CATALOG_FILE_NAME: &str = "catalog.toml";
pub const CATALOG_SCHEMA: &str = "unitplan.catalog";
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

const DEFAULT_TEXT_CATEGORIES: &[&str] = &["ChumashNEW", "Navi", "Talmud"];
const DEFAULT_HALACHA_CATEGORY: &str = "Halacha";
const DEFAULT_BENCHMARK_NAME: &str = "Judaic";
const DEFAULT_BENCHMARK_FILE: &str = "BenchmarksJUDAICCURRICULUM.csv";
const SINGLE_BENCHMARK_KEY: &str = "benchmarkCode";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub catalog: CatalogHeader,
    #[serde(default)]
    pub datasets: Vec<DatasetSource>,
    #[serde(default)]
    pub benchmarks: Vec<BenchmarkSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSource {
    pub category: String,
    pub file: String,
    pub shape: RecordShape,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkSource {
    pub name: String,
    pub file: String,
    /// Export key for this set's choice; derived from the name when absent.
    #[serde(default)]
    pub key: Option<String>,
}

impl Default for Catalog {
    /// The layout of the planner's bundled `data/` folder.
    fn default() -> Self {
        let mut datasets: Vec<DatasetSource> = DEFAULT_TEXT_CATEGORIES
            .iter()
            .map(|name| DatasetSource {
                category: (*name).to_string(),
                file: format!("{name}.csv"),
                shape: RecordShape::Text,
            })
            .collect();
        datasets.push(DatasetSource {
            category: DEFAULT_HALACHA_CATEGORY.to_string(),
            file: format!("{DEFAULT_HALACHA_CATEGORY}.csv"),
            shape: RecordShape::Halacha,
        });
        Self {
            catalog: CatalogHeader {
                schema: CATALOG_SCHEMA.to_string(),
                schema_version: CATALOG_SCHEMA_VERSION,
            },
            datasets,
            benchmarks: vec![BenchmarkSource {
                name: DEFAULT_BENCHMARK_NAME.to_string(),
                file: DEFAULT_BENCHMARK_FILE.to_string(),
                key: None,
            }],
        }
    }
}

impl Catalog {
    /// Load `catalog.toml` from `data_dir`, or fall back to the default
    /// catalog when the directory has none.
    pub fn resolve(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CATALOG_FILE_NAME);
        if path.is_file() {
            load_catalog(&path)
        } else {
            debug!(data_dir = %data_dir.display(), "no catalog manifest, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.schema != CATALOG_SCHEMA {
            return Err(IngestError::InvalidCatalog {
                message: format!(
                    "expected schema {CATALOG_SCHEMA}, found {}",
                    self.catalog.schema
                ),
            });
        }
        if self.catalog.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(IngestError::InvalidCatalog {
                message: format!(
                    "unsupported schema_version {} (expected {CATALOG_SCHEMA_VERSION})",
                    self.catalog.schema_version
                ),
            });
        }

        let mut names = BTreeSet::new();
        for source in &self.datasets {
            if source.category.trim().is_empty() {
                return Err(IngestError::InvalidCatalog {
                    message: "dataset with empty category name".to_string(),
                });
            }
            if !names.insert(source.category.as_str()) {
                return Err(IngestError::DuplicateCategory {
                    name: source.category.clone(),
                });
            }
            validate_relative_path(&source.file)?;
        }

        let mut keys = BTreeSet::new();
        for source in &self.benchmarks {
            validate_relative_path(&source.file)?;
            let key = self.benchmark_key(source);
            if is_reserved_export_key(&key) {
                return Err(IngestError::ReservedBenchmarkKey { key });
            }
            if !keys.insert(key.clone()) {
                return Err(IngestError::DuplicateBenchmarkKey { key });
            }
        }
        Ok(())
    }

    /// JSON key the choice from `source` is exported under.
    ///
    /// A lone benchmark set uses `benchmarkCode`; with several sets each
    /// gets `benchmarkCode<Name>`.
    pub fn benchmark_key(&self, source: &BenchmarkSource) -> String {
        if let Some(key) = source.key.as_deref().filter(|key| !key.trim().is_empty()) {
            return key.trim().to_string();
        }
        if self.benchmarks.len() <= 1 {
            return SINGLE_BENCHMARK_KEY.to_string();
        }
        let suffix: String = source
            .name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        format!("{SINGLE_BENCHMARK_KEY}{suffix}")
    }
}

/// Read and validate a catalog manifest.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let catalog: Catalog = toml::from_str(&text).map_err(|e| IngestError::Toml {
        path: path.to_path_buf(),
        source: e,
    })?;
    catalog.validate()?;
    Ok(catalog)
}

fn validate_relative_path(file: &str) -> Result<()> {
    let path = PathBuf::from(file);
    if file.trim().is_empty() {
        return Err(IngestError::InvalidPath {
            path,
            message: "empty file name".to_string(),
        });
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(IngestError::InvalidPath {
                    path,
                    message: "must not escape the data directory".to_string(),
                });
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(IngestError::InvalidPath {
                    path,
                    message: "must be relative to the data directory".to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_matches_bundled_layout() {
        let catalog = Catalog::default();
        catalog.validate().expect("default catalog is valid");
        let names: Vec<&str> = catalog
            .datasets
            .iter()
            .map(|d| d.category.as_str())
            .collect();
        assert_eq!(names, vec!["ChumashNEW", "Navi", "Talmud", "Halacha"]);
        assert_eq!(catalog.datasets[3].shape, RecordShape::Halacha);
        assert_eq!(catalog.benchmark_key(&catalog.benchmarks[0]), "benchmarkCode");
    }

    #[test]
    fn several_benchmark_sets_get_distinct_keys() {
        let mut catalog = Catalog::default();
        catalog.benchmarks = vec![
            BenchmarkSource {
                name: "Hebrew Language".into(),
                file: "hebrew.csv".into(),
                key: None,
            },
            BenchmarkSource {
                name: "Judaic".into(),
                file: "judaic.csv".into(),
                key: None,
            },
        ];
        assert_eq!(
            catalog.benchmark_key(&catalog.benchmarks[0]),
            "benchmarkCodeHebrewLanguage"
        );
        assert_eq!(
            catalog.benchmark_key(&catalog.benchmarks[1]),
            "benchmarkCodeJudaic"
        );
        catalog.validate().expect("distinct keys");
    }

    #[test]
    fn benchmark_keys_cannot_shadow_fixed_export_keys() {
        for reserved in ["grade", "timestamp", "unitAim", "textType"] {
            let mut catalog = Catalog::default();
            catalog.benchmarks[0].key = Some(reserved.to_string());
            assert!(
                matches!(
                    catalog.validate(),
                    Err(IngestError::ReservedBenchmarkKey { ref key }) if key == reserved
                ),
                "{reserved} accepted as a benchmark key"
            );
        }

        let mut catalog = Catalog::default();
        catalog.benchmarks[0].key = Some("benchmarkJudaic".into());
        catalog.validate().expect("custom key");
    }

    #[test]
    fn rejects_duplicates_and_escaping_paths() {
        let mut catalog = Catalog::default();
        catalog.datasets.push(catalog.datasets[0].clone());
        assert!(matches!(
            catalog.validate(),
            Err(IngestError::DuplicateCategory { .. })
        ));

        let mut catalog = Catalog::default();
        catalog.datasets[0].file = "../secret.csv".into();
        assert!(matches!(
            catalog.validate(),
            Err(IngestError::InvalidPath { .. })
        ));

        let mut catalog = Catalog::default();
        catalog.benchmarks[0].file = "/etc/benchmarks.csv".into();
        assert!(matches!(
            catalog.validate(),
            Err(IngestError::InvalidPath { .. })
        ));

        let mut catalog = Catalog::default();
        catalog.catalog.schema_version = 2;
        assert!(matches!(
            catalog.validate(),
            Err(IngestError::InvalidCatalog { .. })
        ));
    }
}
