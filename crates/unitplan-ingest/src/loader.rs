//! Record Store assembly.
//!
//! Every source is read on its own scoped thread and the store is built
//! only after all of them have been joined. A source that fails leaves its
//! dataset (or benchmark set) empty; it never stops the others.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use tracing::{info, info_span, warn};

use unitplan_model::{
    BenchmarkRecord, BenchmarkSet, Category, Dataset, HalachaRecord, RecordShape, RecordStore,
    TextRecord,
};

use crate::catalog::{BenchmarkSource, Catalog, DatasetSource};
use crate::csv_rows::{CsvRows, read_csv_rows};
use crate::error::IngestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Dataset(RecordShape),
    Benchmark,
}

/// Outcome of loading one source file.
#[derive(Debug, Clone)]
pub struct SourceSummary {
    pub name: String,
    pub kind: SourceKind,
    pub path: PathBuf,
    pub records: usize,
    /// Expected fields with no matching header in the file.
    pub missing_headers: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SourceFailure {
    pub name: String,
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub store: RecordStore,
    pub sources: Vec<SourceSummary>,
    pub failures: Vec<SourceFailure>,
}

impl LoadReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

struct Loaded<T> {
    value: T,
    summary: SourceSummary,
    failure: Option<SourceFailure>,
}

/// Load every source named by `catalog` from `data_dir`.
pub fn load_record_store(data_dir: &Path, catalog: &Catalog) -> LoadReport {
    let span = info_span!("load", data_dir = %data_dir.display());
    let _guard = span.enter();
    let started = Instant::now();

    let (datasets, benchmarks) = thread::scope(|scope| {
        let dataset_handles: Vec<_> = catalog
            .datasets
            .iter()
            .map(|source| (source, scope.spawn(move || load_dataset(data_dir, source))))
            .collect();
        let benchmark_handles: Vec<_> = catalog
            .benchmarks
            .iter()
            .map(|source| {
                let key = catalog.benchmark_key(source);
                (
                    source,
                    scope.spawn(move || load_benchmarks(data_dir, source, key)),
                )
            })
            .collect();

        let datasets: Vec<Loaded<Category>> = dataset_handles
            .into_iter()
            .map(|(source, handle)| {
                handle
                    .join()
                    .unwrap_or_else(|_| panicked_dataset(data_dir, source))
            })
            .collect();
        let benchmarks: Vec<Loaded<BenchmarkSet>> = benchmark_handles
            .into_iter()
            .map(|(source, handle)| {
                let key = catalog.benchmark_key(source);
                handle
                    .join()
                    .unwrap_or_else(|_| panicked_benchmarks(data_dir, source, key))
            })
            .collect();
        (datasets, benchmarks)
    });

    let mut sources = Vec::new();
    let mut failures = Vec::new();
    let mut categories = Vec::new();
    let mut sets = Vec::new();
    for loaded in datasets {
        categories.push(loaded.value);
        sources.push(loaded.summary);
        failures.extend(loaded.failure);
    }
    for loaded in benchmarks {
        sets.push(loaded.value);
        sources.push(loaded.summary);
        failures.extend(loaded.failure);
    }

    info!(
        categories = categories.len(),
        benchmark_sets = sets.len(),
        failures = failures.len(),
        duration_ms = started.elapsed().as_millis(),
        "record store loaded"
    );

    LoadReport {
        store: RecordStore::new(categories, sets),
        sources,
        failures,
    }
}

fn load_dataset(data_dir: &Path, source: &DatasetSource) -> Loaded<Category> {
    let path = data_dir.join(&source.file);
    let shape = source.shape;
    let fields = match shape {
        RecordShape::Text => TextRecord::FIELDS,
        RecordShape::Halacha => HalachaRecord::FIELDS,
    };
    let (dataset, missing_headers, failure) = match read_csv_rows(&path) {
        Ok(rows) => {
            let missing = find_missing_headers(&rows, fields);
            let dataset = match shape {
                RecordShape::Text => {
                    Dataset::Text(rows.rows.iter().map(TextRecord::from_row).collect())
                }
                RecordShape::Halacha => {
                    Dataset::Halacha(rows.rows.iter().map(HalachaRecord::from_row).collect())
                }
            };
            (dataset, missing, None)
        }
        Err(error) => (
            Dataset::empty(shape),
            Vec::new(),
            Some(source_failure(&source.category, &path, &error)),
        ),
    };
    let summary = summarize(
        &source.category,
        SourceKind::Dataset(shape),
        &path,
        dataset.len(),
        missing_headers,
        failure.is_none(),
    );
    Loaded {
        value: Category {
            name: source.category.clone(),
            dataset,
        },
        summary,
        failure,
    }
}

fn load_benchmarks(
    data_dir: &Path,
    source: &BenchmarkSource,
    key: String,
) -> Loaded<BenchmarkSet> {
    let path = data_dir.join(&source.file);
    let (records, missing_headers, failure) = match read_csv_rows(&path) {
        Ok(rows) => {
            let missing = find_missing_headers(&rows, BenchmarkRecord::FIELDS);
            let records: Vec<BenchmarkRecord> =
                rows.rows.iter().filter_map(BenchmarkRecord::from_row).collect();
            (records, missing, None)
        }
        Err(error) => (
            Vec::new(),
            Vec::new(),
            Some(source_failure(&source.name, &path, &error)),
        ),
    };
    let summary = summarize(
        &source.name,
        SourceKind::Benchmark,
        &path,
        records.len(),
        missing_headers,
        failure.is_none(),
    );
    Loaded {
        value: BenchmarkSet {
            name: source.name.clone(),
            key,
            records,
        },
        summary,
        failure,
    }
}

/// Canonical name of every field group with no header present in `rows`.
fn find_missing_headers(rows: &CsvRows, fields: &[&[&str]]) -> Vec<String> {
    fields
        .iter()
        .filter(|aliases| !aliases.iter().any(|alias| rows.has_header(alias)))
        .filter_map(|aliases| aliases.first())
        .map(|name| (*name).to_string())
        .collect()
}

fn summarize(
    name: &str,
    kind: SourceKind,
    path: &Path,
    records: usize,
    missing_headers: Vec<String>,
    loaded: bool,
) -> SourceSummary {
    if loaded {
        info!(source = %name, path = %path.display(), records, "source loaded");
        if !missing_headers.is_empty() {
            warn!(
                source = %name,
                missing = %missing_headers.join(", "),
                "source is missing expected columns; their values will be empty"
            );
        }
    }
    SourceSummary {
        name: name.to_string(),
        kind,
        path: path.to_path_buf(),
        records,
        missing_headers,
    }
}

fn source_failure(name: &str, path: &Path, error: &IngestError) -> SourceFailure {
    warn!(source = %name, %error, "source unavailable, leaving it empty");
    SourceFailure {
        name: name.to_string(),
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

fn panicked_dataset(data_dir: &Path, source: &DatasetSource) -> Loaded<Category> {
    let path = data_dir.join(&source.file);
    warn!(source = %source.category, "loader thread panicked, leaving source empty");
    Loaded {
        value: Category {
            name: source.category.clone(),
            dataset: Dataset::empty(source.shape),
        },
        summary: summarize(
            &source.category,
            SourceKind::Dataset(source.shape),
            &path,
            0,
            Vec::new(),
            false,
        ),
        failure: Some(SourceFailure {
            name: source.category.clone(),
            path,
            message: "loader thread panicked".to_string(),
        }),
    }
}

fn panicked_benchmarks(
    data_dir: &Path,
    source: &BenchmarkSource,
    key: String,
) -> Loaded<BenchmarkSet> {
    let path = data_dir.join(&source.file);
    warn!(source = %source.name, "loader thread panicked, leaving source empty");
    Loaded {
        value: BenchmarkSet {
            name: source.name.clone(),
            key,
            records: Vec::new(),
        },
        summary: summarize(
            &source.name,
            SourceKind::Benchmark,
            &path,
            0,
            Vec::new(),
            false,
        ),
        failure: Some(SourceFailure {
            name: source.name.clone(),
            path,
            message: "loader thread panicked".to_string(),
        }),
    }
}
