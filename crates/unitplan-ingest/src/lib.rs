#![deny(unsafe_code)]

pub mod catalog;
pub mod csv_rows;
pub mod error;
pub mod loader;
pub mod paths;

pub use catalog::{
    BenchmarkSource, CATALOG_FILE_NAME, CATALOG_SCHEMA, CATALOG_SCHEMA_VERSION, Catalog,
    CatalogHeader, DatasetSource, load_catalog,
};
pub use csv_rows::{CsvRows, parse_csv_text, read_csv_rows};
pub use error::{IngestError, Result};
pub use loader::{LoadReport, SourceFailure, SourceKind, SourceSummary, load_record_store};
pub use paths::{DATA_DIR_ENV_VAR, default_data_dir, resolve_data_dir};
