use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("duplicate category in catalog: {name}")]
    DuplicateCategory { name: String },

    #[error("duplicate benchmark key in catalog: {key}")]
    DuplicateBenchmarkKey { key: String },

    #[error("benchmark key {key} collides with a fixed export key")]
    ReservedBenchmarkKey { key: String },

    #[error("invalid catalog path {path}: {message}")]
    InvalidPath { path: PathBuf, message: String },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
