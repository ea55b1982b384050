//! Data directory resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable for overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "UNITPLAN_DATA_DIR";

const FALLBACK_DATA_DIR: &str = "data";

/// Get the default data directory.
///
/// Resolution order:
/// 1. `UNITPLAN_DATA_DIR` environment variable
/// 2. `data/` relative to the working directory
pub fn default_data_dir() -> PathBuf {
    choose_data_dir(None, std::env::var_os(DATA_DIR_ENV_VAR))
}

/// An explicit directory (e.g. from `--data-dir`) wins over the defaults.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    choose_data_dir(explicit, std::env::var_os(DATA_DIR_ENV_VAR))
}

fn choose_data_dir(explicit: Option<&Path>, from_env: Option<OsString>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match from_env {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(FALLBACK_DATA_DIR),
    }
}
