//! Unit plan export.
//!
//! Flattens a [`UnitDraft`](unitplan_model::UnitDraft) into a JSON object
//! with a fixed key order and writes it under a name derived from the
//! selection path.

pub mod error;
pub mod export;
pub mod filename;

pub use error::{OutputError, Result};
pub use export::{
    ExportedUnit, UnitExport, export_json_at, export_json_now, format_timestamp, write_export,
    write_export_at,
};
pub use filename::{FALLBACK_STEM, suggested_filename};
