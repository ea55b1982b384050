//! Shared data model for the curriculum unit planner.
//!
//! Records come in three shapes (text family, halacha family, benchmark).
//! Hierarchy datasets are tagged by shape once at load time so that the
//! filter engine never has to guess which fields a row carries.

pub mod dataset;
pub mod draft;
pub mod error;
pub mod level;
pub mod record;
pub mod selection;
pub mod store;

pub use dataset::{BenchmarkSet, Category, Dataset, RecordShape};
pub use draft::{
    BenchmarkChoice, FreeTextField, GRADE_KEY, TIMESTAMP_KEY, UnitDraft, is_reserved_export_key,
};
pub use error::{ModelError, Result};
pub use level::{HierarchyLevel, PathLevel, SortOrder};
pub use record::{BenchmarkRecord, HalachaRecord, HierarchyRecord, RawRow, TextRecord};
pub use selection::{PathState, SelectionPath};
pub use store::RecordStore;
