//! Replays command-line selections through a planning session.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use unitplan_core::{PlanningSession, Transition};
use unitplan_ingest::{Catalog, LoadReport, load_record_store};
use unitplan_model::{BenchmarkRecord, FreeTextField, HierarchyLevel, PathLevel, RecordStore};

/// Values for each selection level, shallowest first.
#[derive(Debug, Clone, Default)]
pub struct SelectionRequest {
    pub category: Option<String>,
    pub book: Option<String>,
    pub chapter: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl SelectionRequest {
    fn levels(&self) -> [(PathLevel, Option<&str>); 5] {
        [
            (PathLevel::Category, self.category.as_deref()),
            (HierarchyLevel::Book.into(), self.book.as_deref()),
            (HierarchyLevel::Chapter.into(), self.chapter.as_deref()),
            (HierarchyLevel::Start.into(), self.start.as_deref()),
            (HierarchyLevel::End.into(), self.end.as_deref()),
        ]
    }
}

/// Something worth telling the user about a replayed selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionNote {
    /// The value was recorded although it is not among the computed options.
    NotOffered {
        level: PathLevel,
        value: String,
        options: Vec<String>,
    },
    /// The value was dropped because a shallower level is unset.
    Ignored { level: PathLevel, value: String },
    /// The unit aim was filled from a uniquely matched learning goal.
    GoalFilled { goal: String },
    /// No benchmark set is exported under this key.
    UnknownBenchmark { key: String },
}

/// Load the catalog and every source under `data_dir`.
pub fn load_store(data_dir: &Path) -> Result<LoadReport> {
    let catalog = Catalog::resolve(data_dir)
        .with_context(|| format!("load catalog from {}", data_dir.display()))?;
    Ok(load_record_store(data_dir, &catalog))
}

/// Feed each requested value into a fresh session, in level order.
pub fn replay_selections(
    store: Arc<RecordStore>,
    request: &SelectionRequest,
) -> (PlanningSession, Vec<SelectionNote>) {
    let mut session = PlanningSession::new(store);
    let mut notes = Vec::new();

    for (level, value) in request.levels() {
        let Some(value) = value else {
            continue;
        };
        let offered = offered_values(&session, level);
        if !value.is_empty() && !offered.iter().any(|option| option == value) {
            warn!(%level, value, "value is not among the available options");
            notes.push(SelectionNote::NotOffered {
                level,
                value: value.to_string(),
                options: offered,
            });
        }
        match session.select(level, value) {
            Transition::Applied { goal_filled: true } => {
                let goal = session.draft().unit_aim.clone();
                info!(goal = %goal, "unit aim filled from learning goal");
                notes.push(SelectionNote::GoalFilled { goal });
            }
            Transition::Ignored => {
                warn!(%level, value, "selection ignored, parent level unset");
                notes.push(SelectionNote::Ignored {
                    level,
                    value: value.to_string(),
                });
            }
            Transition::Applied { goal_filled: false } | Transition::Cleared => {}
        }
    }
    (session, notes)
}

/// Apply explicit free-text values; a `None` leaves the field untouched.
pub fn apply_free_text(
    session: &mut PlanningSession,
    values: impl IntoIterator<Item = (FreeTextField, Option<String>)>,
) {
    for (field, value) in values {
        if let Some(value) = value {
            session.set_free_text(field, value);
        }
    }
}

/// Apply `KEY=CODE` benchmark choices.
pub fn apply_benchmarks(
    session: &mut PlanningSession,
    choices: &[(String, String)],
) -> Vec<SelectionNote> {
    let mut notes = Vec::new();
    for (key, code) in choices {
        if !session.set_benchmark(key, code.clone()) {
            warn!(key = %key, "no benchmark set exported under this key");
            notes.push(SelectionNote::UnknownBenchmark { key: key.clone() });
        }
    }
    notes
}

/// Display label of each benchmark choice, keyed by export key. Codes not
/// found in their set are shown as given.
pub fn chosen_benchmark_labels(session: &PlanningSession) -> Vec<(String, String)> {
    session
        .draft()
        .benchmarks
        .iter()
        .map(|choice| {
            let label = session
                .store()
                .benchmark_set(&choice.key)
                .and_then(|set| set.find(&choice.code))
                .map_or_else(|| choice.code.clone(), BenchmarkRecord::label);
            (choice.key.clone(), label)
        })
        .collect()
}

/// Parse a `KEY=CODE` argument; a bare `CODE` targets `benchmarkCode`.
pub fn parse_benchmark_arg(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, code)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), code.trim().to_string()))
        }
        Some(_) => Err(format!("missing benchmark key in `{raw}`")),
        None => Ok(("benchmarkCode".to_string(), raw.trim().to_string())),
    }
}

fn offered_values(session: &PlanningSession, level: PathLevel) -> Vec<String> {
    match level {
        PathLevel::Category => session
            .store()
            .category_names()
            .map(str::to_string)
            .collect(),
        PathLevel::Hierarchy(hierarchy) => session.options(hierarchy).to_vec(),
    }
}
