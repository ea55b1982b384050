//! The selection path state machine.
//!
//! A [`PlanningSession`] is the single writer of a selection path. Every
//! level change runs to completion (record, clear deeper levels, recompute
//! the next option list) before the next one can start.

use std::sync::Arc;

use tracing::debug;

use unitplan_model::{
    BenchmarkChoice, BenchmarkRecord, FreeTextField, HierarchyLevel, PathLevel, PathState,
    RecordStore, SelectionPath, UnitDraft,
};

use crate::filter::{category_options, unique_learning_goal};

/// What a level change did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The value was recorded and deeper levels were reset.
    Applied {
        /// The unit aim was overwritten with a uniquely matched learning goal.
        goal_filled: bool,
    },
    /// The level and everything below it were cleared.
    Cleared,
    /// A shallower level is still unset, so nothing changed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct PlanningSession {
    store: Arc<RecordStore>,
    draft: UnitDraft,
    /// Displayed options for book, chapter, start and end.
    options: [Vec<String>; 4],
}

impl PlanningSession {
    pub fn new(store: Arc<RecordStore>) -> Self {
        let benchmarks = store
            .benchmark_sets()
            .iter()
            .map(|set| BenchmarkChoice {
                key: set.key.clone(),
                code: String::new(),
            })
            .collect();
        Self {
            store,
            draft: UnitDraft {
                benchmarks,
                ..UnitDraft::default()
            },
            options: Default::default(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn path(&self) -> &SelectionPath {
        &self.draft.path
    }

    pub fn state(&self) -> PathState {
        self.draft.path.state()
    }

    /// Options currently offered for `level`.
    pub fn options(&self, level: HierarchyLevel) -> &[String] {
        &self.options[slot(level)]
    }

    /// Apply a "level changed" event. An empty value is the blank choice
    /// and clears the level.
    pub fn select(&mut self, level: PathLevel, value: &str) -> Transition {
        if value.is_empty() {
            self.clear(level);
            return Transition::Cleared;
        }
        if !self.draft.path.prerequisites_met(level) {
            debug!(%level, value, "ignoring selection, parent level unset");
            return Transition::Ignored;
        }

        self.draft.path.set(level, value);
        self.reset_options_below(level);
        if let Some(next) = level.unlocks() {
            self.options[slot(next)] = self.compute_options(next);
        }

        let mut goal_filled = false;
        if level == PathLevel::Hierarchy(HierarchyLevel::Start)
            && let Some(goal) = self.unique_goal()
        {
            self.draft.unit_aim = goal;
            goal_filled = true;
        }
        debug!(
            %level,
            value,
            next_options = level.unlocks().map_or(0, |next| self.options(next).len()),
            goal_filled,
            "selection applied"
        );
        Transition::Applied { goal_filled }
    }

    /// Clear `level` and every deeper level together with their options.
    pub fn clear(&mut self, level: PathLevel) {
        self.draft.path.clear_from(level);
        self.reset_options_below(level);
        debug!(%level, "selection cleared");
    }

    pub fn select_category(&mut self, value: &str) -> Transition {
        self.select(PathLevel::Category, value)
    }

    pub fn select_book(&mut self, value: &str) -> Transition {
        self.select(HierarchyLevel::Book.into(), value)
    }

    pub fn select_chapter(&mut self, value: &str) -> Transition {
        self.select(HierarchyLevel::Chapter.into(), value)
    }

    pub fn select_start(&mut self, value: &str) -> Transition {
        self.select(HierarchyLevel::Start.into(), value)
    }

    pub fn select_end(&mut self, value: &str) -> Transition {
        self.select(HierarchyLevel::End.into(), value)
    }

    pub fn set_free_text(&mut self, field: FreeTextField, value: impl Into<String>) {
        self.draft.set_free_text(field, value);
    }

    pub fn set_grade(&mut self, value: impl Into<String>) {
        self.draft.grade = value.into();
    }

    /// Record a benchmark code for the set exported under `key`. Returns
    /// false when no such set was loaded.
    pub fn set_benchmark(&mut self, key: &str, code: impl Into<String>) -> bool {
        match self.draft.benchmarks.iter_mut().find(|choice| choice.key == key) {
            Some(choice) => {
                choice.code = code.into();
                true
            }
            None => false,
        }
    }

    /// Benchmarks offered for the set exported under `key`.
    pub fn benchmark_options(&self, key: &str) -> &[BenchmarkRecord] {
        self.store
            .benchmark_set(key)
            .map(|set| set.records.as_slice())
            .unwrap_or_default()
    }

    pub fn draft(&self) -> &UnitDraft {
        &self.draft
    }

    pub fn into_draft(self) -> UnitDraft {
        self.draft
    }

    fn compute_options(&self, level: HierarchyLevel) -> Vec<String> {
        let path = &self.draft.path;
        let (Some(category), Some(prior)) = (path.category.as_deref(), path.prior_for(level))
        else {
            return Vec::new();
        };
        category_options(&self.store, category, level, &prior)
    }

    fn unique_goal(&self) -> Option<String> {
        let path = &self.draft.path;
        let dataset = self.store.dataset(path.category.as_deref()?)?;
        let prior = path.prior_for(HierarchyLevel::End)?;
        unique_learning_goal(dataset, &prior)
    }

    /// Drop every option list that depends on `level` or anything below it.
    fn reset_options_below(&mut self, level: PathLevel) {
        for hierarchy in HierarchyLevel::ALL {
            if hierarchy.depth() > level.index() {
                self.options[slot(hierarchy)].clear();
            }
        }
    }
}

fn slot(level: HierarchyLevel) -> usize {
    level.depth() - 1
}
