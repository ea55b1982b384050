//! The user's progress through the selection hierarchy.

use serde::{Deserialize, Serialize};

use crate::level::{HierarchyLevel, PathLevel};

/// Coarse state of a [`SelectionPath`], from nothing chosen to a full range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PathState {
    Empty,
    CategoryChosen,
    BookChosen,
    ChapterChosen,
    StartChosen,
    EndChosen,
}

/// `(category, book, chapter, start, end)`; deeper values are only
/// meaningful while every shallower value is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPath {
    pub category: Option<String>,
    pub book: Option<String>,
    pub chapter: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: PathLevel) -> Option<&str> {
        self.slot(level).as_deref()
    }

    fn slot(&self, level: PathLevel) -> &Option<String> {
        match level {
            PathLevel::Category => &self.category,
            PathLevel::Hierarchy(HierarchyLevel::Book) => &self.book,
            PathLevel::Hierarchy(HierarchyLevel::Chapter) => &self.chapter,
            PathLevel::Hierarchy(HierarchyLevel::Start) => &self.start,
            PathLevel::Hierarchy(HierarchyLevel::End) => &self.end,
        }
    }

    fn slot_mut(&mut self, level: PathLevel) -> &mut Option<String> {
        match level {
            PathLevel::Category => &mut self.category,
            PathLevel::Hierarchy(HierarchyLevel::Book) => &mut self.book,
            PathLevel::Hierarchy(HierarchyLevel::Chapter) => &mut self.chapter,
            PathLevel::Hierarchy(HierarchyLevel::Start) => &mut self.start,
            PathLevel::Hierarchy(HierarchyLevel::End) => &mut self.end,
        }
    }

    /// True when every level above `level` holds a value.
    pub fn prerequisites_met(&self, level: PathLevel) -> bool {
        PathLevel::ALL[..level.index()]
            .iter()
            .all(|parent| self.get(*parent).is_some())
    }

    /// Records `value` at `level` and clears every deeper level.
    pub fn set(&mut self, level: PathLevel, value: impl Into<String>) {
        *self.slot_mut(level) = Some(value.into());
        self.clear_below(level);
    }

    /// Clears `level` and every deeper level.
    pub fn clear_from(&mut self, level: PathLevel) {
        for deeper in &PathLevel::ALL[level.index()..] {
            *self.slot_mut(*deeper) = None;
        }
    }

    /// Clears every level deeper than `level`.
    pub fn clear_below(&mut self, level: PathLevel) {
        for deeper in &PathLevel::ALL[level.index() + 1..] {
            *self.slot_mut(*deeper) = None;
        }
    }

    /// Values chosen for the hierarchy levels above `level`, in order, or
    /// `None` while any of them is missing.
    pub fn prior_for(&self, level: HierarchyLevel) -> Option<Vec<&str>> {
        level
            .prerequisites()
            .iter()
            .map(|parent| self.get(PathLevel::Hierarchy(*parent)))
            .collect()
    }

    pub fn state(&self) -> PathState {
        let depth = PathLevel::ALL
            .iter()
            .take_while(|level| self.get(**level).is_some())
            .count();
        match depth {
            0 => PathState::Empty,
            1 => PathState::CategoryChosen,
            2 => PathState::BookChosen,
            3 => PathState::ChapterChosen,
            4 => PathState::StartChosen,
            _ => PathState::EndChosen,
        }
    }
}
