//! Option lists for each hierarchy level.
//!
//! All functions here are pure: they take the dataset and the values chosen
//! above the requested level and return a fresh, deduplicated, sorted list.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::trace;

use unitplan_model::{Dataset, HierarchyLevel, HierarchyRecord, RecordStore, SortOrder};

/// Legal values for `level` given the values chosen above it.
///
/// `prior` lists the book, chapter and start values in that order; only the
/// first `level.depth() - 1` entries are read. Returns an empty list while
/// any of those is missing or empty.
pub fn options_for_level(
    dataset: &Dataset,
    level: HierarchyLevel,
    prior: &[&str],
) -> Vec<String> {
    match dataset {
        Dataset::Text(records) => options_in(records, level, prior),
        Dataset::Halacha(records) => options_in(records, level, prior),
    }
}

/// [`options_for_level`] over a slice of one record shape.
pub fn options_in<R: HierarchyRecord>(
    records: &[R],
    level: HierarchyLevel,
    prior: &[&str],
) -> Vec<String> {
    let Some(prior) = required_prior(level, prior) else {
        return Vec::new();
    };
    let distinct: BTreeSet<&str> = matching(records, prior)
        .map(|record| record.level_value(level))
        .filter(|value| !value.is_empty())
        .collect();
    let mut values: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    let order = R::sort_order(level);
    if order != SortOrder::Lexicographic {
        values.sort_by(|a, b| compare_values(order, a, b));
    }
    trace!(%level, count = values.len(), "options computed");
    values
}

/// Options for `category` in `store`; unknown categories have none.
pub fn category_options(
    store: &RecordStore,
    category: &str,
    level: HierarchyLevel,
    prior: &[&str],
) -> Vec<String> {
    store
        .dataset(category)
        .map(|dataset| options_for_level(dataset, level, prior))
        .unwrap_or_default()
}

/// The learning goal of the single record matching book, chapter and start.
///
/// `None` when zero or several records match, when a prior value is
/// missing, or for shapes without a learning goal.
pub fn unique_learning_goal(dataset: &Dataset, prior: &[&str]) -> Option<String> {
    match dataset {
        Dataset::Text(records) => unique_goal_in(records, prior),
        Dataset::Halacha(records) => unique_goal_in(records, prior),
    }
}

fn unique_goal_in<R: HierarchyRecord>(records: &[R], prior: &[&str]) -> Option<String> {
    let prior = required_prior(HierarchyLevel::End, prior)?;
    let mut found = matching(records, prior);
    let record = found.next()?;
    if found.next().is_some() {
        return None;
    }
    record.learning_goal().map(str::to_string)
}

/// Ordering used for option lists.
///
/// Numeric order compares parsed values; anything that is not a finite
/// number sorts after every number. Equal keys fall back to byte order so
/// the result is total.
pub fn compare_values(order: SortOrder, a: &str, b: &str) -> Ordering {
    match order {
        SortOrder::Lexicographic => a.cmp(b),
        SortOrder::Numeric => match (numeric_key(a), numeric_key(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        },
    }
}

fn numeric_key(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn required_prior<'a, 'b>(level: HierarchyLevel, prior: &'a [&'b str]) -> Option<&'a [&'b str]> {
    let needed = level.depth() - 1;
    let prior = prior.get(..needed)?;
    if prior.iter().any(|value| value.is_empty()) {
        return None;
    }
    Some(prior)
}

fn matching<'r, R: HierarchyRecord>(
    records: &'r [R],
    prior: &'r [&'r str],
) -> impl Iterator<Item = &'r R> + 'r {
    records.iter().filter(move |record| {
        HierarchyLevel::ALL
            .iter()
            .zip(prior)
            .all(|(level, value)| record.level_value(*level) == *value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitplan_model::{HalachaRecord, TextRecord};

    fn text(subject: &str, chapter: &str, start: &str, end: &str, goal: &str) -> TextRecord {
        TextRecord {
            subject: subject.into(),
            key_chapter: chapter.into(),
            start_verse: start.into(),
            end_verse: end.into(),
            learning_goal: goal.into(),
        }
    }

    fn halacha(allocation: &str, unit: &str, theme: &str) -> HalachaRecord {
        HalachaRecord {
            content_allocation: allocation.into(),
            key_source_unit: unit.into(),
            key_concept_theme: theme.into(),
        }
    }

    fn genesis() -> Dataset {
        Dataset::Text(vec![
            text("Genesis", "1", "1", "5", "G1"),
            text("Genesis", "1", "6", "10", "G2"),
        ])
    }

    #[test]
    fn genesis_start_and_end_options() {
        let dataset = genesis();
        assert_eq!(
            options_for_level(&dataset, HierarchyLevel::Start, &["Genesis", "1"]),
            vec!["1", "6"]
        );
        assert_eq!(
            options_for_level(&dataset, HierarchyLevel::End, &["Genesis", "1", "1"]),
            vec!["5"]
        );
        assert_eq!(
            unique_learning_goal(&dataset, &["Genesis", "1", "1"]),
            Some("G1".to_string())
        );
    }

    #[test]
    fn numeric_fields_sort_by_value() {
        let dataset = Dataset::Text(vec![
            text("Exodus", "10", "1", "3", ""),
            text("Exodus", "2", "1", "3", ""),
            text("Exodus", "1", "1", "3", ""),
            text("Exodus", "2", "1", "3", ""),
        ]);
        assert_eq!(
            options_for_level(&dataset, HierarchyLevel::Chapter, &["Exodus"]),
            vec!["1", "2", "10"]
        );
    }

    #[test]
    fn non_numeric_values_sort_after_numbers() {
        let mut values = vec!["intro", "10", "2", "Appendix", "02", "1.5"];
        values.sort_by(|a, b| compare_values(SortOrder::Numeric, a, b));
        assert_eq!(values, vec!["1.5", "02", "2", "10", "Appendix", "intro"]);
    }

    #[test]
    fn books_are_lexicographic_and_skip_empty_values() {
        let dataset = Dataset::Text(vec![
            text("Numbers", "1", "1", "2", ""),
            text("", "1", "1", "2", ""),
            text("Exodus", "1", "1", "2", ""),
            text("Numbers", "2", "1", "2", ""),
        ]);
        assert_eq!(
            options_for_level(&dataset, HierarchyLevel::Book, &[]),
            vec!["Exodus", "Numbers"]
        );
    }

    #[test]
    fn missing_prior_selection_yields_nothing() {
        let dataset = genesis();
        assert!(options_for_level(&dataset, HierarchyLevel::Chapter, &[]).is_empty());
        assert!(
            options_for_level(&dataset, HierarchyLevel::End, &["Genesis", "", "1"]).is_empty()
        );
        assert_eq!(unique_learning_goal(&dataset, &["Genesis", "1"]), None);
    }

    #[test]
    fn unmatched_prior_selection_yields_nothing() {
        let dataset = genesis();
        assert!(options_for_level(&dataset, HierarchyLevel::Chapter, &["Leviticus"]).is_empty());
        assert!(options_for_level(&dataset, HierarchyLevel::Chapter, &["genesis"]).is_empty());
    }

    #[test]
    fn several_matches_do_not_expose_a_goal() {
        let dataset = Dataset::Text(vec![
            text("Genesis", "1", "1", "5", "G1"),
            text("Genesis", "1", "1", "8", "G3"),
        ]);
        assert_eq!(
            options_for_level(&dataset, HierarchyLevel::End, &["Genesis", "1", "1"]),
            vec!["5", "8"]
        );
        assert_eq!(unique_learning_goal(&dataset, &["Genesis", "1", "1"]), None);
    }

    #[test]
    fn halacha_levels_are_lexicographic_and_never_expose_a_goal() {
        let dataset = Dataset::Halacha(vec![
            halacha("Shabbat", "Melachot", "Borer"),
            halacha("Shabbat", "Kiddush", "Wine"),
            halacha("Kashrut", "Basar BeChalav", "Waiting"),
        ]);
        assert_eq!(
            options_for_level(&dataset, HierarchyLevel::Chapter, &["Shabbat"]),
            vec!["Kiddush", "Melachot"]
        );
        assert_eq!(
            options_for_level(&dataset, HierarchyLevel::End, &["Shabbat", "Kiddush", "Wine"]),
            vec!["Wine"]
        );
        assert_eq!(
            unique_learning_goal(&dataset, &["Shabbat", "Kiddush", "Wine"]),
            None
        );
    }

    #[test]
    fn unknown_category_is_permissive() {
        let store = RecordStore::default();
        assert!(category_options(&store, "Mishnah", HierarchyLevel::Book, &[]).is_empty());
    }
}
