//! Cascading selection behaviour over small in-memory stores.

use std::sync::Arc;

use unitplan_core::{PlanningSession, Transition, category_options, options_for_level};
use unitplan_model::{
    BenchmarkRecord, BenchmarkSet, Category, Dataset, FreeTextField, HalachaRecord,
    HierarchyLevel, PathLevel, PathState, RecordShape, RecordStore, TextRecord,
};

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

fn store() -> Arc<RecordStore> {
    Arc::new(RecordStore::new(
        vec![
            Category {
                name: "ChumashNEW".into(),
                dataset: Dataset::Text(vec![
                    text("Genesis", "1", "1", "5", "G1"),
                    text("Genesis", "1", "6", "10", "G2"),
                    text("Genesis", "12", "1", "9", "Lech Lecha"),
                    text("Exodus", "3", "1", "12", "Burning bush"),
                ]),
            },
            Category {
                name: "Halacha".into(),
                dataset: Dataset::Halacha(vec![
                    halacha("Shabbat", "Melachot", "Borer"),
                    halacha("Shabbat", "Kiddush", "Wine"),
                ]),
            },
            Category {
                name: "Talmud".into(),
                dataset: Dataset::empty(RecordShape::Text),
            },
        ],
        vec![BenchmarkSet {
            name: "Judaic".into(),
            key: "benchmarkCode".into(),
            records: vec![BenchmarkRecord {
                code: "J.1".into(),
                description: "Reads text".into(),
            }],
        }],
    ))
}

#[test]
fn genesis_scenario_fills_aim_from_unique_match() {
    let mut session = PlanningSession::new(store());
    session.select_category("ChumashNEW");
    assert_eq!(session.options(HierarchyLevel::Book), ["Exodus", "Genesis"]);

    session.select_book("Genesis");
    assert_eq!(session.options(HierarchyLevel::Chapter), ["1", "12"]);

    session.select_chapter("1");
    assert_eq!(session.options(HierarchyLevel::Start), ["1", "6"]);

    let transition = session.select_start("1");
    assert_eq!(transition, Transition::Applied { goal_filled: true });
    assert_eq!(session.options(HierarchyLevel::End), ["5"]);
    assert_eq!(session.draft().unit_aim, "G1");
    assert_eq!(session.state(), PathState::StartChosen);
}

#[test]
fn halacha_scenario_never_fills_aim() {
    let mut session = PlanningSession::new(store());
    session.set_free_text(FreeTextField::Aim, "my own aim");
    session.select_category("Halacha");
    session.select_book("Shabbat");
    assert_eq!(
        session.options(HierarchyLevel::Chapter),
        ["Kiddush", "Melachot"]
    );

    session.select_chapter("Kiddush");
    assert_eq!(session.options(HierarchyLevel::Start), ["Wine"]);
    assert_eq!(
        session.select_start("Wine"),
        Transition::Applied { goal_filled: false }
    );
    assert_eq!(session.options(HierarchyLevel::End), ["Wine"]);
    assert_eq!(session.draft().unit_aim, "my own aim");
}

#[test]
fn empty_and_unknown_categories_have_no_books() {
    let mut session = PlanningSession::new(store());
    assert_eq!(
        session.select_category("Talmud"),
        Transition::Applied { goal_filled: false }
    );
    assert!(session.options(HierarchyLevel::Book).is_empty());

    session.select_category("Mishnah");
    assert!(session.options(HierarchyLevel::Book).is_empty());
    assert!(category_options(&store(), "Mishnah", HierarchyLevel::Chapter, &["x"]).is_empty());
}

#[test]
fn changing_a_level_discards_stale_options() {
    let mut session = PlanningSession::new(store());
    session.select_category("ChumashNEW");
    session.select_book("Genesis");
    session.select_chapter("1");
    session.select_start("6");
    session.select_end("10");
    assert_eq!(session.state(), PathState::EndChosen);

    session.select_book("Exodus");
    assert_eq!(session.state(), PathState::BookChosen);
    assert_eq!(session.path().chapter, None);
    assert_eq!(session.path().start, None);
    assert_eq!(session.path().end, None);
    assert_eq!(session.options(HierarchyLevel::Chapter), ["3"]);
    assert!(session.options(HierarchyLevel::Start).is_empty());
    assert!(session.options(HierarchyLevel::End).is_empty());
}

#[test]
fn clearing_category_resets_everything() {
    let mut session = PlanningSession::new(store());
    session.select_category("ChumashNEW");
    session.select_book("Genesis");
    session.select_chapter("12");
    session.clear(PathLevel::Category);
    assert_eq!(session.state(), PathState::Empty);
    for level in HierarchyLevel::ALL {
        assert!(session.options(level).is_empty(), "{level} options remain");
    }
}

#[test]
fn benchmark_choices_follow_loaded_sets() {
    let mut session = PlanningSession::new(store());
    assert_eq!(session.draft().benchmark("benchmarkCode"), Some(""));
    assert!(session.set_benchmark("benchmarkCode", "J.1"));
    assert!(!session.set_benchmark("benchmarkCodeHebrew", "H.1"));
    assert_eq!(session.draft().benchmark("benchmarkCode"), Some("J.1"));
    assert_eq!(session.benchmark_options("benchmarkCode").len(), 1);
    assert!(session.benchmark_options("missing").is_empty());
}

#[test]
fn direct_filter_matches_session_options() {
    let store = store();
    let dataset = store.dataset("ChumashNEW").expect("dataset");
    let mut session = PlanningSession::new(Arc::clone(&store));
    session.select_category("ChumashNEW");
    session.select_book("Genesis");
    assert_eq!(
        session.options(HierarchyLevel::Chapter),
        options_for_level(dataset, HierarchyLevel::Chapter, &["Genesis"]).as_slice()
    );
}
