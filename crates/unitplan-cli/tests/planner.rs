//! Integration tests for selection replay.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use unitplan_cli::planner::{
    SelectionNote, SelectionRequest, apply_benchmarks, apply_free_text, chosen_benchmark_labels,
    load_store, replay_selections,
};
use unitplan_model::{FreeTextField, HierarchyLevel, PathLevel, PathState};

fn write_fixture(dir: &Path) {
    fs::write(
        dir.join("ChumashNEW.csv"),
        "Subject,Key Chapter,StartVerse,EndVerse,Posnack Learning Goals (TBD)\n\
         Genesis,1,1,5,G1\n\
         Genesis,1,6,10,G2\n",
    )
    .expect("write chumash");
    fs::write(
        dir.join("Navi.csv"),
        "Subject,Key Chapter,StartVerse,EndVerse,Posnack Learning Goals (TBD)\n\
         Kings,3,1,15,Solomon asks for wisdom\n",
    )
    .expect("write navi");
    fs::write(
        dir.join("BenchmarksJUDAICCURRICULUM.csv"),
        "Code,Benchmark\nJ.1,Reads text\n",
    )
    .expect("write benchmarks");
}

fn request(category: &str, book: &str, chapter: &str, start: Option<&str>) -> SelectionRequest {
    SelectionRequest {
        category: Some(category.into()),
        book: Some(book.into()),
        chapter: Some(chapter.into()),
        start: start.map(str::to_string),
        end: None,
    }
}

#[test]
fn replay_fills_aim_and_reports_missing_sources() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path());
    let report = load_store(dir.path()).expect("load store");
    let failed: Vec<&str> = report.failures.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(failed, vec!["Talmud", "Halacha"]);

    let (session, notes) = replay_selections(
        Arc::new(report.store),
        &request("ChumashNEW", "Genesis", "1", Some("1")),
    );
    assert_eq!(
        notes,
        vec![SelectionNote::GoalFilled { goal: "G1".into() }]
    );
    assert_eq!(session.state(), PathState::StartChosen);
    assert_eq!(session.options(HierarchyLevel::End), ["5"]);
}

#[test]
fn unavailable_values_are_kept_but_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path());
    let report = load_store(dir.path()).expect("load store");

    let (session, notes) =
        replay_selections(Arc::new(report.store), &request("Navi", "Kings", "4", None));
    assert_eq!(session.path().chapter.as_deref(), Some("4"));
    assert!(session.options(HierarchyLevel::Start).is_empty());
    assert_eq!(
        notes,
        vec![SelectionNote::NotOffered {
            level: PathLevel::Hierarchy(HierarchyLevel::Chapter),
            value: "4".into(),
            options: vec!["3".into()],
        }]
    );
}

#[test]
fn skipped_level_makes_deeper_values_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path());
    let report = load_store(dir.path()).expect("load store");

    let request = SelectionRequest {
        category: Some("Navi".into()),
        book: Some("Kings".into()),
        chapter: None,
        start: Some("1".into()),
        end: None,
    };
    let (session, notes) = replay_selections(Arc::new(report.store), &request);
    assert_eq!(session.state(), PathState::BookChosen);
    assert!(notes.iter().any(|note| matches!(
        note,
        SelectionNote::Ignored { value, .. } if value == "1"
    )));
}

#[test]
fn explicit_aim_overrides_learning_goal() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path());
    let report = load_store(dir.path()).expect("load store");

    let (mut session, _) = replay_selections(
        Arc::new(report.store),
        &request("Navi", "Kings", "3", Some("1")),
    );
    assert_eq!(session.draft().unit_aim, "Solomon asks for wisdom");
    session.set_grade("7");

    apply_free_text(
        &mut session,
        vec![
            (FreeTextField::Aim, Some("Leadership".to_string())),
            (FreeTextField::Outline, None),
        ],
    );
    let notes = apply_benchmarks(
        &mut session,
        &[
            ("benchmarkCode".to_string(), "J.1".to_string()),
            ("benchmarkCodeHebrew".to_string(), "H.1".to_string()),
        ],
    );
    assert_eq!(
        notes,
        vec![SelectionNote::UnknownBenchmark {
            key: "benchmarkCodeHebrew".into()
        }]
    );
    assert_eq!(
        chosen_benchmark_labels(&session),
        vec![("benchmarkCode".to_string(), "J.1 – Reads text".to_string())]
    );
    let draft = session.into_draft();
    assert_eq!(draft.unit_aim, "Leadership");
    assert_eq!(draft.grade, "7");
    assert_eq!(draft.unit_outline, "");
    assert_eq!(draft.benchmark("benchmarkCode"), Some("J.1"));
}
