use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::info_span;

use unitplan_cli::planner::{
    SelectionRequest, apply_benchmarks, apply_free_text, chosen_benchmark_labels, load_store,
    replay_selections,
};
use unitplan_core::unique_learning_goal;
use unitplan_ingest::LoadReport;
use unitplan_model::{FreeTextField, HierarchyLevel};
use unitplan_output::{export_json_now, write_export};

use crate::cli::{BenchmarksArgs, OptionsArgs, PlanArgs, SelectionArgs};
use crate::summary::{
    print_benchmarks, print_load_report, print_notes, print_options, print_plan_summary,
};

pub fn run_categories(data_dir: &Path) -> Result<()> {
    let report = load_store(data_dir)?;
    print_load_report(&report);
    Ok(())
}

pub fn run_options(data_dir: &Path, args: &OptionsArgs) -> Result<()> {
    let report = load_store(data_dir)?;
    let store = Arc::new(report.store);
    let request = selection_request(&args.selection);
    let (session, notes) = replay_selections(Arc::clone(&store), &request);
    print_notes(&notes);

    let level = match args.level {
        Some(level) => level,
        None => match next_unset_level(&request) {
            Some(level) => level,
            None => bail!("every level is already chosen; pass --level to list one"),
        },
    };
    print_options(level, session.options(level));

    let path = session.path();
    if let (Some(dataset), Some(prior)) = (
        path.category.as_deref().and_then(|name| store.dataset(name)),
        path.prior_for(HierarchyLevel::End),
    ) && let Some(goal) = unique_learning_goal(dataset, &prior)
    {
        println!("Learning goal: {goal}");
    }
    Ok(())
}

pub fn run_benchmarks(data_dir: &Path, args: &BenchmarksArgs) -> Result<()> {
    let report = load_store(data_dir)?;
    let sets = report.store.benchmark_sets();
    match &args.set {
        Some(key) => {
            let Some(set) = report.store.benchmark_set(key) else {
                let known: Vec<&str> = sets.iter().map(|set| set.key.as_str()).collect();
                bail!(
                    "no benchmark set exported as {key} (known: {})",
                    known.join(", ")
                );
            };
            print_benchmarks(set);
        }
        None => {
            for set in sets {
                print_benchmarks(set);
            }
        }
    }
    Ok(())
}

pub fn run_plan(data_dir: &Path, args: &PlanArgs) -> Result<()> {
    let span = info_span!("plan", category = %args.selection.category);
    let _guard = span.enter();

    let LoadReport {
        store, failures, ..
    } = load_store(data_dir)?;
    if !failures.is_empty() {
        eprintln!("warning: {} source(s) could not be loaded", failures.len());
    }

    let request = selection_request(&args.selection);
    let (mut session, mut notes) = replay_selections(Arc::new(store), &request);
    if let Some(grade) = &args.grade {
        session.set_grade(grade.clone());
    }
    notes.extend(apply_benchmarks(&mut session, &args.benchmarks));
    apply_free_text(&mut session, free_text_values(args));
    print_notes(&notes);

    let benchmark_labels = chosen_benchmark_labels(&session);
    let draft = session.into_draft();
    if args.stdout {
        let json = export_json_now(&draft)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{json}").context("write export to stdout")?;
        return Ok(());
    }
    let exported = write_export(&args.out_dir, &draft)
        .with_context(|| format!("export unit to {}", args.out_dir.display()))?;
    print_plan_summary(&draft, &benchmark_labels, &exported.path);
    Ok(())
}

fn selection_request(args: &SelectionArgs) -> SelectionRequest {
    SelectionRequest {
        category: Some(args.category.clone()),
        book: args.book.clone(),
        chapter: args.chapter.clone(),
        start: args.start.clone(),
        end: args.end.clone(),
    }
}

/// First hierarchy level with no value in `request`.
fn next_unset_level(request: &SelectionRequest) -> Option<HierarchyLevel> {
    let values = [&request.book, &request.chapter, &request.start, &request.end];
    HierarchyLevel::ALL
        .into_iter()
        .zip(values)
        .find(|(_, value)| value.is_none())
        .map(|(level, _)| level)
}

fn free_text_values(args: &PlanArgs) -> Vec<(FreeTextField, Option<String>)> {
    vec![
        (FreeTextField::Aim, args.aim.clone()),
        (FreeTextField::Outline, args.outline.clone()),
        (FreeTextField::Keywords, args.keywords.clone()),
        (FreeTextField::Outcomes, args.outcomes.clone()),
        (FreeTextField::Skills, args.skills.clone()),
        (FreeTextField::Levels, args.levels.clone()),
        (FreeTextField::HigherOrderThinking, args.hot.clone()),
        (FreeTextField::LifeLessons, args.life_lessons.clone()),
        (FreeTextField::Resources, args.resources.clone()),
        (FreeTextField::Differentiation, args.diff.clone()),
        (FreeTextField::Lessons, args.lessons.clone()),
    ]
}
