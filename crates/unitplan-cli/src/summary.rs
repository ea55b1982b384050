use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use unitplan_cli::planner::SelectionNote;
use unitplan_ingest::{LoadReport, SourceKind};
use unitplan_model::{BenchmarkSet, HierarchyLevel, UnitDraft};

pub fn print_load_report(report: &LoadReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Kind"),
        header_cell("Records"),
        header_cell("File"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for summary in &report.sources {
        let kind = match summary.kind {
            SourceKind::Dataset(shape) => shape.to_string(),
            SourceKind::Benchmark => "benchmark".to_string(),
        };
        let failed = report
            .failures
            .iter()
            .any(|failure| failure.name == summary.name && failure.path == summary.path);
        let status = if failed {
            Cell::new("unavailable").fg(Color::Red)
        } else if !summary.missing_headers.is_empty() {
            Cell::new(format!("missing: {}", summary.missing_headers.join(", ")))
                .fg(Color::Yellow)
        } else {
            Cell::new("ok").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(&summary.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(kind),
            count_cell(summary.records),
            dim_cell(summary.path.display()),
            status,
        ]);
    }
    println!("{table}");

    let benchmark_keys: Vec<&str> = report
        .store
        .benchmark_sets()
        .iter()
        .map(|set| set.key.as_str())
        .collect();
    if !benchmark_keys.is_empty() {
        println!("Benchmark export keys: {}", benchmark_keys.join(", "));
    }
    if !report.failures.is_empty() {
        eprintln!("Unavailable sources:");
        for failure in &report.failures {
            eprintln!("- {}: {}", failure.name, failure.message);
        }
    }
}

pub fn print_options(level: HierarchyLevel, options: &[String]) {
    if options.is_empty() {
        println!("No {level} options.");
        return;
    }
    println!("{} {level} option(s):", options.len());
    for option in options {
        println!("  {option}");
    }
}

pub fn print_benchmarks(set: &BenchmarkSet) {
    println!("{} ({})", set.name, set.key);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Description")]);
    apply_table_style(&mut table);
    for record in &set.records {
        let code = if record.code.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(&record.code).add_attribute(Attribute::Bold)
        };
        table.add_row(vec![code, Cell::new(&record.description)]);
    }
    println!("{table}");
}

pub fn print_notes(notes: &[SelectionNote]) {
    for note in notes {
        match note {
            SelectionNote::NotOffered {
                level,
                value,
                options,
            } => {
                let offered = if options.is_empty() {
                    "none".to_string()
                } else {
                    options.join(", ")
                };
                eprintln!("warning: {level} `{value}` is not available (offered: {offered})");
            }
            SelectionNote::Ignored { level, value } => {
                eprintln!("warning: {level} `{value}` ignored, choose the level above it first");
            }
            SelectionNote::GoalFilled { goal } => {
                println!("Unit aim filled from learning goal: {goal}");
            }
            SelectionNote::UnknownBenchmark { key } => {
                eprintln!("warning: no benchmark set is exported as `{key}`");
            }
        }
    }
}

pub fn print_plan_summary(draft: &UnitDraft, benchmarks: &[(String, String)], written: &Path) {
    let path = &draft.path;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    let rows = [
        ("Category", path.category.as_deref()),
        ("Book", path.book.as_deref()),
        ("Chapter", path.chapter.as_deref()),
        ("Start", path.start.as_deref()),
        ("End", path.end.as_deref()),
        ("Grade", Some(draft.grade.as_str())),
        ("Aim", Some(draft.unit_aim.as_str())),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), value_cell(value)]);
    }
    for (key, label) in benchmarks {
        table.add_row(vec![Cell::new(key), value_cell(Some(label.as_str()))]);
    }
    println!("{table}");
    println!("Saved: {}", written.display());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn value_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) if !value.is_empty() => Cell::new(value),
        _ => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
