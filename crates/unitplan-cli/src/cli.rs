//! CLI argument definitions for the unit planner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use unitplan_cli::planner::parse_benchmark_arg;
use unitplan_model::HierarchyLevel;

#[derive(Parser)]
#[command(
    name = "unitplan",
    version,
    about = "Curriculum unit planner - pick a text range and export a unit plan",
    long_about = "Plan curriculum units from scripture-unit catalogs.\n\n\
                  Loads category and benchmark CSV files, narrows the choices level by level\n\
                  (category, book, chapter, start, end) and exports the plan as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Folder holding the CSV sources (default: $UNITPLAN_DATA_DIR, then ./data).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List loaded categories and benchmark sets.
    Categories,

    /// Show the choices for the next level of a partial selection.
    Options(OptionsArgs),

    /// List the benchmarks of one or all benchmark sets.
    Benchmarks(BenchmarksArgs),

    /// Build a unit plan from a selection and export it as JSON.
    Plan(PlanArgs),
}

#[derive(Args, Clone)]
pub struct SelectionArgs {
    /// Category (e.g. ChumashNEW, Navi, Talmud, Halacha).
    #[arg(long = "category", value_name = "NAME")]
    pub category: String,

    #[arg(long = "book", value_name = "BOOK")]
    pub book: Option<String>,

    #[arg(long = "chapter", value_name = "CHAPTER")]
    pub chapter: Option<String>,

    /// Start verse, or the concept/theme for Halacha.
    #[arg(long = "start", value_name = "START")]
    pub start: Option<String>,

    /// End verse, or the concept/theme for Halacha.
    #[arg(long = "end", value_name = "END")]
    pub end: Option<String>,
}

#[derive(Args)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Level to list: book, chapter, start or end (default: the first level
    /// not yet chosen).
    #[arg(long = "level", value_name = "LEVEL", value_parser = str::parse::<HierarchyLevel>)]
    pub level: Option<HierarchyLevel>,
}

#[derive(Args)]
pub struct BenchmarksArgs {
    /// Export key of the set to list (e.g. benchmarkCode).
    #[arg(long = "set", value_name = "KEY")]
    pub set: Option<String>,
}

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[arg(long = "grade", value_name = "GRADE")]
    pub grade: Option<String>,

    /// Benchmark choice as KEY=CODE, or a bare CODE for `benchmarkCode`.
    #[arg(long = "benchmark", value_name = "KEY=CODE", value_parser = parse_benchmark_arg)]
    pub benchmarks: Vec<(String, String)>,

    /// Unit aim; overrides a learning goal filled from the selection.
    #[arg(long = "aim")]
    pub aim: Option<String>,

    #[arg(long = "outline")]
    pub outline: Option<String>,

    #[arg(long = "keywords")]
    pub keywords: Option<String>,

    #[arg(long = "outcomes")]
    pub outcomes: Option<String>,

    #[arg(long = "skills")]
    pub skills: Option<String>,

    #[arg(long = "levels")]
    pub levels: Option<String>,

    /// Higher-order-thinking prompts.
    #[arg(long = "hot")]
    pub hot: Option<String>,

    #[arg(long = "life-lessons")]
    pub life_lessons: Option<String>,

    #[arg(long = "resources")]
    pub resources: Option<String>,

    /// Differentiation notes.
    #[arg(long = "diff")]
    pub diff: Option<String>,

    #[arg(long = "lessons")]
    pub lessons: Option<String>,

    /// Directory the JSON file is written to.
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the JSON document instead of writing a file.
    #[arg(long = "stdout")]
    pub stdout: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
