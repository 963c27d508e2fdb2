//! Command-line interface for jstyle.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::check::Checker;
use crate::config::{self, Config};
use crate::report;
use crate::rules;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// File extensions treated as JavaScript sources.
const JS_EXTENSIONS: &[&str] = &["js", "jsx"];

/// JavaScript code-style checker.
///
/// jstyle parses JavaScript sources and applies the configured style
/// rules over the syntax tree, reporting every violation with its exact
/// source position.
#[derive(Parser)]
#[command(name = "jstyle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check JavaScript sources against the configured style rules
    #[command(visible_alias = "lint")]
    Check(CheckArgs),
    /// List the rule options this build supports
    Rules,
}

/// Arguments for the check command.
#[derive(Parser)]
pub struct CheckArgs {
    /// Path to check (file or directory)
    pub path: PathBuf,

    /// Path to a config JSON file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Run the check command.
///
/// Returns the process exit code: 0 when clean, 1 when violations were
/// found. Configuration and usage problems surface as errors (exit 2).
pub fn run_check(args: &CheckArgs) -> anyhow::Result<i32> {
    let config_path = match &args.config {
        Some(p) => Some(p.clone()),
        None => config::discover(&args.path),
    };

    let config = match &config_path {
        Some(p) => Config::parse_file(p)?,
        None => Config::default(),
    };

    let configured_rules = config.build_rules()?;
    if configured_rules.is_empty() {
        eprintln!("Warning: no rules configured, nothing to check");
    }

    let checker = Checker::new(configured_rules);
    let files = collect_files(&args.path, &config);
    let result = checker.check_files(&files);

    let path_display = args.path.to_string_lossy();
    let config_display = config_path
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "(none)".to_string());

    match args.format.as_str() {
        "json" => report::write_json(&path_display, &config_display, &result)?,
        "pretty" => report::write_pretty(&path_display, &config_display, &result),
        other => anyhow::bail!("unknown output format {:?}, expected pretty or json", other),
    }

    Ok(if result.is_clean() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILED
    })
}

/// Run the rules command: list registered rule options.
pub fn run_rules() {
    for name in rules::supported_options() {
        println!("{}", name);
    }
}

/// Collect checkable JavaScript files under `path`, applying exclusions.
fn collect_files(path: &Path, config: &Config) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let p = entry.path();
        let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !JS_EXTENSIONS.contains(&ext) {
            continue;
        }
        if config.is_path_excluded(p) {
            continue;
        }
        files.push(p.to_path_buf());
    }
    files.sort();
    files
}
