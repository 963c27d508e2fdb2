//! Output formatting for check results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::check::{CheckResult, Violation};

/// Top-level JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub config: String,
    pub files_scanned: usize,
    pub passed: bool,
    pub violations: Vec<Violation>,
}

/// Write results in JSON format.
pub fn write_json(path: &str, config_path: &str, result: &CheckResult) -> anyhow::Result<()> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        config: config_path.to_string(),
        files_scanned: result.scanned,
        passed: result.is_clean(),
        violations: result.violations.clone(),
    };

    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

/// Write results as colored terminal output.
pub fn write_pretty(path: &str, config_path: &str, result: &CheckResult) {
    println!();
    print!("  ");
    print!("{}", "jstyle".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Checking: ".dimmed());
    println!("{}", path);
    print!("  {}", "Config:   ".dimmed());
    println!("{}", config_path);
    println!();

    if !result.violations.is_empty() {
        write_violations(&result.violations);
        println!();
    }

    write_final_status(result);
    println!();
}

fn write_violations(violations: &[Violation]) {
    println!("  {} ({}):", "Violations".bold(), violations.len());
    println!();

    let mut current_file: Option<&str> = None;
    for v in violations {
        if current_file != Some(v.file.as_str()) {
            if current_file.is_some() {
                println!();
            }
            println!("    {}", v.file.blue());
            current_file = Some(&v.file);
        }
        println!(
            "      {} {}  {}",
            format!("{}:{}", v.line, v.column).dimmed(),
            v.rule.yellow(),
            v.message
        );
    }
}

fn write_final_status(result: &CheckResult) {
    let plural = if result.scanned != 1 { "s" } else { "" };
    if result.is_clean() {
        println!(
            "  {}  {} file{} checked, no style violations",
            "✓ PASS".green(),
            result.scanned,
            plural
        );
    } else {
        let vplural = if result.violations.len() != 1 { "s" } else { "" };
        println!(
            "  {}  {} violation{} in {} file{} checked",
            "✗ FAIL".red(),
            result.violations.len(),
            vplural,
            result.scanned,
            plural
        );
    }
}
