//! Check runner that applies the configured rule set to files.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::parser;
use crate::rules::Rule;

use super::{CheckResult, Errors};

/// Runs every configured rule over a set of files.
pub struct Checker {
    rules: Vec<Box<dyn Rule>>,
}

impl Checker {
    /// Create a checker from already-configured rule instances.
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Read, parse, and check a single file with every rule.
    ///
    /// A partial parse still yields a tree; rules run over it and a
    /// warning is emitted.
    pub fn check_file(&self, path: &Path) -> anyhow::Result<CheckResult> {
        let source = fs::read(path)?;
        let parsed = parser::parse(path, &source)?;
        if parsed.has_parse_errors() {
            eprintln!("Warning: {} has syntax errors", parsed.path);
        }

        let mut result = CheckResult::new();
        result.scanned = 1;
        for rule in &self.rules {
            let mut errors = Errors::new(rule.option_name(), &parsed.path);
            rule.check(&parsed, &mut errors);
            result.violations.extend(errors.into_violations());
        }
        Ok(result)
    }

    /// Check files in parallel.
    ///
    /// Violations are sorted by file and position for deterministic output.
    /// A file that cannot be read or parsed is skipped with a warning
    /// rather than failing the run.
    pub fn check_files(&self, paths: &[PathBuf]) -> CheckResult {
        let results: Vec<_> = paths.par_iter().map(|p| self.check_file(p)).collect();

        let mut merged = CheckResult::new();
        for result in results {
            match result {
                Ok(r) => merged.merge(r),
                Err(e) => {
                    eprintln!("Warning: failed to check file: {}", e);
                }
            }
        }

        merged
            .violations
            .sort_by(|a, b| (&a.file, a.line, a.column).cmp(&(&b.file, b.line, b.column)));
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::disallow_anonymous_functions;
    use tempfile::TempDir;

    fn strict_checker() -> Checker {
        Checker::new(vec![disallow_anonymous_functions::new_rule()])
    }

    #[test]
    fn test_check_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.js");
        fs::write(&file, "var a = function() {};\n").unwrap();

        let result = strict_checker().check_file(&file).unwrap();
        assert_eq!(result.scanned, 1);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].line, 1);
    }

    #[test]
    fn test_check_files_sorts_and_skips_missing() {
        let temp = TempDir::new().unwrap();
        let b = temp.path().join("b.js");
        let a = temp.path().join("a.js");
        fs::write(&b, "var x = function() {};\n").unwrap();
        fs::write(&a, "function foo() {}\nvar y = function() {};\n").unwrap();
        let missing = temp.path().join("gone.js");

        let result = strict_checker().check_files(&[b.clone(), a.clone(), missing]);
        assert_eq!(result.scanned, 2);
        assert_eq!(result.violations.len(), 2);
        // Sorted by file, not by check order
        assert!(result.violations[0].file.ends_with("a.js"));
        assert!(result.violations[1].file.ends_with("b.js"));
    }

    #[test]
    fn test_partial_parse_still_checked() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("broken.js");
        fs::write(&file, "var a = function() {};\nvar b = ;\n").unwrap();

        // The syntax error on line 2 does not stop rules from running
        // over the rest of the tree.
        let result = strict_checker().check_file(&file).unwrap();
        assert_eq!(result.scanned, 1);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].line, 1);
    }

    #[test]
    fn test_clean_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("clean.js");
        fs::write(&file, "function foo() {}\n").unwrap();

        let result = strict_checker().check_files(&[file]);
        assert!(result.is_clean());
        assert_eq!(result.scanned, 1);
    }
}
