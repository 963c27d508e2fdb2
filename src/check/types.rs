//! Core types for check results.

use serde::{Deserialize, Serialize};

use crate::parser::Location;

/// A single detected style violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    pub message: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
}

/// The violation sink handed to a rule while it checks one file.
///
/// Created by the checker per (rule, file) pair; `add` is infallible and
/// attaches the rule name and file path to each record. Ownership of the
/// accumulated violations transfers back to the checker afterwards.
pub struct Errors {
    rule: &'static str,
    file: String,
    violations: Vec<Violation>,
}

impl Errors {
    pub fn new(rule: &'static str, file: &str) -> Self {
        Self {
            rule,
            file: file.to_string(),
            violations: Vec::new(),
        }
    }

    /// Record a violation at the given source location.
    pub fn add(&mut self, message: &str, location: Location) {
        self.violations.push(Violation {
            rule: self.rule.to_string(),
            message: message.to_string(),
            file: self.file.clone(),
            line: location.line,
            column: location.column,
        });
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Results of checking a set of files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckResult {
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub scanned: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: CheckResult) {
        self.violations.extend(other.violations);
        self.scanned += other.scanned;
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}
