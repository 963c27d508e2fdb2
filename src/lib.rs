//! jstyle - JavaScript code-style checker.
//!
//! jstyle parses JavaScript sources with tree-sitter and applies style
//! rules over the syntax tree. Each rule is configured once from a JSON
//! option value and reports violations with exact source positions.
//!
//! # Architecture
//!
//! - `parser`: tree-sitter JavaScript parsing and the node interface
//!   rules consume
//! - `rules`: style rules and the option-name registry
//! - `check`: per-file orchestration and violation collection
//! - `config`: JSON configuration loading and validation
//! - `report`: output formatting (pretty, JSON)
//!
//! # Adding a New Rule
//!
//! Implement the `Rule` trait in a module under `src/rules/` and register
//! its factory in `rules::init`. See `rules/disallow_anonymous_functions.rs`
//! for an example.

pub mod check;
pub mod cli;
pub mod config;
pub mod parser;
pub mod report;
pub mod rules;

pub use check::{CheckResult, Checker, Errors, Violation};
pub use config::{Config, ConfigError};
pub use parser::{parse, Location, NodeKind, ParsedFile, SyntaxNode};
pub use rules::Rule;

/// Register all built-in rules.
///
/// Call this once at startup.
pub fn init() {
    rules::init();
}
