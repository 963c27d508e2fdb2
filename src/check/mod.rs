//! Per-file check orchestration and violation collection.

mod runner;
mod types;

pub use runner::Checker;
pub use types::{CheckResult, Errors, Violation};
