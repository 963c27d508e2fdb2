//! Style rules and the option-name registry.
//!
//! Each rule is a trait object created by a registered factory, configured
//! once from its JSON option value, then reused read-only across every file
//! in a run.

pub mod disallow_anonymous_functions;

pub use disallow_anonymous_functions::DisallowAnonymousFunctions;

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::check::Errors;
use crate::config::ConfigError;
use crate::parser::ParsedFile;

/// A single style rule.
pub trait Rule: Send + Sync {
    /// Fixed identifier used for config lookup and error-message composition.
    fn option_name(&self) -> &'static str;

    /// Validate and store the rule's option value.
    ///
    /// Called once per instance before any check. A failed configure leaves
    /// the instance unusable; calling again overwrites silently.
    fn configure(&mut self, value: &Value) -> Result<(), ConfigError>;

    /// Walk one parsed file and record violations into `errors`.
    ///
    /// Never fails for a well-formed tree; violations accumulate and one
    /// finding does not stop traversal of the remainder of the file.
    fn check(&self, file: &ParsedFile, errors: &mut Errors);
}

/// Factory function type for creating rule instances.
pub type RuleFactory = fn() -> Box<dyn Rule>;

lazy_static::lazy_static! {
    /// Global rule registry mapping option names to rule factories.
    static ref REGISTRY: RwLock<HashMap<&'static str, RuleFactory>> = RwLock::new(HashMap::new());
}

/// Register a rule factory under the rule's own option name.
pub fn register(factory: RuleFactory) {
    let name = factory().option_name();
    let mut registry = REGISTRY.write().unwrap();
    registry.insert(name, factory);
}

/// Create a fresh, unconfigured rule instance for the given option name.
/// Returns None if no rule is registered under that name.
pub fn for_option(option_name: &str) -> Option<Box<dyn Rule>> {
    let registry = REGISTRY.read().unwrap();
    registry.get(option_name).map(|factory| factory())
}

/// Return all registered option names, sorted.
pub fn supported_options() -> Vec<&'static str> {
    let registry = REGISTRY.read().unwrap();
    let mut names: Vec<_> = registry.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Register all built-in rules.
/// Call this once at startup before resolving config options.
pub fn init() {
    disallow_anonymous_functions::register();
}
