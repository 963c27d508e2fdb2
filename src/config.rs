//! Configuration loading and validation.
//!
//! A config file is a JSON object with a `rules` map of option names to
//! option values, plus checker-level settings such as excluded paths.
//! Option values are validated by the rules themselves at setup time; a
//! bad value aborts setup for the whole run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::rules::{self, Rule};

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["jstyle.json", ".jstylerc"];

/// Errors raised while resolving rule configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A rule option value has the wrong shape.
    #[error("{option} {expected}")]
    BadOptionValue {
        option: &'static str,
        expected: &'static str,
    },
    /// A config entry names no registered rule.
    #[error("unknown rule option {0:?}")]
    UnknownOption(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Rule option values keyed by option name.
    #[serde(default)]
    pub rules: BTreeMap<String, serde_json::Value>,
    /// Glob patterns for paths to exclude from checking.
    #[serde(default)]
    pub excluded_paths: Vec<String>,
}

impl Config {
    /// Parse a config from a JSON file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Resolve every `rules` entry into a configured rule instance.
    ///
    /// Fails on the first unknown option name or invalid option value;
    /// no partially configured rule set is returned.
    pub fn build_rules(&self) -> Result<Vec<Box<dyn Rule>>, ConfigError> {
        let mut configured = Vec::with_capacity(self.rules.len());
        for (name, value) in &self.rules {
            let mut rule = rules::for_option(name)
                .ok_or_else(|| ConfigError::UnknownOption(name.clone()))?;
            rule.configure(value)?;
            configured.push(rule);
        }
        Ok(configured)
    }

    /// Check if a path matches any of the excluded_paths patterns.
    /// Uses globset, which supports `**` for recursive directory matching.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                if glob.compile_matcher().is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

/// Search for a default-named config file near the checked path.
///
/// Looks in the path itself (if a directory) or its parent, then the
/// current directory.
pub fn discover(start: &Path) -> Option<PathBuf> {
    let dir = if start.is_dir() {
        start
    } else {
        start.parent().unwrap_or(Path::new("."))
    };

    for candidate_dir in [dir, Path::new(".")] {
        for name in DEFAULT_CONFIG_NAMES {
            let candidate = candidate_dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
