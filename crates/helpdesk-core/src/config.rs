//! Configuration for the documentation tools

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Results returned by a search when the caller does not ask for a count
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Upper bound accepted for any result count
pub const MAX_RESULTS_LIMIT: usize = 20;

const DOCS_DIR_VAR: &str = "DOCS_DIR";
const MAX_RESULTS_VAR: &str = "DOCS_MAX_RESULTS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {name}={value:?} is invalid: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the documentation tree (may not exist)
    pub docs_dir: PathBuf,

    /// Result count used when a request omits one
    pub default_max_results: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            default_max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// `DOCS_DIR` is used verbatim. `DOCS_MAX_RESULTS` must be an integer in
    /// `1..=MAX_RESULTS_LIMIT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Ok(dir) = env::var(DOCS_DIR_VAR) {
            if !dir.trim().is_empty() {
                config.docs_dir = PathBuf::from(dir);
            }
        }

        if let Ok(raw) = env::var(MAX_RESULTS_VAR) {
            config.default_max_results = parse_max_results(&raw)?;
        }

        Ok(config)
    }

    /// Replace the documentation root
    pub fn with_docs_dir(mut self, docs_dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = docs_dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_max_results(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: MAX_RESULTS_VAR.to_string(),
        value: raw.to_string(),
        reason,
    };

    let value: usize = raw.trim().parse().map_err(|e| invalid(format!("{}", e)))?;
    if !(1..=MAX_RESULTS_LIMIT).contains(&value) {
        return Err(invalid(format!("must be between 1 and {}", MAX_RESULTS_LIMIT)));
    }
    Ok(value)
}
